//! Sorting-layer selection for renderable nodes.
//!
//! The list of layer names belongs to the host; it is read through
//! [`SortingLayers`] and never cached here.

use log::debug;

/// Host-provided, ordered list of sorting layer names.
pub trait SortingLayers {
    fn sorting_layer_names(&self) -> Vec<String>;
}

impl SortingLayers for Vec<String> {
    fn sorting_layer_names(&self) -> Vec<String> {
        self.clone()
    }
}

impl SortingLayers for [&str] {
    fn sorting_layer_names(&self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl<const N: usize> SortingLayers for [&str; N] {
    fn sorting_layer_names(&self) -> Vec<String> {
        self.as_slice().sorting_layer_names()
    }
}

/// Position of `name` in the host's layer list.
pub fn layer_index<L: SortingLayers + ?Sized>(layers: &L, name: &str) -> Option<usize> {
    layers
        .sorting_layer_names()
        .iter()
        .position(|layer| layer == name)
}

/// Sorting layer and order within it, attached to renderable nodes as a component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortingSettings {
    pub layer_name: String,
    pub order: i32,
}

impl SortingSettings {
    pub fn new(layer_name: impl Into<String>, order: i32) -> Self {
        Self {
            layer_name: layer_name.into(),
            order,
        }
    }

    /// Index of the current layer, `None` if the host does not know it.
    pub fn layer_index<L: SortingLayers + ?Sized>(&self, layers: &L) -> Option<usize> {
        layer_index(layers, &self.layer_name)
    }

    /**
     * Switches to the layer at `index` in the host's list.
     *
     * `None` or an out-of-range index keeps the current layer. Returns whether
     * the layer name was assigned.
     */
    pub fn select_layer<L: SortingLayers + ?Sized>(
        &mut self,
        layers: &L,
        index: Option<usize>,
    ) -> bool {
        let names = layers.sorting_layer_names();
        match index.and_then(|i| names.get(i)) {
            Some(name) => {
                self.layer_name = name.clone();
                true
            }
            None => {
                debug!(
                    "Sorting layer index {:?} not in {} layer(s), keeping '{}'.",
                    index,
                    names.len(),
                    self.layer_name
                );
                false
            }
        }
    }

    pub fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl Default for SortingSettings {
    fn default() -> Self {
        Self::new("Default", 0)
    }
}
