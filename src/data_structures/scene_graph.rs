//! Scene graph and hierarchical scene organization.
//!
//! [`Hierarchy`] is the capability the [`crate::hierarchy`] helpers need from a
//! host: parent/child linkage, transforms, destruction and typed component
//! lookup. [`SceneGraph`] is an arena-backed implementation of it that owns
//! plain [`SceneObject`]s.

use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
    fmt::Debug,
};

use anyhow::{anyhow, bail};
use indextree::{Arena, NodeId};
use log::{debug, trace, warn};

use crate::data_structures::instance::Instance;

/// Separator between path segments in [`Hierarchy::find`].
pub const PATH_SEPARATOR: char = '/';

pub trait Hierarchy {
    type Id: Copy + Eq + Debug;

    fn parent(&self, node: Self::Id) -> Option<Self::Id>;

    /**
     * Re-links `node` under `parent` (or makes it a root for `None`), appending it
     * as the last child. The local transform is kept as is, so the world transform
     * generally changes.
     *
     * Fails without touching the tree if either node is gone or the link would
     * make `node` its own ancestor.
     */
    fn set_parent(&mut self, node: Self::Id, parent: Option<Self::Id>) -> anyhow::Result<()>;

    /// Direct children in insertion order.
    fn children(&self, node: Self::Id) -> impl Iterator<Item = Self::Id> + '_;

    fn name(&self, node: Self::Id) -> Option<&str>;

    fn local_transform(&self, node: Self::Id) -> Option<Instance>;

    fn set_local_transform(&mut self, node: Self::Id, instance: Instance);

    fn is_active(&self, node: Self::Id) -> bool;

    fn set_active(&mut self, node: Self::Id, active: bool);

    /// Requests destruction of `node` and its subtree. Hosts may defer it.
    fn destroy(&mut self, node: Self::Id);

    fn destroy_immediate(&mut self, node: Self::Id);

    fn component<T: Any>(&self, node: Self::Id) -> Option<&T>;

    /// World transform: the product of all ancestor local transforms and the node's own.
    fn world_transform(&self, node: Self::Id) -> Option<Instance> {
        let local = self.local_transform(node)?;
        match self.parent(node) {
            Some(parent) => {
                let parent_world = self.world_transform(parent)?;
                Some(&parent_world * &local)
            }
            None => Some(local),
        }
    }

    /// Sets the local transform so that the world transform becomes `world`.
    fn set_world_transform(&mut self, node: Self::Id, world: Instance) {
        let parent_world = self
            .parent(node)
            .and_then(|parent| self.world_transform(parent))
            .unwrap_or_default();
        self.set_local_transform(node, world.relative_to(&parent_world));
    }

    /**
     * Resolves a `/`-separated path of child names below `node`.
     *
     * Every segment matches the first child with that name. Empty segments are
     * skipped, so `"a//b/"` equals `"a/b"` and an empty path resolves to `node`.
     */
    fn find(&self, node: Self::Id, path: &str) -> Option<Self::Id> {
        path.split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .try_fold(node, |current, segment| {
                self.children(current)
                    .find(|&child| self.name(child) == Some(segment))
            })
    }
}

/// What [`SceneGraph::destroy`] does with a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestroyPolicy {
    /// Queue the node; it stays linked until [`SceneGraph::flush_destroyed`].
    #[default]
    Deferred,
    /// Remove the node right away.
    Immediate,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SceneGraphConfig {
    pub destroy_policy: DestroyPolicy,
}

/// Payload of a [`SceneGraph`] node.
pub struct SceneObject {
    pub name: String,
    pub active: bool,
    pub local: Instance,
    components: HashMap<TypeId, Box<dyn Any>>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, local: Instance) -> Self {
        Self {
            name: name.into(),
            active: true,
            local,
            components: HashMap::new(),
        }
    }
}

impl Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneObject")
            .field("name", &self.name)
            .field("active", &self.active)
            .field("local", &self.local)
            .field("components", &self.components.len())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    arena: Arena<SceneObject>,
    pending_destroy: Vec<NodeId>,
    pending_lookup: HashSet<NodeId>,
    config: SceneGraphConfig,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SceneGraphConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SceneGraphConfig {
        &self.config
    }

    /// Creates a root node with an identity transform.
    pub fn spawn(&mut self, name: impl Into<String>) -> NodeId {
        self.spawn_with(name, Instance::default())
    }

    pub fn spawn_with(&mut self, name: impl Into<String>, local: Instance) -> NodeId {
        self.arena.new_node(SceneObject::new(name, local))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.object(node).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn object(&self, node: NodeId) -> Option<&SceneObject> {
        if node.is_removed(&self.arena) {
            return None;
        }
        self.arena.get(node).map(|n| n.get())
    }

    pub fn object_mut(&mut self, node: NodeId) -> Option<&mut SceneObject> {
        if node.is_removed(&self.arena) {
            return None;
        }
        self.arena.get_mut(node).map(|n| n.get_mut())
    }

    /// Attaches `component` to `node`, replacing one of the same type. Returns the replaced value.
    pub fn insert_component<T: Any>(&mut self, node: NodeId, component: T) -> Option<T> {
        let Some(object) = self.object_mut(node) else {
            warn!("Cannot attach a component to {:?}, the node is gone.", node);
            return None;
        };
        object
            .components
            .insert(TypeId::of::<T>(), Box::new(component))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    pub fn component_mut<T: Any>(&mut self, node: NodeId) -> Option<&mut T> {
        self.object_mut(node)?
            .components
            .get_mut(&TypeId::of::<T>())?
            .downcast_mut::<T>()
    }

    pub fn is_pending_destroy(&self, node: NodeId) -> bool {
        self.pending_lookup.contains(&node)
    }

    /**
     * Applies all queued destroy requests. Returns how many subtrees were removed.
     *
     * Requests for nodes that were already removed (e.g. as part of an ancestor's
     * subtree) are skipped.
     */
    pub fn flush_destroyed(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending_destroy);
        self.pending_lookup.clear();
        let mut removed = 0;
        for node in pending {
            if self.contains(node) {
                node.remove_subtree(&mut self.arena);
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("Flushed {} destroyed subtree(s).", removed);
        }
        removed
    }
}

impl Hierarchy for SceneGraph {
    type Id = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        if !self.contains(node) {
            return None;
        }
        self.arena.get(node)?.parent()
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> anyhow::Result<()> {
        if !self.contains(node) {
            bail!("Cannot re-link {:?}, the node is gone.", node);
        }
        match parent {
            Some(parent) => {
                if !self.contains(parent) {
                    bail!("Cannot attach {:?} to {:?}, the parent is gone.", node, parent);
                }
                parent
                    .checked_append(node, &mut self.arena)
                    .map_err(|e| anyhow!("Cannot attach {:?} to {:?}: {:?}", node, parent, e))
            }
            None => {
                node.detach(&mut self.arena);
                Ok(())
            }
        }
    }

    fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        // a removed id must not walk a recycled slot
        self.contains(node)
            .then(|| node.children(&self.arena))
            .into_iter()
            .flatten()
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.object(node).map(|object| object.name.as_str())
    }

    fn local_transform(&self, node: NodeId) -> Option<Instance> {
        self.object(node).map(|object| object.local)
    }

    fn set_local_transform(&mut self, node: NodeId, instance: Instance) {
        if let Some(object) = self.object_mut(node) {
            object.local = instance;
        }
    }

    fn is_active(&self, node: NodeId) -> bool {
        self.object(node).is_some_and(|object| object.active)
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        if let Some(object) = self.object_mut(node) {
            object.active = active;
        }
    }

    fn destroy(&mut self, node: NodeId) {
        match self.config.destroy_policy {
            DestroyPolicy::Immediate => self.destroy_immediate(node),
            DestroyPolicy::Deferred => {
                if self.contains(node) && self.pending_lookup.insert(node) {
                    trace!("Queued {:?} for destruction.", node);
                    self.pending_destroy.push(node);
                }
            }
        }
    }

    fn destroy_immediate(&mut self, node: NodeId) {
        if !self.contains(node) {
            return;
        }
        trace!("Destroying {:?}.", node);
        node.remove_subtree(&mut self.arena);
        let arena = &self.arena;
        self.pending_destroy.retain(|pending| !pending.is_removed(arena));
        self.pending_lookup.retain(|pending| !pending.is_removed(arena));
    }

    fn component<T: Any>(&self, node: NodeId) -> Option<&T> {
        self.object(node)?
            .components
            .get(&TypeId::of::<T>())?
            .downcast_ref::<T>()
    }
}
