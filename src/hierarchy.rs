//! Structural helpers over any [`Hierarchy`] host.
//!
//! Every helper takes the host first and the node it works on second, and
//! returns that node again so calls can be chained. Helpers that destroy or
//! detach children snapshot the child list before touching it.

use std::any::Any;

use log::{debug, warn};

use crate::data_structures::scene_graph::Hierarchy;

/**
 * Re-parents `node` under `parent` while keeping its world transform.
 *
 * The world position, rotation and scale are captured before the re-link and
 * written back afterwards, so only the local transform changes. Returns `parent`.
 * A node that already is a child of `parent` keeps its place among its siblings.
 */
pub fn add<H: Hierarchy>(h: &mut H, parent: H::Id, node: H::Id) -> anyhow::Result<H::Id> {
    if h.parent(node) == Some(parent) {
        return Ok(parent);
    }
    let world = h.world_transform(node);
    h.set_parent(node, Some(parent))?;
    if let Some(world) = world {
        h.set_world_transform(node, world);
    }
    Ok(parent)
}

/// Requests destruction of every child of `node`.
pub fn clear_children<H: Hierarchy>(h: &mut H, node: H::Id) -> H::Id {
    clear_children_where(h, node, |_, _| true)
}

/// Requests destruction of the children of `node` matching `predicate`.
pub fn clear_children_where<H, P>(h: &mut H, node: H::Id, predicate: P) -> H::Id
where
    H: Hierarchy,
    P: FnMut(&H, H::Id) -> bool,
{
    let doomed: Vec<H::Id> = find_children(h, node, predicate).collect();
    debug!("Destroying {} child(ren) of {:?}.", doomed.len(), node);
    for child in doomed {
        h.destroy(child);
    }
    node
}

/// Destroys every child of `node` right away, even if the host defers [`Hierarchy::destroy`].
pub fn clear_children_immediate<H: Hierarchy>(h: &mut H, node: H::Id) -> H::Id {
    let doomed: Vec<H::Id> = h.children(node).collect();
    for child in doomed {
        h.destroy_immediate(child);
    }
    node
}

/**
 * Detaches every child of `node` without destroying it.
 *
 * The children become roots and keep their world transforms. Stops at the
 * first child the host refuses to detach; children before it are already roots.
 */
pub fn unlink_children<H: Hierarchy>(h: &mut H, node: H::Id) -> anyhow::Result<H::Id> {
    let children: Vec<H::Id> = h.children(node).collect();
    for child in children {
        let world = h.world_transform(child);
        h.set_parent(child, None)?;
        if let Some(world) = world {
            h.set_world_transform(child, world);
        }
    }
    Ok(node)
}

pub fn set_active<H: Hierarchy>(h: &mut H, node: H::Id, active: bool) -> H::Id {
    h.set_active(node, active);
    node
}

/**
 * Looks up the node at `path` below `node` and returns its component `T`.
 *
 * A missing node is not an error: it is logged and `None` is returned. A node
 * without a `T` also yields `None`, silently.
 */
pub fn find_child<'a, T, H>(h: &'a H, node: H::Id, path: &str) -> Option<&'a T>
where
    T: Any,
    H: Hierarchy,
{
    match h.find(node, path) {
        Some(child) => h.component::<T>(child),
        None => {
            warn!("No child node '{}' found.", path);
            None
        }
    }
}

/**
 * Lazily yields the direct children of `node` for which `predicate` holds, in child order.
 *
 * The predicate runs once per child as the iterator advances. The iterator
 * borrows the host, so collect it before mutating the tree.
 */
pub fn find_children<'a, H, P>(
    h: &'a H,
    node: H::Id,
    mut predicate: P,
) -> impl Iterator<Item = H::Id> + 'a
where
    H: Hierarchy,
    P: FnMut(&H, H::Id) -> bool + 'a,
{
    h.children(node).filter(move |&child| predicate(h, child))
}
