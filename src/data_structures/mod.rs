//! Value types and the scene graph the helpers operate on.
//!
//! - `color` is an RGBA colour value
//! - `instance` holds position, rotation and scale of a node
//! - `rect` is a growable axis-aligned bounding rectangle
//! - `scene_graph` defines the node capability and an arena-backed host

pub mod color;
pub mod instance;
pub mod rect;
pub mod scene_graph;
