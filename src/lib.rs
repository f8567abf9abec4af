//! scene-ex
//!
//! Small helpers for scene tooling: a bounding rectangle that grows point by
//! point, and structural operations on transform hierarchies that keep world
//! transforms intact and never mutate a child list while walking it.
//!
//! High-level modules
//! - `data_structures`: value types (`Rect`, `Instance`, `Color`) and the scene graph
//! - `hierarchy`: add, clear, unlink and search helpers over any `Hierarchy` host
//! - `sorting`: sorting-layer selection against a host-provided layer list
//!

pub mod data_structures;
pub mod hierarchy;
pub mod sorting;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Quaternion, Vector2, Vector3};
pub use data_structures::{
    color::Color,
    instance::Instance,
    rect::Rect,
    scene_graph::{DestroyPolicy, Hierarchy, SceneGraph, SceneGraphConfig},
};
pub use indextree::NodeId;

/// Installs a logger: `env_logger` natively (honours `RUST_LOG`), the browser console on wasm.
///
/// Calling it more than once is harmless; later calls only report that a logger is already set.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {}", e);
        }
    }
}
