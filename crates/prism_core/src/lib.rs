//! Prism Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `CameraDesc`,
//!   `MaterialDesc`, `LightDesc`, `PrimitiveDesc`
//! - **Validation** of degenerate input (zero normals, bad radii, dangling
//!   material names) before anything reaches the renderer
//! - **JSON loading** and the built-in Cornell box scene
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/box.json")?;
//! println!("{} primitives, {} lights", scene.primitives.len(), scene.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{
    CameraDesc, LightDesc, MaterialDesc, MaterialModel, PrimitiveDesc, SceneDescription,
};
