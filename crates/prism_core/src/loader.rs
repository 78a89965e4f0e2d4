//! JSON scene loading.
//!
//! Scenes are plain `serde_json` documents matching [`SceneDescription`].
//! Every loaded scene is validated before it is returned, so the renderer
//! never sees a dangling material name or a zero-length plane normal.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate material name: {0}")]
    DuplicateMaterial(String),

    #[error("Primitive {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Primitive {index} is degenerate: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("Light {index} is invalid: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Reading scene from {}", path.display());

    let contents = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;

    log::info!(
        "Loaded {} with {} primitives, {} lights, {} materials",
        path.display(),
        scene.primitives.len(),
        scene.lights.len(),
        scene.materials.len()
    );
    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}
