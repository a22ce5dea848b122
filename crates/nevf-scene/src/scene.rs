//! The scene container and the read-only accessor contract

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use nevf_core::{Error, Result};

use crate::animation::Action;
use crate::object::SceneObject;

/// Read-only view of a scene, as the extractors consume it
///
/// The export pipeline depends only on this contract, which keeps the record
/// builders unit-testable against a fabricated in-memory scene and decoupled
/// from any live authoring-tool session.
pub trait SceneSource {
    /// All objects of the scene, in scene order
    fn objects(&self) -> &[SceneObject];

    /// All animation actions in scope — not just the ones currently
    /// assigned to an object
    fn actions(&self) -> &[Action];
}

/// An in-memory scene snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a scene snapshot from a JSON file
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader).map_err(|e| {
            Error::invalid_data(format!("scene snapshot {}: {e}", path.display()))
        })
    }
}

impl SceneSource for Scene {
    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }
}
