//! Keyframe animation actions and their curves

use serde::{Deserialize, Serialize};

/// One animation action: a named bundle of fcurves
///
/// Actions live at scene scope, not on any one object; an armature may be
/// driven by any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub fcurves: Vec<Fcurve>,
}

/// A single animation curve driving one channel component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fcurve {
    /// Target data path as the authoring tool stores it,
    /// e.g. `pose.bones["spine"].rotation_quaternion`
    pub data_path: String,
    /// Component index within the target channel
    pub array_index: u32,
    /// Keyframes in curve order
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

/// One keyframe: frame number and channel value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: f64,
    pub value: f64,
}

impl Action {
    /// Create an action with no curves
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fcurves: Vec::new(),
        }
    }
}

impl Fcurve {
    /// Create a curve for a data path and component index
    pub fn new(data_path: impl Into<String>, array_index: u32) -> Self {
        Self {
            data_path: data_path.into(),
            array_index,
            keyframes: Vec::new(),
        }
    }

    /// Append a keyframe
    pub fn key(mut self, frame: f64, value: f64) -> Self {
        self.keyframes.push(Keyframe { frame, value });
        self
    }
}
