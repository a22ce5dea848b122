//! Skeletal armature data: named bones with rest-pose transforms

use serde::{Deserialize, Serialize};

use nevf_core::Vec3;

/// Armature block of a scene object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmatureData {
    pub name: String,
    /// Bones in armature order; names are the stable join key against
    /// animation curves and against other bones' parent/child references
    pub bones: Vec<BoneData>,
}

/// One bone's rest pose and hierarchy links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneData {
    pub name: String,
    /// Head position in armature space
    pub head: Vec3,
    /// Rest rotation as a Euler triple in radians
    pub rotation: Vec3,
    /// Rest scale
    pub scale: Vec3,
    /// Parent bone name (None for root bones)
    #[serde(default)]
    pub parent: Option<String>,
    /// Child bone names
    #[serde(default)]
    pub children: Vec<String>,
}

impl ArmatureData {
    /// Create an empty armature
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bones: Vec::new(),
        }
    }

    /// Find a bone by name
    pub fn find_bone(&self, name: &str) -> Option<&BoneData> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// Names of bones without a parent
    pub fn root_bones(&self) -> impl Iterator<Item = &BoneData> {
        self.bones.iter().filter(|b| b.parent.is_none())
    }
}

impl BoneData {
    /// Create a bone at the origin with identity rest pose
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            head: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            parent: None,
            children: Vec::new(),
        }
    }
}
