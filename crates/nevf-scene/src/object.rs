//! Scene objects and their local transforms

use serde::{Deserialize, Serialize};

use nevf_core::{Result, Vec3};

use crate::armature::ArmatureData;
use crate::material::Material;
use crate::mesh::MeshData;

/// Type tag of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Carries mesh geometry and material slots
    Mesh,
    /// Carries a skeletal hierarchy
    Armature,
    /// Anything else (empties, lights, cameras)
    Empty,
}

/// Local transform of a scene object
///
/// Rotation is a Euler triple in radians, the authoring tool's native
/// representation. Conversion to degrees happens at record-build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// One object of a scene, fully detached from the authoring tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object name; also the stem of the exported file name
    pub name: String,
    /// Type tag deciding which extractors apply
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform,
    /// Parent object name, if parented
    #[serde(default)]
    pub parent: Option<String>,
    /// Names of child objects
    #[serde(default)]
    pub children: Vec<String>,
    /// Mesh geometry, for mesh-typed objects
    #[serde(default)]
    pub mesh: Option<MeshData>,
    /// Material slots; a slot may be empty
    #[serde(default)]
    pub materials: Vec<Option<Material>>,
    /// Skeletal hierarchy, for armature-typed objects
    #[serde(default)]
    pub armature: Option<ArmatureData>,
    /// User-assigned auxiliary `.nevf` file path
    ///
    /// Validated on assignment; snapshot input is trusted to have passed the
    /// same check at the authoring boundary.
    #[serde(default)]
    nevf_data: Option<String>,
}

impl SceneObject {
    /// Create an object with an identity transform and no data blocks
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::default(),
            parent: None,
            children: Vec::new(),
            mesh: None,
            materials: Vec::new(),
            armature: None,
            nevf_data: None,
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    pub fn is_armature(&self) -> bool {
        self.kind == ObjectKind::Armature
    }

    /// The auxiliary data path, if one was assigned
    pub fn nevf_data(&self) -> Option<&str> {
        self.nevf_data.as_deref()
    }

    /// Assign the auxiliary data path
    ///
    /// Rejects paths without the `.nevf` suffix, so an invalid path never
    /// reaches an exported document.
    pub fn set_nevf_data(&mut self, path: impl Into<String>) -> Result<()> {
        let path = path.into();
        nevf_doc::validate_extension(&path)?;
        self.nevf_data = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevf_core::Error;

    #[test]
    fn test_default_transform_is_identity() {
        let t = Transform::default();
        assert_eq!(t.location, Vec3::ZERO);
        assert_eq!(t.rotation, Vec3::ZERO);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_set_nevf_data_validates_extension() {
        let mut obj = SceneObject::new("Cube", ObjectKind::Mesh);

        assert!(obj.set_nevf_data("extra/cube_meta.nevf").is_ok());
        assert_eq!(obj.nevf_data(), Some("extra/cube_meta.nevf"));

        let err = obj.set_nevf_data("extra/cube_meta.json").unwrap_err();
        assert!(matches!(err, Error::InvalidPathExtension { .. }));
        // The rejected path must not replace the previous one
        assert_eq!(obj.nevf_data(), Some("extra/cube_meta.nevf"));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(SceneObject::new("a", ObjectKind::Mesh).is_mesh());
        assert!(SceneObject::new("b", ObjectKind::Armature).is_armature());
        assert!(!SceneObject::new("c", ObjectKind::Empty).is_mesh());
    }
}
