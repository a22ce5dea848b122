//! Mesh geometry as read from the authoring tool

use serde::{Deserialize, Serialize};

use nevf_core::{Error, Result, Vec2, Vec3, Vec4};

/// Mesh geometry block of a scene object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    /// Mesh datablock name (distinct from the object name)
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangulated faces
    pub triangles: Vec<Triangle>,
    /// Per-loop split normals, present only when the mesh declares custom
    /// normals
    #[serde(default)]
    pub custom_normals: Option<Vec<Vec3>>,
    /// Per-loop UVs of the active UV layer, if any
    #[serde(default)]
    pub uvs: Option<Vec<Vec2>>,
    /// Per-loop colors of the active color layer, if any
    #[serde(default)]
    pub vertex_colors: Option<Vec<Vec4>>,
    /// Group memberships per vertex, parallel to `vertices`
    #[serde(default)]
    pub vertex_weights: Vec<Vec<VertexWeight>>,
}

/// One triangulated face: vertex indices plus the face normal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: Vec<u32>,
    pub normal: Vec3,
}

/// Membership of one vertex in one deform group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexWeight {
    /// Group name (the stable join key against bone names)
    pub group: String,
    pub weight: f64,
}

impl MeshData {
    /// Create an empty mesh datablock
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            custom_normals: None,
            uvs: None,
            vertex_colors: None,
            vertex_weights: Vec::new(),
        }
    }

    /// Check structural integrity of the face data
    ///
    /// Every face index must address an existing vertex. This is the bound
    /// check that lets the export driver isolate a corrupt mesh to its own
    /// object.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (face_index, triangle) in self.triangles.iter().enumerate() {
            for &vertex_index in &triangle.vertices {
                if vertex_index as usize >= vertex_count {
                    return Err(Error::invalid_data(format!(
                        "mesh '{}': face {} references vertex {} (mesh has {})",
                        self.name, face_index, vertex_index, vertex_count
                    )));
                }
            }
        }
        Ok(())
    }

    /// Group memberships of one vertex; empty for vertices past the end of
    /// the weight table
    pub fn weights_of(&self, vertex_index: usize) -> &[VertexWeight] {
        self.vertex_weights
            .get(vertex_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_less_mesh() -> MeshData {
        let mut mesh = MeshData::new("tri");
        mesh.vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        mesh.triangles = vec![Triangle {
            vertices: vec![0, 1, 2],
            normal: Vec3::new(0.0, 0.0, 1.0),
        }];
        mesh
    }

    #[test]
    fn test_validate_accepts_in_range_faces() {
        assert!(quad_less_mesh().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_face() {
        let mut mesh = quad_less_mesh();
        mesh.triangles[0].vertices[2] = 9;

        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("face 0"));
        assert!(err.to_string().contains("vertex 9"));
    }

    #[test]
    fn test_weights_of_out_of_range_vertex_is_empty() {
        let mesh = quad_less_mesh();
        assert!(mesh.weights_of(2).is_empty());
        assert!(mesh.weights_of(99).is_empty());
    }
}
