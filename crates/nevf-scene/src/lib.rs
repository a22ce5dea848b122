//! Scene data model for nevf extraction
//!
//! The extractors depend only on the read-only [`SceneSource`] contract and
//! the plain data types in this crate, never on a live authoring-tool object
//! graph. The in-memory [`Scene`] implementation doubles as the test harness
//! and as the snapshot loader the CLI drives exports from.

pub mod animation;
pub mod armature;
pub mod material;
pub mod mesh;
pub mod object;
pub mod scene;

pub use animation::{Action, Fcurve, Keyframe};
pub use armature::{ArmatureData, BoneData};
pub use material::{InputSocket, Material, NodeLink, OutputSocket, ShaderNode};
pub use mesh::{MeshData, Triangle, VertexWeight};
pub use object::{ObjectKind, SceneObject, Transform};
pub use scene::{Scene, SceneSource};
