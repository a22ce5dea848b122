//! nevf Export Pipeline
//!
//! Turns read-only scene data into one `.nevf` document per object:
//! - Record builders mapping transforms, meshes, material graphs, armatures,
//!   and bone animation onto documents
//! - The export driver that writes per-object files with per-object failure
//!   isolation

pub mod builder;
pub mod driver;

pub use builder::{
    build_armature, build_bone_animation, build_custom_data_reference, build_material_graph,
    build_mesh, build_transform, ChannelKind,
};
pub use driver::{build_object_document, export_scene, ExportFailure, ExportReport};
