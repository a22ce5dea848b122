//! The export driver: one `.nevf` file per scene object
//!
//! Objects are processed sequentially; the scene accessor is not safely
//! shareable across concurrent readers. A failing object is reported and
//! skipped, never allowed to abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use nevf_core::{Error, Result, ResultExt};
use nevf_doc::{Document, EXTENSION, SCENE_DIR};
use nevf_scene::{Action, SceneObject, SceneSource};

use crate::builder;

/// Outcome of one export batch
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written, in scene order
    pub exported: Vec<PathBuf>,
    /// Objects that failed, with their causes
    pub failures: Vec<ExportFailure>,
}

/// One object's failure, isolated from the rest of the batch
#[derive(Debug)]
pub struct ExportFailure {
    pub object: String,
    pub error: Error,
}

impl ExportReport {
    /// True when every object exported cleanly
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Export every object of a scene into `<output_dir>/nevsc/`
///
/// The output directory and its `nevsc` subdirectory are created if needed;
/// re-running against unchanged scene state rewrites byte-identical files.
pub fn export_scene(scene: &impl SceneSource, output_dir: impl AsRef<Path>) -> Result<ExportReport> {
    let scene_dir = output_dir.as_ref().join(SCENE_DIR);
    fs::create_dir_all(&scene_dir)?;

    let mut report = ExportReport::default();
    for object in scene.objects() {
        match export_object(object, scene.actions(), &scene_dir) {
            Ok(path) => {
                info!(object = %object.name, path = %path.display(), "exported");
                report.exported.push(path);
            }
            Err(error) => {
                warn!(object = %object.name, %error, "export failed, continuing with next object");
                report.failures.push(ExportFailure {
                    object: object.name.clone(),
                    error,
                });
            }
        }
    }

    info!(
        exported = report.exported.len(),
        failed = report.failures.len(),
        "export batch finished"
    );
    Ok(report)
}

/// Build and write one object's document, returning the file path
fn export_object(object: &SceneObject, actions: &[Action], scene_dir: &Path) -> Result<PathBuf> {
    let doc = build_object_document(object, actions)?;
    let path = scene_dir.join(format!("{}.{}", object.name, EXTENSION));
    doc.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Assemble the complete document for one object
///
/// Builders run in a fixed order and each contributes its record only when
/// the object carries the corresponding data; a missing record is absent,
/// never present-but-empty.
pub fn build_object_document(object: &SceneObject, actions: &[Action]) -> Result<Document> {
    let mut doc = Document::new();
    doc.set("transform", builder::build_transform(object));
    if let Some(mesh) = builder::build_mesh(object)? {
        doc.set("mesh", mesh);
    }
    if let Some(materials) = builder::build_material_graph(object) {
        doc.set("materials", materials);
    }
    if let Some(armature) = builder::build_armature(object) {
        doc.set("armature", armature);
    }
    if let Some(animations) = builder::build_bone_animation(object, actions) {
        doc.set("animations", animations);
    }
    if let Some(path) = builder::build_custom_data_reference(object) {
        doc.set("nevf_data", path);
    }
    Ok(doc)
}
