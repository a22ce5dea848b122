//! Integration tests for the export driver
//!
//! These cover the batch-level guarantees: per-object files, partial-failure
//! isolation, repeat-run determinism, and read-back of written documents.

use nevf_core::Vec3;
use nevf_doc::Document;
use nevf_export::export_scene;
use nevf_scene::{
    Action, ArmatureData, BoneData, Fcurve, MeshData, ObjectKind, Scene, SceneObject, Triangle,
};

fn triangle_mesh(name: &str) -> MeshData {
    let mut mesh = MeshData::new(name);
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

fn sample_scene() -> Scene {
    let mut scene = Scene::new();

    let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
    cube.mesh = Some(triangle_mesh("CubeMesh"));
    cube.transform.location = Vec3::new(1.0, 2.0, 3.0);
    scene.objects.push(cube);

    let mut rig = SceneObject::new("Rig", ObjectKind::Armature);
    let mut armature = ArmatureData::new("RigData");
    armature.bones.push(BoneData::new("root"));
    rig.armature = Some(armature);
    scene.objects.push(rig);

    let mut walk = Action::new("Walk");
    walk.fcurves
        .push(Fcurve::new(r#"pose.bones["root"].location"#, 0).key(1.0, 0.0).key(24.0, 2.5));
    scene.actions.push(walk);

    scene
}

#[test]
fn exports_one_file_per_object() {
    let dir = tempfile::tempdir().unwrap();
    let report = export_scene(&sample_scene(), dir.path()).unwrap();

    assert!(report.is_clean());
    let scene_dir = dir.path().join("nevsc");
    assert!(scene_dir.join("Cube.nevf").is_file());
    assert!(scene_dir.join("Rig.nevf").is_file());
}

#[test]
fn written_documents_read_back_with_expected_records() {
    let dir = tempfile::tempdir().unwrap();
    export_scene(&sample_scene(), dir.path()).unwrap();

    let cube = Document::load(dir.path().join("nevsc/Cube.nevf")).unwrap();
    let keys: Vec<&str> = cube.keys().collect();
    assert_eq!(keys, vec!["transform", "mesh", "materials"]);
    assert!(!cube.has("armature"));

    let location = cube
        .get_document("transform")
        .unwrap()
        .get_sequence("location")
        .unwrap();
    assert_eq!(location[2].as_f64(), Some(3.0));

    let rig = Document::load(dir.path().join("nevsc/Rig.nevf")).unwrap();
    let keys: Vec<&str> = rig.keys().collect();
    assert_eq!(keys, vec!["transform", "armature", "animations"]);

    let walk = rig
        .get_document("animations")
        .unwrap()
        .get_document("Walk")
        .unwrap();
    let curve = walk.get_document("fcurves").unwrap().get_document("0").unwrap();
    assert_eq!(curve.get_str("bone"), Some("root"));
    assert_eq!(curve.get_str("axis"), Some("x"));
    assert_eq!(
        curve.get_document("keyframes").unwrap().get_f64("24"),
        Some(2.5)
    );
}

#[test]
fn one_corrupt_object_does_not_abort_the_batch() {
    let mut scene = Scene::new();

    let mut first = SceneObject::new("First", ObjectKind::Mesh);
    first.mesh = Some(triangle_mesh("FirstMesh"));
    scene.objects.push(first);

    let mut broken = SceneObject::new("Broken", ObjectKind::Mesh);
    let mut bad_mesh = triangle_mesh("BrokenMesh");
    bad_mesh.triangles[0].vertices[1] = 42; // out of range
    broken.mesh = Some(bad_mesh);
    scene.objects.push(broken);

    let mut third = SceneObject::new("Third", ObjectKind::Mesh);
    third.mesh = Some(triangle_mesh("ThirdMesh"));
    scene.objects.push(third);

    let dir = tempfile::tempdir().unwrap();
    let report = export_scene(&scene, dir.path()).unwrap();

    assert_eq!(report.exported.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].object, "Broken");
    assert!(report.failures[0].error.to_string().contains("vertex 42"));

    // The neighbors still produced valid, loadable files
    assert!(Document::load(dir.path().join("nevsc/First.nevf")).is_ok());
    assert!(!dir.path().join("nevsc/Broken.nevf").exists());
    assert!(Document::load(dir.path().join("nevsc/Third.nevf")).is_ok());
}

#[test]
fn repeat_export_is_byte_identical_and_never_fails_on_existing_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let scene = sample_scene();

    export_scene(&scene, dir.path()).unwrap();
    let first = std::fs::read(dir.path().join("nevsc/Cube.nevf")).unwrap();

    let report = export_scene(&scene, dir.path()).unwrap();
    assert!(report.is_clean());
    let second = std::fs::read(dir.path().join("nevsc/Cube.nevf")).unwrap();

    assert_eq!(first, second);
}
