//! Record builders: one scene object in, sub-documents out
//!
//! Each builder is independent and composable. A builder invoked against an
//! object that does not satisfy its type precondition returns no
//! sub-document rather than failing; the driver calls all builders
//! unconditionally and relies on that.
//!
//! Key conventions follow the established file layout: triangles, material
//! slots, nodes, sockets, and fcurves are keyed by stringified index; bones
//! and actions are keyed by name.

use tracing::{debug, warn};

use nevf_core::Result;
use nevf_doc::{Document, Value};
use nevf_scene::{Action, SceneObject};

/// Channel kinds a pose-bone curve can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Position,
    Rotation,
    Scale,
}

impl ChannelKind {
    /// Classify the channel suffix of a pose-bone data path
    fn from_channel_name(name: &str) -> Option<Self> {
        match name {
            "location" => Some(ChannelKind::Position),
            "rotation_quaternion" => Some(ChannelKind::Rotation),
            "scale" => Some(ChannelKind::Scale),
            _ => None,
        }
    }

    /// Label stored under the fcurve `type` key
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelKind::Position => "position",
            ChannelKind::Rotation => "rotation",
            ChannelKind::Scale => "scale",
        }
    }

    /// Axis label for a component index
    ///
    /// Rotation curves drive quaternion components, so index 0 is `w` and
    /// the cartesian axes shift up by one. Position and scale are plain
    /// x/y/z. Same index, different label depending on the channel.
    pub fn axis_label(self, array_index: u32) -> &'static str {
        match self {
            ChannelKind::Rotation => match array_index {
                0 => "w",
                1 => "x",
                2 => "y",
                _ => "z",
            },
            ChannelKind::Position | ChannelKind::Scale => match array_index {
                0 => "x",
                1 => "y",
                _ => "z",
            },
        }
    }
}

/// Build the `transform` record of an object
pub fn build_transform(object: &SceneObject) -> Document {
    let mut doc = Document::new();
    doc.set("location", object.transform.location);
    // Angles are stored in degrees; that is a format decision, not a
    // presentation choice
    doc.set("rotation", object.transform.rotation.to_degrees());
    doc.set("scale", object.transform.scale);

    if let Some(parent) = &object.parent {
        doc.set("parent", parent.as_str());
    }
    if !object.children.is_empty() {
        doc.set(
            "children",
            Value::from_iter(object.children.iter().map(String::as_str)),
        );
    }
    doc
}

/// Build the `mesh` record of a mesh-typed object
///
/// Returns `Ok(None)` for objects without mesh data. Fails when the mesh
/// carries a face index outside the vertex table; the driver isolates that
/// failure to this object.
pub fn build_mesh(object: &SceneObject) -> Result<Option<Document>> {
    let mesh = match (object.is_mesh(), object.mesh.as_ref()) {
        (true, Some(mesh)) => mesh,
        _ => return Ok(None),
    };
    mesh.validate()?;

    let mut doc = Document::new();
    doc.set("name", mesh.name.as_str());
    doc.set(
        "vertices",
        Value::Sequence(mesh.vertices.iter().map(|&v| Value::from(v)).collect()),
    );

    let mut triangles = Document::new();
    for (index, triangle) in mesh.triangles.iter().enumerate() {
        let mut tri = Document::new();
        tri.set(
            "vertices",
            Value::Sequence(triangle.vertices.iter().map(|&i| Value::from(i)).collect()),
        );
        tri.set("normal", triangle.normal);
        triangles.set(index.to_string(), tri);
    }
    doc.set("triangles", triangles);

    // Optional layers are present only when the source mesh has them
    if let Some(normals) = &mesh.custom_normals {
        doc.set(
            "normals",
            Value::Sequence(normals.iter().map(|&n| Value::from(n)).collect()),
        );
    }
    if let Some(uvs) = &mesh.uvs {
        doc.set(
            "uvs",
            Value::Sequence(uvs.iter().map(|&uv| Value::from(uv)).collect()),
        );
    }
    if let Some(colors) = &mesh.vertex_colors {
        doc.set(
            "vertex_colors",
            Value::Sequence(colors.iter().map(|&c| Value::from(c)).collect()),
        );
    }

    let mut weights = Document::new();
    for vertex_index in 0..mesh.vertices.len() {
        let mut groups = Document::new();
        for membership in mesh.weights_of(vertex_index) {
            groups.set(membership.group.as_str(), membership.weight);
        }
        weights.set(vertex_index.to_string(), groups);
    }
    doc.set("vertex_weights", weights);

    Ok(Some(doc))
}

/// Build the `materials` record of a mesh-typed object
///
/// Null slots are skipped; a node with zero inputs or outputs still gets
/// empty sub-maps, never an absent entry.
pub fn build_material_graph(object: &SceneObject) -> Option<Document> {
    if !object.is_mesh() {
        return None;
    }

    let mut materials = Document::new();
    for (material_index, slot) in object.materials.iter().enumerate() {
        let material = match slot {
            Some(material) => material,
            None => continue,
        };

        let mut nodes = Document::new();
        for (node_index, node) in material.nodes.iter().enumerate() {
            let mut inputs = Document::new();
            for (input_index, input) in node.inputs.iter().enumerate() {
                let mut connections = Document::new();
                for (connection_index, link) in input.links.iter().enumerate() {
                    let mut connection = Document::new();
                    connection.set("from_node", link.from_node.as_str());
                    connection.set("from_socket", link.from_socket.as_str());
                    connection.set("from_socket_type", link.from_socket_type.as_str());
                    connections.set(connection_index.to_string(), connection);
                }

                let mut input_doc = Document::new();
                input_doc.set("name", input.name.as_str());
                input_doc.set("type", input.kind.as_str());
                input_doc.set("connections", connections);
                inputs.set(input_index.to_string(), input_doc);
            }

            let mut outputs = Document::new();
            for (output_index, output) in node.outputs.iter().enumerate() {
                let mut output_doc = Document::new();
                output_doc.set("name", output.name.as_str());
                output_doc.set("type", output.kind.as_str());
                outputs.set(output_index.to_string(), output_doc);
            }

            let mut node_doc = Document::new();
            node_doc.set("name", node.name.as_str());
            node_doc.set("type", node.kind.as_str());
            node_doc.set("inputs", inputs);
            node_doc.set("outputs", outputs);
            nodes.set(node_index.to_string(), node_doc);
        }

        let mut material_doc = Document::new();
        material_doc.set("name", material.name.as_str());
        material_doc.set("nodes", nodes);
        materials.set(material_index.to_string(), material_doc);
    }

    Some(materials)
}

/// Build the `armature` record of an armature-typed object
///
/// Bones are keyed by name, the stable join key against animation curves
/// and against other bones' parent/child references.
pub fn build_armature(object: &SceneObject) -> Option<Document> {
    if !object.is_armature() {
        return None;
    }
    let armature = object.armature.as_ref()?;

    let mut bones = Document::new();
    for bone in &armature.bones {
        let mut bone_doc = Document::new();
        bone_doc.set("name", bone.name.as_str());
        bone_doc.set("base_position", bone.head);
        bone_doc.set("base_rotation", bone.rotation.to_degrees());
        bone_doc.set("base_scale", bone.scale);
        if let Some(parent) = &bone.parent {
            bone_doc.set("parent", parent.as_str());
        }
        if !bone.children.is_empty() {
            bone_doc.set(
                "children",
                Value::from_iter(bone.children.iter().map(String::as_str)),
            );
        }
        bones.set(bone.name.as_str(), bone_doc);
    }

    let mut doc = Document::new();
    doc.set("name", armature.name.as_str());
    doc.set("bones", bones);
    Some(doc)
}

/// Build the `animations` record of an armature-typed object
///
/// Every action in scope is captured, not just one assigned action; the
/// action list is an explicit parameter so the builder stays testable in
/// isolation. Within an action, curves targeting pose bones are classified
/// by channel kind and axis; other curves are ignored.
pub fn build_bone_animation(object: &SceneObject, actions: &[Action]) -> Option<Document> {
    if !object.is_armature() {
        return None;
    }

    let mut animations = Document::new();
    for action in actions {
        let mut fcurves = Document::new();
        for (curve_index, fcurve) in action.fcurves.iter().enumerate() {
            let (bone, channel_name) = match parse_pose_bone_path(&fcurve.data_path) {
                Some(target) => target,
                None => continue,
            };

            let channel = ChannelKind::from_channel_name(channel_name);
            let (type_label, axis_label) = match channel {
                Some(kind) => (kind.as_str(), kind.axis_label(fcurve.array_index)),
                None => ("Unknown", "Unknown"),
            };

            let mut keyframes = Document::new();
            for keyframe in &fcurve.keyframes {
                let frame_key = keyframe.frame.to_string();
                if keyframes.has(&frame_key) {
                    // Two keyframes collapsing to one textual time would
                    // silently shadow each other; keep the later one and
                    // say so
                    warn!(
                        action = %action.name,
                        curve = curve_index,
                        frame = %frame_key,
                        "duplicate keyframe time, keeping the later value"
                    );
                }
                keyframes.set(frame_key, keyframe.value);
            }

            let mut curve_doc = Document::new();
            curve_doc.set("bone", bone);
            curve_doc.set("type", type_label);
            curve_doc.set("axis", axis_label);
            curve_doc.set("keyframes", keyframes);
            fcurves.set(curve_index.to_string(), curve_doc);
        }

        let mut action_doc = Document::new();
        action_doc.set("name", action.name.as_str());
        action_doc.set("fcurves", fcurves);
        animations.set(action.name.as_str(), action_doc);
    }

    Some(animations)
}

/// The user-assigned auxiliary data path, if any
pub fn build_custom_data_reference(object: &SceneObject) -> Option<Value> {
    object.nevf_data().map(Value::from)
}

/// Split a pose-bone data path into bone name and channel name
///
/// Expects the shape `pose.bones["<name>"].<channel>`; anything else is not
/// a bone curve.
fn parse_pose_bone_path(data_path: &str) -> Option<(&str, &str)> {
    if !data_path.starts_with("pose.bones") {
        return None;
    }
    let bone = data_path.split('"').nth(1)?;
    let channel = data_path.rsplit('.').next()?;
    if bone.is_empty() {
        debug!(data_path, "pose-bone path without a bone name, skipping curve");
        return None;
    }
    Some((bone, channel))
}
