//! Material shader graphs: nodes, sockets, and inter-node links

use serde::{Deserialize, Serialize};

/// A material and its shader node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub nodes: Vec<ShaderNode>,
}

/// One node of a shader graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderNode {
    pub name: String,
    /// Node type identifier as the authoring tool reports it
    /// (e.g. `BSDF_PRINCIPLED`, `TEX_IMAGE`)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<InputSocket>,
    #[serde(default)]
    pub outputs: Vec<OutputSocket>,
}

/// An input socket; may carry any number of incoming links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSocket {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub links: Vec<NodeLink>,
}

/// An output socket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSocket {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A resolved link into an input socket, naming its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLink {
    pub from_node: String,
    pub from_socket: String,
    pub from_socket_type: String,
}

impl ShaderNode {
    /// Create a node with no sockets
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}
