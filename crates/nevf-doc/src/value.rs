//! Typed values stored at document keys

use nevf_core::{Vec2, Vec3, Vec4};

use crate::document::Document;

/// A single value in a document
///
/// Numbers are stored as double precision so transform, vertex, and keyframe
/// data survive extraction exactly as read. Values own their contents, so a
/// document is always a tree: no value can refer back into its container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value, distinct from an absent key
    Null,
    /// Boolean flag
    Bool(bool),
    /// Double-precision number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Sequence(Vec<Value>),
    /// Nested document
    Document(Document),
}

impl Value {
    /// Get as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get as a sequence
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq.as_slice()),
            _ => None,
        }
    }

    /// Get as a nested document
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Check for the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Project into a `serde_json::Value` for inspection output
    ///
    /// Non-finite numbers have no JSON representation and map to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::Number(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(seq) => {
                serde_json::Value::Array(seq.iter().map(Value::to_json).collect())
            }
            Value::Document(doc) => doc.to_json(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Document(v)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Sequence(v.to_array().iter().map(|&c| Value::Number(c)).collect())
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Value::Sequence(v.to_array().iter().map(|&c| Value::Number(c)).collect())
    }
}

impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        Value::Sequence(v.to_array().iter().map(|&c| Value::Number(c)).collect())
    }
}

impl<'a> FromIterator<&'a str> for Value {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Value::Sequence(iter.into_iter().map(Value::from).collect())
    }
}
