//! The ordered, key-addressable document container

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use nevf_core::{Error, Result};

use crate::value::Value;
use crate::{decode, encode};

/// An ordered mapping from string key to [`Value`]
///
/// Keys are unique; re-setting a key overwrites the value in place and keeps
/// the key's original position. Iteration and serialization follow insertion
/// order, which keeps bone and fcurve ordering reproducible across exports.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Entries in insertion order
    entries: Vec<(String, Value)>,
    /// Key to entry index mapping
    index: HashMap<String, usize>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite a key
    ///
    /// Keys must be non-empty; an overwrite keeps the key's original
    /// insertion position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        debug_assert!(!key.is_empty(), "document keys must be non-empty");

        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 = value.into();
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value.into()));
        }
    }

    /// Check whether a key is present; never fails
    pub fn has(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Get a value by key, `None` when absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Get a value by key, signalling `MissingKey` when absent
    ///
    /// Callers that treat absence as expected should use [`Document::has`]
    /// or [`Document::get`] instead.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::missing_key(key))
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a number value
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Get a nested document
    pub fn get_document(&self, key: &str) -> Option<&Document> {
        self.get(key)?.as_document()
    }

    /// Get a sequence value
    pub fn get_sequence(&self, key: &str) -> Option<&[Value]> {
        self.get(key)?.as_sequence()
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.index.remove(key)?;
        let (_, value) = self.entries.remove(idx);

        // Entries after the removed one shifted down by one
        for (_, entry_idx) in self.index.iter_mut() {
            if *entry_idx > idx {
                *entry_idx -= 1;
            }
        }

        Some(value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty document
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Serialize to the framed binary encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        encode::to_bytes(self)
    }

    /// Deserialize from the framed binary encoding
    ///
    /// Truncated or malformed input is rejected with a parse error; no
    /// partially decoded document is ever returned.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        decode::from_bytes(data)
    }

    /// Write the framed binary encoding to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a document from a reader
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Write the document to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a document from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Project into a `serde_json::Value` for inspection output
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (key, value) in self.iter() {
            map.insert(key.to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived data; equality is entry order plus contents
        self.entries == other.entries
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.set(key, value);
        }
        doc
    }
}
