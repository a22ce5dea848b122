//! Config documents read from well-known files
//!
//! A config is an ordinary nevf document queried for a handful of keys.
//! Absence of a key is a valid, expected state that gates optional
//! behavior; it is never an error at this layer.

use std::path::Path;

use nevf_core::Result;
use nevf_doc::Document;

/// Project bootstrap config, looked up in the working directory
pub const PROJECT_CONFIG: &str = ".ngin";

/// Extraction pipeline config, looked up in the working directory
pub const PIPELINE_CONFIG: &str = ".nevsc";

/// A config document with typed lookups for its well-known keys
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    doc: Document,
}

impl ProjectConfig {
    /// Read a config document from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            doc: Document::load(path)?,
        })
    }

    /// Wrap an already-built document
    pub fn from_document(doc: Document) -> Self {
        Self { doc }
    }

    /// Project name, if configured
    pub fn name(&self) -> Option<&str> {
        self.doc.get_str("name")
    }

    /// Project base directory, if configured
    pub fn base_dir(&self) -> Option<&str> {
        self.doc.get_str("base_dir")
    }

    /// Input file for the extraction pipeline, if configured
    pub fn file(&self) -> Option<&str> {
        self.doc.get_str("file")
    }

    /// The underlying document, for keys beyond the well-known set
    pub fn document(&self) -> &Document {
        &self.doc
    }
}
