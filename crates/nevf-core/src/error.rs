//! Unified error handling for the nevf pipeline
//!
//! This module provides a single error type that covers the document
//! model, the scene extractors, and the export driver.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all nevf operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== I/O Errors ====================

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ==================== Document Parse Errors ====================

    /// Invalid magic bytes at file start
    #[error("Invalid magic bytes: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        expected: Vec<u8>,
        found: Vec<u8>,
    },

    /// Unsupported format version
    #[error("Unsupported version: {version} (supported: {supported})")]
    UnsupportedVersion {
        version: u32,
        supported: u32,
    },

    /// Unexpected end of input
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof {
        offset: u64,
    },

    /// Unknown value tag in the encoded stream
    #[error("Unknown value tag 0x{tag:02X} at offset {offset}")]
    UnknownValueTag {
        tag: u8,
        offset: u64,
    },

    /// Checksum mismatch
    #[error("Checksum mismatch: expected {expected:08X}, got {actual:08X}")]
    ChecksumMismatch {
        expected: u32,
        actual: u32,
    },

    /// Invalid data structure
    #[error("Invalid data: {message}")]
    InvalidData {
        message: String,
    },

    // ==================== Document Access Errors ====================

    /// Key not present in a document
    #[error("Missing key: {key}")]
    MissingKey {
        key: String,
    },

    // ==================== Boundary Validation Errors ====================

    /// User-supplied auxiliary path without the required suffix
    #[error("Invalid path extension: {path} (expected .{expected})")]
    InvalidPathExtension {
        path: String,
        expected: String,
    },

    // ==================== Configuration Errors ====================

    /// Missing configuration key
    #[error("Missing configuration: {key}")]
    MissingConfig {
        key: String,
    },

    // ==================== General Errors ====================

    /// Custom error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Error::InvalidData {
            message: message.into(),
        }
    }

    /// Create a missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Error::MissingKey { key: key.into() }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound(_) | Error::MissingKey { .. } | Error::MissingConfig { .. }
        )
    }

    /// Check if this is a parse/format error
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidMagic { .. }
                | Error::UnsupportedVersion { .. }
                | Error::UnexpectedEof { .. }
                | Error::UnknownValueTag { .. }
                | Error::ChecksumMismatch { .. }
                | Error::InvalidData { .. }
        )
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
