//! nevf Document Model
//!
//! A self-describing, nested, key-addressable document format used to move
//! scene data between a content-authoring tool and a downstream pipeline.
//! Provides:
//! - The [`Value`] tagged union and the ordered [`Document`] container
//! - A deterministic binary codec with magic bytes, version, and checksum
//! - Format constants and the `.nevf` path validation boundary

pub mod decode;
pub mod document;
pub mod encode;
pub mod format;
pub mod value;

pub use document::Document;
pub use format::{validate_extension, EXTENSION, MAGIC, SCENE_DIR, VERSION};
pub use value::Value;
