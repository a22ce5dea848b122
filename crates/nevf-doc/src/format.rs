//! Format constants and boundary validation for `.nevf` files

use nevf_core::{Error, Result};

/// Magic bytes at the start of every serialized document
pub const MAGIC: [u8; 4] = *b"NEVF";

/// Current format version
pub const VERSION: u32 = 1;

/// File extension for serialized documents (without the dot)
pub const EXTENSION: &str = "nevf";

/// Subdirectory of the export output directory that receives per-object files
pub const SCENE_DIR: &str = "nevsc";

/// Validate that a user-supplied auxiliary file path carries the `.nevf`
/// suffix (case-insensitive).
///
/// This check runs before the path is ever written into a document, so a
/// document never carries a reference to a file of the wrong type.
pub fn validate_extension(path: &str) -> Result<()> {
    let suffix = format!(".{}", EXTENSION);
    if path.to_lowercase().ends_with(&suffix) {
        Ok(())
    } else {
        Err(Error::InvalidPathExtension {
            path: path.to_string(),
            expected: EXTENSION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_extension() {
        assert!(validate_extension("character.nevf").is_ok());
        assert!(validate_extension("/abs/path/Prop.NEVF").is_ok());
    }

    #[test]
    fn test_invalid_extension() {
        let err = validate_extension("character.blend").unwrap_err();
        assert!(matches!(err, Error::InvalidPathExtension { .. }));
        assert!(validate_extension("nevf").is_err());
        assert!(validate_extension("").is_err());
    }
}
