//! Binary encoding for documents
//!
//! Layout: `NEVF` magic, u32 version, u64 payload length, payload, CRC32 of
//! the payload. The payload is the root document body: a u64 entry count
//! followed by length-prefixed key strings and tagged values. Numbers are
//! written as raw IEEE-754 bits, so every f64 round-trips exactly.

use crate::document::Document;
use crate::format::{MAGIC, VERSION};
use crate::value::Value;

pub(crate) const TAG_NULL: u8 = 0;
pub(crate) const TAG_BOOL: u8 = 1;
pub(crate) const TAG_NUMBER: u8 = 2;
pub(crate) const TAG_STRING: u8 = 3;
pub(crate) const TAG_SEQUENCE: u8 = 4;
pub(crate) const TAG_DOCUMENT: u8 = 5;

/// Serialize a document into the framed binary encoding
///
/// The output is deterministic: equal documents with equal insertion order
/// produce byte-identical encodings.
pub fn to_bytes(doc: &Document) -> Vec<u8> {
    let mut payload = Vec::new();
    encode_document(doc, &mut payload);

    let mut out = Vec::with_capacity(16 + payload.len() + 4);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    out
}

fn encode_document(doc: &Document, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(doc.len() as u64).to_le_bytes());
    for (key, value) in doc.iter() {
        encode_str(key, buf);
        encode_value(value, buf);
    }
}

fn encode_str(s: &str, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(s.len() as u64).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Null => buf.push(TAG_NULL),
        Value::Bool(v) => {
            buf.push(TAG_BOOL);
            buf.push(u8::from(*v));
        }
        Value::Number(v) => {
            buf.push(TAG_NUMBER);
            buf.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        Value::String(s) => {
            buf.push(TAG_STRING);
            encode_str(s, buf);
        }
        Value::Sequence(seq) => {
            buf.push(TAG_SEQUENCE);
            buf.extend_from_slice(&(seq.len() as u64).to_le_bytes());
            for item in seq {
                encode_value(item, buf);
            }
        }
        Value::Document(doc) => {
            buf.push(TAG_DOCUMENT);
            encode_document(doc, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let doc = Document::new();
        let bytes = to_bytes(&doc);

        assert_eq!(&bytes[0..4], b"NEVF");
        assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), VERSION);
        // Empty document payload is just the u64 zero entry count
        assert_eq!(bytes.len(), 16 + 8 + 4);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut doc = Document::new();
        doc.set("name", "cube");
        doc.set("visible", true);

        assert_eq!(to_bytes(&doc), to_bytes(&doc.clone()));
    }

    #[test]
    fn test_key_order_changes_encoding() {
        let mut a = Document::new();
        a.set("x", 1.0);
        a.set("y", 2.0);

        let mut b = Document::new();
        b.set("y", 2.0);
        b.set("x", 1.0);

        assert_ne!(to_bytes(&a), to_bytes(&b));
    }
}
