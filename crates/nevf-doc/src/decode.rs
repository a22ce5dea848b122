//! Binary decoding for documents
//!
//! The decoder is strict: bad magic, an unknown version, a short read, an
//! unknown tag, a checksum mismatch, or trailing bytes all reject the input.
//! A failed decode never yields a partially built document.

use byteorder::{ByteOrder, LittleEndian};

use nevf_core::{Error, Result};

use crate::document::Document;
use crate::encode::{TAG_BOOL, TAG_DOCUMENT, TAG_NULL, TAG_NUMBER, TAG_SEQUENCE, TAG_STRING};
use crate::format::{MAGIC, VERSION};
use crate::value::Value;

/// Deserialize a document from the framed binary encoding
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    let mut reader = Reader::new(data);

    let found = reader.take(MAGIC.len())?;
    if found != MAGIC {
        return Err(Error::InvalidMagic {
            expected: MAGIC.to_vec(),
            found: found.to_vec(),
        });
    }

    let version = reader.read_u32()?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion {
            version,
            supported: VERSION,
        });
    }

    let payload_len = reader.read_u64()? as usize;
    let payload_start = reader.pos;
    let payload_end = payload_start
        .checked_add(payload_len)
        .ok_or(Error::UnexpectedEof { offset: reader.pos as u64 })?;
    if payload_end + 4 > data.len() {
        return Err(Error::UnexpectedEof {
            offset: data.len() as u64,
        });
    }

    let expected = crc32fast::hash(&data[payload_start..payload_end]);
    let actual = LittleEndian::read_u32(&data[payload_end..payload_end + 4]);
    if expected != actual {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    if payload_end + 4 != data.len() {
        return Err(Error::invalid_data("trailing bytes after checksum"));
    }

    reader.limit = payload_end;
    let doc = read_document(&mut reader)?;
    if reader.pos != payload_end {
        return Err(Error::invalid_data("trailing bytes in payload"));
    }

    Ok(doc)
}

/// Cursor over the input with an end bound for the current region
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    limit: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limit: data.len(),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(Error::UnexpectedEof { offset: self.pos as u64 })?;
        if end > self.limit {
            return Err(Error::UnexpectedEof {
                offset: self.pos as u64,
            });
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(LittleEndian::read_u64(self.take(8)?)))
    }

    fn read_str(&mut self) -> Result<String> {
        let len = self.read_u64()? as usize;
        let offset = self.pos as u64;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::invalid_data(format!("invalid UTF-8 string at offset {offset}")))
    }
}

fn read_document(reader: &mut Reader<'_>) -> Result<Document> {
    let count = reader.read_u64()?;
    let mut doc = Document::new();

    for _ in 0..count {
        let offset = reader.pos as u64;
        let key = reader.read_str()?;
        if key.is_empty() {
            return Err(Error::invalid_data(format!("empty key at offset {offset}")));
        }
        if doc.has(&key) {
            return Err(Error::invalid_data(format!(
                "duplicate key '{key}' at offset {offset}"
            )));
        }
        let value = read_value(reader)?;
        doc.set(key, value);
    }

    Ok(doc)
}

fn read_value(reader: &mut Reader<'_>) -> Result<Value> {
    let tag_offset = reader.pos as u64;
    let tag = reader.read_u8()?;

    match tag {
        TAG_NULL => Ok(Value::Null),
        TAG_BOOL => match reader.read_u8()? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(Error::invalid_data(format!(
                "invalid boolean byte 0x{other:02X} at offset {tag_offset}"
            ))),
        },
        TAG_NUMBER => Ok(Value::Number(reader.read_f64()?)),
        TAG_STRING => Ok(Value::String(reader.read_str()?)),
        TAG_SEQUENCE => {
            let count = reader.read_u64()?;
            let mut seq = Vec::new();
            for _ in 0..count {
                seq.push(read_value(reader)?);
            }
            Ok(Value::Sequence(seq))
        }
        TAG_DOCUMENT => Ok(Value::Document(read_document(reader)?)),
        tag => Err(Error::UnknownValueTag {
            tag,
            offset: tag_offset,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut inner = Document::new();
        inner.set("location", Value::Sequence(vec![
            Value::Number(1.0),
            Value::Number(-2.5),
            Value::Number(0.0),
        ]));
        inner.set("parent", "root");

        let mut doc = Document::new();
        doc.set("name", "cube");
        doc.set("transform", inner);
        doc.set("flag", true);
        doc.set("nothing", Value::Null);
        doc
    }

    #[test]
    fn test_round_trip() {
        let doc = sample();
        let decoded = from_bytes(&doc.to_bytes()).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = sample().to_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            from_bytes(&bytes),
            Err(Error::InvalidMagic { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut bytes = sample().to_bytes();
        bytes[4] = 0xFF;
        assert!(matches!(
            from_bytes(&bytes),
            Err(Error::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_rejects_truncation_at_every_length() {
        let bytes = sample().to_bytes();
        for len in 0..bytes.len() {
            let err = from_bytes(&bytes[..len]).unwrap_err();
            assert!(err.is_parse_error(), "truncated to {len}: {err}");
        }
    }

    #[test]
    fn test_rejects_corrupted_payload() {
        let mut bytes = sample().to_bytes();
        // Flip a bit inside the payload; the checksum must catch it
        let mid = 16 + (bytes.len() - 20) / 2;
        bytes[mid] ^= 0x40;
        assert!(matches!(
            from_bytes(&bytes),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = sample().to_bytes();
        bytes.push(0);
        assert!(matches!(from_bytes(&bytes), Err(Error::InvalidData { .. })));
    }

    #[test]
    fn test_number_precision_is_exact() {
        let mut doc = Document::new();
        doc.set("frame", 17.000000000000004_f64);
        doc.set("tiny", f64::MIN_POSITIVE);

        let decoded = from_bytes(&doc.to_bytes()).unwrap();
        assert_eq!(decoded.get_f64("frame"), Some(17.000000000000004));
        assert_eq!(decoded.get_f64("tiny"), Some(f64::MIN_POSITIVE));
    }
}
