//! Property tests for the document codec
//!
//! The round-trip law: for every legal document, decoding its encoding
//! yields an equal document — same keys, same order, same nesting, and
//! numerically exact floats.

use proptest::prelude::*;

use nevf_doc::{Document, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        // Finite numbers only; NaN is not comparable and never produced
        // by scene extraction
        (-1.0e12..1.0e12f64).prop_map(Value::Number),
        "[a-zA-Z0-9_. -]{0,12}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z_]{1,8}", inner), 0..6)
                .prop_map(|entries| Value::Document(entries.into_iter().collect::<Document>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(("[a-z_]{1,8}", arb_value()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip_reproduces_document(doc in arb_document()) {
        let bytes = doc.to_bytes();
        let decoded = Document::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded, doc);
    }

    #[test]
    fn encoding_is_deterministic(doc in arb_document()) {
        prop_assert_eq!(doc.to_bytes(), doc.clone().to_bytes());
    }

    #[test]
    fn truncated_input_is_rejected(doc in arb_document(), cut in 0usize..64) {
        let bytes = doc.to_bytes();
        if cut < bytes.len() {
            let truncated = &bytes[..bytes.len() - cut - 1];
            prop_assert!(Document::from_bytes(truncated).is_err());
        }
    }
}

#[test]
fn save_and_load_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.nevf");

    let mut doc = Document::new();
    doc.set("name", "rig");
    doc.set("frame", 12.5);

    doc.save(&path).unwrap();
    let loaded = Document::load(&path).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Document::load(dir.path().join("absent.nevf")).is_err());
}
