//! Shared test helpers.

#![allow(dead_code)]

use std::fmt::Debug;
use std::path::PathBuf;

use iiif::JsonCodec;
use serde_json::Value;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Loads `tests/fixtures/{name}` as JSON.
pub fn fixture(name: &str) -> Value {
    let path = fixtures_dir().join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Bad JSON in {}: {e}", path.display()))
}

/// Decodes `node`, checks that re-encoding and decoding again is stable,
/// and returns the decoded value.
pub fn assert_round_trip<T>(node: &Value) -> T
where
    T: JsonCodec + PartialEq + Debug,
{
    let decoded = T::from_json(node).expect("Failed to decode");
    let encoded = decoded.to_json().expect("Failed to encode");
    let again = T::from_json(&encoded).expect("Failed to decode encoded form");
    assert_eq!(decoded, again, "Round trip changed value; encoded as {encoded}");
    decoded
}

/// Checks that encoding reproduces `node` exactly.
pub fn assert_reencodes_to<T>(node: &Value)
where
    T: JsonCodec + Debug,
{
    let decoded = T::from_json(node).expect("Failed to decode");
    assert_eq!(&decoded.to_json().expect("Failed to encode"), node);
}

/// Top-level key order of an encoded object.
pub fn keys_of(node: &Value) -> Vec<String> {
    node.as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}
