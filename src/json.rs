//! Helpers for reading loosely-shaped JSON nodes.
//!
//! Every resolver funnels its field access through these so that the
//! modern/legacy key fallback and the error snippets behave the same
//! everywhere.

use serde_json::{Map, Number, Value};

use crate::base::KeyStyle;
use crate::base::constants::keys;
use crate::error::{CodecError, Result};

const SNIPPET_LEN: usize = 80;

/// Compact rendering of a node, truncated for error messages.
pub fn snippet(node: &Value) -> String {
    let text = node.to_string();
    if text.len() <= SNIPPET_LEN {
        return text;
    }
    let mut end = SNIPPET_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// The node as an object, or a shape error naming `field`.
pub fn expect_object<'a>(node: &'a Value, field: &str) -> Result<&'a Map<String, Value>> {
    node.as_object()
        .ok_or_else(|| CodecError::wrong_shape(field, "an object", snippet(node)))
}

/// The node as an array, or a shape error naming `field`.
pub fn expect_array<'a>(node: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    node.as_array()
        .ok_or_else(|| CodecError::wrong_shape(field, "an array", snippet(node)))
}

/// Text of a leaf value. Containers and null have none.
pub fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// A required leaf field rendered as text.
pub fn required_leaf(obj: &Map<String, Value>, key: &str, node: &Value) -> Result<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(CodecError::missing_field(key, snippet(node))),
        Some(value) if is_container(value) => {
            Err(CodecError::wrong_shape(key, "a value node", snippet(node)))
        }
        Some(value) => leaf_text(value).ok_or_else(|| CodecError::missing_field(key, snippet(node))),
    }
}

/// An optional string field; present but not a string is a shape error.
pub fn optional_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(CodecError::wrong_shape(key, "a string", snippet(other))),
    }
}

/// An optional unsigned integer field.
pub fn optional_u32(obj: &Map<String, Value>, key: &str) -> Result<Option<u32>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| CodecError::wrong_shape(key, "a non-negative integer", snippet(value))),
    }
}

/// An optional numeric field.
pub fn optional_f64(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| CodecError::wrong_shape(key, "a number", snippet(value))),
    }
}

/// Resolves a modern/legacy key pair: modern first, then legacy.
fn keyed_leaf(
    obj: &Map<String, Value>,
    modern: &'static str,
    legacy: &'static str,
    node: &Value,
) -> Result<(String, KeyStyle)> {
    let (value, style, key) = match (obj.get(modern), obj.get(legacy)) {
        (Some(value), _) if !value.is_null() => (value, KeyStyle::Modern, modern),
        (_, Some(value)) if !value.is_null() => (value, KeyStyle::Legacy, legacy),
        _ => return Err(CodecError::missing_field(modern, snippet(node))),
    };
    match value {
        Value::String(s) => Ok((s.clone(), style)),
        _ => Err(CodecError::wrong_shape(key, "a string", snippet(node))),
    }
}

/// The node's identifier and the key style it was found under.
pub fn resolve_id(obj: &Map<String, Value>, node: &Value) -> Result<(String, KeyStyle)> {
    keyed_leaf(obj, keys::ID, keys::LEGACY_ID, node)
}

/// The node's type discriminator and the key style it was found under.
pub fn resolve_type(obj: &Map<String, Value>, node: &Value) -> Result<(String, KeyStyle)> {
    keyed_leaf(obj, keys::TYPE, keys::LEGACY_TYPE, node)
}

/// Type discriminator if present as a string under either key.
pub fn peek_type(obj: &Map<String, Value>) -> Option<&str> {
    obj.get(keys::TYPE)
        .or_else(|| obj.get(keys::LEGACY_TYPE))
        .and_then(Value::as_str)
}

/// Iterates an array's elements, or the node itself when it is a singleton.
pub fn one_or_many(node: &Value) -> std::slice::Iter<'_, Value> {
    match node {
        Value::Array(items) => items.iter(),
        single => std::slice::from_ref(single).iter(),
    }
}

/// A JSON number for `value`, written as an integer when it is integral.
pub fn number(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

/// A one-element value written bare, anything else written as an array.
pub fn singleton_or_array(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}
