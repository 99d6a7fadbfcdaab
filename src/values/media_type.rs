//! Media types, as carried by `format` fields.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use smol_str::SmolStr;

use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::snippet;

/// A parsed `type/subtype; name=value` media type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    kind: SmolStr,
    subtype: SmolStr,
    parameters: Vec<(SmolStr, SmolStr)>,
}

impl MediaType {
    pub fn new(kind: &str, subtype: &str) -> Self {
        Self {
            kind: SmolStr::new(kind.to_ascii_lowercase()),
            subtype: SmolStr::new(subtype.to_ascii_lowercase()),
            parameters: Vec::new(),
        }
    }

    /// Parses a media type; `None` if it is not `type/subtype[;k=v]*`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(';');
        let essence = parts.next()?.trim();
        let (kind, subtype) = essence.split_once('/')?;
        if !is_token(kind) || !is_token(subtype) {
            return None;
        }

        let mut media_type = Self::new(kind, subtype);
        for part in parts {
            let (name, value) = part.trim().split_once('=')?;
            let name = name.trim();
            let value = value.trim();
            if !is_token(name) || value.is_empty() {
                return None;
            }
            media_type
                .parameters
                .push((SmolStr::new(name.to_ascii_lowercase()), SmolStr::new(value)));
        }
        Some(media_type)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.kind, self.subtype)
    }
}

fn is_token(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{name}={value}")?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text).ok_or_else(|| CodecError::invalid_value("format", "media type", text))
    }
}

impl JsonCodec for MediaType {
    fn from_json(node: &Value) -> Result<Self> {
        match node {
            Value::String(text) => text.parse(),
            other => Err(CodecError::wrong_shape("format", "a string", snippet(other))),
        }
    }

    fn to_json(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

/// Lenient `format` decoding: anything unparseable is logged and dropped.
pub fn decode_format(node: Option<&Value>) -> Option<MediaType> {
    let node = node.filter(|node| !node.is_null())?;
    match MediaType::from_json(node) {
        Ok(media_type) => Some(media_type),
        Err(err) => {
            tracing::warn!("Ignoring unparseable format {}: {err}", snippet(node));
            None
        }
    }
}
