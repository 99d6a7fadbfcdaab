//! Stylesheets referenced by IRI or embedded inline.

use serde_json::{Map, Value};

use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{snippet, peek_type};

/// A stylesheet referenced by URI or given inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    External(String),
    Inline(String),
}

impl JsonCodec for Stylesheet {
    fn from_json(node: &Value) -> Result<Self> {
        match node {
            Value::String(uri) if uri.trim().is_empty() => Err(CodecError::wrong_shape(
                "stylesheet",
                "a non-empty URI",
                snippet(node),
            )),
            Value::String(uri) => Ok(Self::External(uri.clone())),
            Value::Object(obj) => {
                if let Some(kind) = peek_type(obj).filter(|kind| *kind != types::CSS_STYLESHEET) {
                    return Err(CodecError::unknown("stylesheet type", kind));
                }
                match obj.get(keys::VALUE).and_then(Value::as_str) {
                    Some(css) if !css.trim().is_empty() => Ok(Self::Inline(css.to_string())),
                    _ => Err(CodecError::missing_field(keys::VALUE, snippet(node))),
                }
            }
            other => Err(CodecError::wrong_shape(
                "stylesheet",
                "a URI or object",
                snippet(other),
            )),
        }
    }

    fn to_json(&self) -> Result<Value> {
        Ok(match self {
            Self::External(uri) => Value::String(uri.clone()),
            Self::Inline(css) => {
                let mut obj = Map::new();
                obj.insert(keys::TYPE.into(), types::CSS_STYLESHEET.into());
                obj.insert(keys::VALUE.into(), css.clone().into());
                Value::Object(obj)
            }
        })
    }
}
