//! Language maps (`label`, `summary`) keyed by language tag.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::snippet;

/// A language map: language tag to one or more strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label(IndexMap<String, Vec<String>>);

impl Label {
    /// Language key for text with no language.
    pub const NO_LANGUAGE: &'static str = "none";

    pub fn new() -> Self {
        Self::default()
    }

    /// A single string with no language.
    pub fn none(text: impl Into<String>) -> Self {
        Self::new().with(Self::NO_LANGUAGE, text)
    }

    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.add(language, text);
        self
    }

    pub fn add(&mut self, language: impl Into<String>, text: impl Into<String>) {
        self.0.entry(language.into()).or_default().push(text.into());
    }

    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.0.get(language).map(Vec::as_slice)
    }

    /// The first string of the first language.
    pub fn first(&self) -> Option<&str> {
        self.0.values().flatten().next().map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl JsonCodec for Label {
    fn from_json(node: &Value) -> Result<Self> {
        match node {
            Value::String(text) => Ok(Self::none(text.clone())),
            Value::Object(map) => {
                let mut label = Self::new();
                for (language, values) in map {
                    match values {
                        Value::String(text) => label.add(language.clone(), text.clone()),
                        Value::Array(items) => {
                            let entry = label.0.entry(language.clone()).or_default();
                            for item in items {
                                let text = item.as_str().ok_or_else(|| {
                                    CodecError::wrong_shape("label", "a string", snippet(item))
                                })?;
                                entry.push(text.to_string());
                            }
                        }
                        other => {
                            return Err(CodecError::wrong_shape(
                                "label",
                                "a string or array of strings",
                                snippet(other),
                            ));
                        }
                    }
                }
                Ok(label)
            }
            other => Err(CodecError::wrong_shape(
                "label",
                "a language map",
                snippet(other),
            )),
        }
    }

    fn to_json(&self) -> Result<Value> {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(language, values)| {
                let values = values.iter().cloned().map(Value::String).collect();
                (language.clone(), Value::Array(values))
            })
            .collect();
        Ok(Value::Object(map))
    }
}
