//! Annotation targets: bare IRIs, full resources and `SpecificResource`.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_object, peek_type, resolve_id, snippet};
use crate::values::{Selector, Source};

/// A source narrowed by a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificResource {
    pub id: Option<String>,
    pub source: Source,
    pub selector: Selector,
}

impl SpecificResource {
    pub fn new(source: Source, selector: Selector) -> Self {
        Self {
            id: None,
            source,
            selector,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl JsonCodec for SpecificResource {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, keys::TARGET)?;
        if let Some(kind) = peek_type(obj).filter(|kind| *kind != types::SPECIFIC_RESOURCE) {
            return Err(CodecError::unknown("specific resource type", kind));
        }

        let id = match obj.get(keys::ID).or_else(|| obj.get(keys::LEGACY_ID)) {
            Some(_) => Some(resolve_id(obj, node)?.0),
            None => None,
        };
        let source = obj
            .get(keys::SOURCE)
            .ok_or_else(|| CodecError::missing_field(keys::SOURCE, snippet(node)))?;
        let selector = obj
            .get(keys::SELECTOR)
            .ok_or_else(|| CodecError::missing_field(keys::SELECTOR, snippet(node)))?;

        Ok(Self {
            id,
            source: Source::from_json(source)?,
            selector: Selector::from_json(selector)?,
        })
    }

    fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        if let Some(id) = &self.id {
            obj.insert(keys::ID.into(), id.clone().into());
        }
        obj.insert(keys::TYPE.into(), types::SPECIFIC_RESOURCE.into());
        obj.insert(keys::SOURCE.into(), self.source.to_json()?);
        obj.insert(keys::SELECTOR.into(), self.selector.to_json()?);
        Ok(Value::Object(obj))
    }
}

/// What an annotation is about.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Uri(String),
    Specific(SpecificResource),
}

impl Target {
    /// The target as a single URI, with any media fragment appended.
    pub fn uri(&self) -> Cow<'_, str> {
        match self {
            Self::Uri(uri) => Cow::Borrowed(uri),
            Self::Specific(resource) => match resource.selector.fragment() {
                Some(fragment) => Cow::Owned(format!("{}#{fragment}", resource.source.id())),
                None => Cow::Borrowed(resource.source.id()),
            },
        }
    }
}

impl From<&str> for Target {
    fn from(uri: &str) -> Self {
        Self::Uri(uri.to_string())
    }
}

impl From<SpecificResource> for Target {
    fn from(resource: SpecificResource) -> Self {
        Self::Specific(resource)
    }
}

impl JsonCodec for Target {
    fn from_json(node: &Value) -> Result<Self> {
        match node {
            Value::String(uri) => Ok(Self::Uri(uri.clone())),
            Value::Object(_) => SpecificResource::from_json(node).map(Self::Specific),
            other => Err(CodecError::wrong_shape(
                keys::TARGET,
                "a URI or specific resource",
                snippet(other),
            )),
        }
    }

    fn to_json(&self) -> Result<Value> {
        match self {
            Self::Uri(uri) => Ok(Value::String(uri.clone())),
            Self::Specific(resource) => resource.to_json(),
        }
    }
}
