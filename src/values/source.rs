//! Sources of a `SpecificResource`, with their optional `partOf` links.

use serde_json::{Map, Value};

use crate::base::constants::keys;
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_object, is_container, one_or_many, resolve_id, resolve_type, singleton_or_array, snippet};
use crate::values::Label;

/// A containing resource: `{ id, type, label? }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartOf {
    pub id: String,
    pub kind: String,
    pub label: Option<Label>,
}

impl PartOf {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }
}

impl JsonCodec for PartOf {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, keys::PART_OF)?;
        let (id, _) = resolve_id(obj, node)?;
        let (kind, _) = resolve_type(obj, node)?;
        let label = obj.get(keys::LABEL).map(Label::from_json).transpose()?;
        Ok(Self { id, kind, label })
    }

    fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        obj.insert(keys::ID.into(), self.id.clone().into());
        obj.insert(keys::TYPE.into(), self.kind.clone().into());
        if let Some(label) = &self.label {
            obj.insert(keys::LABEL.into(), label.to_json()?);
        }
        Ok(Value::Object(obj))
    }
}

/// The `source` of a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Bare id.
    Uri(String),
    /// Typed source, optionally placed within larger resources.
    Resource {
        id: String,
        kind: String,
        part_of: Vec<PartOf>,
    },
}

impl Source {
    pub fn id(&self) -> &str {
        match self {
            Self::Uri(id) | Self::Resource { id, .. } => id,
        }
    }

    pub fn part_of(&self) -> &[PartOf] {
        match self {
            Self::Uri(_) => &[],
            Self::Resource { part_of, .. } => part_of,
        }
    }
}

impl JsonCodec for Source {
    fn from_json(node: &Value) -> Result<Self> {
        if !is_container(node) {
            return match node {
                Value::String(id) => Ok(Self::Uri(id.clone())),
                other => Err(CodecError::wrong_shape(keys::SOURCE, "a URI", snippet(other))),
            };
        }

        let obj = expect_object(node, keys::SOURCE)?;
        let (id, _) = resolve_id(obj, node)?;
        let (kind, _) = resolve_type(obj, node)?;
        let part_of = match obj.get(keys::PART_OF) {
            Some(part_of) => one_or_many(part_of)
                .map(PartOf::from_json)
                .collect::<Result<_>>()?,
            None => Vec::new(),
        };
        Ok(Self::Resource { id, kind, part_of })
    }

    fn to_json(&self) -> Result<Value> {
        match self {
            Self::Uri(id) => Ok(Value::String(id.clone())),
            Self::Resource { id, kind, part_of } => {
                let mut obj = Map::new();
                obj.insert(keys::ID.into(), id.clone().into());
                obj.insert(keys::TYPE.into(), kind.clone().into());
                if !part_of.is_empty() {
                    let items = part_of.iter().map(PartOf::to_json).collect::<Result<_>>()?;
                    obj.insert(keys::PART_OF.into(), singleton_or_array(items));
                }
                Ok(Value::Object(obj))
            }
        }
    }
}
