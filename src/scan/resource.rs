//! Top-level presentation resources (Manifest, Collection).

use std::fmt;

use serde_json::{Map, Value};

use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_object, snippet};
use crate::service::{Service, decode_services, encode_services};
use crate::values::Label;
use crate::vocab::{BehaviorScope, BehaviorSet};

/// Which top-level resource a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Manifest,
    Collection,
}

impl ResourceKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Manifest => types::MANIFEST,
            Self::Collection => types::COLLECTION,
        }
    }

    pub fn from_type(name: &str) -> Option<Self> {
        match name {
            types::MANIFEST => Some(Self::Manifest),
            types::COLLECTION => Some(Self::Collection),
            _ => None,
        }
    }

    pub fn behavior_scope(self) -> BehaviorScope {
        match self {
            Self::Manifest => BehaviorScope::Manifest,
            Self::Collection => BehaviorScope::Collection,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A Manifest or Collection with its codec-relevant fields resolved.
///
/// Properties the codec has no typed form for are kept in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationResource {
    pub kind: ResourceKind,
    pub id: String,
    pub label: Label,
    pub behaviors: Option<BehaviorSet>,
    pub services: Vec<Service>,
    pub properties: Map<String, Value>,
}

impl PresentationResource {
    pub fn new(kind: ResourceKind, id: impl Into<String>, label: Label) -> Self {
        Self {
            kind,
            id: id.into(),
            label,
            behaviors: None,
            services: Vec::new(),
            properties: Map::new(),
        }
    }
}

impl JsonCodec for PresentationResource {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, "document")?;
        let mut builder = ResourceBuilder::default();
        for (key, value) in obj {
            builder.accept(key, value.clone());
        }
        builder.build()
    }

    fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        if let Some(context) = self.properties.get(keys::CONTEXT) {
            obj.insert(keys::CONTEXT.into(), context.clone());
        }
        obj.insert(keys::ID.into(), self.id.clone().into());
        obj.insert(keys::TYPE.into(), self.kind.type_name().into());
        obj.insert(keys::LABEL.into(), self.label.to_json()?);
        if let Some(behaviors) = &self.behaviors {
            obj.insert(keys::BEHAVIOR.into(), behaviors.to_json());
        }
        if !self.services.is_empty() {
            obj.insert(keys::SERVICE.into(), encode_services(&self.services)?);
        }
        for (key, value) in &self.properties {
            if key != keys::CONTEXT {
                obj.insert(key.clone(), value.clone());
            }
        }
        Ok(Value::Object(obj))
    }
}

/// Assembles a [`PresentationResource`] one top-level property at a time.
///
/// Both the tree reader and the streaming scanner go through this, so the
/// two produce identical results. A repeated key replaces the earlier value
/// and nothing is validated until [`ResourceBuilder::build`].
#[derive(Debug, Default)]
pub(crate) struct ResourceBuilder {
    kind: Option<Value>,
    id: Option<Value>,
    label: Option<Value>,
    behavior: Option<Value>,
    service: Option<Value>,
    properties: Map<String, Value>,
}

impl ResourceBuilder {
    pub(crate) fn accept(&mut self, key: &str, value: Value) {
        let slot = match key {
            keys::TYPE => &mut self.kind,
            keys::ID => &mut self.id,
            keys::LABEL => &mut self.label,
            keys::BEHAVIOR => &mut self.behavior,
            keys::SERVICE => &mut self.service,
            _ => {
                self.properties.insert(key.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// Validates type, id and label in that order, then behaviors and services.
    pub(crate) fn build(self) -> Result<PresentationResource> {
        let (kind, id, label) = match (&self.kind, &self.id, &self.label) {
            (Some(kind), Some(id), Some(label)) => (kind, id, label),
            (kind, id, _) => {
                let missing = if kind.is_none() {
                    keys::TYPE
                } else if id.is_none() {
                    keys::ID
                } else {
                    keys::LABEL
                };
                return Err(CodecError::missing_field(missing, "document"));
            }
        };

        let kind_name = kind
            .as_str()
            .ok_or_else(|| CodecError::wrong_shape(keys::TYPE, "a string", snippet(kind)))?;
        let kind = ResourceKind::from_type(kind_name)
            .ok_or_else(|| CodecError::unknown("resource type", kind_name))?;
        let id = id
            .as_str()
            .ok_or_else(|| CodecError::wrong_shape(keys::ID, "a string", snippet(id)))?;
        let label = Label::from_json(label)?;

        let mut resource = PresentationResource::new(kind, id, label);
        if let Some(behavior) = &self.behavior {
            resource.behaviors = Some(BehaviorSet::from_json(behavior, kind.behavior_scope())?);
        }
        if let Some(service) = &self.service {
            resource.services = decode_services(service)?;
        }
        resource.properties = self.properties;
        Ok(resource)
    }
}
