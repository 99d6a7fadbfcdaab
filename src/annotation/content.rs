//! Content resources: what an annotation body points at.

use serde_json::{Map, Value};

use crate::base::SkolemIriFactory;
use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{
    expect_object, number, optional_f64, optional_str, optional_u32, peek_type, resolve_id,
    resolve_type, singleton_or_array, snippet,
};
use crate::service::{Service, decode_services, encode_services};
use crate::values::{Label, MediaType, SpecificResource, decode_format};
use crate::vocab::Purpose;

/// Fields shared by the media-typed content resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentBody {
    pub id: String,
    pub label: Option<Label>,
    pub format: Option<MediaType>,
    pub language: Vec<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<f64>,
    pub services: Vec<Service>,
    /// Properties with no dedicated field, in document order.
    pub properties: Map<String, Value>,
}

impl ContentBody {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: MediaType) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    fn from_object(obj: &Map<String, Value>, node: &Value) -> Result<Self> {
        let (id, _) = resolve_id(obj, node)?;
        let mut body = Self::new(id);
        for (key, value) in obj {
            match key.as_str() {
                keys::ID | keys::LEGACY_ID | keys::TYPE | keys::LEGACY_TYPE => {}
                keys::LABEL => body.label = Some(Label::from_json(value)?),
                keys::FORMAT => body.format = decode_format(Some(value)),
                keys::LANGUAGE => body.language = languages(value)?,
                keys::WIDTH => body.width = optional_u32(obj, keys::WIDTH)?,
                keys::HEIGHT => body.height = optional_u32(obj, keys::HEIGHT)?,
                keys::DURATION => body.duration = optional_f64(obj, keys::DURATION)?,
                keys::SERVICE => body.services = decode_services(value)?,
                _ => {
                    body.properties.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(body)
    }

    fn write(&self, kind: &str) -> Result<Value> {
        let mut obj = Map::new();
        obj.insert(keys::ID.into(), self.id.clone().into());
        obj.insert(keys::TYPE.into(), kind.into());
        if let Some(label) = &self.label {
            obj.insert(keys::LABEL.into(), label.to_json()?);
        }
        if let Some(format) = &self.format {
            obj.insert(keys::FORMAT.into(), format.to_json()?);
        }
        if !self.language.is_empty() {
            let languages = self.language.iter().cloned().map(Value::String).collect();
            obj.insert(keys::LANGUAGE.into(), singleton_or_array(languages));
        }
        if let Some(width) = self.width {
            obj.insert(keys::WIDTH.into(), width.into());
        }
        if let Some(height) = self.height {
            obj.insert(keys::HEIGHT.into(), height.into());
        }
        if let Some(duration) = self.duration {
            obj.insert(keys::DURATION.into(), number(duration));
        }
        if !self.services.is_empty() {
            obj.insert(keys::SERVICE.into(), encode_services(&self.services)?);
        }
        for (key, value) in &self.properties {
            obj.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(obj))
    }
}

fn languages(node: &Value) -> Result<Vec<String>> {
    match node {
        Value::String(language) => Ok(vec![language.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| CodecError::wrong_shape(keys::LANGUAGE, "a string", snippet(item)))
            })
            .collect(),
        other => Err(CodecError::wrong_shape(
            keys::LANGUAGE,
            "a string or array of strings",
            snippet(other),
        )),
    }
}

/// An embedded textual body.
#[derive(Debug, Clone, PartialEq)]
pub struct TextualBody {
    pub id: Option<String>,
    pub value: String,
    pub format: Option<MediaType>,
    pub language: Option<String>,
    pub purpose: Option<Purpose>,
    serialize_id: bool,
}

impl TextualBody {
    /// A body with no identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
            format: None,
            language: None,
            purpose: None,
            serialize_id: true,
        }
    }

    /// A body with a minted blank-node id, written out only if the
    /// factory creates serializable ids.
    pub fn minted(factory: &SkolemIriFactory, value: impl Into<String>) -> Self {
        Self {
            id: Some(factory.skolem_iri()),
            serialize_id: factory.creates_serializable_ids(),
            ..Self::new(value)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self.serialize_id = true;
        self
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_format(mut self, format: MediaType) -> Self {
        self.format = Some(format);
        self
    }

    /// The id as it will be written, if any.
    pub fn serialized_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|_| self.serialize_id)
    }

    fn from_object(obj: &Map<String, Value>, node: &Value) -> Result<Self> {
        let value = obj
            .get(keys::VALUE)
            .and_then(Value::as_str)
            .ok_or_else(|| CodecError::missing_field(keys::VALUE, snippet(node)))?;
        let mut body = Self::new(value);
        if obj.contains_key(keys::ID) || obj.contains_key(keys::LEGACY_ID) {
            body.id = Some(resolve_id(obj, node)?.0);
        }
        body.format = decode_format(obj.get(keys::FORMAT));
        body.language = optional_str(obj, keys::LANGUAGE)?;
        body.purpose = match optional_str(obj, keys::PURPOSE)? {
            Some(label) => Some(Purpose::from_label(&label).ok_or_else(|| {
                CodecError::invalid_value(keys::PURPOSE, types::TEXTUAL_BODY, label.as_str())
            })?),
            None => None,
        };
        Ok(body)
    }

    fn write(&self) -> Result<Value> {
        let mut obj = Map::new();
        if let Some(id) = self.serialized_id() {
            obj.insert(keys::ID.into(), id.into());
        }
        obj.insert(keys::TYPE.into(), types::TEXTUAL_BODY.into());
        obj.insert(keys::VALUE.into(), self.value.clone().into());
        if let Some(format) = &self.format {
            obj.insert(keys::FORMAT.into(), format.to_json()?);
        }
        if let Some(language) = &self.language {
            obj.insert(keys::LANGUAGE.into(), language.clone().into());
        }
        if let Some(purpose) = self.purpose {
            obj.insert(keys::PURPOSE.into(), purpose.label().into());
        }
        Ok(Value::Object(obj))
    }
}

/// One element of an annotation body.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentResource {
    Sound(ContentBody),
    Video(ContentBody),
    Image(ContentBody),
    Text(ContentBody),
    Dataset(ContentBody),
    Model(ContentBody),
    Canvas(ContentBody),
    TextualBody(TextualBody),
    SpecificResource(SpecificResource),
    /// A resource of unrecognized type, kept verbatim.
    Other(Value),
}

impl ContentResource {
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Sound(_) => Some(types::SOUND),
            Self::Video(_) => Some(types::VIDEO),
            Self::Image(_) => Some(types::IMAGE),
            Self::Text(_) => Some(types::TEXT),
            Self::Dataset(_) => Some(types::DATASET),
            Self::Model(_) => Some(types::MODEL),
            Self::Canvas(_) => Some(types::CANVAS),
            Self::TextualBody(_) => Some(types::TEXTUAL_BODY),
            Self::SpecificResource(_) => Some(types::SPECIFIC_RESOURCE),
            Self::Other(node) => node.as_object().and_then(peek_type),
        }
    }

    /// Shared fields of the media-typed variants.
    pub fn body(&self) -> Option<&ContentBody> {
        match self {
            Self::Sound(body)
            | Self::Video(body)
            | Self::Image(body)
            | Self::Text(body)
            | Self::Dataset(body)
            | Self::Model(body)
            | Self::Canvas(body) => Some(body),
            Self::TextualBody(_) | Self::SpecificResource(_) | Self::Other(_) => None,
        }
    }
}

impl JsonCodec for ContentResource {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, keys::BODY)?;
        let (kind, _) = resolve_type(obj, node)?;
        let resource = match kind.as_str() {
            types::SOUND => Self::Sound(ContentBody::from_object(obj, node)?),
            types::VIDEO => Self::Video(ContentBody::from_object(obj, node)?),
            types::IMAGE => Self::Image(ContentBody::from_object(obj, node)?),
            types::TEXT => Self::Text(ContentBody::from_object(obj, node)?),
            types::DATASET => Self::Dataset(ContentBody::from_object(obj, node)?),
            types::MODEL => Self::Model(ContentBody::from_object(obj, node)?),
            types::CANVAS => Self::Canvas(ContentBody::from_object(obj, node)?),
            types::TEXTUAL_BODY => Self::TextualBody(TextualBody::from_object(obj, node)?),
            types::SPECIFIC_RESOURCE => Self::SpecificResource(SpecificResource::from_json(node)?),
            other => {
                tracing::debug!("Keeping content resource of unknown type '{other}' verbatim");
                Self::Other(node.clone())
            }
        };
        Ok(resource)
    }

    fn to_json(&self) -> Result<Value> {
        match self {
            Self::Sound(body) => body.write(types::SOUND),
            Self::Video(body) => body.write(types::VIDEO),
            Self::Image(body) => body.write(types::IMAGE),
            Self::Text(body) => body.write(types::TEXT),
            Self::Dataset(body) => body.write(types::DATASET),
            Self::Model(body) => body.write(types::MODEL),
            Self::Canvas(body) => body.write(types::CANVAS),
            Self::TextualBody(body) => body.write(),
            Self::SpecificResource(resource) => resource.to_json(),
            Self::Other(node) => Ok(node.clone()),
        }
    }
}
