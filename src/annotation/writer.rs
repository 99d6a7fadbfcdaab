//! [`Annotation`] → JSON serialization.

use serde_json::{Map, Value};

use super::{Annotation, ContentResource};
use crate::base::RDF_NIL;
use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;

pub(super) fn encode_annotation(annotation: &Annotation) -> Result<Value> {
    if annotation.id.is_empty() {
        return Err(CodecError::missing_field(keys::ID, types::ANNOTATION));
    }
    if annotation.motivation.as_str().is_empty() {
        return Err(CodecError::missing_field(keys::MOTIVATION, annotation.id.as_str()));
    }

    let mut obj = Map::new();
    obj.insert(keys::ID.into(), annotation.id.clone().into());
    obj.insert(keys::TYPE.into(), types::ANNOTATION.into());
    obj.insert(keys::MOTIVATION.into(), annotation.motivation.as_str().into());
    if let Some(label) = &annotation.label {
        obj.insert(keys::LABEL.into(), label.to_json()?);
    }
    if !annotation.body.is_empty() || annotation.choice {
        obj.insert(keys::BODY.into(), encode_body(&annotation.body, annotation.choice)?);
    }
    obj.insert(keys::TARGET.into(), annotation.target.to_json()?);
    if let Some(time_mode) = annotation.time_mode {
        obj.insert(keys::TIME_MODE.into(), time_mode.label().into());
    }
    Ok(Value::Object(obj))
}

fn encode_body(body: &[Option<ContentResource>], choice: bool) -> Result<Value> {
    if let ([single], false) = (body, choice) {
        return encode_element(single.as_ref());
    }

    let items = body
        .iter()
        .map(|element| encode_element(element.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let mut wrapper = Map::new();
    if choice {
        wrapper.insert(keys::TYPE.into(), types::CHOICE.into());
    }
    wrapper.insert(keys::ITEMS.into(), Value::Array(items));
    Ok(Value::Object(wrapper))
}

fn encode_element(element: Option<&ContentResource>) -> Result<Value> {
    match element {
        Some(resource) => resource.to_json(),
        None => Ok(Value::String(RDF_NIL.to_string())),
    }
}
