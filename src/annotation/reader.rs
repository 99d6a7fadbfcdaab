//! JSON → [`Annotation`] resolution.

use serde_json::Value;

use super::{Annotation, ContentResource};
use crate::base::RDF_NIL;
use crate::base::constants::{keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_array, expect_object, leaf_text, peek_type, required_leaf, snippet};
use crate::values::{Label, Target};
use crate::vocab::{Motivation, TimeMode};

pub(super) fn decode_annotation(node: &Value) -> Result<Annotation> {
    let obj = expect_object(node, "annotation")?;
    let id = required_leaf(obj, keys::ID, node)?;
    let motivation = required_leaf(obj, keys::MOTIVATION, node)?;
    let target = obj
        .get(keys::TARGET)
        .filter(|target| !target.is_null())
        .ok_or_else(|| CodecError::missing_field(keys::TARGET, snippet(node)))?;
    let target = Target::from_json(target)?;

    let mut annotation = match Motivation::parse(&motivation) {
        Motivation::Purpose(purpose) => Annotation::new(purpose, id, target),
        Motivation::Other(text) => Annotation::generic(id, text, target)?,
    };

    let (body, choice) = decode_body(obj.get(keys::BODY))?;
    annotation.body = body;
    annotation.choice = choice;

    if let Some(label) = obj.get(keys::LABEL).filter(|label| !label.is_null()) {
        annotation.label = Some(Label::from_json(label)?);
    }
    annotation.time_mode = obj.get(keys::TIME_MODE).and_then(decode_time_mode);
    Ok(annotation)
}

/// Body elements plus whether they are alternatives.
fn decode_body(body: Option<&Value>) -> Result<(Vec<Option<ContentResource>>, bool)> {
    let Some(body) = body.filter(|body| !body.is_null()) else {
        return Ok((Vec::new(), false));
    };

    match body {
        Value::Object(obj) => match obj.get(keys::ITEMS) {
            Some(items) => {
                let items = expect_array(items, keys::ITEMS)?;
                let resources = items.iter().map(decode_element).collect::<Result<_>>()?;
                Ok((resources, peek_type(obj) == Some(types::CHOICE)))
            }
            None => Ok((vec![Some(ContentResource::from_json(body)?)], false)),
        },
        Value::Array(items) => {
            let resources = items.iter().map(decode_element).collect::<Result<_>>()?;
            Ok((resources, false))
        }
        Value::String(nil) if nil == RDF_NIL => Ok((vec![None], false)),
        other => Err(CodecError::wrong_shape(
            keys::BODY,
            "an object, array or \"rdf:nil\"",
            snippet(other),
        )),
    }
}

fn decode_element(node: &Value) -> Result<Option<ContentResource>> {
    match node {
        Value::String(nil) if nil == RDF_NIL => Ok(None),
        Value::Object(_) => ContentResource::from_json(node).map(Some),
        other => Err(CodecError::wrong_shape(
            keys::ITEMS,
            "an object or \"rdf:nil\"",
            snippet(other),
        )),
    }
}

/// Unparseable time modes are dropped with a warning.
fn decode_time_mode(node: &Value) -> Option<TimeMode> {
    let mode = leaf_text(node).and_then(|label| TimeMode::from_label(&label));
    if mode.is_none() && !node.is_null() {
        tracing::warn!("Ignoring invalid timeMode: {}", snippet(node));
    }
    mode
}
