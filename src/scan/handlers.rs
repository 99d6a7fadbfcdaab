//! Incremental handlers driven by the event reader.

use serde_json::{Map, Value};

use super::reader::JsonEvent;
use super::resource::{PresentationResource, ResourceBuilder};
use crate::base::constants::keys;
use crate::error::{CodecError, Result};

/// What the driver should do after an event.
pub enum HandlerAction {
    Continue,
    /// Install the new handler and replay the document from the start.
    Switch(Box<dyn JsonHandler>),
}

/// A consumer of JSON events.
pub trait JsonHandler {
    fn handle(&mut self, event: JsonEvent, depth: usize) -> Result<HandlerAction>;

    /// Called once the document has been fully read.
    fn finish(self: Box<Self>) -> Result<PresentationResource>;
}

/// Reassembles one JSON value from its events.
#[derive(Debug, Default)]
pub struct ValueBuilder {
    stack: Vec<Partial>,
}

#[derive(Debug)]
enum Partial {
    Object(Map<String, Value>, Option<String>),
    Array(Vec<Value>),
}

impl ValueBuilder {
    /// Feeds one event; returns the value once it is complete.
    pub fn push(&mut self, event: JsonEvent) -> Result<Option<Value>> {
        match event {
            JsonEvent::StartObject => {
                self.stack.push(Partial::Object(Map::new(), None));
                Ok(None)
            }
            JsonEvent::StartArray => {
                self.stack.push(Partial::Array(Vec::new()));
                Ok(None)
            }
            JsonEvent::Key(key) => match self.stack.last_mut() {
                Some(Partial::Object(_, pending)) => {
                    *pending = Some(key);
                    Ok(None)
                }
                _ => Err(CodecError::json(format!("Unexpected key '{key}'"))),
            },
            JsonEvent::Scalar(value) => self.complete(value),
            JsonEvent::EndObject | JsonEvent::EndArray => match self.stack.pop() {
                Some(Partial::Object(map, _)) => self.complete(Value::Object(map)),
                Some(Partial::Array(items)) => self.complete(Value::Array(items)),
                None => Err(CodecError::json("Unbalanced container end")),
            },
        }
    }

    fn complete(&mut self, value: Value) -> Result<Option<Value>> {
        match self.stack.last_mut() {
            None => Ok(Some(value)),
            Some(Partial::Array(items)) => {
                items.push(value);
                Ok(None)
            }
            Some(Partial::Object(map, pending)) => {
                let key = pending
                    .take()
                    .ok_or_else(|| CodecError::json("Object value without a key"))?;
                map.insert(key, value);
                Ok(None)
            }
        }
    }
}

/// A top-level property whose value is being assembled.
#[derive(Debug, Default)]
struct Member {
    key: String,
    value: ValueBuilder,
}

/// Tracks the top-level member currently being captured, if any.
#[derive(Debug, Default)]
struct MemberCapture {
    current: Option<Member>,
}

impl MemberCapture {
    /// Feeds an event; yields a finished `(key, value)` pair.
    ///
    /// `wanted` decides which top-level keys are captured at all.
    fn push(
        &mut self,
        event: JsonEvent,
        depth: usize,
        wanted: impl Fn(&str) -> bool,
    ) -> Result<Option<(String, Value)>> {
        if let Some(member) = &mut self.current {
            return match member.value.push(event)? {
                Some(value) => {
                    let key = std::mem::take(&mut member.key);
                    self.current = None;
                    Ok(Some((key, value)))
                }
                None => Ok(None),
            };
        }

        match event {
            JsonEvent::StartObject | JsonEvent::EndObject if depth == 0 => Ok(None),
            _ if depth == 0 => Err(CodecError::wrong_shape(
                "document",
                "an object",
                "top-level value",
            )),
            JsonEvent::Key(key) if depth == 1 && wanted(&key) => {
                tracing::trace!("Capturing top-level '{key}'");
                self.current = Some(Member {
                    key,
                    value: ValueBuilder::default(),
                });
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Watches the top level for `type`, `id` and `label`, in any order.
///
/// Once all three have been seen it hands the document to a fresh
/// [`ResourceHandler`], which reads it again from the start. A repeated key
/// overwrites the value captured for it.
#[derive(Debug, Default)]
pub struct DocumentTypeHandler {
    capture: MemberCapture,
    builder: ResourceBuilder,
    seen: [bool; 3],
}

impl DocumentTypeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(key: &str) -> Option<usize> {
        match key {
            keys::TYPE => Some(0),
            keys::ID => Some(1),
            keys::LABEL => Some(2),
            _ => None,
        }
    }
}

impl JsonHandler for DocumentTypeHandler {
    fn handle(&mut self, event: JsonEvent, depth: usize) -> Result<HandlerAction> {
        let wanted = |key: &str| Self::slot(key).is_some();
        let Some((key, value)) = self.capture.push(event, depth, wanted)? else {
            return Ok(HandlerAction::Continue);
        };
        if let Some(slot) = Self::slot(&key) {
            self.seen[slot] = true;
        }
        if key == keys::TYPE {
            tracing::debug!("Document type is {value}");
        }
        self.builder.accept(&key, value);

        if self.seen.iter().all(|seen| *seen) {
            tracing::debug!("Identifying keys found, switching handlers");
            return Ok(HandlerAction::Switch(Box::new(ResourceHandler::new())));
        }
        Ok(HandlerAction::Continue)
    }

    fn finish(self: Box<Self>) -> Result<PresentationResource> {
        // Only reached when the identifying keys never all appeared.
        self.builder.build()
    }
}

/// Feeds every top-level property into a resource builder.
#[derive(Debug, Default)]
pub struct ResourceHandler {
    capture: MemberCapture,
    builder: ResourceBuilder,
}

impl ResourceHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JsonHandler for ResourceHandler {
    fn handle(&mut self, event: JsonEvent, depth: usize) -> Result<HandlerAction> {
        if let Some((key, value)) = self.capture.push(event, depth, |_| true)? {
            self.builder.accept(&key, value);
        }
        Ok(HandlerAction::Continue)
    }

    fn finish(self: Box<Self>) -> Result<PresentationResource> {
        self.builder.build()
    }
}
