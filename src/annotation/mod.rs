//! Web annotations and their resolver.
//!
//! An annotation's concrete variant is fixed by its motivation: a known
//! [`Purpose`] pins the variant, anything else makes a generic annotation
//! carrying the free-text motivation. The two can never disagree.

mod content;
mod reader;
mod writer;

pub use content::{ContentBody, ContentResource, TextualBody};

use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::values::{Label, Target};
use crate::vocab::{Motivation, Purpose, TimeMode};

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    id: String,
    motivation: Motivation,
    label: Option<Label>,
    target: Target,
    body: Vec<Option<ContentResource>>,
    choice: bool,
    time_mode: Option<TimeMode>,
}

impl Annotation {
    /// The variant for `purpose`, with its motivation pinned.
    pub fn new(purpose: Purpose, id: impl Into<String>, target: impl Into<Target>) -> Self {
        Self::build(id.into(), Motivation::Purpose(purpose), target.into())
    }

    /// The `purpose` variant, checking a motivation supplied from elsewhere.
    pub fn for_purpose(
        purpose: Purpose,
        motivation: &str,
        id: impl Into<String>,
        target: impl Into<Target>,
    ) -> Result<Self> {
        if Purpose::from_label(motivation) != Some(purpose) {
            return Err(CodecError::MotivationMismatch {
                expected: purpose.label().to_string(),
                found: motivation.to_string(),
            });
        }
        Ok(Self::new(purpose, id, target))
    }

    /// The generic variant; known purposes must use [`Annotation::new`].
    pub fn generic(
        id: impl Into<String>,
        motivation: impl Into<String>,
        target: impl Into<Target>,
    ) -> Result<Self> {
        let motivation = motivation.into();
        if let Some(purpose) = Purpose::from_label(&motivation) {
            return Err(CodecError::MotivationMismatch {
                expected: "generic".to_string(),
                found: purpose.label().to_string(),
            });
        }
        Ok(Self::build(id.into(), Motivation::Other(motivation), target.into()))
    }

    fn build(id: String, motivation: Motivation, target: Target) -> Self {
        Self {
            id,
            motivation,
            label: None,
            target,
            body: Vec::new(),
            choice: false,
            time_mode: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Body resources that all apply.
    pub fn with_body(mut self, body: Vec<ContentResource>) -> Self {
        self.body = body.into_iter().map(Some).collect();
        self.choice = false;
        self
    }

    /// Alternatives to choose between; `None` marks "no resource".
    pub fn with_choice(mut self, options: Vec<Option<ContentResource>>) -> Self {
        self.body = options;
        self.choice = true;
        self
    }

    pub fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = Some(time_mode);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn motivation(&self) -> &Motivation {
        &self.motivation
    }

    /// The pinned purpose; `None` for generic annotations.
    pub fn purpose(&self) -> Option<Purpose> {
        self.motivation.purpose()
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn body(&self) -> &[Option<ContentResource>] {
        &self.body
    }

    pub fn is_choice(&self) -> bool {
        self.choice
    }

    pub fn time_mode(&self) -> Option<TimeMode> {
        self.time_mode
    }
}

impl JsonCodec for Annotation {
    fn from_json(node: &Value) -> Result<Self> {
        reader::decode_annotation(node)
    }

    fn to_json(&self) -> Result<Value> {
        writer::encode_annotation(self)
    }
}
