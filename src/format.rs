//! Common traits for node codecs and whole-document formats.

use serde_json::Value;

use crate::error::{CodecError, Result};

/// A node that can be resolved from, and serialized to, JSON.
///
/// `from_json` and `to_json` are structural inverses: for any value `x`
/// built through the public API, `from_json(&x.to_json()?)? == x`.
pub trait JsonCodec: Sized {
    /// Resolve a JSON node into this type.
    fn from_json(node: &Value) -> Result<Self>;

    /// Serialize this value back into a JSON node.
    fn to_json(&self) -> Result<Value>;

    /// Resolve from raw JSON bytes.
    fn from_slice(input: &[u8]) -> Result<Self> {
        let node: Value = serde_json::from_slice(input)?;
        Self::from_json(&node)
    }

    /// Serialize to pretty-printed JSON bytes.
    fn to_vec_pretty(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.to_json()?)
            .map_err(|e| CodecError::json(format!("Serialize error: {e}")))
    }
}

/// Capabilities supported by a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Can read documents.
    pub read: bool,
    /// Can write documents.
    pub write: bool,
    /// Reads without building a generic tree first.
    pub streaming: bool,
    /// Unknown properties survive a round trip.
    pub lossless: bool,
}

impl FormatCapability {
    /// Full capability (read, write, lossless).
    pub const FULL: Self = Self {
        read: true,
        write: true,
        streaming: false,
        lossless: true,
    };

    /// Full capability with a streaming reader.
    pub const STREAMING: Self = Self {
        streaming: true,
        ..Self::FULL
    };
}

/// A whole-document format.
pub trait DocumentFormat: Send + Sync {
    /// The in-memory form of one document.
    type Document;

    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Capabilities of this format implementation.
    fn capabilities(&self) -> FormatCapability;

    /// Read a document from bytes.
    fn read(&self, input: &[u8]) -> Result<Self::Document>;

    /// Write a document to bytes.
    fn write(&self, document: &Self::Document) -> Result<Vec<u8>>;

    /// Quick check that the input looks like this format.
    ///
    /// This doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<()> {
        let _ = input;
        Ok(())
    }
}
