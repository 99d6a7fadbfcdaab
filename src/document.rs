//! IIIF Presentation 3 documents.
//!
//! ```json
//! {
//!   "@context": "http://iiif.io/api/presentation/3/context.json",
//!   "id": "https://example.org/iiif/book1/manifest",
//!   "type": "Manifest",
//!   "label": { "en": ["Book 1"] },
//!   "behavior": ["paged"],
//!   "items": []
//! }
//! ```

use crate::error::{CodecError, Result};
use crate::format::{DocumentFormat, FormatCapability, JsonCodec};
use crate::scan::{PresentationResource, scan_document};

/// Presentation 3 JSON-LD, read with the streaming scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationJson;

impl DocumentFormat for PresentationJson {
    type Document = PresentationResource;

    fn name(&self) -> &'static str {
        "IIIF Presentation 3"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json", "jsonld"]
    }

    fn mime_type(&self) -> &'static str {
        "application/ld+json;profile=\"http://iiif.io/api/presentation/3/context.json\""
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::STREAMING
    }

    fn read(&self, input: &[u8]) -> Result<PresentationResource> {
        scan_document(input)
    }

    fn write(&self, document: &PresentationResource) -> Result<Vec<u8>> {
        document.to_vec_pretty()
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        let content = std::str::from_utf8(input)
            .map_err(|e| CodecError::json(format!("Invalid UTF-8: {e}")))?;
        if !content.trim_start().starts_with('{') {
            return Err(CodecError::json("Not a JSON object"));
        }
        Ok(())
    }
}
