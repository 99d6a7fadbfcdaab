//! Streaming pre-scanner for whole presentation documents.
//!
//! ```text
//! bytes → Lexer → EventReader → DocumentTypeHandler ──(type, id, label)──┐
//!                     ▲                                                  │
//!                     └──────────── reset() ◄── ResourceHandler ◄────────┘
//! ```
//!
//! The first handler only looks at top-level `type`, `id` and `label`.
//! Once it has seen all three it installs a fresh [`ResourceHandler`] and
//! the reader replays the document from the start, so no generic tree is
//! built for the document as a whole. Validation happens when the document
//! ends; a repeated top-level key keeps its last value, as in the tree
//! reader.

mod handlers;
mod lexer;
mod reader;
mod resource;

pub use handlers::{DocumentTypeHandler, HandlerAction, JsonHandler, ResourceHandler, ValueBuilder};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use reader::{EventReader, JsonEvent};
pub use resource::{PresentationResource, ResourceKind};

use crate::error::{CodecError, Result};
use crate::format::JsonCodec;

/// Reads a document with the streaming scanner.
pub fn scan_document(input: &[u8]) -> Result<PresentationResource> {
    let text = std::str::from_utf8(input)
        .map_err(|e| CodecError::json(format!("Invalid UTF-8: {e}")))?;
    let mut reader = EventReader::new(text)?;
    let mut handler: Box<dyn JsonHandler> = Box::new(DocumentTypeHandler::new());

    while let Some((event, depth)) = reader.next_event()? {
        match handler.handle(event, depth)? {
            HandlerAction::Continue => {}
            HandlerAction::Switch(next) => {
                handler = next;
                reader.reset();
            }
        }
    }
    handler.finish()
}

/// Reads a document by parsing a full tree first.
pub fn read_resource_tree(input: &[u8]) -> Result<PresentationResource> {
    PresentationResource::from_slice(input)
}
