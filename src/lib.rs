//! # iiif-presentation
//!
//! Bidirectional codec between IIIF Presentation 3 JSON-LD and
//! strongly-typed resources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! document   → Whole-document format (DocumentFormat impl)
//!   ↓
//! scan       → Logos lexer, event reader, handler chain, Manifest/Collection
//!   ↓
//! annotation → Annotation resolver, content resources
//!   ↓
//! service    → Service resolver (image, auth, physical dims, GeoJSON, generic)
//!   ↓
//! values     → Target, Source, Selector, Geometry, MediaType, Stylesheet, Label
//!   ↓
//! vocab      → Purposes, behaviors, time modes
//!   ↓
//! format     → JsonCodec and DocumentFormat traits
//!   ↓
//! json/error → Node helpers, CodecError
//!   ↓
//! base       → Wire constants, KeyStyle, KeyStyles, SkolemIriFactory
//! ```
//!
//! Every node type implements [`JsonCodec`]; decoding never keeps state
//! between calls.

// ============================================================================
// MODULES (dependency order: base → error → json → format → vocab → values
//          → service → annotation → scan → document)
// ============================================================================

/// Foundation types: wire constants, key styles, id minting
pub mod base;

/// Error types
pub mod error;

/// JSON node helpers shared by every resolver
pub mod json;

/// Codec and document format traits
pub mod format;

/// Closed vocabularies
pub mod vocab;

/// Value codecs
pub mod values;

/// Service resolver
pub mod service;

/// Annotation resolver
pub mod annotation;

/// Streaming pre-scanner
pub mod scan;

/// Presentation 3 document format
pub mod document;

pub use annotation::{Annotation, ContentBody, ContentResource, TextualBody};
pub use base::{KeyStyle, KeyStyles, SkolemIriFactory};
pub use document::PresentationJson;
pub use error::{CodecError, Result};
pub use format::{DocumentFormat, FormatCapability, JsonCodec};
pub use scan::{PresentationResource, ResourceKind, read_resource_tree, scan_document};
pub use service::Service;
pub use values::{Geometry, Label, MediaType, Selector, Source, SpecificResource, Stylesheet, Target};
pub use vocab::{Behavior, BehaviorScope, BehaviorSet, Motivation, Purpose, TimeMode};
