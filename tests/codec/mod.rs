//! Resolver and serializer tests
//!
//! Tests for the node codecs:
//! - Service dispatch, profiles, legacy keys
//! - Annotation motivation, targets, bodies
//! - Behavior vocabularies and exclusivity
//! - Value codecs (geometry, source, selector, stylesheet, media type)

pub mod tests_annotations;
pub mod tests_behaviors;
pub mod tests_values;
