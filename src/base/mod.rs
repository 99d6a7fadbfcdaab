//! Foundation types shared by every codec.
//!
//! - [`constants`] - JSON keys, resource type literals, context URIs
//! - [`KeyStyle`] - modern (`id`/`type`) vs legacy (`@id`/`@type`) keys
//! - [`KeyStyles`] - the styles of a node's id and type keys, tracked apart
//! - [`SkolemIriFactory`] - injectable blank-node id minting
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod key_style;
mod minter;

pub use constants::RDF_NIL;
pub use key_style::{KeyStyle, KeyStyles};
pub use minter::SkolemIriFactory;
