//! Blank-node identifier minting.

use uuid::Uuid;

const WELL_KNOWN_PATH: &str = "/.well-known/genid/";

/// Mints skolem IRIs for resources that have no natural identifier.
///
/// This is a plain value: callers that need minted ids construct one and
/// pass it by reference, so independent callers never share state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkolemIriFactory {
    well_known_base: Option<String>,
    serializable_ids: bool,
}

impl SkolemIriFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose ids are `{base}/.well-known/genid/{uuid}`.
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut factory = Self::default();
        factory.set_well_known_base(base);
        factory
    }

    /// Sets the base URI; a trailing slash is dropped.
    pub fn set_well_known_base(&mut self, base: impl Into<String>) -> &mut Self {
        let base = base.into();
        let trimmed = base.strip_suffix('/').unwrap_or(&base).to_string();
        self.well_known_base = Some(trimmed);
        self
    }

    pub fn well_known_base(&self) -> Option<&str> {
        self.well_known_base.as_deref()
    }

    /// Whether minted ids should be written out when encoding.
    pub fn creates_serializable_ids(&self) -> bool {
        self.serializable_ids
    }

    pub fn create_serializable_ids(&mut self, serializable: bool) -> &mut Self {
        self.serializable_ids = serializable;
        self
    }

    /// A fresh identifier, unique per call.
    pub fn skolem_iri(&self) -> String {
        let uuid = Uuid::new_v4();
        match &self.well_known_base {
            Some(base) => format!("{base}{WELL_KNOWN_PATH}{uuid}"),
            None => uuid.to_string(),
        }
    }

    /// Forgets the base and the serializable flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
