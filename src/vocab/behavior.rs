//! Behavior vocabularies, scoped by the type of the owning resource.
//!
//! Each resource type accepts its own subset of behavior labels, and some
//! behaviors exclude one another (`paged` and `individuals` cannot both
//! apply). Both rules are enforced when a set is decoded or extended.

use std::fmt;

use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::json::{expect_array, leaf_text, snippet};

/// Every behavior label known to any vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    AutoAdvance,
    NoAutoAdvance,
    Repeat,
    NoRepeat,
    Unordered,
    Individuals,
    Continuous,
    Paged,
    FacingPages,
    NonPaged,
    MultiPart,
    Together,
    Sequence,
    ThumbnailNav,
    NoNav,
    Hidden,
}

impl Behavior {
    pub fn label(self) -> &'static str {
        match self {
            Self::AutoAdvance => "auto-advance",
            Self::NoAutoAdvance => "no-auto-advance",
            Self::Repeat => "repeat",
            Self::NoRepeat => "no-repeat",
            Self::Unordered => "unordered",
            Self::Individuals => "individuals",
            Self::Continuous => "continuous",
            Self::Paged => "paged",
            Self::FacingPages => "facing-pages",
            Self::NonPaged => "non-paged",
            Self::MultiPart => "multi-part",
            Self::Together => "together",
            Self::Sequence => "sequence",
            Self::ThumbnailNav => "thumbnail-nav",
            Self::NoNav => "no-nav",
            Self::Hidden => "hidden",
        }
    }

    /// Behaviors that may not appear alongside this one.
    pub fn disjoint_with(self) -> &'static [Behavior] {
        use Behavior::*;
        match self {
            AutoAdvance => &[NoAutoAdvance],
            NoAutoAdvance => &[AutoAdvance],
            Repeat => &[NoRepeat],
            NoRepeat => &[Repeat],
            Unordered => &[Individuals, Continuous, Paged],
            Individuals => &[Unordered, Continuous, Paged],
            Continuous => &[Unordered, Individuals, Paged],
            Paged => &[Unordered, Individuals, Continuous, FacingPages, NonPaged],
            FacingPages => &[Paged, NonPaged],
            NonPaged => &[Paged, FacingPages],
            MultiPart => &[Together],
            Together => &[MultiPart],
            Sequence => &[ThumbnailNav, NoNav],
            ThumbnailNav => &[Sequence, NoNav],
            NoNav => &[Sequence, ThumbnailNav],
            Hidden => &[],
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The resource type whose vocabulary a behavior set draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorScope {
    Canvas,
    Collection,
    Manifest,
    Range,
    Resource,
}

impl BehaviorScope {
    pub fn name(self) -> &'static str {
        match self {
            Self::Canvas => "Canvas",
            Self::Collection => "Collection",
            Self::Manifest => "Manifest",
            Self::Range => "Range",
            Self::Resource => "Resource",
        }
    }

    pub fn vocabulary(self) -> &'static [Behavior] {
        use Behavior::*;
        match self {
            Self::Canvas => &[AutoAdvance, NoAutoAdvance, FacingPages, NonPaged],
            Self::Collection => &[
                AutoAdvance,
                NoAutoAdvance,
                Repeat,
                NoRepeat,
                Unordered,
                Individuals,
                Continuous,
                Paged,
                MultiPart,
                Together,
            ],
            Self::Manifest => &[
                AutoAdvance,
                NoAutoAdvance,
                Repeat,
                NoRepeat,
                Unordered,
                Individuals,
                Continuous,
                Paged,
            ],
            Self::Range => &[
                AutoAdvance,
                NoAutoAdvance,
                Unordered,
                Individuals,
                Continuous,
                Paged,
                NoNav,
                ThumbnailNav,
                Sequence,
            ],
            Self::Resource => &[Hidden],
        }
    }

    /// Case-insensitive lookup within this scope's vocabulary.
    pub fn lookup(self, label: &str) -> Option<Behavior> {
        self.vocabulary()
            .iter()
            .copied()
            .find(|behavior| behavior.label().eq_ignore_ascii_case(label))
    }

    pub fn allows(self, behavior: Behavior) -> bool {
        self.vocabulary().contains(&behavior)
    }
}

impl fmt::Display for BehaviorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of behaviors valid for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorSet {
    scope: BehaviorScope,
    behaviors: Vec<Behavior>,
}

impl BehaviorSet {
    pub fn new(scope: BehaviorScope) -> Self {
        Self {
            scope,
            behaviors: Vec::new(),
        }
    }

    /// Resolves labels against the scope's vocabulary.
    ///
    /// All unknown labels are reported together; exclusivity is only
    /// checked once every label is known.
    pub fn from_labels<'a, I>(scope: BehaviorScope, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut behaviors = Vec::new();
        let mut invalid = Vec::new();
        for label in labels {
            match scope.lookup(label) {
                Some(behavior) => behaviors.push(behavior),
                None => invalid.push(label.to_string()),
            }
        }

        if !invalid.is_empty() {
            return Err(CodecError::InvalidEnumValue {
                field: "behavior",
                scope: scope.name().to_string(),
                values: invalid,
            });
        }

        check_disjoint(&behaviors)?;
        Ok(Self { scope, behaviors })
    }

    /// Decodes a `behavior` array.
    pub fn from_json(node: &Value, scope: BehaviorScope) -> Result<Self> {
        let items = expect_array(node, "behavior")?;
        let labels: Vec<String> = items
            .iter()
            .map(|item| leaf_text(item).unwrap_or_else(|| snippet(item)))
            .collect();
        Self::from_labels(scope, labels.iter().map(String::as_str))
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.behaviors
                .iter()
                .map(|behavior| Value::String(behavior.label().to_string()))
                .collect(),
        )
    }

    /// Appends one behavior, applying the same checks as decoding.
    pub fn push(&mut self, behavior: Behavior) -> Result<&mut Self> {
        if !self.scope.allows(behavior) {
            return Err(CodecError::invalid_value(
                "behavior",
                self.scope.name(),
                behavior.label(),
            ));
        }
        if let Some(existing) = self
            .behaviors
            .iter()
            .find(|existing| behavior.disjoint_with().contains(*existing))
        {
            return Err(CodecError::MutualExclusionViolation {
                first: existing.label().to_string(),
                second: behavior.label().to_string(),
            });
        }
        self.behaviors.push(behavior);
        Ok(self)
    }

    pub fn scope(&self) -> BehaviorScope {
        self.scope
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    pub fn contains(&self, behavior: Behavior) -> bool {
        self.behaviors.contains(&behavior)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

/// Fails on the first pair of mutually exclusive behaviors, in input order.
fn check_disjoint(behaviors: &[Behavior]) -> Result<()> {
    let mut seen: FxHashSet<Behavior> = FxHashSet::default();
    for behavior in behaviors {
        if let Some(earlier) = behavior
            .disjoint_with()
            .iter()
            .find(|other| seen.contains(*other))
        {
            return Err(CodecError::MutualExclusionViolation {
                first: earlier.label().to_string(),
                second: behavior.label().to_string(),
            });
        }
        seen.insert(*behavior);
    }
    Ok(())
}
