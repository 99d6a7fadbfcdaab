//! Annotation purposes and motivations.

use std::fmt;

/// The closed set of W3C annotation motivations plus the IIIF extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Assessing,
    Bookmarking,
    Classifying,
    Commenting,
    Describing,
    Editing,
    Highlighting,
    Identifying,
    Linking,
    Moderating,
    Questioning,
    Replying,
    Tagging,
    Painting,
    Supplementing,
}

impl Purpose {
    pub const ALL: [Purpose; 15] = [
        Self::Assessing,
        Self::Bookmarking,
        Self::Classifying,
        Self::Commenting,
        Self::Describing,
        Self::Editing,
        Self::Highlighting,
        Self::Identifying,
        Self::Linking,
        Self::Moderating,
        Self::Questioning,
        Self::Replying,
        Self::Tagging,
        Self::Painting,
        Self::Supplementing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Assessing => "assessing",
            Self::Bookmarking => "bookmarking",
            Self::Classifying => "classifying",
            Self::Commenting => "commenting",
            Self::Describing => "describing",
            Self::Editing => "editing",
            Self::Highlighting => "highlighting",
            Self::Identifying => "identifying",
            Self::Linking => "linking",
            Self::Moderating => "moderating",
            Self::Questioning => "questioning",
            Self::Replying => "replying",
            Self::Tagging => "tagging",
            Self::Painting => "painting",
            Self::Supplementing => "supplementing",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an annotation exists: a known purpose or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Motivation {
    Purpose(Purpose),
    Other(String),
}

impl Motivation {
    /// Normalizes known purposes to their canonical label.
    pub fn parse(label: &str) -> Self {
        match Purpose::from_label(label) {
            Some(purpose) => Self::Purpose(purpose),
            None => Self::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Purpose(purpose) => purpose.label(),
            Self::Other(text) => text,
        }
    }

    pub fn purpose(&self) -> Option<Purpose> {
        match self {
            Self::Purpose(purpose) => Some(*purpose),
            Self::Other(_) => None,
        }
    }
}

impl From<Purpose> for Motivation {
    fn from(purpose: Purpose) -> Self {
        Self::Purpose(purpose)
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
