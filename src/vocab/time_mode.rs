//! Time modes for mapping a body's duration onto its target.

use std::fmt;

/// How a time-based resource fits a shorter or longer canvas duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeMode {
    Trim,
    Scale,
    Loop,
}

impl TimeMode {
    pub const ALL: [TimeMode; 3] = [Self::Trim, Self::Scale, Self::Loop];

    pub fn label(self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::Scale => "scale",
            Self::Loop => "loop",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
