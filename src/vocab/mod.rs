//! Closed vocabularies: purposes, behaviors, time modes.

mod behavior;
mod purpose;
mod time_mode;

pub use behavior::{Behavior, BehaviorScope, BehaviorSet};
pub use purpose::{Motivation, Purpose};
pub use time_mode::TimeMode;
