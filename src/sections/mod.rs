//! Password evaluation sections
//!
//! Each section checks one group of the five password criteria.

mod classes;
mod length;

pub use classes::scan_character_classes;
pub use length::length_section;

/// Outcome of a single criterion check.
/// - `Some(reason)` - criterion missed, with a user-facing reason
/// - `None` - criterion satisfied
pub type CriterionOutcome = Option<String>;
