//! Password evaluation sections
//!
//! Each section checks one character-class criterion.

mod length;
mod symbol;
mod variety;

pub use length::length_section;
pub use symbol::{symbol_section, PUNCTUATION};
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
