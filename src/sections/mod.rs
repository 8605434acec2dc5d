//! Password evaluation sections
//!
//! Each section checks one character-class predicate.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, SPECIAL_CHARS,
};

/// Result type for section evaluation functions.
/// - `Some(hint)` - Section failed, with the hint to show
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

/// A named section, as run by the evaluator.
pub type Section = (&'static str, fn(&secrecy::SecretString) -> SectionResult);

/// All sections in declaration order; hints are reported in this order.
pub const SECTIONS: [Section; 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];
