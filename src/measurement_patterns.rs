//! # Measurement Patterns Module
//!
//! This module contains the regex pattern and glyph table used for quantity
//! expression matching.

use lazy_static::lazy_static;
use regex::Regex;

/// Anchored quantity expression pattern.
///
/// Groups: 1 = numeric part (digits, `.`, `/`, ¼ ½ ¾), 2 = optional unit word,
/// 3 = optional trailing parenthesized annotation.
pub const QUANTITY_PATTERN: &str = r"(?i)^([0-9./¼½¾]+)\s*([a-zA-Z]+)?\s*(\(.*\))?$";

/// Fraction glyphs and their slash spelling
pub const FRACTION_GLYPHS: [(&str, &str); 3] = [("¼", "1/4"), ("½", "1/2"), ("¾", "3/4")];

// Lazy static regex for the quantity pattern to avoid recompilation
lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity expression pattern should be valid");
}
