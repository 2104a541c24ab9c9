//! # Fraction Evaluator
//!
//! Converts the numeric part of a quantity expression ("2", "0.5", "1/2", "¾")
//! into an `f64`.

use log::trace;

use crate::errors::QuantityError;
use crate::measurement_patterns::FRACTION_GLYPHS;

/// Replace ¼ ½ ¾ with their slash spelling
pub fn expand_fraction_glyphs(input: &str) -> String {
    FRACTION_GLYPHS
        .iter()
        .fold(input.to_string(), |text, (glyph, spelled)| text.replace(glyph, spelled))
}

/// Evaluate a numeric part.
///
/// Glyphs are substituted first. A string containing `/` must split into
/// exactly two numeric tokens and evaluates to their quotient; anything else
/// is parsed as a float literal. Non-finite results are rejected.
///
/// # Examples
///
/// ```rust
/// use mealplan::fraction_eval::evaluate;
///
/// assert_eq!(evaluate("½").unwrap(), 0.5);
/// assert_eq!(evaluate("3/4").unwrap(), 0.75);
/// assert_eq!(evaluate("2.5").unwrap(), 2.5);
/// assert!(evaluate("1/2/3").is_err());
/// ```
pub fn evaluate(numeric_part: &str) -> Result<f64, QuantityError> {
    let expanded = expand_fraction_glyphs(numeric_part);

    let value = if expanded.contains('/') {
        let parts: Vec<&str> = expanded.split('/').collect();
        if parts.len() != 2 {
            return Err(QuantityError::MalformedFraction(numeric_part.to_string()));
        }
        let numerator = parse_float(parts[0])?;
        let denominator = parse_float(parts[1])?;
        numerator / denominator
    } else {
        parse_float(&expanded)?
    };

    if !value.is_finite() {
        return Err(QuantityError::NotFinite(numeric_part.to_string()));
    }

    trace!("Evaluated numeric part '{}' -> {}", numeric_part, value);
    Ok(value)
}

fn parse_float(token: &str) -> Result<f64, QuantityError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| QuantityError::InvalidNumber(token.to_string()))
}
