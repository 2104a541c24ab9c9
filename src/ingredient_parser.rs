//! # Ingredient Parser
//!
//! This module turns a meal's free-form ingredient text into structured
//! quantities. Source text is frequently malformed, so parsing never fails:
//! items that cannot be split are dropped and quantities that cannot be
//! evaluated become descriptive.
//!
//! ## Features
//!
//! - Split comma-separated `"name - quantity"` items
//! - Extract numeric part, unit and trailing annotation from a quantity
//! - Handle fractions (1/2) and fraction glyphs (¼ ½ ¾)
//! - Keep non-numeric quantities ("to taste", "a pinch") as descriptors
//!
//! ## Usage
//!
//! ```rust
//! use mealplan::ingredient_parser::parse_meal_ingredients;
//!
//! let parsed = parse_meal_ingredients("Flour - 1/2 cup, Salt - a pinch");
//!
//! assert_eq!(parsed.len(), 2);
//! assert_eq!(parsed[0].aggregation_key(), "Flour (cup)");
//! assert_eq!(parsed[1].aggregation_key(), "Salt (a pinch)");
//! ```

use log::{debug, trace};

use crate::fraction_eval::evaluate;
use crate::ingredient_model::{IngredientLine, ParsedQuantity};
use crate::measurement_patterns::QUANTITY_REGEX;
use crate::unit_normalizer::normalize_unit;

/// Separator between ingredient items
const ITEM_SEPARATOR: char = ',';

/// Separator between name and quantity inside an item
const NAME_QUANTITY_SEPARATOR: &str = " - ";

/// Pieces of a quantity expression that matched the quantity pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityMatch<'a> {
    /// Leading digits, dots, slashes and fraction glyphs
    pub numeric_part: &'a str,
    /// Unit word as written, if any
    pub unit_part: Option<&'a str>,
    /// Trailing parenthesized remark with its parentheses, trimmed
    pub annotation_part: Option<&'a str>,
}

/// Split a meal's ingredient string into name/quantity lines.
///
/// Items that do not split into exactly two parts are dropped. Trailing empty
/// parts are discarded before counting, so `"Egg - "` is dropped as well.
pub fn split_ingredient_lines(ingredients: &str) -> Vec<IngredientLine> {
    let mut lines = Vec::new();

    for item in ingredients.split(ITEM_SEPARATOR) {
        let mut parts: Vec<&str> = item.split(NAME_QUANTITY_SEPARATOR).collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        if parts.len() != 2 {
            if !item.trim().is_empty() {
                debug!("Dropping malformed ingredient item: '{}'", item.trim());
            }
            continue;
        }

        lines.push(IngredientLine {
            name: parts[0].trim().to_string(),
            quantity: parts[1].trim().to_string(),
        });
    }

    lines
}

/// Match a quantity expression against the quantity pattern.
///
/// Returns `None` when the expression is not of the form
/// `<number> [unit] [(annotation)]`.
pub fn match_quantity(expression: &str) -> Option<QuantityMatch<'_>> {
    let captures = QUANTITY_REGEX.captures(expression)?;

    Some(QuantityMatch {
        numeric_part: captures.get(1)?.as_str(),
        unit_part: captures.get(2).map(|m| m.as_str()),
        annotation_part: captures.get(3).map(|m| m.as_str().trim()),
    })
}

/// Parse one ingredient line into a typed quantity.
///
/// Expressions that do not match the quantity pattern, or whose numeric part
/// cannot be evaluated, become descriptive with the expression kept as is.
pub fn parse_ingredient_line(line: &IngredientLine) -> ParsedQuantity {
    let Some(matched) = match_quantity(&line.quantity) else {
        trace!("No numeric quantity in '{}', keeping as descriptor", line.quantity);
        return ParsedQuantity::descriptive(&line.name, &line.quantity);
    };

    match evaluate(matched.numeric_part) {
        Ok(amount) => ParsedQuantity::numeric(
            &line.name,
            amount,
            &normalize_unit(matched.unit_part),
            matched.annotation_part.unwrap_or(""),
        ),
        Err(e) => {
            debug!(
                "Quantity '{}' for '{}' is not a number ({}), keeping as descriptor",
                line.quantity, line.name, e
            );
            ParsedQuantity::descriptive(&line.name, &line.quantity)
        }
    }
}

/// Split and parse every ingredient of a meal
pub fn parse_meal_ingredients(ingredients: &str) -> Vec<ParsedQuantity> {
    let parsed: Vec<ParsedQuantity> = split_ingredient_lines(ingredients)
        .iter()
        .map(parse_ingredient_line)
        .collect();

    debug!("Parsed {} ingredient lines", parsed.len());
    parsed
}
