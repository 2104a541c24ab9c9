//! # Unit Normalizer
//!
//! Maps unit words to canonical abbreviations through a case-insensitive
//! lookup table. Units outside the table are kept, lower-cased and trimmed, so
//! that "Slices" and "slices" still merge.

use lazy_static::lazy_static;
use log::trace;
use std::collections::HashMap;

lazy_static! {
    /// Synonym -> canonical unit
    static ref UNIT_MAPPINGS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();

        // Volume units
        map.insert("tsp", "tsp");
        map.insert("teaspoon", "tsp");
        map.insert("teaspoons", "tsp");
        map.insert("tbsp", "tbsp");
        map.insert("tablespoon", "tbsp");
        map.insert("tablespoons", "tbsp");
        map.insert("cup", "cup");
        map.insert("cups", "cup");
        map.insert("ml", "ml");
        map.insert("milliliter", "ml");
        map.insert("milliliters", "ml");
        map.insert("l", "l");
        map.insert("liter", "l");
        map.insert("liters", "l");
        map.insert("litre", "l");
        map.insert("litres", "l");

        // Weight units
        map.insert("g", "g");
        map.insert("gram", "g");
        map.insert("grams", "g");
        map.insert("kg", "kg");
        map.insert("kilogram", "kg");
        map.insert("kilograms", "kg");
        map.insert("oz", "oz");
        map.insert("ounce", "oz");
        map.insert("ounces", "oz");
        map.insert("lb", "lb");
        map.insert("lbs", "lb");
        map.insert("pound", "lb");
        map.insert("pounds", "lb");

        map
    };
}

/// Normalize a matched unit token. `None` yields an empty string.
///
/// # Examples
///
/// ```rust
/// use mealplan::unit_normalizer::normalize_unit;
///
/// assert_eq!(normalize_unit(Some("Tablespoon")), "tbsp");
/// assert_eq!(normalize_unit(Some("Slices")), "slices");
/// assert_eq!(normalize_unit(None), "");
/// ```
pub fn normalize_unit(unit: Option<&str>) -> String {
    let Some(unit) = unit else {
        return String::new();
    };
    let unit = unit.trim().to_lowercase();

    match UNIT_MAPPINGS.get(unit.as_str()) {
        Some(canonical) => {
            trace!("Normalized unit '{}' -> '{}'", unit, canonical);
            canonical.to_string()
        }
        None => unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_synonyms() {
        let cases = [
            ("tsp", "tsp"),
            ("teaspoon", "tsp"),
            ("tbsp", "tbsp"),
            ("tablespoon", "tbsp"),
            ("g", "g"),
            ("gram", "g"),
            ("grams", "g"),
            ("kg", "kg"),
            ("kilograms", "kg"),
            ("ml", "ml"),
            ("milliliter", "ml"),
            ("oz", "oz"),
            ("ounces", "oz"),
            ("cups", "cup"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_unit(Some(input)), expected, "unit '{}'", input);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_unit(Some("TSP")), "tsp");
        assert_eq!(normalize_unit(Some("Grams")), "g");
        assert_eq!(normalize_unit(Some("  KG ")), "kg");
    }

    #[test]
    fn test_unknown_units_pass_through() {
        assert_eq!(normalize_unit(Some("Cloves")), "cloves");
        assert_eq!(normalize_unit(Some(" bunch ")), "bunch");
    }

    #[test]
    fn test_absent_unit() {
        assert_eq!(normalize_unit(None), "");
    }
}
