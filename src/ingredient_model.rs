//! # Ingredient and Plan Data Model
//!
//! This module defines the data structures flowing through the shopping list
//! pipeline: the transient ingredient lines parsed out of a meal, their typed
//! quantities, and the read-only plan and meal records supplied by the
//! collaborators.
//!
//! ## Core Concepts
//!
//! - **IngredientLine**: one `"<name> - <quantity>"` item of a meal
//! - **ParsedQuantity**: name, numeric or descriptive value, unit and annotation
//! - **Aggregation key**: the string identity used to merge lines across meals
//! - **WeeklyPlan / Meal**: collaborator data, consumed read-only
//!
//! ## Usage
//!
//! ```rust
//! use mealplan::ingredient_model::{ParsedQuantity, QuantityValue};
//!
//! let egg = ParsedQuantity::numeric("Egg", 2.0, "", "(Large)");
//! assert_eq!(egg.aggregation_key(), "Egg (Large)");
//!
//! let salt = ParsedQuantity::descriptive("Salt", "a pinch");
//! assert_eq!(salt.aggregation_key(), "Salt (a pinch)");
//! assert!(matches!(salt.value, QuantityValue::Descriptive(_)));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::day_order::sort_days;

/// Identifier of a weekly plan
pub type PlanId = u64;

/// Identifier of a meal
pub type MealId = u64;

/// One `"<name> - <quantity-expression>"` item, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    /// Ingredient name (e.g. "Flour")
    pub name: String,
    /// Raw quantity expression (e.g. "1/2 cup", "a pinch")
    pub quantity: String,
}

/// The value part of a parsed ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuantityValue {
    /// Finite, non-negative amount before scaling
    Numeric(f64),
    /// Quantity text that is not a number, kept as written (e.g. "to taste")
    Descriptive(String),
}

/// A fully parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    /// Ingredient name as written in the meal
    pub name: String,
    /// Numeric amount or descriptor
    pub value: QuantityValue,
    /// Canonical unit, empty when absent
    pub unit: String,
    /// Trailing parenthesized remark including its parentheses, empty when absent
    pub annotation: String,
}

impl ParsedQuantity {
    /// Create a numeric quantity
    pub fn numeric(name: &str, amount: f64, unit: &str, annotation: &str) -> Self {
        Self {
            name: name.to_string(),
            value: QuantityValue::Numeric(amount),
            unit: unit.to_string(),
            annotation: annotation.to_string(),
        }
    }

    /// Create a descriptive quantity from the original quantity expression
    pub fn descriptive(name: &str, expression: &str) -> Self {
        Self {
            name: name.to_string(),
            value: QuantityValue::Descriptive(expression.to_string()),
            unit: String::new(),
            annotation: String::new(),
        }
    }

    /// Whether this line is summed rather than counted
    pub fn is_numeric(&self) -> bool {
        matches!(self.value, QuantityValue::Numeric(_))
    }

    /// Build the key two lines must share to be merged.
    ///
    /// Numeric lines: `name`, ` (unit)` if any, then ` annotation` if any.
    /// Descriptive lines: `name (expression)`.
    pub fn aggregation_key(&self) -> String {
        match &self.value {
            QuantityValue::Descriptive(expression) => format!("{} ({})", self.name, expression),
            QuantityValue::Numeric(_) => {
                let mut key = self.name.clone();
                if !self.unit.is_empty() {
                    key.push_str(" (");
                    key.push_str(&self.unit);
                    key.push(')');
                }
                if !self.annotation.is_empty() {
                    key.push(' ');
                    key.push_str(&self.annotation);
                }
                key
            }
        }
    }
}

impl fmt::Display for ParsedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            QuantityValue::Numeric(amount) => {
                write!(f, "{}: {}", self.name, amount)?;
                if !self.unit.is_empty() {
                    write!(f, " {}", self.unit)?;
                }
                if !self.annotation.is_empty() {
                    write!(f, " {}", self.annotation)?;
                }
                Ok(())
            }
            QuantityValue::Descriptive(expression) => write!(f, "{}: {}", self.name, expression),
        }
    }
}

/// A meal as supplied by the meal collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    /// Comma-separated `"name - quantity"` items
    #[serde(default)]
    pub ingredients: String,
}

/// A week of meals keyed by English weekday name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: PlanId,
    pub week: u32,
    /// Day name -> meal id
    #[serde(default)]
    pub meals: HashMap<String, MealId>,
    /// Day name -> portion multiplier
    #[serde(default)]
    pub portion_sizes: HashMap<String, u32>,
}

impl WeeklyPlan {
    /// Day/meal pairs in Monday-first order
    pub fn ordered_meals(&self) -> Vec<(String, MealId)> {
        sort_days(self.meals.iter().map(|(day, id)| (day.clone(), *id)))
    }

    /// Portion multiplier for a day, 1 when the plan has none
    pub fn portion_size(&self, day: &str) -> u32 {
        self.portion_sizes.get(day).copied().unwrap_or(1)
    }
}

/// How quantities are scaled before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Each day uses the plan's portion size for that day
    #[default]
    PortionSizes,
    /// Every day uses the same request-level multiplier
    Uniform(u32),
}

impl Scaling {
    /// Multiplier to apply to the meal planned on `day`
    pub fn factor_for(&self, plan: &WeeklyPlan, day: &str) -> u32 {
        match self {
            Scaling::PortionSizes => plan.portion_size(day),
            Scaling::Uniform(multiplier) => *multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> WeeklyPlan {
        WeeklyPlan {
            id: 1,
            week: 12,
            meals: HashMap::from([
                ("Sunday".to_string(), 3),
                ("Monday".to_string(), 1),
                ("Wednesday".to_string(), 2),
            ]),
            portion_sizes: HashMap::from([("Wednesday".to_string(), 4)]),
        }
    }

    #[test]
    fn test_numeric_key_with_unit() {
        let flour = ParsedQuantity::numeric("Flour", 0.5, "cup", "");
        assert_eq!(flour.aggregation_key(), "Flour (cup)");
    }

    #[test]
    fn test_numeric_key_with_annotation_only() {
        let egg = ParsedQuantity::numeric("Egg", 2.0, "", "(Large)");
        assert_eq!(egg.aggregation_key(), "Egg (Large)");
    }

    #[test]
    fn test_numeric_key_with_unit_and_annotation() {
        let sugar = ParsedQuantity::numeric("Sugar", 1.5, "cups", "(packed)");
        assert_eq!(sugar.aggregation_key(), "Sugar (cups) (packed)");
    }

    #[test]
    fn test_bare_numeric_key() {
        let bread = ParsedQuantity::numeric("Bread", 1.0, "", "");
        assert_eq!(bread.aggregation_key(), "Bread");
    }

    #[test]
    fn test_descriptive_key() {
        let salt = ParsedQuantity::descriptive("Salt", "to taste");
        assert_eq!(salt.aggregation_key(), "Salt (to taste)");
        assert!(!salt.is_numeric());
    }

    #[test]
    fn test_display() {
        let flour = ParsedQuantity::numeric("Flour", 0.5, "cup", "(sifted)");
        assert_eq!(flour.to_string(), "Flour: 0.5 cup (sifted)");
        let salt = ParsedQuantity::descriptive("Salt", "a pinch");
        assert_eq!(salt.to_string(), "Salt: a pinch");
    }

    #[test]
    fn test_ordered_meals_monday_first() {
        let days: Vec<String> = plan().ordered_meals().into_iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec!["Monday", "Wednesday", "Sunday"]);
    }

    #[test]
    fn test_scaling_factor() {
        let plan = plan();
        assert_eq!(Scaling::PortionSizes.factor_for(&plan, "Wednesday"), 4);
        assert_eq!(Scaling::PortionSizes.factor_for(&plan, "Monday"), 1);
        assert_eq!(Scaling::Uniform(3).factor_for(&plan, "Wednesday"), 3);
    }

    #[test]
    fn test_plan_json_is_camel_case() {
        let json = r#"{"id": 5, "week": 2, "meals": {"Friday": 9}, "portionSizes": {"Friday": 2}}"#;
        let plan: WeeklyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.meals.get("Friday"), Some(&9));
        assert_eq!(plan.portion_size("Friday"), 2);
    }
}
