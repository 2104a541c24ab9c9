//! # Aggregator
//!
//! Running totals for one shopping list request. Numeric lines are scaled and
//! summed per aggregation key; descriptive lines ("a pinch", "to taste") are
//! counted in multiplier units on a separate track. An aggregator is created
//! per request and handed to the formatter by value or reference, never shared.

use log::trace;
use std::collections::BTreeMap;

use crate::ingredient_model::{ParsedQuantity, QuantityValue};
use crate::ingredient_parser::parse_meal_ingredients;

/// Count of a descriptive entry together with the text it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveTally {
    /// Original quantity expression, e.g. "a pinch"
    pub descriptor: String,
    /// Sum of the multipliers of every occurrence
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingAggregator {
    totals: BTreeMap<String, f64>,
    counts: BTreeMap<String, DescriptiveTally>,
}

impl ShoppingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed line scaled by `multiplier`
    pub fn add_quantity(&mut self, parsed: &ParsedQuantity, multiplier: u32) {
        let key = parsed.aggregation_key();
        match &parsed.value {
            QuantityValue::Numeric(amount) => {
                self.add_scaled(key, amount * f64::from(multiplier));
            }
            QuantityValue::Descriptive(expression) => {
                let tally = self.counts.entry(key).or_insert_with(|| DescriptiveTally {
                    descriptor: expression.clone(),
                    count: 0,
                });
                tally.count = tally.count.saturating_add(multiplier);
            }
        }
    }

    /// Add an already scaled amount. The running total never drops below zero.
    pub fn add_scaled(&mut self, key: String, scaled: f64) {
        let total = self.totals.entry(key).or_insert(0.0);
        *total = (*total + scaled).max(0.0);
        trace!("Running total now {}", total);
    }

    /// Parse a meal's ingredient string and add every line.
    ///
    /// Returns the number of lines that were added.
    pub fn add_meal(&mut self, ingredients: &str, multiplier: u32) -> usize {
        let parsed = parse_meal_ingredients(ingredients);
        for quantity in &parsed {
            self.add_quantity(quantity, multiplier);
        }
        parsed.len()
    }

    /// Fold another aggregator into this one
    pub fn merge(&mut self, other: ShoppingAggregator) {
        for (key, amount) in other.totals {
            self.add_scaled(key, amount);
        }
        for (key, tally) in other.counts {
            self.counts
                .entry(key)
                .and_modify(|existing| existing.count = existing.count.saturating_add(tally.count))
                .or_insert(tally);
        }
    }

    /// Scaled numeric totals by aggregation key
    pub fn totals(&self) -> &BTreeMap<String, f64> {
        &self.totals
    }

    /// Descriptive tallies by aggregation key
    pub fn counts(&self) -> &BTreeMap<String, DescriptiveTally> {
        &self.counts
    }

    /// Number of distinct keys across both tracks
    pub fn len(&self) -> usize {
        self.totals.len() + self.counts.len()
    }

    /// True when no usable ingredient line has been added
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty() && self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_keys_sum() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_meal("Sugar - 100 g", 1);
        aggregator.add_meal("Sugar - 100 grams", 1);

        assert_eq!(aggregator.totals().get("Sugar (g)"), Some(&200.0));
        assert_eq!(aggregator.len(), 1);
    }

    #[test]
    fn test_multiplier_scales_numeric_values() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_meal("Rice - 3 cup", 4);

        assert_eq!(aggregator.totals().get("Rice (cup)"), Some(&12.0));
    }

    #[test]
    fn test_different_units_never_merge() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_meal("Flour - 500 g, Flour - 1 kg", 1);

        assert_eq!(aggregator.totals().get("Flour (g)"), Some(&500.0));
        assert_eq!(aggregator.totals().get("Flour (kg)"), Some(&1.0));
    }

    #[test]
    fn test_total_floors_at_zero() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_scaled("Butter (g)".to_string(), 50.0);
        aggregator.add_scaled("Butter (g)".to_string(), -80.0);
        assert_eq!(aggregator.totals().get("Butter (g)"), Some(&0.0));

        aggregator.add_scaled("Butter (g)".to_string(), 20.0);
        assert_eq!(aggregator.totals().get("Butter (g)"), Some(&20.0));
    }

    #[test]
    fn test_descriptive_counts_in_multiplier_units() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_meal("Salt - a pinch", 2);
        aggregator.add_meal("Salt - a pinch", 3);

        let tally = aggregator.counts().get("Salt (a pinch)").unwrap();
        assert_eq!(tally.count, 5);
        assert_eq!(tally.descriptor, "a pinch");
        assert!(aggregator.totals().is_empty());
    }

    #[test]
    fn test_numeric_and_descriptive_tracks_stay_apart() {
        let mut aggregator = ShoppingAggregator::new();
        aggregator.add_meal("Pepper - 1 tsp, Pepper - to taste", 1);

        assert_eq!(aggregator.totals().get("Pepper (tsp)"), Some(&1.0));
        assert_eq!(aggregator.counts().get("Pepper (to taste)").unwrap().count, 1);
        assert_eq!(aggregator.len(), 2);
    }

    #[test]
    fn test_empty_meal_adds_nothing() {
        let mut aggregator = ShoppingAggregator::new();
        assert_eq!(aggregator.add_meal("", 1), 0);
        assert_eq!(aggregator.add_meal("no separator here", 1), 0);
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut monday = ShoppingAggregator::new();
        monday.add_meal("Milk - 1 l, Salt - a pinch", 1);
        let mut tuesday = ShoppingAggregator::new();
        tuesday.add_meal("Milk - 2 liters, Salt - a pinch", 2);

        monday.merge(tuesday);
        assert_eq!(monday.totals().get("Milk (l)"), Some(&5.0));
        assert_eq!(monday.counts().get("Salt (a pinch)").unwrap().count, 3);
    }
}
