//! # Formatter
//!
//! Renders aggregation state into the shapes returned to callers: the flat
//! whole-plan [`ShoppingList`] and the per-day [`MealBreakdownList`].

use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregator::{DescriptiveTally, ShoppingAggregator};

/// Consolidated list for a whole plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Aggregation key -> formatted quantity
    pub ingredients: BTreeMap<String, String>,
    /// Days whose meal could not be resolved, Monday first
    pub skipped_days: Vec<String>,
}

/// Ingredients of the meal planned on one day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBreakdown {
    pub day: String,
    pub meal_name: String,
    pub ingredients: BTreeMap<String, String>,
    pub scaling_factor: u32,
}

/// Per-day presentation of a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBreakdownList {
    pub meals: Vec<MealBreakdown>,
    pub skipped_days: Vec<String>,
}

/// Two decimal places, e.g. `2.5` -> `"2.50"`
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// `"<count>x <descriptor>"`, e.g. `"2x a pinch"`
pub fn format_tally(tally: &DescriptiveTally) -> String {
    format!("{}x {}", tally.count, tally.descriptor)
}

/// Render every entry of an aggregator.
///
/// Descriptive entries are written after numeric ones and replace a numeric
/// entry that happens to share the same key.
pub fn format_entries(aggregator: &ShoppingAggregator) -> BTreeMap<String, String> {
    let mut rendered: BTreeMap<String, String> = aggregator
        .totals()
        .iter()
        .map(|(key, amount)| (key.clone(), format_amount(*amount)))
        .collect();

    for (key, tally) in aggregator.counts() {
        if let Some(previous) = rendered.insert(key.clone(), format_tally(tally)) {
            warn!(
                "Descriptive entry '{}' replaced numeric total {}",
                key, previous
            );
        }
    }

    rendered
}

/// Build the flat shopping list
pub fn format_shopping_list(
    aggregator: &ShoppingAggregator,
    skipped_days: Vec<String>,
) -> ShoppingList {
    ShoppingList {
        ingredients: format_entries(aggregator),
        skipped_days,
    }
}
