//! # Error Types Module
//!
//! Error types for quantity evaluation, collaborator lookups and shopping list
//! generation. Per-line and per-meal problems are recovered where they occur;
//! only the variants of [`ShoppingListError`] ever reach a caller.

use thiserror::Error;

use crate::ingredient_model::{MealId, PlanId};

/// Failure to turn a numeric part into a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// A fraction that does not split into exactly two tokens
    #[error("invalid fraction format: {0}")]
    MalformedFraction(String),
    /// A token that is not a floating-point literal
    #[error("invalid number format: {0}")]
    InvalidNumber(String),
    /// Infinite or NaN result, e.g. a zero denominator
    #[error("quantity is not a finite number: {0}")]
    NotFinite(String),
}

/// Errors raised by plan and meal collaborators
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid weekly plan {plan_id}: {message}")]
    InvalidPlan { plan_id: PlanId, message: String },

    #[error("a plan for week {0} already exists")]
    DuplicateWeek(u32),

    #[error("meal {0} could not be loaded: {1}")]
    MealUnavailable(MealId, String),
}

/// Whole-request failures of shopping list generation
#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("plan with ID {0} not found")]
    PlanNotFound(PlanId),

    #[error("no valid meals found in weekly plan {0}")]
    NoValidMeals(PlanId),

    #[error("plan lookup failed: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds_are_distinguishable() {
        let not_found = ShoppingListError::PlanNotFound(7);
        let no_meals = ShoppingListError::NoValidMeals(7);

        assert_eq!(not_found.to_string(), "plan with ID 7 not found");
        assert_eq!(no_meals.to_string(), "no valid meals found in weekly plan 7");
        assert!(matches!(not_found, ShoppingListError::PlanNotFound(7)));
        assert!(matches!(no_meals, ShoppingListError::NoValidMeals(7)));
    }

    #[test]
    fn test_store_error_converts() {
        let err: ShoppingListError = StoreError::DuplicateWeek(3).into();
        assert!(matches!(err, ShoppingListError::Store(StoreError::DuplicateWeek(3))));
    }
}
