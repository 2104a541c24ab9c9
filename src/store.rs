//! # Plan and Meal Store
//!
//! The shopping list pipeline reads plans and meals through the
//! [`MealPlanStore`] trait. Persistence lives elsewhere; this module provides
//! an in-memory implementation that can be filled from a JSON fixture file.
//!
//! ## Fixture format
//!
//! ```json
//! {
//!   "meals": [{ "id": 1, "name": "Pancakes", "ingredients": "Egg - 2 (Large), Flour - 1/2 cup" }],
//!   "plans": [{ "id": 1, "week": 12, "meals": { "Monday": 1 }, "portionSizes": { "Monday": 2 } }]
//! }
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::StoreError;
use crate::ingredient_model::{Meal, MealId, PlanId, WeeklyPlan};

/// Read-only lookups the shopping list service depends on
pub trait MealPlanStore {
    /// Fetch a plan, `Ok(None)` when the id does not exist
    fn lookup_plan(&self, plan_id: PlanId) -> Result<Option<WeeklyPlan>, StoreError>;

    /// Fetch a meal, `Ok(None)` when the id does not exist
    fn lookup_meal(&self, meal_id: MealId) -> Result<Option<Meal>, StoreError>;

    /// Every plan, in no particular order
    fn all_plans(&self) -> Result<Vec<WeeklyPlan>, StoreError>;
}

/// Contents of a JSON fixture file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreFixture {
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub plans: Vec<WeeklyPlan>,
}

/// Check a plan before it is stored.
///
/// Every day with a portion size must also have a meal, and portion sizes
/// start at 1.
pub fn validate_plan(plan: &WeeklyPlan) -> Result<(), StoreError> {
    for (day, portion) in &plan.portion_sizes {
        if !plan.meals.contains_key(day) {
            return Err(StoreError::InvalidPlan {
                plan_id: plan.id,
                message: format!("portion size specified for {day} without a meal"),
            });
        }
        if *portion == 0 {
            return Err(StoreError::InvalidPlan {
                plan_id: plan.id,
                message: format!("portion size for {day} must be at least 1"),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    plans: HashMap<PlanId, WeeklyPlan>,
    meals: HashMap<MealId, Meal>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from fixture contents, validating every plan
    pub fn from_fixture(fixture: StoreFixture) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for meal in fixture.meals {
            store.insert_meal(meal);
        }
        for plan in fixture.plans {
            store.insert_plan(plan)?;
        }
        Ok(store)
    }

    /// Add or replace a meal
    pub fn insert_meal(&mut self, meal: Meal) {
        debug!("Storing meal {} ({})", meal.id, meal.name);
        self.meals.insert(meal.id, meal);
    }

    /// Add or replace a plan. One plan per week.
    pub fn insert_plan(&mut self, plan: WeeklyPlan) -> Result<(), StoreError> {
        validate_plan(&plan)?;
        if self
            .plans
            .values()
            .any(|existing| existing.week == plan.week && existing.id != plan.id)
        {
            return Err(StoreError::DuplicateWeek(plan.week));
        }

        debug!("Storing plan {} for week {}", plan.id, plan.week);
        self.plans.insert(plan.id, plan);
        Ok(())
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }
}

impl MealPlanStore for InMemoryStore {
    fn lookup_plan(&self, plan_id: PlanId) -> Result<Option<WeeklyPlan>, StoreError> {
        Ok(self.plans.get(&plan_id).cloned())
    }

    fn lookup_meal(&self, meal_id: MealId) -> Result<Option<Meal>, StoreError> {
        Ok(self.meals.get(&meal_id).cloned())
    }

    fn all_plans(&self) -> Result<Vec<WeeklyPlan>, StoreError> {
        Ok(self.plans.values().cloned().collect())
    }
}

/// Parse fixture JSON into a validated store
pub fn parse_store(json: &str) -> Result<InMemoryStore, StoreError> {
    let fixture: StoreFixture = serde_json::from_str(json)?;
    InMemoryStore::from_fixture(fixture)
}

/// Load a JSON fixture file into a validated store
pub fn load_store(path: impl AsRef<Path>) -> Result<InMemoryStore, StoreError> {
    let path = path.as_ref();
    info!("Loading meal plan store from: {}", path.display());

    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let store = parse_store(&json)?;

    info!(
        "Loaded {} meals and {} plans",
        store.meal_count(),
        store.plan_count()
    );
    Ok(store)
}
