//! # Shopping List Service
//!
//! Request pipeline turning a weekly plan into a shopping list:
//!
//! 1. look up the plan (`PlanNotFound` if it does not exist)
//! 2. walk its days Monday first and look up each meal
//! 3. parse and scale each meal's ingredients into a meal-local aggregator
//! 4. merge into the request total, or record the day as skipped
//! 5. fail with `NoValidMeals` if nothing usable was found, otherwise format
//!
//! A failing day never affects the other days. All state is local to one call.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregator::ShoppingAggregator;
use crate::errors::ShoppingListError;
use crate::formatter::{format_entries, format_shopping_list, MealBreakdown, MealBreakdownList, ShoppingList};
use crate::ingredient_model::{Meal, MealId, PlanId, Scaling, WeeklyPlan};
use crate::store::MealPlanStore;

/// One day of a plan as shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedDay {
    pub day: String,
    pub meal_id: MealId,
    pub portion_size: u32,
}

/// A plan with its days in week order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub id: PlanId,
    pub week: u32,
    pub days: Vec<PlannedDay>,
}

impl From<&WeeklyPlan> for PlanSummary {
    fn from(plan: &WeeklyPlan) -> Self {
        let days = plan
            .ordered_meals()
            .into_iter()
            .map(|(day, meal_id)| PlannedDay {
                portion_size: plan.portion_size(&day),
                day,
                meal_id,
            })
            .collect();

        Self {
            id: plan.id,
            week: plan.week,
            days,
        }
    }
}

/// A day whose meal was found, with its multiplier
struct ResolvedDay {
    day: String,
    meal: Meal,
    factor: u32,
}

pub struct ShoppingListService<S: MealPlanStore> {
    store: S,
}

impl<S: MealPlanStore> ShoppingListService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consolidated shopping list for a whole plan
    pub fn generate_shopping_list(
        &self,
        plan_id: PlanId,
        scaling: Scaling,
    ) -> Result<ShoppingList, ShoppingListError> {
        let plan = self.plan(plan_id)?;
        let (resolved, skipped_days) = self.resolve_days(&plan, scaling);

        let mut total = ShoppingAggregator::new();
        for entry in &resolved {
            let mut meal_totals = ShoppingAggregator::new();
            let lines = meal_totals.add_meal(&entry.meal.ingredients, entry.factor);
            debug!(
                day = %entry.day,
                meal = %entry.meal.name,
                factor = entry.factor,
                lines,
                "aggregated meal"
            );
            total.merge(meal_totals);
        }

        if total.is_empty() {
            warn!(plan_id, skipped = skipped_days.len(), "no valid meals in plan");
            return Err(ShoppingListError::NoValidMeals(plan_id));
        }

        info!(
            plan_id,
            entries = total.len(),
            skipped = skipped_days.len(),
            "generated shopping list"
        );
        Ok(format_shopping_list(&total, skipped_days))
    }

    /// Ingredients per planned day, each meal aggregated on its own
    pub fn generate_meal_breakdown(
        &self,
        plan_id: PlanId,
        scaling: Scaling,
    ) -> Result<MealBreakdownList, ShoppingListError> {
        let plan = self.plan(plan_id)?;
        let (resolved, skipped_days) = self.resolve_days(&plan, scaling);

        let mut any_entries = false;
        let meals: Vec<MealBreakdown> = resolved
            .into_iter()
            .map(|entry| {
                let mut aggregator = ShoppingAggregator::new();
                aggregator.add_meal(&entry.meal.ingredients, entry.factor);
                any_entries |= !aggregator.is_empty();

                MealBreakdown {
                    day: entry.day,
                    meal_name: entry.meal.name,
                    ingredients: format_entries(&aggregator),
                    scaling_factor: entry.factor,
                }
            })
            .collect();

        if !any_entries {
            warn!(plan_id, skipped = skipped_days.len(), "no valid meals in plan");
            return Err(ShoppingListError::NoValidMeals(plan_id));
        }

        info!(plan_id, days = meals.len(), "generated meal breakdown");
        Ok(MealBreakdownList { meals, skipped_days })
    }

    /// A single plan with its days in week order
    pub fn weekly_plan(&self, plan_id: PlanId) -> Result<PlanSummary, ShoppingListError> {
        let plan = self.plan(plan_id)?;
        Ok(PlanSummary::from(&plan))
    }

    /// Every plan sorted by week
    pub fn weekly_plans(&self) -> Result<Vec<PlanSummary>, ShoppingListError> {
        let mut plans = self.store.all_plans()?;
        plans.sort_by_key(|plan| plan.week);
        Ok(plans.iter().map(PlanSummary::from).collect())
    }

    fn plan(&self, plan_id: PlanId) -> Result<WeeklyPlan, ShoppingListError> {
        self.store
            .lookup_plan(plan_id)?
            .ok_or(ShoppingListError::PlanNotFound(plan_id))
    }

    /// Look up each day's meal, Monday first. Missing meals and lookup
    /// failures go to the skipped list.
    fn resolve_days(&self, plan: &WeeklyPlan, scaling: Scaling) -> (Vec<ResolvedDay>, Vec<String>) {
        let mut resolved = Vec::new();
        let mut skipped_days = Vec::new();

        for (day, meal_id) in plan.ordered_meals() {
            match self.store.lookup_meal(meal_id) {
                Ok(Some(meal)) => {
                    let factor = scaling.factor_for(plan, &day);
                    resolved.push(ResolvedDay { day, meal, factor });
                }
                Ok(None) => {
                    warn!(day = %day, meal_id, "meal not found, skipping day");
                    skipped_days.push(day);
                }
                Err(e) => {
                    warn!(day = %day, meal_id, error = %e, "failed to process meal, skipping day");
                    skipped_days.push(day);
                }
            }
        }

        (resolved, skipped_days)
    }
}
