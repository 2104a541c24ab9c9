//! # Meal Plan Shopping Lists
//!
//! Turns a weekly meal plan into a consolidated, quantity-scaled shopping list
//! by parsing the free-form `"name - quantity"` ingredient text of each meal.
//!
//! ```rust
//! use mealplan::ingredient_model::{Meal, Scaling, WeeklyPlan};
//! use mealplan::shopping_list::ShoppingListService;
//! use mealplan::store::InMemoryStore;
//! use std::collections::HashMap;
//!
//! let mut store = InMemoryStore::new();
//! store.insert_meal(Meal {
//!     id: 1,
//!     name: "Cookies".to_string(),
//!     ingredients: "Sugar - 100 g, Salt - a pinch".to_string(),
//! });
//! store
//!     .insert_plan(WeeklyPlan {
//!         id: 1,
//!         week: 1,
//!         meals: HashMap::from([("Monday".to_string(), 1), ("Thursday".to_string(), 1)]),
//!         portion_sizes: HashMap::new(),
//!     })
//!     .unwrap();
//!
//! let service = ShoppingListService::new(store);
//! let list = service.generate_shopping_list(1, Scaling::Uniform(1)).unwrap();
//! assert_eq!(list.ingredients["Sugar (g)"], "200.00");
//! assert_eq!(list.ingredients["Salt (a pinch)"], "2x a pinch");
//! ```

pub mod aggregator;
pub mod config;
pub mod day_order;
pub mod errors;
pub mod formatter;
pub mod fraction_eval;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod logging;
pub mod measurement_patterns;
pub mod shopping_list;
pub mod store;
pub mod unit_normalizer;
