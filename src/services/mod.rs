// ABOUTME: Domain service layer for configuration edits and shopping list planning
// ABOUTME: Read-modify-write transactions over the settings and template stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! Domain service layer
//!
//! Each edit reads the current tables, produces new ones, and persists them
//! before returning. Callers never mutate stored tables in place, so a
//! snapshot handed to the aggregator stays consistent.

/// Package size table edits
pub mod package_sizes;

/// Shopping list computation and event templates
pub mod planner;

/// Recipe row editing and ingredient categorization
pub mod recipes;

pub use package_sizes::{ingredient_sizes, set_package_size, IngredientSize};
pub use planner::PlannerService;
pub use recipes::{ingredient_rows, rows_to_recipe, IngredientRow, RecipeEditor};
