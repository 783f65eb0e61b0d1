// ABOUTME: Domain models for beverage planning: ingredients, recipes, tables, and results
// ABOUTME: Re-exports every model type so callers import from planner_core::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

/// Beverage kinds and batch counts
pub mod beverage;
/// Store categories, stores, and prep steps
pub mod category;
/// Structured ingredient identity
pub mod ingredient;
/// Ordered per-batch recipes
pub mod recipe;
/// Aggregation output
pub mod shopping;
/// Immutable configuration snapshot
pub mod snapshot;
/// Package size and category lookup tables
pub mod tables;
/// Saved event templates
pub mod template;

pub use beverage::{BatchCounts, Beverage};
pub use category::{PrepStep, Store, StoreCategory};
pub use ingredient::Ingredient;
pub use recipe::{Recipe, Recipes};
pub use shopping::{ShoppingListItem, ShoppingLists};
pub use snapshot::PlannerSnapshot;
pub use tables::{CategoryMap, PackageSizes};
pub use template::{EventTemplate, NewEventTemplate};
