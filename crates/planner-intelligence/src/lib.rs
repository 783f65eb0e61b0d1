// ABOUTME: Shopping list aggregation engine for the event beverage planner
// ABOUTME: Turns batch counts plus configuration tables into categorized shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! The computational core of the planner. Given batch counts for coffee and
//! tea, the per-batch recipes, a package size table, and a store category
//! table, it produces six shopping lists, one per store category.
//!
//! The pipeline has three stages:
//!
//! 1. **Totals**: each recipe is scaled by its beverage's batch count and
//!    amounts are summed per ingredient (coffee first, then tea).
//! 2. **Resolution**: each total is divided by the ingredient's package size
//!    and rounded up; the ingredient's category is looked up.
//! 3. **Partition**: items are appended to their category's list in
//!    first-seen ingredient order.
//!
//! No step can fail. The functions hold no state and perform no I/O, so any
//! number of aggregations may run concurrently over shared snapshots.
//!
//! ```rust
//! use planner_core::models::{BatchCounts, PlannerSnapshot, StoreCategory};
//! use planner_intelligence::aggregate_snapshot;
//!
//! let lists = aggregate_snapshot(BatchCounts::new(2, 3), &PlannerSnapshot::default());
//! assert_eq!(lists.list(StoreCategory::IndianStorePrep).len(), 2);
//! ```

/// Totals accumulation, package math, and category partitioning
pub mod shopping_list;

pub use shopping_list::{
    accumulate_totals, aggregate, aggregate_snapshot, package_count, resolve_item,
    IngredientTotals,
};
