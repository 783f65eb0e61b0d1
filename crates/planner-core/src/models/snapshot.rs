// ABOUTME: Immutable configuration snapshot handed to the shopping list aggregator
// ABOUTME: Bundles recipes, package sizes, and category assignments read at one instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};

use super::recipe::Recipes;
use super::tables::{CategoryMap, PackageSizes};
use crate::constants::defaults;

/// Consistent view of every configuration table
///
/// Editors produce a new snapshot per change; the aggregator only ever
/// reads one, so it cannot observe a half-applied edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSnapshot {
    /// Per-batch recipes
    pub recipes: Recipes,
    /// Units per package
    pub package_sizes: PackageSizes,
    /// Store category assignments
    #[serde(rename = "storeMap")]
    pub category_map: CategoryMap,
}

impl Default for PlannerSnapshot {
    fn default() -> Self {
        defaults::snapshot()
    }
}
