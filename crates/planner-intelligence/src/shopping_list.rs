// ABOUTME: Shopping list aggregation: scale recipes, sum totals, round up to packages
// ABOUTME: Partitions every recipe ingredient into exactly one store category list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use planner_core::models::{
    BatchCounts, Beverage, CategoryMap, Ingredient, PackageSizes, PlannerSnapshot, Recipes,
    ShoppingListItem, ShoppingLists,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Total amount per ingredient, in first-seen order
///
/// Coffee ingredients come first in recipe order, followed by tea
/// ingredients that coffee does not use.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientTotals {
    entries: Vec<(Ingredient, f64)>,
    #[serde(skip)]
    index: HashMap<Ingredient, usize>,
}

impl IngredientTotals {
    /// Add to an ingredient's total, creating it at zero if absent
    pub fn add(&mut self, ingredient: &Ingredient, amount: f64) {
        if let Some(&idx) = self.index.get(ingredient) {
            self.entries[idx].1 += amount;
        } else {
            self.index.insert(ingredient.clone(), self.entries.len());
            self.entries.push((ingredient.clone(), amount));
        }
    }

    /// Total for one ingredient
    #[must_use]
    pub fn get(&self, ingredient: &Ingredient) -> Option<f64> {
        self.index.get(ingredient).map(|&idx| self.entries[idx].1)
    }

    /// Totals in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, f64)> {
        self.entries.iter().map(|(ingredient, total)| (ingredient, *total))
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no recipe lists any ingredient
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scale each recipe by its batch count and sum per ingredient
///
/// Every ingredient listed by a recipe gets an entry, even when its
/// beverage has zero batches.
#[must_use]
pub fn accumulate_totals(batches: BatchCounts, recipes: &Recipes) -> IngredientTotals {
    let mut totals = IngredientTotals::default();
    for beverage in Beverage::ALL {
        let multiplier = f64::from(batches.for_beverage(beverage));
        for (ingredient, per_batch) in recipes.get(beverage).iter() {
            totals.add(ingredient, per_batch * multiplier);
        }
    }
    totals
}

/// Whole packages needed to cover `total`
///
/// Standard ceiling: 9 units in packages of 4 is 3 packages, 0 units is 0.
///
/// Counts beyond the `i64` range saturate at `i64::MAX` (or `i64::MIN`),
/// including an infinite quotient. A quotient that is not a number, such
/// as `0 / 0`, needs no packages.
#[must_use]
pub fn package_count(total: f64, package_size: f64) -> i64 {
    let packages = (total / package_size).ceil();
    if packages.is_nan() {
        debug!(total, package_size, "Package count is not a number, using zero");
        return 0;
    }
    // Float-to-int `as` casts saturate at the integer bounds
    packages as i64
}

/// Build the shopping list line for one ingredient total
#[must_use]
pub fn resolve_item(
    ingredient: &Ingredient,
    total: f64,
    package_sizes: &PackageSizes,
    category_map: &CategoryMap,
) -> ShoppingListItem {
    ShoppingListItem {
        ingredient: ingredient.name().to_owned(),
        total_amount: total,
        unit: ingredient.unit().to_owned(),
        packages: package_count(total, package_sizes.resolve(ingredient)),
        category: category_map.resolve(ingredient),
    }
}

/// Compute categorized shopping lists for an event
///
/// Pure function of its inputs. Missing package sizes count one unit per
/// package and missing categories file the item under `other`. Zero-total
/// items are kept.
#[must_use]
pub fn aggregate(
    coffee_batches: u32,
    tea_batches: u32,
    recipes: &Recipes,
    package_sizes: &PackageSizes,
    category_map: &CategoryMap,
) -> ShoppingLists {
    let totals = accumulate_totals(BatchCounts::new(coffee_batches, tea_batches), recipes);

    let mut lists = ShoppingLists::default();
    for (ingredient, total) in totals.iter() {
        lists.push(resolve_item(ingredient, total, package_sizes, category_map));
    }

    debug!(
        coffee_batches,
        tea_batches,
        items = lists.item_count(),
        "Aggregated shopping lists"
    );
    lists
}

/// Compute shopping lists from a configuration snapshot
#[must_use]
pub fn aggregate_snapshot(batches: BatchCounts, snapshot: &PlannerSnapshot) -> ShoppingLists {
    aggregate(
        batches.coffee,
        batches.tea,
        &snapshot.recipes,
        &snapshot.package_sizes,
        &snapshot.category_map,
    )
}
