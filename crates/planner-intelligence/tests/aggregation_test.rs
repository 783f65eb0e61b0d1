// ABOUTME: Integration tests for the shopping list aggregator
// ABOUTME: Tests totals, package rounding, category partitioning, and default lookups
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! Tests for the aggregation engine including:
//! - The reference coffee/tea scenario
//! - Zero-batch behavior and linearity
//! - Partition completeness and ordering
//! - Missing-configuration defaults

use planner_core::models::{
    BatchCounts, CategoryMap, Ingredient, PackageSizes, PlannerSnapshot, Recipe, Recipes,
    ShoppingListItem, ShoppingLists, StoreCategory,
};
use planner_intelligence::{accumulate_totals, aggregate, aggregate_snapshot};
use serde_json::json;
use std::collections::HashSet;

fn example_recipes() -> Recipes {
    serde_json::from_value(json!({
        "Coffee": {"Coffee Powder (g)": 500, "Sugar (g)": 1000},
        "Tea": {"Tea Powder (g)": 100, "Sugar (g)": 1000}
    }))
    .unwrap()
}

fn example_sizes() -> PackageSizes {
    serde_json::from_value(json!({
        "Coffee Powder (g)": 1000,
        "Sugar (g)": 2000,
        "Tea Powder (g)": 500
    }))
    .unwrap()
}

fn example_map() -> CategoryMap {
    serde_json::from_value(json!({
        "Coffee Powder (g)": "costcoDecoction",
        "Sugar (g)": "costcoPrep",
        "Tea Powder (g)": "indianStoreDecoction"
    }))
    .unwrap()
}

fn find<'a>(lists: &'a ShoppingLists, name: &str) -> &'a ShoppingListItem {
    lists
        .iter()
        .flat_map(|(_, items)| items.iter())
        .find(|item| item.ingredient == name)
        .unwrap_or_else(|| panic!("{name} missing from shopping lists"))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_example_scenario() {
    let lists = aggregate(2, 3, &example_recipes(), &example_sizes(), &example_map());

    let coffee = find(&lists, "Coffee Powder");
    assert!(approx(coffee.total_amount, 1000.0));
    assert_eq!(coffee.packages, 1);
    assert_eq!(coffee.unit, "g");
    assert_eq!(coffee.category, StoreCategory::CostcoDecoction);

    let sugar = find(&lists, "Sugar");
    assert!(approx(sugar.total_amount, 5000.0));
    assert_eq!(sugar.packages, 3);
    assert_eq!(sugar.category, StoreCategory::CostcoPrep);

    let tea = find(&lists, "Tea Powder");
    assert!(approx(tea.total_amount, 300.0));
    assert_eq!(tea.packages, 1);
    assert_eq!(tea.category, StoreCategory::IndianStoreDecoction);

    assert_eq!(lists.item_count(), 3);
    assert!(lists.list(StoreCategory::AmazonPrep).is_empty());
    assert!(lists.list(StoreCategory::Other).is_empty());
}

#[test]
fn test_default_configuration() {
    let lists = aggregate_snapshot(BatchCounts::new(1, 2), &PlannerSnapshot::default());

    // Milk: 4 + 8 = 12 l in 4 l packages
    let milk = find(&lists, "Milk");
    assert!(approx(milk.total_amount, 12.0));
    assert_eq!(milk.packages, 3);

    // Ginger: 2 * 50 g = 100 g in 100 g packages
    let ginger = find(&lists, "Ginger");
    assert_eq!(ginger.packages, 1);

    let decoction: Vec<&str> = lists
        .list(StoreCategory::CostcoDecoction)
        .iter()
        .map(|item| item.ingredient.as_str())
        .collect();
    assert_eq!(decoction, vec!["Coffee Powder", "Milk"]);

    let other: Vec<&str> = lists
        .list(StoreCategory::Other)
        .iter()
        .map(|item| item.ingredient.as_str())
        .collect();
    assert_eq!(other, vec!["Water"]);
}

// ============================================================================
// Zero Batches & Linearity
// ============================================================================

#[test]
fn test_zero_batches_keep_every_ingredient() {
    let lists = aggregate(0, 0, &example_recipes(), &example_sizes(), &example_map());

    assert_eq!(lists.item_count(), 3);
    for (_, items) in lists.iter() {
        for item in items {
            assert!(approx(item.total_amount, 0.0));
            assert_eq!(item.packages, 0);
        }
    }
}

#[test]
fn test_zero_batches_for_one_beverage() {
    let lists = aggregate(0, 2, &example_recipes(), &example_sizes(), &example_map());

    let coffee = find(&lists, "Coffee Powder");
    assert!(approx(coffee.total_amount, 0.0));
    assert_eq!(coffee.packages, 0);

    let sugar = find(&lists, "Sugar");
    assert!(approx(sugar.total_amount, 2000.0));
    assert_eq!(sugar.packages, 1);
}

#[test]
fn test_zero_per_batch_amount_is_kept() {
    let mut recipes = example_recipes();
    recipes.tea.set(Ingredient::parse("Saffron (g)"), 0.0);

    let lists = aggregate(4, 4, &recipes, &example_sizes(), &example_map());
    let saffron = find(&lists, "Saffron");
    assert!(approx(saffron.total_amount, 0.0));
    assert_eq!(saffron.packages, 0);
    assert_eq!(saffron.category, StoreCategory::Other);
}

#[test]
fn test_totals_scale_linearly() {
    let recipes = PlannerSnapshot::default().recipes;
    for (coffee, tea) in [(0, 0), (1, 0), (0, 1), (3, 5), (7, 2)] {
        let single = accumulate_totals(BatchCounts::new(coffee, tea), &recipes);
        let double = accumulate_totals(BatchCounts::new(coffee * 2, tea * 2), &recipes);

        assert_eq!(single.len(), double.len());
        for (ingredient, total) in single.iter() {
            let doubled = double.get(ingredient).unwrap();
            assert!(approx(doubled, total * 2.0), "{ingredient}: {doubled} != 2 * {total}");
        }
    }
}

#[test]
fn test_keys_differing_only_in_spacing_are_separate_items() {
    let recipes: Recipes = serde_json::from_value(json!({
        "Coffee": {"Milk (l)": 4, "Milk(l)": 2},
        "Tea": {}
    }))
    .unwrap();

    let lists = aggregate(1, 0, &recipes, &PackageSizes::new(), &CategoryMap::new());
    let milk: Vec<&ShoppingListItem> = lists
        .iter()
        .flat_map(|(_, items)| items.iter())
        .filter(|item| item.ingredient == "Milk")
        .collect();

    assert_eq!(milk.len(), 2);
    assert!(milk.iter().all(|item| item.unit == "l"));
    assert!(approx(milk.iter().map(|item| item.total_amount).sum(), 6.0));
}

// ============================================================================
// Partition Completeness & Ordering
// ============================================================================

#[test]
fn test_partition_is_complete_and_unique() {
    let snapshot = PlannerSnapshot::default();
    let lists = aggregate_snapshot(BatchCounts::new(2, 1), &snapshot);

    let mut seen = HashSet::new();
    for (category, items) in lists.iter() {
        for item in items {
            assert_eq!(item.category, category);
            let key = Ingredient::new(item.ingredient.clone(), item.unit.clone());
            assert!(seen.insert(key), "{} listed twice", item.ingredient);
        }
    }

    let expected: HashSet<Ingredient> = snapshot
        .recipes
        .all_ingredients()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_item_order_follows_first_seen_recipe_order() {
    let recipes: Recipes = serde_json::from_value(json!({
        "Coffee": {"Zest (g)": 1, "Milk (l)": 1},
        "Tea": {"Apple (g)": 1, "Milk (l)": 1, "Basil (g)": 1}
    }))
    .unwrap();

    let lists = aggregate(1, 1, &recipes, &PackageSizes::new(), &CategoryMap::new());
    let order: Vec<&str> = lists
        .list(StoreCategory::Other)
        .iter()
        .map(|item| item.ingredient.as_str())
        .collect();
    assert_eq!(order, vec!["Zest", "Milk", "Apple", "Basil"]);
}

#[test]
fn test_empty_recipes_give_empty_lists() {
    let lists = aggregate(5, 5, &Recipes::default(), &example_sizes(), &example_map());
    assert!(lists.is_empty());
    assert_eq!(lists.iter().count(), 6);
}

// ============================================================================
// Package Rounding & Missing Configuration
// ============================================================================

#[test]
fn test_package_rounding() {
    let ingredient = Ingredient::parse("Beans (kg)");
    let sizes: PackageSizes = [(ingredient.clone(), 4.0)].into_iter().collect();

    for (per_batch, expected) in [(9.0, 3), (8.0, 2), (0.0, 0)] {
        let recipes = Recipes {
            coffee: [(ingredient.clone(), per_batch)].into_iter().collect(),
            tea: Recipe::new(),
        };
        let lists = aggregate(1, 0, &recipes, &sizes, &CategoryMap::new());
        assert_eq!(find(&lists, "Beans").packages, expected, "total {per_batch}");
    }
}

#[test]
fn test_missing_configuration_defaults() {
    let recipes: Recipes = serde_json::from_value(json!({
        "Coffee": {"Cinnamon (g)": 2.5},
        "Tea": {}
    }))
    .unwrap();

    let lists = aggregate(3, 0, &recipes, &PackageSizes::new(), &CategoryMap::new());
    let cinnamon = find(&lists, "Cinnamon");
    assert!(approx(cinnamon.total_amount, 7.5));
    assert_eq!(cinnamon.packages, 8);
    assert_eq!(cinnamon.category, StoreCategory::Other);
}

#[test]
fn test_zero_package_size_counts_single_units() {
    let ingredient = Ingredient::parse("Cups");
    let sizes: PackageSizes = [(ingredient.clone(), 0.0)].into_iter().collect();
    let recipes = Recipes {
        coffee: [(ingredient, 50.0)].into_iter().collect(),
        tea: Recipe::new(),
    };

    let lists = aggregate(2, 0, &recipes, &sizes, &CategoryMap::new());
    let cups = find(&lists, "Cups");
    assert_eq!(cups.unit, "");
    assert_eq!(cups.packages, 100);
}
