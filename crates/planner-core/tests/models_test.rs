// ABOUTME: Integration tests for planner-core domain models
// ABOUTME: Tests ingredient key parsing, recipe ordering, category mapping, and persisted shapes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use chrono::Utc;
use planner_core::constants::defaults;
use planner_core::models::{
    BatchCounts, Beverage, CategoryMap, Ingredient, NewEventTemplate, PackageSizes,
    PlannerSnapshot, PrepStep, Recipe, Recipes, ShoppingListItem, ShoppingLists, Store,
    StoreCategory,
};
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Ingredient Key Tests
// ============================================================================

#[test]
fn test_parse_key_with_unit() {
    let ginger = Ingredient::parse("Ginger (g)");
    assert_eq!(ginger.name(), "Ginger");
    assert_eq!(ginger.unit(), "g");
    assert_eq!(ginger.key(), "Ginger (g)");
}

#[test]
fn test_parse_key_without_unit() {
    let water = Ingredient::parse("Water");
    assert_eq!(water.name(), "Water");
    assert_eq!(water.unit(), "");
    assert_eq!(water.key(), "Water");
}

#[test]
fn test_parse_key_edge_cases() {
    // Empty parentheses are not a unit
    let empty = Ingredient::parse("Water ()");
    assert_eq!(empty.name(), "Water ()");
    assert_eq!(empty.unit(), "");

    // Parenthesis must be trailing
    let inner = Ingredient::parse("Milk (l) fresh");
    assert_eq!(inner.name(), "Milk (l) fresh");
    assert_eq!(inner.unit(), "");

    // No whitespace before the unit
    let tight = Ingredient::parse("Sugar(kg)");
    assert_eq!(tight.name(), "Sugar");
    assert_eq!(tight.unit(), "kg");

    // Multi-word names and units
    let long = Ingredient::parse("Condensed Milk (fl oz)");
    assert_eq!(long.name(), "Condensed Milk");
    assert_eq!(long.unit(), "fl oz");
}

#[test]
fn test_same_name_different_unit_is_distinct() {
    assert_ne!(Ingredient::parse("Sugar (g)"), Ingredient::parse("Sugar (kg)"));
    assert_eq!(Ingredient::parse("Sugar (g)"), Ingredient::new("Sugar", "g"));
}

#[test]
fn test_ingredient_serializes_as_key() {
    let value = serde_json::to_value(Ingredient::new("Tea Powder", "g")).unwrap();
    assert_eq!(value, json!("Tea Powder (g)"));

    let parsed: Ingredient = serde_json::from_value(json!("Cardamom (g)")).unwrap();
    assert_eq!(parsed, Ingredient::new("Cardamom", "g"));
}

#[test]
fn test_key_spelling_is_identity() {
    let spaced = Ingredient::parse("Milk (l)");
    let tight = Ingredient::parse("Milk(l)");
    assert_eq!(spaced.name(), tight.name());
    assert_eq!(spaced.unit(), tight.unit());
    assert_ne!(spaced, tight);

    assert_eq!(Ingredient::parse("Sugar(g)").key(), "Sugar(g)");
    assert_eq!(Ingredient::parse("Milk  (l)").to_string(), "Milk  (l)");
}

// ============================================================================
// Recipe Tests
// ============================================================================

#[test]
fn test_recipe_set_keeps_position() {
    let mut recipe = Recipe::new();
    recipe.set(Ingredient::parse("Sugar (g)"), 1000.0);
    recipe.set(Ingredient::parse("Milk (l)"), 4.0);
    recipe.set(Ingredient::parse("Sugar (g)"), 750.0);

    let keys: Vec<String> = recipe.ingredients().map(Ingredient::key).collect();
    assert_eq!(keys, vec!["Sugar (g)", "Milk (l)"]);
    assert_eq!(recipe.get(&Ingredient::parse("Sugar (g)")), Some(750.0));
}

#[test]
fn test_recipe_remove() {
    let mut recipe: Recipe = [
        (Ingredient::parse("A (g)"), 1.0),
        (Ingredient::parse("B (g)"), 2.0),
    ]
    .into_iter()
    .collect();

    assert_eq!(recipe.remove(&Ingredient::parse("A (g)")), Some(1.0));
    assert_eq!(recipe.remove(&Ingredient::parse("A (g)")), None);
    assert_eq!(recipe.len(), 1);
}

#[test]
fn test_recipe_json_preserves_document_order() {
    let raw = r#"{"Zucchini (g)": 1, "Apple (g)": 2, "Milk (l)": 3}"#;
    let recipe: Recipe = serde_json::from_str(raw).unwrap();

    let keys: Vec<String> = recipe.ingredients().map(Ingredient::key).collect();
    assert_eq!(keys, vec!["Zucchini (g)", "Apple (g)", "Milk (l)"]);

    let written = serde_json::to_string(&recipe).unwrap();
    assert_eq!(written, r#"{"Zucchini (g)":1.0,"Apple (g)":2.0,"Milk (l)":3.0}"#);
}

#[test]
fn test_recipe_json_keeps_keys_differing_only_in_spacing() {
    let raw = r#"{"Milk (l)":4.0,"Milk(l)":2.0,"Sugar(g)":1.0}"#;
    let recipe: Recipe = serde_json::from_str(raw).unwrap();

    assert_eq!(recipe.len(), 3);
    assert_eq!(recipe.get(&Ingredient::parse("Milk (l)")), Some(4.0));
    assert_eq!(recipe.get(&Ingredient::parse("Milk(l)")), Some(2.0));
    assert_eq!(serde_json::to_string(&recipe).unwrap(), raw);
}

#[test]
fn test_recipes_json_shape() {
    let recipes: Recipes = serde_json::from_value(json!({
        "Coffee": {"Coffee Powder (g)": 500, "Sugar (g)": 1000},
        "Tea": {"Tea Powder (g)": 100, "Sugar (g)": 1000}
    }))
    .unwrap();

    assert_eq!(recipes.get(Beverage::Coffee).len(), 2);
    let all: Vec<String> = recipes.all_ingredients().into_iter().map(Ingredient::key).collect();
    assert_eq!(all, vec!["Coffee Powder (g)", "Sugar (g)", "Tea Powder (g)"]);
}

// ============================================================================
// Store Category Tests
// ============================================================================

#[test]
fn test_category_labels_round_trip() {
    for category in StoreCategory::ALL {
        let value = serde_json::to_value(category).unwrap();
        assert_eq!(value, json!(category.as_str()));
        assert_eq!(category.as_str().parse::<StoreCategory>().unwrap(), category);
    }
    assert!("walmart".parse::<StoreCategory>().is_err());
}

#[test]
fn test_category_decomposition() {
    assert_eq!(StoreCategory::CostcoDecoction.store(), Store::Costco);
    assert_eq!(StoreCategory::CostcoDecoction.prep_step(), PrepStep::Decoction);
    assert_eq!(StoreCategory::IndianStorePrep.store(), Store::IndianStore);
    assert_eq!(StoreCategory::AmazonPrep.prep_step(), PrepStep::Prep);
    assert_eq!(StoreCategory::Other.store(), Store::Other);
    assert_eq!(StoreCategory::Other.prep_step(), PrepStep::NotApplicable);
}

#[test]
fn test_category_composition() {
    for category in StoreCategory::ALL {
        assert_eq!(
            StoreCategory::from_parts(category.store(), category.prep_step()),
            category
        );
    }
    assert_eq!(
        StoreCategory::from_parts(Store::Amazon, PrepStep::Decoction),
        StoreCategory::AmazonPrep
    );
    assert_eq!(
        StoreCategory::from_parts(Store::Costco, PrepStep::NotApplicable),
        StoreCategory::Other
    );
    assert_eq!(
        StoreCategory::from_parts(Store::Other, PrepStep::Prep),
        StoreCategory::Other
    );
}

#[test]
fn test_store_and_step_parsing() {
    assert_eq!("Indian Store".parse::<Store>().unwrap(), Store::IndianStore);
    assert_eq!("indian-store".parse::<Store>().unwrap(), Store::IndianStore);
    assert_eq!("N/A".parse::<PrepStep>().unwrap(), PrepStep::NotApplicable);
    assert!("blender".parse::<PrepStep>().is_err());
}

// ============================================================================
// Lookup Table Tests
// ============================================================================

#[test]
fn test_package_size_defaults() {
    let mut sizes = PackageSizes::new();
    sizes.insert(Ingredient::parse("Sugar (g)"), 2000.0);
    sizes.insert(Ingredient::parse("Zero (g)"), 0.0);
    sizes.insert(Ingredient::parse("Odd (g)"), f64::NAN);

    assert!((sizes.resolve(&Ingredient::parse("Sugar (g)")) - 2000.0).abs() < f64::EPSILON);
    assert!((sizes.resolve(&Ingredient::parse("Missing (g)")) - 1.0).abs() < f64::EPSILON);
    assert!((sizes.resolve(&Ingredient::parse("Zero (g)")) - 1.0).abs() < f64::EPSILON);
    assert!((sizes.resolve(&Ingredient::parse("Odd (g)")) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_category_map_defaults_to_other() {
    let map: CategoryMap = [(Ingredient::parse("Sugar (g)"), StoreCategory::CostcoPrep)]
        .into_iter()
        .collect();

    assert_eq!(map.resolve(&Ingredient::parse("Sugar (g)")), StoreCategory::CostcoPrep);
    assert_eq!(map.resolve(&Ingredient::parse("Salt (g)")), StoreCategory::Other);
}

#[test]
fn test_tables_json_shape() {
    let sizes: PackageSizes =
        serde_json::from_value(json!({"Milk (l)": 4, "Water (l)": 1})).unwrap();
    assert_eq!(sizes.get(&Ingredient::new("Milk", "l")), Some(4.0));

    let map: CategoryMap =
        serde_json::from_value(json!({"Ginger (g)": "indianStorePrep"})).unwrap();
    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        json!({"Ginger (g)": "indianStorePrep"})
    );

    let bad = serde_json::from_value::<CategoryMap>(json!({"Ginger (g)": "walmart"}));
    assert!(bad.is_err());
}

// ============================================================================
// Shopping List Tests
// ============================================================================

fn item(name: &str, category: StoreCategory) -> ShoppingListItem {
    ShoppingListItem {
        ingredient: name.to_owned(),
        total_amount: 1.0,
        unit: "g".to_owned(),
        packages: 1,
        category,
    }
}

#[test]
fn test_shopping_lists_routing() {
    let mut lists = ShoppingLists::default();
    lists.push(item("Sugar", StoreCategory::CostcoPrep));
    lists.push(item("Ginger", StoreCategory::IndianStorePrep));
    lists.push(item("Cardamom", StoreCategory::IndianStorePrep));

    assert_eq!(lists.list(StoreCategory::CostcoPrep).len(), 1);
    assert_eq!(lists.list(StoreCategory::IndianStorePrep).len(), 2);
    assert_eq!(lists.item_count(), 3);
    assert_eq!(lists.iter().count(), 6);

    let visible: Vec<StoreCategory> = lists.non_empty().map(|(category, _)| category).collect();
    assert_eq!(
        visible,
        vec![StoreCategory::CostcoPrep, StoreCategory::IndianStorePrep]
    );
}

#[test]
fn test_shopping_lists_json_shape() {
    let mut lists = ShoppingLists::default();
    lists.push(item("Sugar", StoreCategory::CostcoPrep));

    let value = serde_json::to_value(&lists).unwrap();
    assert_eq!(value["costcoPrep"][0]["totalAmount"], json!(1.0));
    assert_eq!(value["costcoPrep"][0]["category"], json!("costcoPrep"));
    for key in [
        "costcoDecoction",
        "indianStoreDecoction",
        "indianStorePrep",
        "amazonPrep",
        "other",
    ] {
        assert_eq!(value[key], json!([]));
    }
}

// ============================================================================
// Template & Default Configuration Tests
// ============================================================================

#[test]
fn test_template_round_trip() {
    let snapshot = PlannerSnapshot::default();
    let template = NewEventTemplate::from_snapshot("Diwali", BatchCounts::new(2, 3), &snapshot)
        .into_template(Uuid::new_v4(), Utc::now());

    let raw = serde_json::to_string(&template).unwrap();
    assert!(raw.contains("\"coffeeBatches\":2"));
    assert!(raw.contains("\"storeMap\""));
    assert!(raw.contains("\"createdAt\""));

    let back: planner_core::models::EventTemplate = serde_json::from_str(&raw).unwrap();
    assert_eq!(template, back);
    assert_eq!(template.snapshot(), snapshot);
    assert_eq!(template.batch_counts(), BatchCounts::new(2, 3));
}

#[test]
fn test_template_requires_name() {
    let snapshot = PlannerSnapshot::default();
    let blank = NewEventTemplate::from_snapshot("   ", BatchCounts::default(), &snapshot);
    assert!(blank.validate().is_err());
}

#[test]
fn test_default_configuration_covers_recipes() {
    let recipes = defaults::recipes();
    let sizes = defaults::package_sizes();
    let map = defaults::store_map();

    assert_eq!(recipes.coffee.len(), 4);
    assert_eq!(recipes.tea.len(), 6);
    for ingredient in recipes.all_ingredients() {
        assert!(sizes.get(ingredient).is_some(), "{ingredient} has no size");
        assert!(map.get(ingredient).is_some(), "{ingredient} has no category");
    }
    assert_eq!(
        map.get(&Ingredient::parse("Water (l)")),
        Some(StoreCategory::Other)
    );
}
