// ABOUTME: Application constants: built-in default configuration and storage keys
// ABOUTME: Defaults are used whenever persisted configuration is missing or unreadable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! Application constants organized by domain

/// Storage keys under which the persistence layer keeps each table
pub mod storage_keys {
    /// Recipes for both beverages
    pub const RECIPES: &str = "beverage-planner-recipes";
    /// Package size table
    pub const PACKAGE_SIZES: &str = "beverage-planner-package-sizes";
    /// Ingredient to store category assignments
    pub const STORE_MAP: &str = "beverage-planner-store-map";
    /// Saved event templates
    pub const TEMPLATES: &str = "beverage-planner-templates";

    /// Keys that make up the editable configuration (templates excluded)
    pub const CONFIGURATION: [&str; 3] = [RECIPES, PACKAGE_SIZES, STORE_MAP];
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the CLI and the logging layer
    pub const BEVERAGE_PLANNER: &str = "beverage-planner";
}

/// Fallbacks applied by the aggregator when a table has no entry
pub mod lookup_defaults {
    /// Package size assumed for ingredients without a configured size
    pub const PACKAGE_SIZE: f64 = 1.0;
}

/// Values for a freshly added recipe row
pub mod new_ingredient {
    /// Placeholder display name
    pub const NAME: &str = "New Ingredient";
    /// Placeholder unit
    pub const UNIT: &str = "g";
    /// Amount per batch
    pub const AMOUNT: f64 = 0.0;
}

/// Built-in default configuration
pub mod defaults {
    use crate::models::{
        CategoryMap, Ingredient, PackageSizes, PlannerSnapshot, Recipe, Recipes, StoreCategory,
    };

    const COFFEE_RECIPE: [(&str, &str, f64); 4] = [
        ("Coffee Powder", "g", 500.0),
        ("Sugar", "g", 1000.0),
        ("Milk", "l", 4.0),
        ("Water", "l", 4.0),
    ];

    const TEA_RECIPE: [(&str, &str, f64); 6] = [
        ("Tea Powder", "g", 100.0),
        ("Sugar", "g", 1000.0),
        ("Milk", "l", 4.0),
        ("Water", "l", 4.0),
        ("Ginger", "g", 50.0),
        ("Cardamom", "g", 10.0),
    ];

    const PACKAGE_SIZES: [(&str, &str, f64); 7] = [
        ("Coffee Powder", "g", 1000.0),
        ("Tea Powder", "g", 500.0),
        ("Sugar", "g", 2000.0),
        ("Milk", "l", 4.0),
        ("Water", "l", 1.0),
        ("Ginger", "g", 100.0),
        ("Cardamom", "g", 50.0),
    ];

    const STORE_MAP: [(&str, &str, StoreCategory); 7] = [
        ("Coffee Powder", "g", StoreCategory::CostcoDecoction),
        ("Tea Powder", "g", StoreCategory::IndianStoreDecoction),
        ("Sugar", "g", StoreCategory::CostcoPrep),
        ("Milk", "l", StoreCategory::CostcoDecoction),
        ("Water", "l", StoreCategory::Other),
        ("Ginger", "g", StoreCategory::IndianStorePrep),
        ("Cardamom", "g", StoreCategory::IndianStorePrep),
    ];

    fn recipe(entries: &[(&str, &str, f64)]) -> Recipe {
        entries
            .iter()
            .map(|(name, unit, amount)| (Ingredient::new(*name, *unit), *amount))
            .collect()
    }

    /// Default coffee and tea recipes
    #[must_use]
    pub fn recipes() -> Recipes {
        Recipes {
            coffee: recipe(&COFFEE_RECIPE),
            tea: recipe(&TEA_RECIPE),
        }
    }

    /// Default package sizes
    #[must_use]
    pub fn package_sizes() -> PackageSizes {
        PACKAGE_SIZES
            .iter()
            .map(|(name, unit, size)| (Ingredient::new(*name, *unit), *size))
            .collect()
    }

    /// Default store category assignments
    #[must_use]
    pub fn store_map() -> CategoryMap {
        STORE_MAP
            .iter()
            .map(|(name, unit, category)| (Ingredient::new(*name, *unit), *category))
            .collect()
    }

    /// Full default configuration snapshot
    #[must_use]
    pub fn snapshot() -> PlannerSnapshot {
        PlannerSnapshot {
            recipes: recipes(),
            package_sizes: package_sizes(),
            category_map: store_map(),
        }
    }
}
