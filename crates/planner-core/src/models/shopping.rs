// ABOUTME: Shopping list items and the six-way categorized shopping list result
// ABOUTME: Derived data recomputed on every aggregation, never persisted on its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};

use super::category::StoreCategory;

/// One line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Ingredient display name (without unit)
    pub ingredient: String,
    /// Total amount needed across all beverages
    pub total_amount: f64,
    /// Unit label, empty when the ingredient has none
    pub unit: String,
    /// Whole packages to buy
    pub packages: i64,
    /// Category the item was filed under
    pub category: StoreCategory,
}

/// Shopping lists partitioned by store category
///
/// All six lists always exist. Each ingredient referenced by a recipe
/// appears in exactly one of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingLists {
    /// Costco, decoction
    pub costco_decoction: Vec<ShoppingListItem>,
    /// Costco, prep
    pub costco_prep: Vec<ShoppingListItem>,
    /// Indian store, decoction
    pub indian_store_decoction: Vec<ShoppingListItem>,
    /// Indian store, prep
    pub indian_store_prep: Vec<ShoppingListItem>,
    /// Amazon, prep
    pub amazon_prep: Vec<ShoppingListItem>,
    /// Unassigned
    pub other: Vec<ShoppingListItem>,
}

impl ShoppingLists {
    /// Items filed under one category
    #[must_use]
    pub fn list(&self, category: StoreCategory) -> &[ShoppingListItem] {
        match category {
            StoreCategory::CostcoDecoction => &self.costco_decoction,
            StoreCategory::CostcoPrep => &self.costco_prep,
            StoreCategory::IndianStoreDecoction => &self.indian_store_decoction,
            StoreCategory::IndianStorePrep => &self.indian_store_prep,
            StoreCategory::AmazonPrep => &self.amazon_prep,
            StoreCategory::Other => &self.other,
        }
    }

    fn list_mut(&mut self, category: StoreCategory) -> &mut Vec<ShoppingListItem> {
        match category {
            StoreCategory::CostcoDecoction => &mut self.costco_decoction,
            StoreCategory::CostcoPrep => &mut self.costco_prep,
            StoreCategory::IndianStoreDecoction => &mut self.indian_store_decoction,
            StoreCategory::IndianStorePrep => &mut self.indian_store_prep,
            StoreCategory::AmazonPrep => &mut self.amazon_prep,
            StoreCategory::Other => &mut self.other,
        }
    }

    /// Append an item to the list for its category
    pub fn push(&mut self, item: ShoppingListItem) {
        self.list_mut(item.category).push(item);
    }

    /// Every category with its items, in display order
    pub fn iter(&self) -> impl Iterator<Item = (StoreCategory, &[ShoppingListItem])> {
        StoreCategory::ALL
            .into_iter()
            .map(move |category| (category, self.list(category)))
    }

    /// Only categories that have items
    pub fn non_empty(&self) -> impl Iterator<Item = (StoreCategory, &[ShoppingListItem])> {
        self.iter().filter(|(_, items)| !items.is_empty())
    }

    /// Total number of items across all categories
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    /// True when every category is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
