// ABOUTME: Package size and store category lookup tables keyed by ingredient
// ABOUTME: Lookups never fail: missing entries resolve to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::StoreCategory;
use super::ingredient::Ingredient;
use crate::constants::lookup_defaults;

/// Units per purchasable package, by ingredient
///
/// Not required to cover every recipe ingredient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageSizes(BTreeMap<Ingredient, f64>);

impl PackageSizes {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Stored size, if any
    #[must_use]
    pub fn get(&self, ingredient: &Ingredient) -> Option<f64> {
        self.0.get(ingredient).copied()
    }

    /// Size used for package math
    ///
    /// Missing, zero, and NaN sizes all resolve to one unit per package so
    /// totals map 1:1 onto package counts instead of dividing by zero.
    #[must_use]
    pub fn resolve(&self, ingredient: &Ingredient) -> f64 {
        match self.get(ingredient) {
            Some(size) if size.abs() > 0.0 => size,
            _ => lookup_defaults::PACKAGE_SIZE,
        }
    }

    /// Set the size for an ingredient
    pub fn insert(&mut self, ingredient: Ingredient, size: f64) -> Option<f64> {
        self.0.insert(ingredient, size)
    }

    /// Remove an ingredient's size
    pub fn remove(&mut self, ingredient: &Ingredient) -> Option<f64> {
        self.0.remove(ingredient)
    }

    /// Entries sorted by ingredient
    pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, f64)> {
        self.0.iter().map(|(ingredient, size)| (ingredient, *size))
    }

    /// Number of configured sizes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no sizes are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Ingredient, f64)> for PackageSizes {
    fn from_iter<T: IntoIterator<Item = (Ingredient, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Store category assignment, by ingredient
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<Ingredient, StoreCategory>);

impl CategoryMap {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Stored category, if any
    #[must_use]
    pub fn get(&self, ingredient: &Ingredient) -> Option<StoreCategory> {
        self.0.get(ingredient).copied()
    }

    /// Category used for partitioning, `Other` when unassigned
    #[must_use]
    pub fn resolve(&self, ingredient: &Ingredient) -> StoreCategory {
        self.get(ingredient).unwrap_or_default()
    }

    /// Assign a category
    pub fn insert(&mut self, ingredient: Ingredient, category: StoreCategory) -> Option<StoreCategory> {
        self.0.insert(ingredient, category)
    }

    /// Remove an assignment
    pub fn remove(&mut self, ingredient: &Ingredient) -> Option<StoreCategory> {
        self.0.remove(ingredient)
    }

    /// Entries sorted by ingredient
    pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, StoreCategory)> {
        self.0.iter().map(|(ingredient, category)| (ingredient, *category))
    }

    /// Number of assignments
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Ingredient, StoreCategory)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (Ingredient, StoreCategory)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
