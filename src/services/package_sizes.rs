// ABOUTME: Package size table editing for ingredients used by either recipe
// ABOUTME: Lists sizes sorted by ingredient key and validates updates before saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, PackageSizes, Recipes};
use crate::storage::{SettingsStore, StorageBackend};

/// Configured package size for one recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSize {
    /// Ingredient
    pub ingredient: Ingredient,
    /// Stored size, `None` when unset
    pub size: Option<f64>,
}

/// Every ingredient referenced by a recipe, sorted by key, with its stored size
#[must_use]
pub fn ingredient_sizes(recipes: &Recipes, sizes: &PackageSizes) -> Vec<IngredientSize> {
    let mut ingredients = recipes.all_ingredients();
    ingredients.sort_by_key(|ingredient| ingredient.key());

    ingredients
        .into_iter()
        .map(|ingredient| IngredientSize {
            ingredient: ingredient.clone(),
            size: sizes.get(ingredient),
        })
        .collect()
}

/// Store a package size
///
/// # Errors
///
/// Returns `ValueOutOfRange` unless `size` is finite and strictly positive,
/// or a storage error if the table cannot be read or written
pub fn set_package_size<B: StorageBackend>(
    settings: &SettingsStore<B>,
    ingredient: Ingredient,
    size: f64,
) -> AppResult<PackageSizes> {
    if !size.is_finite() || size <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "Package size for {ingredient} must be a positive number, got {size}"
        ))
        .with_resource_id(ingredient.key()));
    }

    let mut sizes = settings.load_package_sizes()?;
    info!(ingredient = %ingredient, size, "Set package size");
    sizes.insert(ingredient, size);
    settings.save_package_sizes(&sizes)?;
    Ok(sizes)
}
