// ABOUTME: Recipe editing: tabular ingredient rows, row conversion, and persisted edits
// ABOUTME: Each edit rebuilds the recipe and store map from rows and saves both tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::new_ingredient;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Beverage, CategoryMap, Ingredient, PlannerSnapshot, PrepStep, Recipe, Store, StoreCategory,
};
use crate::storage::{SettingsStore, StorageBackend};

/// One editable recipe line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRow {
    /// Display name
    pub name: String,
    /// Amount per batch
    pub amount: f64,
    /// Unit label
    pub unit: String,
    /// Where the ingredient is bought
    pub store: Store,
    /// Preparation phase
    pub prep_step: PrepStep,
}

impl Default for IngredientRow {
    fn default() -> Self {
        Self {
            name: new_ingredient::NAME.to_owned(),
            amount: new_ingredient::AMOUNT,
            unit: new_ingredient::UNIT.to_owned(),
            store: Store::Costco,
            prep_step: PrepStep::Prep,
        }
    }
}

impl IngredientRow {
    /// Both name and unit are filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.unit.trim().is_empty()
    }

    /// Join key for the row
    #[must_use]
    pub fn ingredient(&self) -> Ingredient {
        Ingredient::new(self.name.trim(), self.unit.trim())
    }

    /// Category implied by store and prep step
    #[must_use]
    pub const fn category(&self) -> StoreCategory {
        StoreCategory::from_parts(self.store, self.prep_step)
    }
}

/// Expand a recipe into rows, in recipe order
#[must_use]
pub fn ingredient_rows(recipe: &Recipe, category_map: &CategoryMap) -> Vec<IngredientRow> {
    recipe
        .iter()
        .map(|(ingredient, amount)| {
            let category = category_map.resolve(ingredient);
            IngredientRow {
                name: ingredient.name().to_owned(),
                amount,
                unit: ingredient.unit().to_owned(),
                store: category.store(),
                prep_step: category.prep_step(),
            }
        })
        .collect()
}

/// Rebuild a recipe from rows and fold their categories into a copy of the map
///
/// Incomplete rows are dropped. Existing map entries are never removed, so
/// an ingredient shared with the other beverage keeps its category.
#[must_use]
pub fn rows_to_recipe(rows: &[IngredientRow], category_map: &CategoryMap) -> (Recipe, CategoryMap) {
    let mut recipe = Recipe::new();
    let mut map = category_map.clone();

    for row in rows.iter().filter(|row| row.is_complete()) {
        let ingredient = row.ingredient();
        let amount = if row.amount.is_finite() { row.amount } else { 0.0 };
        map.insert(ingredient.clone(), row.category());
        recipe.set(ingredient, amount);
    }

    (recipe, map)
}

/// Persisted recipe edits
pub struct RecipeEditor<'a, B> {
    settings: &'a SettingsStore<B>,
}

impl<'a, B: StorageBackend> RecipeEditor<'a, B> {
    /// Edit the tables held by `settings`
    #[must_use]
    pub const fn new(settings: &'a SettingsStore<B>) -> Self {
        Self { settings }
    }

    /// Rows for one beverage
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be read
    pub fn rows(&self, beverage: Beverage) -> AppResult<Vec<IngredientRow>> {
        let snapshot = self.settings.load_snapshot()?;
        Ok(ingredient_rows(
            snapshot.recipes.get(beverage),
            &snapshot.category_map,
        ))
    }

    fn apply_rows<F>(&self, beverage: Beverage, edit: F) -> AppResult<PlannerSnapshot>
    where
        F: FnOnce(&mut Vec<IngredientRow>) -> AppResult<()>,
    {
        let mut snapshot = self.settings.load_snapshot()?;
        let mut rows = ingredient_rows(snapshot.recipes.get(beverage), &snapshot.category_map);
        edit(&mut rows)?;

        let (recipe, map) = rows_to_recipe(&rows, &snapshot.category_map);
        *snapshot.recipes.get_mut(beverage) = recipe;
        snapshot.category_map = map;

        self.settings.save_recipes(&snapshot.recipes)?;
        self.settings.save_store_map(&snapshot.category_map)?;
        Ok(snapshot)
    }

    /// Append a placeholder row and return its index
    ///
    /// When the recipe already holds the placeholder ingredient, that row is
    /// reset in place and its existing index is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be read or written
    pub fn add_ingredient(&self, beverage: Beverage) -> AppResult<usize> {
        let placeholder = IngredientRow::default();
        let ingredient = placeholder.ingredient();
        let snapshot = self.apply_rows(beverage, |rows| {
            rows.push(placeholder);
            Ok(())
        })?;

        let recipe = snapshot.recipes.get(beverage);
        let index = recipe
            .position(&ingredient)
            .unwrap_or_else(|| recipe.len().saturating_sub(1));
        info!(%beverage, index, "Added recipe row");
        Ok(index)
    }

    /// Remove the row at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an index past the end
    pub fn remove_ingredient(&self, beverage: Beverage, index: usize) -> AppResult<PlannerSnapshot> {
        let snapshot = self.apply_rows(beverage, |rows| {
            check_index(beverage, index, rows.len())?;
            rows.remove(index);
            Ok(())
        })?;
        info!(%beverage, index, "Removed recipe row");
        Ok(snapshot)
    }

    /// Replace the row at `index`
    ///
    /// A row with a blank name or unit removes the ingredient from the recipe.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an index past the end
    pub fn update_ingredient(
        &self,
        beverage: Beverage,
        index: usize,
        row: IngredientRow,
    ) -> AppResult<PlannerSnapshot> {
        let snapshot = self.apply_rows(beverage, |rows| {
            check_index(beverage, index, rows.len())?;
            rows[index] = row;
            Ok(())
        })?;
        info!(%beverage, index, "Updated recipe row");
        Ok(snapshot)
    }

    /// Set the per-batch amount of an ingredient, adding it if absent
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-finite amount
    pub fn set_amount(
        &self,
        beverage: Beverage,
        ingredient: Ingredient,
        amount: f64,
    ) -> AppResult<PlannerSnapshot> {
        if !amount.is_finite() {
            return Err(AppError::value_out_of_range(format!(
                "Amount for {ingredient} must be a finite number"
            ))
            .with_resource_id(ingredient.key()));
        }

        let mut snapshot = self.settings.load_snapshot()?;
        info!(%beverage, ingredient = %ingredient, amount, "Set recipe amount");
        snapshot.recipes.get_mut(beverage).set(ingredient, amount);
        self.settings.save_recipes(&snapshot.recipes)?;
        Ok(snapshot)
    }

    /// Assign a store category to an ingredient
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be read or written
    pub fn set_category(
        &self,
        ingredient: Ingredient,
        category: StoreCategory,
    ) -> AppResult<PlannerSnapshot> {
        let mut snapshot = self.settings.load_snapshot()?;
        info!(ingredient = %ingredient, %category, "Set store category");
        snapshot.category_map.insert(ingredient, category);
        self.settings.save_store_map(&snapshot.category_map)?;
        Ok(snapshot)
    }
}

fn check_index(beverage: Beverage, index: usize, len: usize) -> AppResult<()> {
    if index < len {
        return Ok(());
    }
    Err(AppError::not_found(format!("{beverage} recipe row {index}"))
        .with_details(serde_json::json!({ "index": index, "rows": len })))
}
