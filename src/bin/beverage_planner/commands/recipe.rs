// ABOUTME: Recipe editing commands for beverage-planner
// ABOUTME: Shows rows by index and applies add, remove, set, amount, and category edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::{
    errors::AppResult,
    formatters::{format_recipe_rows, OutputFormat},
    models::{Beverage, Ingredient, PrepStep, Store, StoreCategory},
    services::{IngredientRow, RecipeEditor},
};

use super::Planner;

/// Fields to change on an existing row; `None` keeps the current value
pub struct RowChanges {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub amount: Option<f64>,
    pub store: Option<Store>,
    pub step: Option<PrepStep>,
}

impl RowChanges {
    fn apply(self, mut row: IngredientRow) -> IngredientRow {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(unit) = self.unit {
            row.unit = unit;
        }
        if let Some(amount) = self.amount {
            row.amount = amount;
        }
        if let Some(store) = self.store {
            row.store = store;
        }
        if let Some(step) = self.step {
            row.prep_step = step;
        }
        row
    }
}

/// Print recipe rows for one or both beverages
pub fn show(planner: &Planner, beverage: Option<Beverage>, format: &str) -> AppResult<()> {
    let editor = RecipeEditor::new(planner.settings());
    let format = OutputFormat::from_str_param(format);
    let beverages = beverage.map_or_else(|| Beverage::ALL.to_vec(), |b| vec![b]);

    let mut blocks = Vec::with_capacity(beverages.len());
    for beverage in beverages {
        let rows = editor.rows(beverage)?;
        let title = format!("{beverage} recipe (per batch)");
        blocks.push(format_recipe_rows(&title, &rows, format)?);
    }
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

/// Append a placeholder row
pub fn add(planner: &Planner, beverage: Beverage) -> AppResult<()> {
    let index = RecipeEditor::new(planner.settings()).add_ingredient(beverage)?;
    println!("Added row {index} to the {beverage} recipe");
    Ok(())
}

/// Remove the row at `index`
pub fn remove(planner: &Planner, beverage: Beverage, index: usize) -> AppResult<()> {
    RecipeEditor::new(planner.settings()).remove_ingredient(beverage, index)?;
    println!("Removed row {index} from the {beverage} recipe");
    Ok(())
}

/// Change fields of the row at `index`
pub fn set(planner: &Planner, beverage: Beverage, index: usize, changes: RowChanges) -> AppResult<()> {
    let editor = RecipeEditor::new(planner.settings());
    let current = editor.rows(beverage)?.get(index).cloned().unwrap_or_default();
    let row = changes.apply(current);
    let ingredient = row.ingredient();

    editor.update_ingredient(beverage, index, row)?;
    println!("Updated row {index} of the {beverage} recipe: {ingredient}");
    Ok(())
}

/// Set an amount by ingredient key
pub fn amount(planner: &Planner, beverage: Beverage, key: &str, amount: f64) -> AppResult<()> {
    let ingredient = Ingredient::parse(key);
    RecipeEditor::new(planner.settings()).set_amount(beverage, ingredient.clone(), amount)?;
    println!("{ingredient}: {amount} per {beverage} batch");
    Ok(())
}

/// Assign a store category by ingredient key
pub fn category(planner: &Planner, key: &str, category: StoreCategory) -> AppResult<()> {
    let ingredient = Ingredient::parse(key);
    RecipeEditor::new(planner.settings()).set_category(ingredient.clone(), category)?;
    println!("{ingredient}: {}", category.title());
    Ok(())
}
