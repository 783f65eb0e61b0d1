// ABOUTME: Package size commands for beverage-planner
// ABOUTME: Lists sizes for recipe ingredients and updates a single size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::{
    errors::AppResult,
    formatters::{format_package_sizes, OutputFormat},
    models::Ingredient,
    services::{ingredient_sizes, set_package_size},
};

use super::Planner;

/// Print package sizes for every recipe ingredient
pub fn list(planner: &Planner, format: &str) -> AppResult<()> {
    let snapshot = planner.snapshot()?;
    let sizes = ingredient_sizes(&snapshot.recipes, &snapshot.package_sizes);
    println!(
        "{}",
        format_package_sizes(&sizes, OutputFormat::from_str_param(format))?
    );
    Ok(())
}

/// Set one package size
pub fn set(planner: &Planner, key: &str, size: f64) -> AppResult<()> {
    let ingredient = Ingredient::parse(key);
    set_package_size(planner.settings(), ingredient.clone(), size)?;
    println!("{ingredient}: {size} per package");
    Ok(())
}
