// ABOUTME: Stored configuration commands for beverage-planner
// ABOUTME: Resets tables to defaults and prints the current snapshot as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::errors::AppResult;

use super::Planner;

/// Restore the default tables; templates are kept
pub fn reset(planner: &Planner) -> AppResult<()> {
    planner.settings().reset()?;
    println!("Recipes, package sizes, and store map reset to defaults");
    Ok(())
}

/// Print the stored configuration
pub fn show(planner: &Planner) -> AppResult<()> {
    let snapshot = planner.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
