// ABOUTME: Shopping list planning command for beverage-planner
// ABOUTME: Clamps batch counts, aggregates the stored configuration, and prints the lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::{
    errors::AppResult,
    formatters::{format_shopping_lists, OutputFormat},
    models::BatchCounts,
};
use tracing::debug;

use super::Planner;

/// Print shopping lists for the given batch counts
pub fn run(planner: &Planner, coffee: i64, tea: i64, format: &str) -> AppResult<()> {
    let batches = BatchCounts::from_signed(coffee, tea);
    if i64::from(batches.coffee) != coffee || i64::from(batches.tea) != tea {
        debug!(coffee, tea, ?batches, "Batch counts clamped");
    }

    let lists = planner.shopping_lists(batches)?;
    let output = format_shopping_lists(&lists, batches, OutputFormat::from_str_param(format))?;
    println!("{output}");
    Ok(())
}
