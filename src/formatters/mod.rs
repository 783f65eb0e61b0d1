// ABOUTME: Output format abstraction for rendering planner results on the command line
// ABOUTME: Supports human-readable text (default) and pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! Output Format Abstraction Layer
//!
//! Every command renders through one of these functions so that text and
//! JSON output stay in step.
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, one heading per non-empty store category
//! - **JSON**: Pretty-printed, for scripts and other tools
//!
//! ## Usage
//!
//! ```rust
//! use event_beverage_planner::formatters::{format_shopping_lists, OutputFormat};
//! use event_beverage_planner::intelligence::aggregate_snapshot;
//! use event_beverage_planner::models::{BatchCounts, PlannerSnapshot};
//!
//! let batches = BatchCounts::new(1, 1);
//! let lists = aggregate_snapshot(batches, &PlannerSnapshot::default());
//! let text = format_shopping_lists(&lists, batches, OutputFormat::Text)?;
//! assert!(text.starts_with("Costco - For Decoction"));
//! # Ok::<(), event_beverage_planner::errors::AppError>(())
//! ```

use serde::Serialize;
use std::fmt;

use crate::errors::AppResult;
use crate::models::{BatchCounts, EventTemplate, ShoppingListItem, ShoppingLists};
use crate::services::{IngredientRow, IngredientSize};

/// Printed instead of shopping lists when no batches are planned
pub const EMPTY_PLAN_HINT: &str =
    "Enter the number of coffee or tea batches to generate shopping lists.";

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn to_json<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// One shopping list line
#[must_use]
pub fn format_item(item: &ShoppingListItem) -> String {
    let amount = format!("{:.2} {}", item.total_amount, item.unit);
    format!(
        "  {}  Total: {}  {} packages",
        item.ingredient,
        amount.trim_end(),
        item.packages
    )
}

/// Shopping lists as text: non-empty categories only, in display order
///
/// With no batches planned the lists are replaced by a hint.
#[must_use]
pub fn shopping_lists_text(lists: &ShoppingLists, batches: BatchCounts) -> String {
    if batches.is_empty() {
        return EMPTY_PLAN_HINT.to_owned();
    }

    lists
        .non_empty()
        .map(|(category, items)| {
            let mut block = vec![category.title().to_owned()];
            block.extend(items.iter().map(format_item));
            block.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render shopping lists
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_shopping_lists(
    lists: &ShoppingLists,
    batches: BatchCounts,
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(shopping_lists_text(lists, batches)),
        OutputFormat::Json => to_json(lists),
    }
}

/// Render recipe rows with their row index
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_recipe_rows(
    title: &str,
    rows: &[IngredientRow],
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Text => {
            let mut lines = vec![title.to_owned()];
            lines.extend(rows.iter().enumerate().map(|(index, row)| {
                format!(
                    "  [{index}] {}  {} {}  {} / {}",
                    row.name, row.amount, row.unit, row.store, row.prep_step
                )
            }));
            Ok(lines.join("\n"))
        }
    }
}

/// Render package sizes
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_package_sizes(sizes: &[IngredientSize], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(sizes),
        OutputFormat::Text => Ok(sizes
            .iter()
            .map(|entry| match entry.size {
                Some(size) => format!("{}  {size}", entry.ingredient),
                None => format!("{}  (unset)", entry.ingredient),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render a template summary list
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_templates(templates: &[EventTemplate], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(templates),
        OutputFormat::Text if templates.is_empty() => Ok("No saved templates.".to_owned()),
        OutputFormat::Text => Ok(templates
            .iter()
            .map(|t| {
                format!(
                    "{}  {}  coffee: {}  tea: {}  saved {}",
                    t.id,
                    t.name,
                    t.coffee_batches,
                    t.tea_batches,
                    t.created_at.format("%Y-%m-%d %H:%M")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
