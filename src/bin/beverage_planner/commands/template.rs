// ABOUTME: Event template commands for beverage-planner
// ABOUTME: Save, list, show, load, and delete named configuration snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::{
    errors::AppResult,
    formatters::{format_shopping_lists, format_templates, OutputFormat},
    intelligence::aggregate_snapshot,
    models::BatchCounts,
};
use uuid::Uuid;

use super::Planner;

/// Save the current configuration under a name
pub fn save(planner: &Planner, name: &str, coffee: i64, tea: i64) -> AppResult<()> {
    let template = planner.save_template(name, BatchCounts::from_signed(coffee, tea))?;
    println!("Saved template '{}' ({})", template.name, template.id);
    Ok(())
}

/// Print saved templates
pub fn list(planner: &Planner, format: &str) -> AppResult<()> {
    let templates = planner.list_templates()?;
    println!(
        "{}",
        format_templates(&templates, OutputFormat::from_str_param(format))?
    );
    Ok(())
}

/// Print a template and the lists it would produce, without applying it
pub fn show(planner: &Planner, id: Uuid, format: &str) -> AppResult<()> {
    let template = planner.template(id)?;
    match OutputFormat::from_str_param(format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&template)?),
        OutputFormat::Text => {
            let batches = template.batch_counts();
            let lists = aggregate_snapshot(batches, &template.snapshot());
            println!(
                "{}\n\n{}",
                format_templates(std::slice::from_ref(&template), OutputFormat::Text)?,
                format_shopping_lists(&lists, batches, OutputFormat::Text)?
            );
        }
    }
    Ok(())
}

/// Apply a template and print the resulting shopping lists
pub fn load(planner: &Planner, id: Uuid, format: &str) -> AppResult<()> {
    let batches = planner.apply_template(id)?;
    let lists = planner.shopping_lists(batches)?;
    println!(
        "{}",
        format_shopping_lists(&lists, batches, OutputFormat::from_str_param(format))?
    );
    Ok(())
}

/// Delete a template
pub fn delete(planner: &Planner, id: Uuid) -> AppResult<()> {
    if planner.delete_template(id)? {
        println!("Deleted template {id}");
    } else {
        println!("No template with id {id}");
    }
    Ok(())
}
