// ABOUTME: beverage-planner CLI - shopping lists for coffee and tea service at events
// ABOUTME: Plans batches and edits recipes, package sizes, store categories, and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors
//!
//! Usage:
//! ```bash
//! # Shopping lists for 3 coffee and 2 tea batches
//! beverage-planner plan --coffee 3 --tea 2
//!
//! # Same lists as JSON
//! beverage-planner plan --coffee 3 --tea 2 --format json
//!
//! # Show and edit the tea recipe
//! beverage-planner recipe show --beverage tea
//! beverage-planner recipe set tea 4 --amount 75
//!
//! # Milk comes in 4 l jugs
//! beverage-planner package set "Milk (l)" 4
//!
//! # Save the current setup for next year's event
//! beverage-planner template save "Diwali 2025" --coffee 3 --tea 2
//! ```

mod commands;

use clap::{Parser, Subcommand};
use event_beverage_planner::{
    config::PlannerConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::{Beverage, PrepStep, Store, StoreCategory},
    services::PlannerService,
    storage::FileStorage,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use commands::Planner;

#[derive(Parser)]
#[command(
    name = "beverage-planner",
    version,
    about = "Event beverage planner",
    long_about = "Turns coffee and tea batch counts into shopping lists grouped by store and preparation step."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Batch counts; negative values are treated as zero
#[derive(clap::Args)]
struct BatchArgs {
    /// Coffee batches
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    coffee: i64,

    /// Tea batches
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    tea: i64,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print shopping lists for the given batch counts
    Plan {
        #[command(flatten)]
        batches: BatchArgs,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Recipe editing
    Recipe {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Package size editing
    Package {
        #[command(subcommand)]
        action: PackageCommand,
    },

    /// Event templates
    Template {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Show recipe rows with their indexes
    Show {
        /// Only this beverage (coffee, tea)
        #[arg(long)]
        beverage: Option<Beverage>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Append a placeholder ingredient row
    Add {
        /// Beverage (coffee, tea)
        beverage: Beverage,
    },

    /// Remove an ingredient row
    Remove {
        /// Beverage (coffee, tea)
        beverage: Beverage,

        /// Row index from `recipe show`
        index: usize,
    },

    /// Change fields of an ingredient row
    Set {
        /// Beverage (coffee, tea)
        beverage: Beverage,

        /// Row index from `recipe show`
        index: usize,

        /// Ingredient name (empty removes the row)
        #[arg(long)]
        name: Option<String>,

        /// Unit (empty removes the row)
        #[arg(long)]
        unit: Option<String>,

        /// Amount per batch
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        /// Store (costco, indian-store, amazon, other)
        #[arg(long)]
        store: Option<Store>,

        /// Preparation step (decoction, prep, n/a)
        #[arg(long)]
        step: Option<PrepStep>,
    },

    /// Set the per-batch amount of an ingredient by key, adding it if absent
    Amount {
        /// Beverage (coffee, tea)
        beverage: Beverage,

        /// Ingredient key, e.g. "Sugar (g)"
        key: String,

        /// Amount per batch
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Assign a store category to an ingredient key
    Category {
        /// Ingredient key, e.g. "Sugar (g)"
        key: String,

        /// Category (costcoDecoction, costcoPrep, indianStoreDecoction, indianStorePrep, amazonPrep, other)
        category: StoreCategory,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PackageCommand {
    /// List package sizes for every recipe ingredient
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Set the package size of an ingredient key
    Set {
        /// Ingredient key, e.g. "Milk (l)"
        key: String,

        /// Units per package
        #[arg(allow_negative_numbers = true)]
        size: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplateCommand {
    /// Save the current configuration and batch counts
    Save {
        /// Template name
        name: String,

        #[command(flatten)]
        batches: BatchArgs,
    },

    /// List saved templates
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show a template and the shopping lists it produces
    Show {
        /// Template ID
        id: Uuid,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Apply a template's configuration and print its shopping lists
    Load {
        /// Template ID
        id: Uuid,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Delete a template
    Delete {
        /// Template ID
        id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ConfigCommand {
    /// Restore default recipes, package sizes, and store map
    Reset,

    /// Print the stored configuration as JSON
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, resource = ?e.context.resource_id, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    let mut config = PlannerConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    debug!(data_dir = %config.data_dir.display(), environment = %config.environment, "Starting");

    let planner: Planner = PlannerService::new(Arc::new(FileStorage::new(&config.data_dir)));

    match cli.command {
        Command::Plan { batches, format } => {
            commands::plan::run(&planner, batches.coffee, batches.tea, &format)?;
        }
        Command::Recipe { action } => match action {
            RecipeCommand::Show { beverage, format } => {
                commands::recipe::show(&planner, beverage, &format)?;
            }
            RecipeCommand::Add { beverage } => commands::recipe::add(&planner, beverage)?,
            RecipeCommand::Remove { beverage, index } => {
                commands::recipe::remove(&planner, beverage, index)?;
            }
            RecipeCommand::Set {
                beverage,
                index,
                name,
                unit,
                amount,
                store,
                step,
            } => {
                let changes = commands::recipe::RowChanges {
                    name,
                    unit,
                    amount,
                    store,
                    step,
                };
                commands::recipe::set(&planner, beverage, index, changes)?;
            }
            RecipeCommand::Amount {
                beverage,
                key,
                amount,
            } => commands::recipe::amount(&planner, beverage, &key, amount)?,
            RecipeCommand::Category { key, category } => {
                commands::recipe::category(&planner, &key, category)?;
            }
        },
        Command::Package { action } => match action {
            PackageCommand::List { format } => commands::package::list(&planner, &format)?,
            PackageCommand::Set { key, size } => commands::package::set(&planner, &key, size)?,
        },
        Command::Template { action } => match action {
            TemplateCommand::Save { name, batches } => {
                commands::template::save(&planner, &name, batches.coffee, batches.tea)?;
            }
            TemplateCommand::List { format } => commands::template::list(&planner, &format)?,
            TemplateCommand::Show { id, format } => {
                commands::template::show(&planner, id, &format)?;
            }
            TemplateCommand::Load { id, format } => {
                commands::template::load(&planner, id, &format)?;
            }
            TemplateCommand::Delete { id } => commands::template::delete(&planner, id)?,
        },
        Command::Config { action } => match action {
            ConfigCommand::Reset => commands::config::reset(&planner)?,
            ConfigCommand::Show => commands::config::show(&planner)?,
        },
    }

    Ok(())
}
