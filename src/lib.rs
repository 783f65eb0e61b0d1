// ABOUTME: Main library entry point for the event beverage planner
// ABOUTME: Wires configuration, storage, editing services, and output formatting together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

#![deny(unsafe_code)]

//! # Event Beverage Planner
//!
//! Plans the shopping for an event serving coffee and tea. Recipes describe
//! one batch of each beverage; given how many batches are needed, the planner
//! totals every ingredient, rounds up to whole packages, and groups the
//! results by the store they are bought from and the step they are used in.
//!
//! ## Architecture
//!
//! - **Models** (`planner-core`): ingredients, recipes, tables, templates
//! - **Intelligence** (`planner-intelligence`): the pure aggregation engine
//! - **Storage**: key-value persistence of the editable tables and templates
//! - **Services**: read-modify-write edits and template handling
//! - **Formatters**: text and JSON rendering for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use event_beverage_planner::models::BatchCounts;
//! use event_beverage_planner::services::PlannerService;
//! use event_beverage_planner::storage::MemoryStorage;
//!
//! let planner = PlannerService::new(Arc::new(MemoryStorage::new()));
//! let lists = planner.shopping_lists(BatchCounts::new(2, 3))?;
//! assert!(!lists.is_empty());
//! # Ok::<(), event_beverage_planner::errors::AppError>(())
//! ```

/// Runtime configuration from the environment
pub mod config;

/// Text and JSON rendering of planner results
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Editing and planning services
pub mod services;

/// Persistence of configuration tables and templates
pub mod storage;

pub use planner_core::{constants, errors, models};
pub use planner_intelligence as intelligence;
