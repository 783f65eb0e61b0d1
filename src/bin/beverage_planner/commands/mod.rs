// ABOUTME: Command implementations for beverage-planner
// ABOUTME: Plan, recipe, package, template, and config subcommands over the planner service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::{services::PlannerService, storage::FileStorage};
use std::sync::Arc;

pub mod config;
pub mod package;
pub mod plan;
pub mod recipe;
pub mod template;

/// Planner backed by the on-disk data directory
pub type Planner = PlannerService<Arc<FileStorage>>;
