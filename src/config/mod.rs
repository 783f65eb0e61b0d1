// ABOUTME: Configuration management module for planner runtime settings
// ABOUTME: Resolves the data directory and deployment environment from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors
//! Configuration module for the event beverage planner
//!
//! Only runtime settings live here. Recipes, package sizes, and store
//! categories are user data owned by the storage layer.

/// Environment-driven runtime configuration
pub mod environment;

pub use environment::{Environment, PlannerConfig};
