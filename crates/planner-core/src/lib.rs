// ABOUTME: Core types and constants for the event beverage planner
// ABOUTME: Foundation crate with error handling, domain models, and default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the event
//! beverage planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Built-in default recipes, package sizes, and store categories
//! - **models**: Ingredients, recipes, configuration tables, shopping lists, templates

/// Unified error handling system with standard error codes
pub mod errors;

/// Default configuration values and storage keys
pub mod constants;

/// Core data models (Ingredient, Recipe, `ShoppingLists`, `EventTemplate`, etc.)
pub mod models;
