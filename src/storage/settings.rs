// ABOUTME: Typed load/save of recipes, package sizes, and store map over a storage backend
// ABOUTME: Missing or unreadable tables fall back to the built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::StorageBackend;
use crate::constants::{defaults, storage_keys};
use crate::errors::AppResult;
use crate::models::{CategoryMap, PackageSizes, PlannerSnapshot, Recipes};

/// Persisted configuration tables
#[derive(Debug, Clone)]
pub struct SettingsStore<B> {
    backend: B,
}

impl<B: StorageBackend> SettingsStore<B> {
    /// Wrap a storage backend
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Underlying backend
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn load_or<T, F>(&self, key: &str, fallback: F) -> AppResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(raw) = self.backend.get(key)? else {
            debug!(key, "No stored table, using defaults");
            return Ok(fallback());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "Stored table is malformed, using defaults");
                Ok(fallback())
            }
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.backend.set(key, &json)
    }

    /// Load recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn load_recipes(&self) -> AppResult<Recipes> {
        self.load_or(storage_keys::RECIPES, defaults::recipes)
    }

    /// Save recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn save_recipes(&self, recipes: &Recipes) -> AppResult<()> {
        self.store(storage_keys::RECIPES, recipes)
    }

    /// Load package sizes
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn load_package_sizes(&self) -> AppResult<PackageSizes> {
        self.load_or(storage_keys::PACKAGE_SIZES, defaults::package_sizes)
    }

    /// Save package sizes
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn save_package_sizes(&self, sizes: &PackageSizes) -> AppResult<()> {
        self.store(storage_keys::PACKAGE_SIZES, sizes)
    }

    /// Load store category assignments
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn load_store_map(&self) -> AppResult<CategoryMap> {
        self.load_or(storage_keys::STORE_MAP, defaults::store_map)
    }

    /// Save store category assignments
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn save_store_map(&self, map: &CategoryMap) -> AppResult<()> {
        self.store(storage_keys::STORE_MAP, map)
    }

    /// Read all three tables
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn load_snapshot(&self) -> AppResult<PlannerSnapshot> {
        Ok(PlannerSnapshot {
            recipes: self.load_recipes()?,
            package_sizes: self.load_package_sizes()?,
            category_map: self.load_store_map()?,
        })
    }

    /// Write all three tables
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn save_snapshot(&self, snapshot: &PlannerSnapshot) -> AppResult<()> {
        self.save_recipes(&snapshot.recipes)?;
        self.save_package_sizes(&snapshot.package_sizes)?;
        self.save_store_map(&snapshot.category_map)
    }

    /// Drop stored tables so the next load returns the defaults
    ///
    /// Templates are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn reset(&self) -> AppResult<()> {
        for key in storage_keys::CONFIGURATION {
            self.backend.remove(key)?;
        }
        info!("Configuration reset to defaults");
        Ok(())
    }
}
