// ABOUTME: Saved event templates: named snapshots of batch counts and configuration
// ABOUTME: Identified by a generated UUID and stamped with their creation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::beverage::BatchCounts;
use super::recipe::Recipes;
use super::snapshot::PlannerSnapshot;
use super::tables::{CategoryMap, PackageSizes};
use crate::errors::{AppError, AppResult};

/// Template contents before it is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventTemplate {
    /// Display name
    pub name: String,
    /// Coffee batches for the event
    pub coffee_batches: u32,
    /// Tea batches for the event
    pub tea_batches: u32,
    /// Recipes at save time
    pub recipes: Recipes,
    /// Package sizes at save time
    pub package_sizes: PackageSizes,
    /// Category assignments at save time
    pub store_map: CategoryMap,
}

impl NewEventTemplate {
    /// Capture batch counts and a configuration snapshot under a name
    #[must_use]
    pub fn from_snapshot(
        name: impl Into<String>,
        batches: BatchCounts,
        snapshot: &PlannerSnapshot,
    ) -> Self {
        Self {
            name: name.into(),
            coffee_batches: batches.coffee,
            tea_batches: batches.tea,
            recipes: snapshot.recipes.clone(),
            package_sizes: snapshot.package_sizes.clone(),
            store_map: snapshot.category_map.clone(),
        }
    }

    /// Reject templates without a usable name
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("Template name"));
        }
        Ok(())
    }

    /// Assign identity and creation time
    #[must_use]
    pub fn into_template(self, id: Uuid, created_at: DateTime<Utc>) -> EventTemplate {
        EventTemplate {
            id,
            name: self.name,
            coffee_batches: self.coffee_batches,
            tea_batches: self.tea_batches,
            recipes: self.recipes,
            package_sizes: self.package_sizes,
            store_map: self.store_map,
            created_at,
        }
    }
}

/// Persisted event template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    /// Generated identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Coffee batches for the event
    pub coffee_batches: u32,
    /// Tea batches for the event
    pub tea_batches: u32,
    /// Recipes at save time
    pub recipes: Recipes,
    /// Package sizes at save time
    pub package_sizes: PackageSizes,
    /// Category assignments at save time
    pub store_map: CategoryMap,
    /// When the template was saved
    pub created_at: DateTime<Utc>,
}

impl EventTemplate {
    /// Batch counts stored in the template
    #[must_use]
    pub const fn batch_counts(&self) -> BatchCounts {
        BatchCounts::new(self.coffee_batches, self.tea_batches)
    }

    /// Configuration stored in the template
    #[must_use]
    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            recipes: self.recipes.clone(),
            package_sizes: self.package_sizes.clone(),
            category_map: self.store_map.clone(),
        }
    }
}
