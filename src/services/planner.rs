// ABOUTME: Planner service combining persisted configuration with the shopping list aggregator
// ABOUTME: Computes shopping lists and saves, applies, and deletes event templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use planner_intelligence::aggregate_snapshot;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{BatchCounts, EventTemplate, NewEventTemplate, PlannerSnapshot, ShoppingLists};
use crate::storage::{SettingsStore, StorageBackend, TemplateStore};

/// Entry point for planning an event
#[derive(Debug, Clone)]
pub struct PlannerService<B> {
    settings: SettingsStore<B>,
    templates: TemplateStore<B>,
}

impl<B: StorageBackend + Clone> PlannerService<B> {
    /// Build the service over a shared backend
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            settings: SettingsStore::new(backend.clone()),
            templates: TemplateStore::new(backend),
        }
    }
}

impl<B: StorageBackend> PlannerService<B> {
    /// Configuration tables
    #[must_use]
    pub const fn settings(&self) -> &SettingsStore<B> {
        &self.settings
    }

    /// Saved templates
    #[must_use]
    pub const fn templates(&self) -> &TemplateStore<B> {
        &self.templates
    }

    /// Current configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be read
    pub fn snapshot(&self) -> AppResult<PlannerSnapshot> {
        self.settings.load_snapshot()
    }

    /// Shopping lists for the current configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be read
    pub fn shopping_lists(&self, batches: BatchCounts) -> AppResult<ShoppingLists> {
        let snapshot = self.snapshot()?;
        Ok(aggregate_snapshot(batches, &snapshot))
    }

    /// Save the current configuration and batch counts as a template
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub fn save_template(&self, name: &str, batches: BatchCounts) -> AppResult<EventTemplate> {
        let snapshot = self.snapshot()?;
        self.templates
            .save(NewEventTemplate::from_snapshot(name.trim(), batches, &snapshot))
    }

    /// Template by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no template has this id
    pub fn template(&self, id: Uuid) -> AppResult<EventTemplate> {
        self.templates.load(id)?.ok_or_else(|| {
            AppError::not_found(format!("Template {id}")).with_resource_id(id.to_string())
        })
    }

    /// Replace the configuration with a template's tables
    ///
    /// Returns the template's batch counts so the caller can plan with them.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no template has this id
    pub fn apply_template(&self, id: Uuid) -> AppResult<BatchCounts> {
        let template = self.template(id)?;
        self.settings.save_snapshot(&template.snapshot())?;

        let batches = template.batch_counts();
        info!(
            template_id = %id,
            name = %template.name,
            coffee = batches.coffee,
            tea = batches.tea,
            "Applied event template"
        );
        Ok(batches)
    }

    /// Saved templates in save order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn list_templates(&self) -> AppResult<Vec<EventTemplate>> {
        let templates = self.templates.list()?;
        debug!(count = templates.len(), "Listed event templates");
        Ok(templates)
    }

    /// Delete a template; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written
    pub fn delete_template(&self, id: Uuid) -> AppResult<bool> {
        self.templates.delete(id)
    }
}
