// ABOUTME: Event template persistence keyed by generated UUID
// ABOUTME: Templates are one JSON array under a single key; writes refuse an unreadable list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::StorageBackend;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{EventTemplate, NewEventTemplate};

/// Saved event templates
#[derive(Debug, Clone)]
pub struct TemplateStore<B> {
    backend: B,
}

impl<B: StorageBackend> TemplateStore<B> {
    /// Wrap a storage backend
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All templates in save order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn list(&self) -> AppResult<Vec<EventTemplate>> {
        let Some(raw) = self.backend.get(storage_keys::TEMPLATES)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(templates) => Ok(templates),
            Err(e) => {
                warn!(error = %e, "Stored templates are malformed, ignoring them");
                Ok(Vec::new())
            }
        }
    }

    /// Stored list for a read-modify-write
    ///
    /// Unlike `list`, a malformed list is an error so that a write never
    /// replaces entries it could not read.
    fn load_for_update(&self) -> AppResult<Vec<EventTemplate>> {
        let Some(raw) = self.backend.get(storage_keys::TEMPLATES)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            AppError::serialization(format!("Stored templates are malformed: {e}"))
                .with_resource_id(storage_keys::TEMPLATES)
        })
    }

    fn write_all(&self, templates: &[EventTemplate]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(templates)?;
        self.backend.set(storage_keys::TEMPLATES, &json)
    }

    /// Persist a template under a fresh id
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, `SerializationError`
    /// when the stored list cannot be parsed, or a storage error
    pub fn save(&self, template: NewEventTemplate) -> AppResult<EventTemplate> {
        template.validate()?;

        let saved = template.into_template(Uuid::new_v4(), Utc::now());
        let mut templates = self.load_for_update()?;
        templates.push(saved.clone());
        self.write_all(&templates)?;

        info!(template_id = %saved.id, name = %saved.name, "Saved event template");
        Ok(saved)
    }

    /// Template with the given id, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn load(&self, id: Uuid) -> AppResult<Option<EventTemplate>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    /// Remove a template; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the stored list cannot be parsed, or
    /// an error if the backend cannot be read or written
    pub fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut templates = self.load_for_update()?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Ok(false);
        }
        self.write_all(&templates)?;
        info!(template_id = %id, "Deleted event template");
        Ok(true)
    }
}
