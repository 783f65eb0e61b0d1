// ABOUTME: Storage abstraction layer for persisted planner configuration and templates
// ABOUTME: Key-value backends (JSON files on disk, in-memory) behind a single trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! # Storage
//!
//! Persistence is a thin key-value layer: each table (recipes, package sizes,
//! store map, templates) is one JSON document under a fixed key. Typed access
//! lives in [`settings`] and [`templates`]; backends only move strings.

/// Typed access to the editable configuration tables
pub mod settings;
/// Event template persistence
pub mod templates;

pub use settings::SettingsStore;
pub use templates::TemplateStore;

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Core storage abstraction trait
///
/// Implementations store opaque JSON documents by key.
pub trait StorageBackend: Send + Sync {
    /// Read the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the document stored under `key`; absent keys are not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Use `root` as the data directory; it is created on first write
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::invalid_input(format!("Invalid storage key '{key}'"))
                .with_resource_id(key));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::from(e).with_resource_id(path.display().to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|e| AppError::from(e).with_resource_id(self.root.display().to_string()))?;

        // Write-then-rename so readers never see a truncated document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;

        debug!(key, path = %path.display(), bytes = value.len(), "Stored document");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::from(e).with_resource_id(path.display().to_string())),
        }
    }
}

/// In-process storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| AppError::storage("Memory storage lock poisoned"))?;
        Ok(documents.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.documents
            .write()
            .map_err(|_| AppError::storage("Memory storage lock poisoned"))?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.documents
            .write()
            .map_err(|_| AppError::storage("Memory storage lock poisoned"))?
            .remove(key);
        Ok(())
    }
}
