// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, data directory resolution, and deployment modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

//! Environment-based configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "BEVERAGE_PLANNER_DATA_DIR";

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Subdirectory created under the platform data directory
const APP_DIR_NAME: &str = "beverage-planner";

/// Fallback when no platform data directory exists
const FALLBACK_DATA_DIR: &str = "./data";

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the planner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Directory holding persisted tables and templates
    pub data_dir: PathBuf,
    /// Deployment environment
    pub environment: Environment,
}

impl PlannerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let environment = env::var(ENVIRONMENT_ENV)
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();

        debug!(data_dir = %data_dir.display(), %environment, "Loaded planner configuration");

        Self {
            data_dir,
            environment,
        }
    }

    /// Replace the data directory, e.g. from a `--data-dir` flag
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }
}

/// Platform data directory for the planner, or `./data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |base| base.join(APP_DIR_NAME),
    )
}
