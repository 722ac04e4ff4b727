use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::DEFAULT_DATE_FORMAT;

/// Settings for a [`Catalog`](super::Catalog).
///
/// Missing fields fall back to their defaults when parsed from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// First id handed out by the catalog's id sequence.
    pub first_id: u32,
    /// Load the sample documents on construction.
    pub seed_defaults: bool,
    /// `chrono` format string for the table's Published column.
    pub date_format: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            first_id: 0,
            seed_defaults: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.first_id = first_id;
        self
    }

    pub fn with_seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.seed_defaults = seed_defaults;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Parse settings from a JSON document, e.g. one embedded by the host application.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid catalog config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
