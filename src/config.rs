//! Application configuration

use crate::dataset::DatasetLocator;
use crate::error::{AmesError, Result};
use crate::estimator::{EstimatorConfig, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How much of each analysis the front-end shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown in the table preview
    pub preview_rows: usize,
    /// Columns shown in the correlation ranking
    pub top_correlations: usize,
    /// Columns shown in the missing-value chart
    pub top_missing: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_rows: 50,
            top_correlations: 10,
            top_missing: 15,
        }
    }
}

/// Top-level configuration, loadable from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetLocator,
    pub estimator: EstimatorConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config; absent fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AmesError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.estimator.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Use exactly this dataset file, no fallbacks
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = DatasetLocator::exact(path);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.estimator.strategy = strategy;
        self
    }
}
