//! Startup-built application state

use crate::analysis::{self, CorrelationEntry, MissingEntry};
use crate::config::AppConfig;
use crate::dataset::{HousingDataset, TARGET_COLUMN};
use crate::error::Result;
use crate::estimator::{FeatureInput, FeatureVector, PriceEstimate, PriceEstimator};

/// Dataset and estimator, built once and only read afterwards
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    dataset: HousingDataset,
    estimator: PriceEstimator,
}

impl AppContext {
    /// Locate and load the dataset, then build the configured estimator
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let dataset = HousingDataset::locate_and_load(&config.dataset)?;
        Self::with_dataset(config, dataset)
    }

    /// Build around an already-loaded dataset
    pub fn with_dataset(config: AppConfig, dataset: HousingDataset) -> Result<Self> {
        let estimator = PriceEstimator::from_config(&config.estimator, &dataset)?;

        tracing::info!(
            rows = dataset.height(),
            cols = dataset.width(),
            strategy = estimator.strategy_name(),
            "context initialized"
        );

        Ok(Self {
            config,
            dataset,
            estimator,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dataset(&self) -> &HousingDataset {
        &self.dataset
    }

    pub fn estimator(&self) -> &PriceEstimator {
        &self.estimator
    }

    /// Top correlations with the sale price, sized by the display config
    pub fn correlations(&self) -> Result<Vec<CorrelationEntry>> {
        analysis::correlate_with(&self.dataset, TARGET_COLUMN, self.config.display.top_correlations)
    }

    /// Every column with missing values, most affected first
    pub fn missing_values(&self) -> Vec<MissingEntry> {
        analysis::missing_values(&self.dataset)
    }

    pub fn estimate(&self, features: &FeatureVector) -> Result<PriceEstimate> {
        self.estimator.estimate(features)
    }

    pub fn estimate_input(&self, input: &FeatureInput) -> Result<PriceEstimate> {
        self.estimator.estimate_input(input)
    }
}
