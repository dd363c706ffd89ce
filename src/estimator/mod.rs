//! Price estimation
//!
//! Two strategies share the [`PriceModel`] capability:
//!
//! - [`WeightedSumModel`] - fixed coefficients and fixed importances
//! - [`ForestModel`] - random forest fitted once on the complete-case rows
//!
//! [`PriceEstimator`] wraps whichever one configuration selects and enforces
//! the floor price on every estimate.

pub mod features;
pub mod forest;
pub mod weighted;

pub use features::{Feature, FeatureImportances, FeatureInput, FeatureVector, PriceEstimate};
pub use forest::{ForestConfig, ForestModel};
pub use weighted::{FeatureWeights, WeightedSumConfig, WeightedSumModel};

use crate::dataset::HousingDataset;
use crate::error::{AmesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default minimum estimate
pub const DEFAULT_FLOOR_PRICE: f64 = 50_000.0;

/// Predict a price and report how much each feature matters
pub trait PriceModel: Send + Sync {
    /// Short identifier for logs and displays
    fn name(&self) -> &'static str;

    /// Unfloored price for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Normalized importances; constant for the model's lifetime
    fn importances(&self) -> &FeatureImportances;
}

/// Which strategy to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Random forest fitted on the dataset
    #[default]
    Forest,
    /// Fixed weighted-sum formula
    Weighted,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Forest => f.write_str("forest"),
            Strategy::Weighted => f.write_str("weighted"),
        }
    }
}

impl FromStr for Strategy {
    type Err = AmesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forest" | "random_forest" | "random-forest" => Ok(Strategy::Forest),
            "weighted" | "weighted_sum" | "weighted-sum" => Ok(Strategy::Weighted),
            other => Err(AmesError::ConfigError(format!("unknown strategy: {}", other))),
        }
    }
}

/// Estimator section of the application config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EstimatorConfig {
    pub strategy: Strategy,
    pub floor_price: f64,
    pub weighted: WeightedSumConfig,
    pub forest: ForestConfig,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            floor_price: DEFAULT_FLOOR_PRICE,
            weighted: WeightedSumConfig::default(),
            forest: ForestConfig::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_floor_price(mut self, floor: f64) -> Self {
        self.floor_price = floor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.floor_price.is_finite() || self.floor_price < 0.0 {
            return Err(AmesError::ConfigError(format!(
                "floor_price must be a non-negative number, got {}",
                self.floor_price
            )));
        }
        if self.forest.n_estimators == 0 {
            return Err(AmesError::ConfigError("forest.n_estimators must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// The selected strategy plus the floor price
pub struct PriceEstimator {
    model: Box<dyn PriceModel>,
    floor_price: f64,
}

impl fmt::Debug for PriceEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceEstimator")
            .field("model", &self.model.name())
            .field("floor_price", &self.floor_price)
            .finish()
    }
}

impl PriceEstimator {
    /// Wrap an already-built model
    pub fn new(model: Box<dyn PriceModel>, floor_price: f64) -> Self {
        Self { model, floor_price }
    }

    /// Build the configured strategy; the forest is fitted here
    pub fn from_config(config: &EstimatorConfig, dataset: &HousingDataset) -> Result<Self> {
        config.validate()?;

        let model: Box<dyn PriceModel> = match config.strategy {
            Strategy::Weighted => Box::new(WeightedSumModel::new(config.weighted.clone())?),
            Strategy::Forest => Box::new(ForestModel::fit(dataset, &config.forest)?),
        };

        tracing::info!(
            strategy = model.name(),
            floor_price = config.floor_price,
            "price estimator ready"
        );

        Ok(Self::new(model, config.floor_price))
    }

    /// Weighted-sum estimator that needs no dataset
    pub fn weighted(config: WeightedSumConfig, floor_price: f64) -> Result<Self> {
        Ok(Self::new(Box::new(WeightedSumModel::new(config)?), floor_price))
    }

    pub fn strategy_name(&self) -> &'static str {
        self.model.name()
    }

    pub fn floor_price(&self) -> f64 {
        self.floor_price
    }

    pub fn importances(&self) -> &FeatureImportances {
        self.model.importances()
    }

    /// Floored estimate for a parsed feature vector
    pub fn estimate(&self, features: &FeatureVector) -> Result<PriceEstimate> {
        let raw = self.model.predict(features)?;
        // Overflowing sums (inf, or inf - inf) still yield a finite price
        let price = if raw.is_nan() {
            self.floor_price
        } else {
            raw.clamp(self.floor_price, f64::MAX)
        };

        tracing::debug!(
            strategy = self.model.name(),
            ?features,
            raw,
            price,
            "estimate computed"
        );

        Ok(PriceEstimate {
            price,
            importances: self.model.importances().clone(),
        })
    }

    /// Parse raw user text, then estimate; nothing is computed on a parse failure
    pub fn estimate_input(&self, input: &FeatureInput) -> Result<PriceEstimate> {
        let features = input.parse()?;
        self.estimate(&features)
    }
}
