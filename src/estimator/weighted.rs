//! Fixed-coefficient pricing formula

use super::features::{FeatureImportances, FeatureVector};
use super::PriceModel;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Per-feature weights as they appear in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub area: f64,
    pub year_built: f64,
    pub overall_quality: f64,
    pub garage_cars: f64,
    pub basement_area: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            area: 0.40,
            year_built: 0.20,
            overall_quality: 0.25,
            garage_cars: 0.10,
            basement_area: 0.05,
        }
    }
}

impl FeatureWeights {
    fn to_array(self) -> [f64; 5] {
        [
            self.area,
            self.year_built,
            self.overall_quality,
            self.garage_cars,
            self.basement_area,
        ]
    }
}

/// Coefficients of the weighted-sum formula
///
/// These are placeholders rather than a calibrated model, which is why they
/// live in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedSumConfig {
    /// Price per sq ft of living area
    pub per_sq_ft_area: f64,
    /// Price per sq ft of basement
    pub per_sq_ft_basement: f64,
    /// Price per garage car slot
    pub per_garage_car: f64,
    /// Price per overall quality point
    pub per_quality_point: f64,
    /// Price per year built after `base_year`
    pub per_year_after_base: f64,
    /// Years up to this one add nothing
    pub base_year: i32,
    /// Reported importances, normalized on load
    pub importances: FeatureWeights,
}

impl Default for WeightedSumConfig {
    fn default() -> Self {
        Self {
            per_sq_ft_area: 70.0,
            per_sq_ft_basement: 40.0,
            per_garage_car: 10_000.0,
            per_quality_point: 15_000.0,
            per_year_after_base: 500.0,
            base_year: 1950,
            importances: FeatureWeights::default(),
        }
    }
}

/// Deterministic pricing: a weighted sum of the five inputs
#[derive(Debug, Clone)]
pub struct WeightedSumModel {
    config: WeightedSumConfig,
    importances: FeatureImportances,
}

impl WeightedSumModel {
    pub fn new(config: WeightedSumConfig) -> Result<Self> {
        let importances = FeatureImportances::from_weights(config.importances.to_array())?;
        Ok(Self { config, importances })
    }

    pub fn config(&self) -> &WeightedSumConfig {
        &self.config
    }

    /// Formula value before any floor is applied
    pub fn raw_price(&self, features: &FeatureVector) -> f64 {
        let c = &self.config;
        let years_after_base = (f64::from(features.year_built) - f64::from(c.base_year)).max(0.0);

        features.area * c.per_sq_ft_area
            + features.basement_area * c.per_sq_ft_basement
            + features.garage_cars as f64 * c.per_garage_car
            + features.overall_quality as f64 * c.per_quality_point
            + years_after_base * c.per_year_after_base
    }
}

impl PriceModel for WeightedSumModel {
    fn name(&self) -> &'static str {
        "weighted-sum"
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok(self.raw_price(features))
    }

    fn importances(&self) -> &FeatureImportances {
        &self.importances
    }
}
