//! Random forest fitted on the historical sales

use super::features::{Feature, FeatureImportances, FeatureVector};
use super::PriceModel;
use crate::dataset::{HousingDataset, TARGET_COLUMN};
use crate::error::{AmesError, Result};
use crate::training::{MaxFeatures, RandomForest};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Hyperparameters for the fitted strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub random_state: u64,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
    pub bootstrap: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            random_state: 42,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::All,
            bootstrap: true,
        }
    }
}

impl ForestConfig {
    pub fn with_n_estimators(mut self, n: usize) -> Self {
        self.n_estimators = n;
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    fn build(&self) -> RandomForest {
        let mut forest = RandomForest::new(self.n_estimators)
            .with_random_state(self.random_state)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
            .with_max_features(self.max_features)
            .with_bootstrap(self.bootstrap);
        if let Some(depth) = self.max_depth {
            forest = forest.with_max_depth(depth);
        }
        forest
    }
}

/// Forest over the five features, fitted once and read-only afterwards
#[derive(Debug, Clone)]
pub struct ForestModel {
    forest: RandomForest,
    importances: FeatureImportances,
    training_rows: usize,
}

impl ForestModel {
    /// Fit on the complete-case rows of `dataset`
    pub fn fit(dataset: &HousingDataset, config: &ForestConfig) -> Result<Self> {
        let start = Instant::now();
        let (x, y) = dataset.complete_cases(&Feature::columns(), TARGET_COLUMN)?;

        if x.nrows() == 0 {
            return Err(AmesError::TrainingError(
                "no complete rows to fit the price model on".to_string(),
            ));
        }

        let mut forest = config.build();
        forest.fit(&x, &y)?;

        let raw = forest
            .feature_importances()
            .map(|imp| {
                let mut out = [0.0; 5];
                for (slot, &v) in out.iter_mut().zip(imp.iter()) {
                    *slot = v;
                }
                out
            })
            .ok_or(AmesError::ModelNotFitted)?;

        // A constant target never splits; report equal weights rather than none
        let importances = FeatureImportances::from_weights(raw).unwrap_or_else(|_| {
            tracing::warn!("fitted forest has no split gain, using uniform importances");
            FeatureImportances::uniform()
        });

        tracing::info!(
            rows = x.nrows(),
            dropped = dataset.height() - x.nrows(),
            trees = forest.n_trees(),
            seed = config.random_state,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "price model fitted"
        );

        Ok(Self {
            forest,
            importances,
            training_rows: x.nrows(),
        })
    }

    /// Number of complete-case rows used for fitting
    pub fn training_rows(&self) -> usize {
        self.training_rows
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }
}

impl PriceModel for ForestModel {
    fn name(&self) -> &'static str {
        "random-forest"
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.forest.predict_one(&features.to_array())
    }

    fn importances(&self) -> &FeatureImportances {
        &self.importances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn dataset() -> HousingDataset {
        let frame = df!(
            "GrLivArea" => &[Some(800.0), Some(1200.0), Some(1600.0), Some(2000.0), Some(2400.0), None],
            "YearBuilt" => &[1950i64, 1960, 1970, 1980, 1990, 2000],
            "OverallQual" => &[4i64, 5, 6, 7, 8, 9],
            "GarageCars" => &[1i64, 1, 2, 2, 3, 3],
            "TotalBsmtSF" => &[400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0],
            "SalePrice" => &[100000.0, 140000.0, 180000.0, 220000.0, 260000.0, 300000.0]
        )
        .unwrap();
        HousingDataset::from_frame(frame)
    }

    #[test]
    fn test_fit_uses_complete_cases() {
        let model = ForestModel::fit(&dataset(), &ForestConfig::default().with_n_estimators(10)).unwrap();
        assert_eq!(model.training_rows(), 5);
        assert_eq!(model.forest().n_features(), 5);
        assert!((model.importances().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predictions_stay_in_target_range() {
        let model = ForestModel::fit(&dataset(), &ForestConfig::default().with_n_estimators(10)).unwrap();
        let price = model.predict(&FeatureVector::new(1500.0, 1975, 6, 2, 900.0)).unwrap();
        assert!((100000.0..=260000.0).contains(&price), "price {}", price);
    }

    #[test]
    fn test_constant_target_gives_uniform_importances() {
        let frame = df!(
            "GrLivArea" => &[800.0, 1200.0, 1600.0],
            "YearBuilt" => &[1950i64, 1960, 1970],
            "OverallQual" => &[4i64, 5, 6],
            "GarageCars" => &[1i64, 1, 2],
            "TotalBsmtSF" => &[400.0, 600.0, 800.0],
            "SalePrice" => &[100000.0, 100000.0, 100000.0]
        )
        .unwrap();
        let model = ForestModel::fit(&HousingDataset::from_frame(frame), &ForestConfig::default()).unwrap();
        assert_eq!(model.importances(), &FeatureImportances::uniform());
    }

    #[test]
    fn test_missing_feature_column() {
        let frame = df!("GrLivArea" => &[1.0], "SalePrice" => &[1.0]).unwrap();
        let err = ForestModel::fit(&HousingDataset::from_frame(frame), &ForestConfig::default()).unwrap_err();
        assert!(matches!(err, AmesError::ColumnNotFound(_)));
    }

    #[test]
    fn test_no_complete_rows() {
        let frame = df!(
            "GrLivArea" => &[None::<f64>, None],
            "YearBuilt" => &[1950i64, 1960],
            "OverallQual" => &[4i64, 5],
            "GarageCars" => &[1i64, 1],
            "TotalBsmtSF" => &[400.0, 600.0],
            "SalePrice" => &[100000.0, 120000.0]
        )
        .unwrap();
        let err = ForestModel::fit(&HousingDataset::from_frame(frame), &ForestConfig::default()).unwrap_err();
        assert!(matches!(err, AmesError::TrainingError(_)));
    }
}
