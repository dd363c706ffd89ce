//! Ames Housing - dataset explorer and sale price estimator
//!
//! This crate loads the Ames, Iowa housing table once and offers:
//! - A translated preview of the raw records
//! - Correlation of every numeric column with the sale price
//! - Per-column missing-value counts
//! - Sale price estimates from five house features, with feature importances
//!
//! # Modules
//!
//! ## Data
//! - [`dataset`] - CSV loading, path fallbacks, column views
//! - [`labels`] - Japanese labels for column names and categorical codes
//! - [`analysis`] - Correlation ranking and missing-value statistics
//!
//! ## Estimation
//! - [`training`] - Regression tree and random forest
//! - [`estimator`] - Price strategies behind a common trait, floor price
//!
//! ## Application
//! - [`config`] - JSON-loadable settings
//! - [`context`] - State built once at startup
//! - [`session`] - Prediction screen state
//! - [`cli`] - Command-line interface

// Core error handling
pub mod error;

// Data
pub mod dataset;
pub mod labels;
pub mod analysis;

// Estimation
pub mod training;
pub mod estimator;

// Application
pub mod config;
pub mod context;
pub mod session;
pub mod cli;

pub use error::{AmesError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{AmesError, Result};

    pub use crate::dataset::{DatasetLocator, HousingDataset, TARGET_COLUMN};

    pub use crate::analysis::{correlate_with, missing_values, CorrelationEntry, MissingEntry, Severity};

    pub use crate::training::{DecisionTree, MaxFeatures, RandomForest};

    pub use crate::estimator::{
        EstimatorConfig, Feature, FeatureImportances, FeatureInput, FeatureVector, ForestConfig,
        PriceEstimate, PriceEstimator, PriceModel, Strategy, WeightedSumConfig,
    };

    pub use crate::config::{AppConfig, DisplayConfig};
    pub use crate::context::AppContext;
    pub use crate::session::PredictionSession;
}
