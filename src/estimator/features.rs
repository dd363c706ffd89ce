//! Estimation inputs and outputs

use crate::error::{AmesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five inputs, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Area,
    YearBuilt,
    OverallQuality,
    GarageCars,
    BasementArea,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Area,
        Feature::YearBuilt,
        Feature::OverallQuality,
        Feature::GarageCars,
        Feature::BasementArea,
    ];

    /// Dataset column the feature is read from
    pub fn column(self) -> &'static str {
        match self {
            Feature::Area => "GrLivArea",
            Feature::YearBuilt => "YearBuilt",
            Feature::OverallQuality => "OverallQual",
            Feature::GarageCars => "GarageCars",
            Feature::BasementArea => "TotalBsmtSF",
        }
    }

    /// Field name used in inputs and error messages
    pub fn key(self) -> &'static str {
        match self {
            Feature::Area => "area",
            Feature::YearBuilt => "yearBuilt",
            Feature::OverallQuality => "overallQuality",
            Feature::GarageCars => "garageCars",
            Feature::BasementArea => "basementArea",
        }
    }

    /// Short Japanese caption for breakdown displays
    pub fn caption(self) -> &'static str {
        match self {
            Feature::Area => "居住面積",
            Feature::YearBuilt => "築年数",
            Feature::OverallQuality => "全体の品質",
            Feature::GarageCars => "ガレージ",
            Feature::BasementArea => "地下室",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Columns for all features, in declaration order
    pub fn columns() -> [&'static str; 5] {
        Feature::ALL.map(Feature::column)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One parsed estimation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Above-ground living area, sq ft
    pub area: f64,
    pub year_built: i32,
    /// 1-10
    pub overall_quality: i32,
    pub garage_cars: i32,
    /// Total basement area, sq ft
    pub basement_area: f64,
}

impl FeatureVector {
    pub fn new(area: f64, year_built: i32, overall_quality: i32, garage_cars: i32, basement_area: f64) -> Self {
        Self {
            area,
            year_built,
            overall_quality,
            garage_cars,
            basement_area,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Area => self.area,
            Feature::YearBuilt => self.year_built as f64,
            Feature::OverallQuality => self.overall_quality as f64,
            Feature::GarageCars => self.garage_cars as f64,
            Feature::BasementArea => self.basement_area,
        }
    }

    /// Values in [`Feature::ALL`] order
    pub fn to_array(&self) -> [f64; 5] {
        Feature::ALL.map(|f| self.get(f))
    }
}

/// Raw text of the five inputs as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInput {
    pub area: String,
    pub year_built: String,
    pub overall_quality: String,
    pub garage_cars: String,
    pub basement_area: String,
}

impl Default for FeatureInput {
    fn default() -> Self {
        Self {
            area: "1500".to_string(),
            year_built: "2000".to_string(),
            overall_quality: "5".to_string(),
            garage_cars: "2".to_string(),
            basement_area: "800".to_string(),
        }
    }
}

impl FeatureInput {
    pub fn get(&self, feature: Feature) -> &str {
        match feature {
            Feature::Area => &self.area,
            Feature::YearBuilt => &self.year_built,
            Feature::OverallQuality => &self.overall_quality,
            Feature::GarageCars => &self.garage_cars,
            Feature::BasementArea => &self.basement_area,
        }
    }

    pub fn set(&mut self, feature: Feature, value: impl Into<String>) {
        let slot = match feature {
            Feature::Area => &mut self.area,
            Feature::YearBuilt => &mut self.year_built,
            Feature::OverallQuality => &mut self.overall_quality,
            Feature::GarageCars => &mut self.garage_cars,
            Feature::BasementArea => &mut self.basement_area,
        };
        *slot = value.into();
    }

    /// Parse every field; the first unparsable one is reported
    pub fn parse(&self) -> Result<FeatureVector> {
        Ok(FeatureVector {
            area: parse_float(Feature::Area, &self.area)?,
            year_built: parse_int(Feature::YearBuilt, &self.year_built)?,
            overall_quality: parse_int(Feature::OverallQuality, &self.overall_quality)?,
            garage_cars: parse_int(Feature::GarageCars, &self.garage_cars)?,
            basement_area: parse_float(Feature::BasementArea, &self.basement_area)?,
        })
    }
}

fn parse_float(feature: Feature, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AmesError::invalid_input(feature.key(), raw)),
    }
}

fn parse_int(feature: Feature, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AmesError::invalid_input(feature.key(), raw))
}

/// Normalized per-feature weights, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportances {
    weights: [f64; 5],
}

impl FeatureImportances {
    /// Normalize raw non-negative weights so they sum to 1
    pub fn from_weights(raw: [f64; 5]) -> Result<Self> {
        if raw.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AmesError::ConfigError(format!(
                "importance weights must be finite and non-negative, got {:?}",
                raw
            )));
        }

        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(AmesError::ConfigError("importance weights sum to zero".to_string()));
        }

        Ok(Self {
            weights: raw.map(|w| w / total),
        })
    }

    /// Equal weight on every feature
    pub fn uniform() -> Self {
        Self { weights: [0.2; 5] }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.weights[f.index()]))
    }

    pub fn as_array(&self) -> [f64; 5] {
        self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Output of one estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub price: f64,
    pub importances: FeatureImportances,
}
