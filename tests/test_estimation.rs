//! Integration tests for the price estimator, application context and session

mod common;

use ames_housing::prelude::*;
use ames_housing::estimator::DEFAULT_FLOOR_PRICE;

fn config(dir: &tempfile::TempDir, strategy: Strategy) -> AppConfig {
    let path = common::write_csv(dir.path(), "house_prices.csv");
    let mut config = AppConfig::new().with_data_path(path).with_strategy(strategy);
    config.estimator.forest = ForestConfig::default().with_n_estimators(20);
    config
}

fn context(strategy: Strategy) -> AppContext {
    let dir = tempfile::tempdir().unwrap();
    AppContext::initialize(config(&dir, strategy)).unwrap()
}

fn reference() -> FeatureVector {
    FeatureVector::new(1500.0, 2000, 5, 2, 800.0)
}

// ============================================================================
// Weighted-sum strategy
// ============================================================================

#[test]
fn test_weighted_reference_price() {
    let ctx = context(Strategy::Weighted);
    let estimate = ctx.estimate(&reference()).unwrap();
    assert_eq!(estimate.price, 257_000.0);
    assert_eq!(ctx.estimator().strategy_name(), "weighted-sum");
}

#[test]
fn test_weighted_never_below_floor() {
    let est = PriceEstimator::weighted(WeightedSumConfig::default(), DEFAULT_FLOOR_PRICE).unwrap();

    for area in [-5000.0, 0.0, 300.0, 1500.0, 6000.0] {
        for year in [1800, 1950, 2010] {
            for quality in [-3, 1, 10] {
                for garage in [0, 4] {
                    for basement in [-100.0, 0.0, 2000.0] {
                        let fv = FeatureVector::new(area, year, quality, garage, basement);
                        let price = est.estimate(&fv).unwrap().price;
                        assert!(price >= DEFAULT_FLOOR_PRICE, "{:?} -> {}", fv, price);
                    }
                }
            }
        }
    }
}

#[test]
fn test_weighted_floor_holds_at_numeric_limits() {
    let est = PriceEstimator::weighted(WeightedSumConfig::default(), DEFAULT_FLOOR_PRICE).unwrap();

    let floats = [-f64::MAX, -1.0, 0.0, f64::MAX];
    let ints = [i32::MIN, -1, 0, 1950, i32::MAX];

    for area in floats {
        for basement in floats {
            for year in ints {
                for quality in ints {
                    for garage in ints {
                        let fv = FeatureVector::new(area, year, quality, garage, basement);
                        let price = est.estimate(&fv).unwrap().price;
                        assert!(price.is_finite(), "{:?} -> {}", fv, price);
                        assert!(price >= DEFAULT_FLOOR_PRICE, "{:?} -> {}", fv, price);
                    }
                }
            }
        }
    }
}

#[test]
fn test_limit_inputs_parse_and_floor() {
    let ctx = context(Strategy::Weighted);

    let mut input = FeatureInput::default();
    input.set(Feature::YearBuilt, i32::MIN.to_string());
    input.set(Feature::OverallQuality, i32::MIN.to_string());
    input.set(Feature::GarageCars, i32::MIN.to_string());
    assert_eq!(ctx.estimate_input(&input).unwrap().price, DEFAULT_FLOOR_PRICE);

    let mut input = FeatureInput::default();
    input.set(Feature::Area, f64::MAX.to_string());
    input.set(Feature::YearBuilt, i32::MAX.to_string());
    assert_eq!(ctx.estimate_input(&input).unwrap().price, f64::MAX);
}

#[test]
fn test_weighted_monotone_in_each_feature() {
    let est = PriceEstimator::weighted(WeightedSumConfig::default(), DEFAULT_FLOOR_PRICE).unwrap();
    let base = reference();
    let price = |fv: FeatureVector| est.estimate(&fv).unwrap().price;

    let p0 = price(base);
    assert!(price(FeatureVector { area: base.area + 100.0, ..base }) > p0);
    assert!(price(FeatureVector { year_built: base.year_built + 1, ..base }) > p0);
    assert!(price(FeatureVector { overall_quality: base.overall_quality + 1, ..base }) > p0);
    assert!(price(FeatureVector { garage_cars: base.garage_cars + 1, ..base }) > p0);
    assert!(price(FeatureVector { basement_area: base.basement_area + 100.0, ..base }) > p0);
}

#[test]
fn test_importances_are_a_distribution() {
    for strategy in [Strategy::Weighted, Strategy::Forest] {
        let ctx = context(strategy);
        let imp = ctx.estimate(&reference()).unwrap().importances;
        assert!((imp.sum() - 1.0).abs() < 1e-9, "{:?}: {}", strategy, imp.sum());
        assert!(imp.iter().all(|(_, w)| w >= 0.0));
    }
}

// ============================================================================
// Forest strategy
// ============================================================================

#[test]
fn test_forest_is_default_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_csv(dir.path(), "house_prices.csv");
    let mut config = AppConfig::new().with_data_path(path);
    config.estimator.forest = ForestConfig::default().with_n_estimators(5);

    let ctx = AppContext::initialize(config).unwrap();
    assert_eq!(ctx.estimator().strategy_name(), "random-forest");
}

#[test]
fn test_forest_estimate_within_observed_prices() {
    let ctx = context(Strategy::Forest);
    let prices = ctx.dataset().numeric_column(TARGET_COLUMN).unwrap();
    let max = prices.iter().flatten().cloned().fold(f64::MIN, f64::max);
    let min = prices.iter().flatten().cloned().fold(f64::MAX, f64::min);

    let price = ctx.estimate(&reference()).unwrap().price;
    assert!(price >= min && price <= max, "{} not in [{}, {}]", price, min, max);

    let tiny = ctx.estimate(&FeatureVector::new(0.0, 1800, 0, 0, 0.0)).unwrap().price;
    assert!(tiny >= DEFAULT_FLOOR_PRICE);
}

#[test]
fn test_forest_floor_applies() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(&dir, Strategy::Forest);
    config.estimator.floor_price = 10_000_000.0;

    let ctx = AppContext::initialize(config).unwrap();
    assert_eq!(ctx.estimate(&reference()).unwrap().price, 10_000_000.0);
}

#[test]
fn test_forest_fit_is_deterministic() {
    let a = context(Strategy::Forest);
    let b = context(Strategy::Forest);

    assert_eq!(a.estimator().importances(), b.estimator().importances());

    for fv in [
        reference(),
        FeatureVector::new(900.0, 1960, 3, 1, 500.0),
        FeatureVector::new(2200.0, 2005, 9, 3, 900.0),
    ] {
        assert_eq!(a.estimate(&fv).unwrap(), b.estimate(&fv).unwrap());
    }
}

// ============================================================================
// Prediction session
// ============================================================================

#[test]
fn test_session_keeps_state_on_invalid_input() {
    let ctx = context(Strategy::Weighted);
    let mut session = PredictionSession::new();
    assert!(session.last_estimate().is_none());

    let good = FeatureInput::default();
    let price = session.submit(&ctx, &good).unwrap().price;
    assert_eq!(price, 257_000.0);

    let mut bad = FeatureInput::default();
    bad.set(Feature::Area, "abc");
    bad.set(Feature::OverallQuality, "9");

    match session.submit(&ctx, &bad) {
        Err(AmesError::InvalidInput { field, value }) => {
            assert_eq!(field, "area");
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }

    assert_eq!(session.last_estimate().unwrap().price, 257_000.0);
    assert_eq!(session.last_input(), Some(&good));
    assert_eq!(session.next_defaults(), good);
    assert_eq!(session.submissions(), 2);
    assert_eq!(session.rejected(), 1);
}

#[test]
fn test_session_replaces_estimate_on_success() {
    let ctx = context(Strategy::Weighted);
    let mut session = PredictionSession::new();

    session.submit(&ctx, &FeatureInput::default()).unwrap();

    let mut bigger = FeatureInput::default();
    bigger.set(Feature::Area, "2500");
    session.submit(&ctx, &bigger).unwrap();

    assert_eq!(session.last_estimate().unwrap().price, 257_000.0 + 1000.0 * 70.0);
    assert_eq!(session.next_defaults().area, "2500");
}

// ============================================================================
// Context failures
// ============================================================================

#[test]
fn test_context_fails_without_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new().with_data_path(dir.path().join("missing.csv"));
    assert!(matches!(
        AppContext::initialize(config),
        Err(AmesError::DatasetNotFound { .. })
    ));
}

#[test]
fn test_context_analyses_follow_display_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(&dir, Strategy::Weighted);
    config.display.top_correlations = 3;

    let ctx = AppContext::initialize(config).unwrap();
    assert_eq!(ctx.correlations().unwrap().len(), 3);
    assert_eq!(ctx.missing_values().len(), 3);
}
