//! Pearson correlation of numeric columns against a target

use crate::dataset::HousingDataset;
use crate::error::{AmesError, Result};
use serde::{Deserialize, Serialize};

/// Correlation above which a column is highlighted
pub const STRONG_CORRELATION: f64 = 0.7;

/// One ranked column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub column: String,
    pub coefficient: f64,
    /// Number of rows where both the column and the target are present
    pub observations: usize,
}

impl CorrelationEntry {
    pub fn is_strong(&self) -> bool {
        self.coefficient > STRONG_CORRELATION
    }
}

/// Pearson r over the pairs where both sides are present.
/// `None` with fewer than two pairs or a constant side.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<(f64, usize)> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let x_mean = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let y_mean = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;

    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for &(xi, yi) in &pairs {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sum_xy += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    let denom = (sum_x2 * sum_y2).sqrt();
    if denom <= f64::EPSILON {
        return None;
    }

    Some(((sum_xy / denom).clamp(-1.0, 1.0), n))
}

/// Numeric columns ranked by correlation with `target`, strongest positive
/// first, target excluded, at most `top_n` entries
pub fn correlate_with(dataset: &HousingDataset, target: &str, top_n: usize) -> Result<Vec<CorrelationEntry>> {
    let numeric = dataset.numeric_column_names();
    if !numeric.iter().any(|c| c == target) {
        return Err(AmesError::ColumnNotFound(target.to_string()));
    }

    let target_values = dataset.numeric_column(target)?;

    let mut entries = Vec::with_capacity(numeric.len());
    for column in numeric.iter().filter(|c| c.as_str() != target) {
        let values = dataset.numeric_column(column)?;
        match pearson(&values, &target_values) {
            Some((coefficient, observations)) => entries.push(CorrelationEntry {
                column: column.clone(),
                coefficient,
                observations,
            }),
            None => tracing::debug!(column = %column, "correlation undefined, skipped"),
        }
    }

    // Stable sort keeps file order among equal coefficients
    entries.sort_by(|a, b| b.coefficient.total_cmp(&a.coefficient));
    entries.truncate(top_n);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_pearson_perfect() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let y = [Some(2.0), Some(4.0), Some(6.0)];
        let (r, n) = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(n, 3);

        let y_neg = [Some(3.0), Some(2.0), Some(1.0)];
        assert!((pearson(&x, &y_neg).unwrap().0 + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_pairwise_complete() {
        let x = [Some(1.0), None, Some(2.0), Some(3.0)];
        let y = [Some(1.0), Some(100.0), Some(2.0), Some(3.0)];
        let (r, n) = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_pearson_undefined() {
        assert!(pearson(&[Some(1.0)], &[Some(1.0)]).is_none());
        assert!(pearson(&[Some(1.0), Some(1.0)], &[Some(1.0), Some(2.0)]).is_none());
    }

    #[test]
    fn test_correlate_with_ranks_and_excludes_target() {
        let frame = df!(
            "Id" => &[1.0, 2.0, 3.0, 4.0, 5.0],
            "Down" => &[5.0, 4.0, 3.0, 2.0, 1.0],
            "Flat" => &[1.0, 1.0, 1.0, 1.0, 1.0],
            "Noise" => &[1.0, 3.0, 2.0, 5.0, 4.0],
            "Label" => &["a", "b", "c", "d", "e"],
            "SalePrice" => &[10.0, 20.0, 30.0, 40.0, 50.0]
        )
        .unwrap();
        let ds = HousingDataset::from_frame(frame);

        let ranked = correlate_with(&ds, "SalePrice", 10).unwrap();
        let names: Vec<&str> = ranked.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(names, vec!["Id", "Noise", "Down"]);
        assert!(ranked[0].is_strong());
        assert!(!ranked[2].is_strong());

        let top1 = correlate_with(&ds, "SalePrice", 1).unwrap();
        assert_eq!(top1.len(), 1);
    }

    #[test]
    fn test_correlate_with_unknown_target() {
        let frame = df!("a" => &[1.0, 2.0]).unwrap();
        let ds = HousingDataset::from_frame(frame);
        assert!(matches!(
            correlate_with(&ds, "SalePrice", 10),
            Err(AmesError::ColumnNotFound(_))
        ));
    }
}
