//! Missing-value counts per column

use crate::dataset::HousingDataset;
use serde::{Deserialize, Serialize};

/// How badly a column is affected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Band for an absolute missing count: > 1000 high, > 100 medium
    pub fn from_count(count: usize) -> Self {
        if count > 1000 {
            Severity::High
        } else if count > 100 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub column: String,
    pub count: usize,
    /// Fraction of all rows, 0.0..=1.0
    pub share: f64,
    pub severity: Severity,
}

/// Columns with at least one missing cell, most affected first
pub fn missing_values(dataset: &HousingDataset) -> Vec<MissingEntry> {
    let rows = dataset.height();

    let mut entries: Vec<MissingEntry> = dataset
        .null_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(column, count)| MissingEntry {
            column,
            count,
            share: if rows > 0 { count as f64 / rows as f64 } else { 0.0 },
            severity: Severity::from_count(count),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Overall share of missing cells in the table
pub fn missing_ratio(dataset: &HousingDataset) -> f64 {
    let cells = dataset.height() * dataset.width();
    if cells == 0 {
        return 0.0;
    }
    let missing: usize = dataset.null_counts().iter().map(|(_, c)| c).sum();
    missing as f64 / cells as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_count(1), Severity::Low);
        assert_eq!(Severity::from_count(100), Severity::Low);
        assert_eq!(Severity::from_count(101), Severity::Medium);
        assert_eq!(Severity::from_count(1000), Severity::Medium);
        assert_eq!(Severity::from_count(1001), Severity::High);
    }

    #[test]
    fn test_missing_values_sorted_and_filtered() {
        let frame = df!(
            "Complete" => &[1.0, 2.0, 3.0, 4.0],
            "One" => &[Some(1.0), None, Some(3.0), Some(4.0)],
            "Three" => &[None, None, Some("x"), None],
            "AlsoOne" => &[Some(1i64), Some(2), Some(3), None]
        )
        .unwrap();
        let ds = HousingDataset::from_frame(frame);

        let entries = missing_values(&ds);
        let names: Vec<&str> = entries.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(names, vec!["Three", "One", "AlsoOne"]);
        assert_eq!(entries[0].count, 3);
        assert!((entries[0].share - 0.75).abs() < 1e-12);

        assert!((missing_ratio(&ds) - 5.0 / 16.0).abs() < 1e-12);
    }
}
