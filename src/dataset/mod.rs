//! The loaded Ames Housing table
//!
//! [`HousingDataset`] owns the polars frame read once at startup and exposes
//! the read-only views the analyses and the estimator need: preview rows,
//! numeric columns, null counts and complete-case feature matrices.

pub mod loader;

pub use loader::{load_csv, DatasetLocator, DEFAULT_DATASET_PATH, MISSING_TOKEN};

use crate::error::{AmesError, Result};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Target column holding the sale price
pub const TARGET_COLUMN: &str = "SalePrice";

/// Name, dtype and null count of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
    pub numeric: bool,
}

/// Immutable view over the housing records
#[derive(Debug, Clone)]
pub struct HousingDataset {
    frame: DataFrame,
    source: Option<PathBuf>,
}

impl HousingDataset {
    /// Wrap an in-memory frame
    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame, source: None }
    }

    /// Read the CSV at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let frame = load_csv(path)?;
        Ok(Self {
            frame,
            source: Some(path.to_path_buf()),
        })
    }

    /// Resolve the locator and read the first existing candidate
    pub fn locate_and_load(locator: &DatasetLocator) -> Result<Self> {
        let path = locator.resolve()?;
        Self::load(&path)
    }

    /// Underlying frame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// File the dataset was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names in file order
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Names of the numeric columns, in file order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.frame
            .get_columns()
            .iter()
            .filter(|c| c.dtype().is_primitive_numeric())
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Per-column dtype and null count
    pub fn summary(&self) -> Vec<ColumnSummary> {
        self.frame
            .get_columns()
            .iter()
            .map(|c| ColumnSummary {
                name: c.name().to_string(),
                dtype: c.dtype().to_string(),
                null_count: c.null_count(),
                numeric: c.dtype().is_primitive_numeric(),
            })
            .collect()
    }

    /// Null count of every column, in file order
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.frame
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect()
    }

    /// A column cast to f64, missing cells as `None`
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| AmesError::ColumnNotFound(name.to_string()))?;

        if !column.dtype().is_primitive_numeric() {
            return Err(AmesError::DataError(format!(
                "column {} is {}, not numeric",
                name,
                column.dtype()
            )));
        }

        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().collect())
    }

    /// First `n` rows rendered as text, row-major; `None` marks a missing cell
    pub fn preview(&self, n: usize) -> Result<Vec<Vec<Option<String>>>> {
        let head = self.frame.head(Some(n));

        let columns: Vec<Vec<Option<String>>> = head
            .get_columns()
            .iter()
            .map(|c| -> Result<Vec<Option<String>>> {
                let as_text = c.as_materialized_series().cast(&DataType::String)?;
                let values = as_text
                    .str()?
                    .into_iter()
                    .map(|v| v.map(str::to_string))
                    .collect();
                Ok(values)
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = (0..head.height())
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();

        Ok(rows)
    }

    /// Rows with a value in every requested column, as a feature matrix
    /// (columns in `features` order) and target vector
    pub fn complete_cases(&self, features: &[&str], target: &str) -> Result<(Array2<f64>, Array1<f64>)> {
        let feature_cols: Vec<Vec<Option<f64>>> = features
            .iter()
            .map(|name| self.numeric_column(name))
            .collect::<Result<_>>()?;
        let target_col = self.numeric_column(target)?;

        let mut flat = Vec::with_capacity(self.height() * features.len());
        let mut y = Vec::with_capacity(self.height());

        for (r, target_value) in target_col.iter().enumerate() {
            let Some(target_value) = *target_value else {
                continue;
            };
            let row: Option<Vec<f64>> = feature_cols.iter().map(|col| col[r]).collect();
            if let Some(row) = row {
                flat.extend(row);
                y.push(target_value);
            }
        }

        let n_rows = y.len();
        tracing::debug!(
            complete = n_rows,
            dropped = self.height() - n_rows,
            "complete-case rows extracted"
        );

        let x = Array2::from_shape_vec((n_rows, features.len()), flat)?;
        Ok((x, Array1::from_vec(y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HousingDataset {
        let frame = df!(
            "Id" => &[1i64, 2, 3, 4],
            "GrLivArea" => &[Some(1000.0), Some(1500.0), None, Some(2000.0)],
            "MSZoning" => &[Some("RL"), None, Some("RM"), Some("RL")],
            "SalePrice" => &[Some(100000.0), Some(150000.0), Some(120000.0), None]
        )
        .unwrap();
        HousingDataset::from_frame(frame)
    }

    #[test]
    fn test_numeric_column_names() {
        let ds = sample();
        assert_eq!(ds.numeric_column_names(), vec!["Id", "GrLivArea", "SalePrice"]);
        assert_eq!(ds.column_names().len(), 4);
    }

    #[test]
    fn test_numeric_column_rejects_text() {
        let ds = sample();
        assert!(matches!(ds.numeric_column("MSZoning"), Err(AmesError::DataError(_))));
        assert!(matches!(ds.numeric_column("Nope"), Err(AmesError::ColumnNotFound(_))));
    }

    #[test]
    fn test_null_counts() {
        let ds = sample();
        let counts = ds.null_counts();
        assert_eq!(counts[0], ("Id".to_string(), 0));
        assert_eq!(counts[1], ("GrLivArea".to_string(), 1));
        assert_eq!(counts[2], ("MSZoning".to_string(), 1));
    }

    #[test]
    fn test_complete_cases_drops_incomplete_rows() {
        let ds = sample();
        let (x, y) = ds.complete_cases(&["GrLivArea"], TARGET_COLUMN).unwrap();
        assert_eq!(x.nrows(), 2);
        assert_eq!(x[[1, 0]], 1500.0);
        assert_eq!(y.to_vec(), vec![100000.0, 150000.0]);
    }

    #[test]
    fn test_preview_marks_missing() {
        let ds = sample();
        let rows = ds.preview(2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2].as_deref(), Some("RL"));
        assert_eq!(rows[1][2], None);
        assert_eq!(rows[0][0].as_deref(), Some("1"));
    }
}
