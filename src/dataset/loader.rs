//! Dataset file resolution and CSV loading

use crate::error::{AmesError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Relative location of the bundled dataset
pub const DEFAULT_DATASET_PATH: &str = "assets/house_prices.csv";

/// Token the Ames CSV uses for missing cells
pub const MISSING_TOKEN: &str = "NA";

/// Primary dataset path plus the ordered fallbacks tried when it is absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetLocator {
    /// Path tried first, usually relative to the working directory
    pub primary: PathBuf,
    /// Paths tried in order when `primary` does not exist
    pub fallbacks: Vec<PathBuf>,
}

impl Default for DatasetLocator {
    fn default() -> Self {
        let relative = PathBuf::from(DEFAULT_DATASET_PATH);
        let mut fallbacks = Vec::new();

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            fallbacks.push(exe_dir.join(&relative));
        }
        fallbacks.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(&relative));

        Self {
            primary: relative,
            fallbacks,
        }
    }
}

impl DatasetLocator {
    /// Locator with a single path and no fallbacks
    pub fn exact(path: impl Into<PathBuf>) -> Self {
        Self {
            primary: path.into(),
            fallbacks: Vec::new(),
        }
    }

    /// Append a fallback path
    pub fn with_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallbacks.push(path.into());
        self
    }

    /// Every path in search order
    pub fn candidates(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.primary.as_path()).chain(self.fallbacks.iter().map(PathBuf::as_path))
    }

    /// First candidate that exists on disk
    pub fn resolve(&self) -> Result<PathBuf> {
        for (i, candidate) in self.candidates().enumerate() {
            if candidate.is_file() {
                if i > 0 {
                    tracing::warn!(
                        primary = %self.primary.display(),
                        using = %candidate.display(),
                        "dataset not at primary path, using fallback"
                    );
                }
                return Ok(candidate.to_path_buf());
            }
        }

        Err(AmesError::DatasetNotFound {
            searched: self.candidates().map(Path::to_path_buf).collect(),
        })
    }
}

/// Load a headered CSV, reading `NA` and empty cells as null
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(AmesError::DatasetNotFound {
            searched: vec![path.to_path_buf()],
        });
    }

    let start = Instant::now();

    let parse_opts = CsvParseOptions::default()
        .with_null_values(Some(NullValues::AllColumnsSingle(MISSING_TOKEN.into())));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .with_parse_options(parse_opts)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset loaded"
    );

    Ok(df)
}
