//! Column-wise statistics over the loaded dataset
//!
//! - [`correlation`] - Pearson correlation of every numeric column with the sale price
//! - [`missing`] - per-column missing-value counts with severity bands

pub mod correlation;
pub mod missing;

pub use correlation::{correlate_with, pearson, CorrelationEntry, STRONG_CORRELATION};
pub use missing::{missing_ratio, missing_values, MissingEntry, Severity};
