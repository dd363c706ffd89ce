//! State of the prediction screen between user actions

use crate::context::AppContext;
use crate::error::Result;
use crate::estimator::{FeatureInput, PriceEstimate};

/// Last accepted input and its estimate
///
/// A failed submission changes nothing, so the screen never shows a
/// half-updated result.
#[derive(Debug, Default, Clone)]
pub struct PredictionSession {
    last_input: Option<FeatureInput>,
    last_estimate: Option<PriceEstimate>,
    submissions: usize,
    rejected: usize,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and estimate; on success the session adopts the new result
    pub fn submit(&mut self, context: &AppContext, input: &FeatureInput) -> Result<&PriceEstimate> {
        self.submissions += 1;
        match context.estimate_input(input) {
            Ok(estimate) => {
                self.last_input = Some(input.clone());
                Ok(self.last_estimate.insert(estimate))
            }
            Err(err) => {
                self.rejected += 1;
                tracing::debug!(error = %err, "submission rejected");
                Err(err)
            }
        }
    }

    pub fn last_estimate(&self) -> Option<&PriceEstimate> {
        self.last_estimate.as_ref()
    }

    pub fn last_input(&self) -> Option<&FeatureInput> {
        self.last_input.as_ref()
    }

    /// Input to pre-fill the next prompt with
    pub fn next_defaults(&self) -> FeatureInput {
        self.last_input.clone().unwrap_or_default()
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
