//! Trial and aggregation result types.

use serde::{Deserialize, Serialize};

use crate::error::TrialError;

/// The threshold vector produced by one completed trial.
///
/// Lives only long enough to be collected by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub smts: Vec<f64>,
}

/// Outcome of a full aggregated run.
#[derive(Debug, Clone)]
pub struct OptimizationSummary {
    /// Element-wise mean of the completed trials' threshold vectors
    pub average_smts: Vec<f64>,

    /// Trials that contributed to the average
    pub completed: usize,

    /// Trials dropped from the average
    pub failures: Vec<TrialError>,
}
