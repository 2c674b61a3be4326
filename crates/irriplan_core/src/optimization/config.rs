//! Optimization run configuration.

use serde::{Deserialize, Serialize};

/// Complete configuration for one aggregated optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationConfig {
    /// Independent trials to run and average
    pub num_trials: usize,

    /// Crop growth stages; every threshold vector carries one value per stage
    pub num_smts: usize,

    /// Seasonal irrigation cap (mm) passed into every evaluation
    pub max_irr_season: f64,

    /// Random candidate draws per trial when picking a starting point
    #[serde(default = "default_num_searches")]
    pub num_searches: usize,

    /// Base seed for reproducible runs; `None` draws OS entropy per trial
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_num_searches() -> usize {
    100
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            num_trials: 10,
            num_smts: 4,
            max_irr_season: 300.0,
            num_searches: default_num_searches(),
            seed: None,
        }
    }
}
