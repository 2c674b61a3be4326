//! Stochastic multi-start optimization of irrigation thresholds
//!
//! The pipeline has three layers, innermost first:
//! 1. [`Evaluator`] turns a candidate threshold vector into a score by
//!    running the simulator once and negating the reward (mean yield), so
//!    minimization surfaces the maximal expected yield.
//! 2. Each trial picks a starting point by pure random search
//!    ([`select_starting_point`]) and refines it with a derivative-free
//!    simplex descent ([`minimize`]).
//! 3. [`run_trials`] fans `num_trials` independent trials out over worker
//!    threads and averages the resulting vectors per growth stage.
//!
//! # Example
//!
//! ```ignore
//! use irriplan_core::optimization::{OptimizationConfig, run_trials};
//!
//! let config = OptimizationConfig {
//!     num_trials: 10,
//!     num_smts: 4,
//!     max_irr_season: 300.0,
//!     ..Default::default()
//! };
//! let summary = run_trials(&season, &oracle, &config)?;
//! println!("average thresholds: {:?}", summary.average_smts);
//! ```

mod aggregate;
mod config;
mod evaluator;
mod nelder_mead;
mod result;
mod seed;

// Re-export public types
pub use aggregate::run_trials;
pub use config::OptimizationConfig;
pub use evaluator::{Evaluation, Evaluator};
pub use nelder_mead::minimize;
pub use result::{OptimizationSummary, TrialOutcome};
pub use seed::select_starting_point;
