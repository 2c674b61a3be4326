//! Irrigation-threshold optimization library
//!
//! Searches for per-growth-stage soil-moisture thresholds (SMTs) that
//! maximize expected crop yield over a season, treating the crop-growth
//! simulator as a black-box oracle. The pipeline is stochastic multi-start:
//! random candidate sampling picks a starting point, Nelder-Mead refines it,
//! and many independent trials run in parallel and are averaged per stage.
//!
//! # Example
//!
//! ```ignore
//! use irriplan_core::optimization::{OptimizationConfig, run_trials};
//! use irriplan_core::safety::{MIN_SAFE_SMT, enforce_element_floor};
//!
//! let config = OptimizationConfig {
//!     num_trials: 10,
//!     num_smts: 4,
//!     max_irr_season: 300.0,
//!     ..Default::default()
//! };
//! let summary = run_trials(&season, &oracle, &config)?;
//! let safe_smts = enforce_element_floor(&summary.average_smts, MIN_SAFE_SMT);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod climate;
pub mod error;
pub mod optimization;
pub mod oracle;
pub mod safety;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use oracle::Oracle;
