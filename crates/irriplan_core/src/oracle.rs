//! The crop-growth simulator seam.

use crate::error::OracleError;
use crate::model::{IrrigationPolicy, SeasonConfig, SimulationOutput};

/// A crop-growth simulator treated as a black-box scoring function.
///
/// Implementations must be pure for fixed inputs: the optimizer calls
/// [`Oracle::run`] many times with the same season and different policies
/// and relies on repeatable scores. Each call is expected to be expensive
/// (a full season simulation), which is why trials run on parallel workers.
pub trait Oracle {
    /// Simulate one season under `policy` and report yield and irrigation
    /// totals.
    fn run(
        &self,
        season: &SeasonConfig,
        policy: &IrrigationPolicy,
    ) -> Result<SimulationOutput, OracleError>;
}
