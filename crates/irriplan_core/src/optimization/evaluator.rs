//! Objective evaluation: one simulator run per candidate threshold vector.

use crate::error::OracleError;
use crate::model::{IrrigationPolicy, SeasonConfig};
use crate::oracle::Oracle;

/// Diagnostic view of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Mean yield potential (tonne/ha)
    pub yield_potential: f64,
    /// Mean seasonal irrigation (mm)
    pub seasonal_irrigation: f64,
    /// Scalar objective the optimization maximizes
    pub reward: f64,
}

/// Scores candidate threshold vectors against a fixed season.
///
/// Holds only borrows, so one evaluator per trial is cheap; the expensive
/// part is the simulator call behind [`Oracle::run`].
pub struct Evaluator<'a, O: ?Sized> {
    season: &'a SeasonConfig,
    oracle: &'a O,
}

impl<'a, O: Oracle + ?Sized> Evaluator<'a, O> {
    pub fn new(season: &'a SeasonConfig, oracle: &'a O) -> Self {
        Self { season, oracle }
    }

    /// Score to MINIMIZE: the negated reward, so that descending on the
    /// score surfaces the maximal expected yield.
    ///
    /// A simulator failure propagates; the caller's trial fails rather than
    /// continuing on a substituted score.
    pub fn score(&self, smts: &[f64], max_irr_season: f64) -> Result<f64, OracleError> {
        Ok(-self.score_raw(smts, max_irr_season)?.reward)
    }

    /// Full (yield, irrigation, reward) triple for diagnostics.
    ///
    /// Irrigation volume is carried through but does not enter the reward.
    pub fn score_raw(&self, smts: &[f64], max_irr_season: f64) -> Result<Evaluation, OracleError> {
        let policy = IrrigationPolicy {
            smts: smts.to_vec(),
            max_irr_season,
        };
        let output = self.oracle.run(self.season, &policy)?;
        Ok(Evaluation {
            yield_potential: output.mean_yield_potential,
            seasonal_irrigation: output.mean_seasonal_irrigation,
            reward: output.mean_yield_potential,
        })
    }
}
