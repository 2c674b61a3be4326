//! Shared oracles and season fixtures for tests.

use crate::climate::build_weather_series;
use crate::error::OracleError;
use crate::model::{IrrigationPolicy, SeasonConfig, SimulationOutput};
use crate::oracle::Oracle;

/// Oracle whose yield is simply the sum of the thresholds.
pub struct SumOracle;

impl Oracle for SumOracle {
    fn run(
        &self,
        _season: &SeasonConfig,
        policy: &IrrigationPolicy,
    ) -> Result<SimulationOutput, OracleError> {
        Ok(SimulationOutput {
            mean_yield_potential: policy.smts.iter().sum(),
            mean_seasonal_irrigation: policy.max_irr_season / 2.0,
        })
    }
}

/// Smooth single-basin oracle: yield peaks when every stage sits at
/// `optimum`.
pub struct QuadraticOracle {
    pub optimum: f64,
}

impl Oracle for QuadraticOracle {
    fn run(
        &self,
        _season: &SeasonConfig,
        policy: &IrrigationPolicy,
    ) -> Result<SimulationOutput, OracleError> {
        let penalty: f64 = policy
            .smts
            .iter()
            .map(|t| (t - self.optimum).powi(2))
            .sum();
        Ok(SimulationOutput {
            mean_yield_potential: 100.0 - penalty / 100.0,
            mean_seasonal_irrigation: 120.0,
        })
    }
}

/// Minimal one-month season.
pub fn test_season() -> SeasonConfig {
    let start = jiff::civil::date(2024, 5, 1);
    let end = jiff::civil::date(2024, 5, 31);
    let weather = build_weather_series(start, end, 15.0, 30.0, 0.5).unwrap();

    SeasonConfig {
        crop: "Maize".to_string(),
        soil: "SandyLoam".to_string(),
        season_start: start,
        season_end: end,
        initial_water_pct: 40.0,
        weather,
    }
}
