//! Subprocess adapter for the crop-growth simulator.
//!
//! The simulator is any executable that reads one JSON request on stdin
//! and answers with one JSON object on stdout. One process is spawned per
//! evaluation; the optimizer treats each call as pure for fixed inputs.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use irriplan_core::Oracle;
use irriplan_core::error::OracleError;
use irriplan_core::model::{IrrigationPolicy, SeasonConfig, SimulationOutput};

/// Request handed to the simulator, one per evaluation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulatorRequest<'a> {
    crop: &'a str,
    soil: &'a str,
    planting_date: String,
    harvest_date: String,
    weather_file: String,
    initial_water_content: f64,
    smts: &'a [f64],
    max_irr_season: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimulatorResponse {
    mean_yield_potential: f64,
    mean_seasonal_irrigation: f64,
}

/// Runs the configured simulator command once per oracle call.
pub struct CommandOracle {
    program: PathBuf,
    args: Vec<String>,
    weather_file: PathBuf,
}

impl CommandOracle {
    pub fn new(program: PathBuf, args: Vec<String>, weather_file: PathBuf) -> Self {
        Self {
            program,
            args,
            weather_file,
        }
    }
}

impl Oracle for CommandOracle {
    fn run(
        &self,
        season: &SeasonConfig,
        policy: &IrrigationPolicy,
    ) -> Result<SimulationOutput, OracleError> {
        let request = SimulatorRequest {
            crop: &season.crop,
            soil: &season.soil,
            planting_date: season.season_start.to_string(),
            harvest_date: season.season_end.to_string(),
            weather_file: self.weather_file.display().to_string(),
            initial_water_content: season.initial_water_pct,
            smts: &policy.smts,
            max_irr_season: policy.max_irr_season,
        };
        let payload = serde_json::to_vec(&request)
            .map_err(|e| OracleError::Simulator(format!("encoding request: {e}")))?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                OracleError::Simulator(format!("spawning {}: {e}", self.program.display()))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&payload)
                .map_err(|e| OracleError::Simulator(format!("writing request: {e}")))?;
            // Dropping stdin closes the pipe so the simulator sees EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| OracleError::Simulator(format!("waiting for simulator: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OracleError::Simulator(format!(
                "exit {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let response: SimulatorResponse = serde_json::from_slice(&output.stdout)
            .map_err(|e| OracleError::MalformedOutput(e.to_string()))?;

        Ok(SimulationOutput {
            mean_yield_potential: response.mean_yield_potential,
            mean_seasonal_irrigation: response.mean_seasonal_irrigation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irriplan_core::climate::build_weather_series;

    fn season() -> SeasonConfig {
        let start = jiff::civil::date(2024, 5, 1);
        let end = jiff::civil::date(2024, 5, 10);
        SeasonConfig {
            crop: "Maize".to_string(),
            soil: "SandyLoam".to_string(),
            season_start: start,
            season_end: end,
            initial_water_pct: 40.0,
            weather: build_weather_series(start, end, 15.0, 30.0, 0.5).unwrap(),
        }
    }

    fn policy() -> IrrigationPolicy {
        IrrigationPolicy {
            smts: vec![50.0, 60.0, 70.0, 55.0],
            max_irr_season: 300.0,
        }
    }

    fn shell_oracle(script: &str) -> CommandOracle {
        CommandOracle::new(
            PathBuf::from("sh"),
            vec!["-c".to_string(), script.to_string()],
            PathBuf::from("climate.txt"),
        )
    }

    #[cfg(unix)]
    #[test]
    fn test_round_trip_through_subprocess() {
        let oracle = shell_oracle(
            r#"cat > /dev/null; printf '{"meanYieldPotential": 7.5, "meanSeasonalIrrigation": 120.0}'"#,
        );

        let output = oracle.run(&season(), &policy()).unwrap();
        assert!((output.mean_yield_potential - 7.5).abs() < 1e-12);
        assert!((output.mean_seasonal_irrigation - 120.0).abs() < 1e-12);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_simulator_error() {
        let oracle = shell_oracle("cat > /dev/null; echo 'bad soil' >&2; exit 3");

        let err = oracle.run(&season(), &policy()).unwrap_err();
        match err {
            OracleError::Simulator(msg) => assert!(msg.contains("bad soil"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_garbage_output_is_malformed() {
        let oracle = shell_oracle("cat > /dev/null; echo 'not json'");

        let err = oracle.run(&season(), &policy()).unwrap_err();
        assert!(matches!(err, OracleError::MalformedOutput(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_simulator_error() {
        let oracle = CommandOracle::new(
            PathBuf::from("/nonexistent/simulator"),
            Vec::new(),
            PathBuf::from("climate.txt"),
        );

        let err = oracle.run(&season(), &policy()).unwrap_err();
        assert!(matches!(err, OracleError::Simulator(_)));
    }
}
