//! Top-level run-once orchestration: scenario in, one published threshold
//! out.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;

use irriplan_core::climate::format_climate_file;
use irriplan_core::model::resolve_smt;
use irriplan_core::optimization::{OptimizationConfig, run_trials};
use irriplan_core::safety::{MIN_SAFE_SMT, enforce_element_floor};

use crate::oracle::CommandOracle;
use crate::scenario::Scenario;
use crate::sink::FileSink;

#[derive(Parser, Debug)]
#[command(name = "irriplan")]
#[command(about = "Finds yield-maximizing irrigation thresholds for a season scenario")]
pub struct Args {
    /// Path to the scenario store document (JSON)
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// Crop simulator command, invoked once per evaluation
    #[arg(long)]
    pub simulator: PathBuf,

    /// Extra argument passed to the simulator command (repeatable)
    #[arg(long = "simulator-arg")]
    pub simulator_args: Vec<String>,

    /// Where to write the simulator's weather file
    #[arg(long, default_value = "climate.txt")]
    pub climate_file: PathBuf,

    /// Where to publish the final threshold (JSON)
    #[arg(short, long, default_value = "smts.json")]
    pub output: PathBuf,

    /// Independent optimization trials to average
    #[arg(long, default_value_t = 10)]
    pub trials: usize,

    /// Crop growth stages (one threshold per stage)
    #[arg(long, default_value_t = 4)]
    pub stages: usize,

    /// Seasonal irrigation cap in mm
    #[arg(long, default_value_t = 300.0)]
    pub max_irrigation: f64,

    /// Random starting candidates per trial
    #[arg(long, default_value_t = 100)]
    pub searches: usize,

    /// Base seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    let raw = fs::read_to_string(&args.scenario)
        .wrap_err_with(|| format!("reading scenario {}", args.scenario.display()))?;
    let scenario: Scenario =
        serde_json::from_str(&raw).wrap_err("parsing scenario document")?;
    let season = scenario
        .season_config()
        .wrap_err("building season configuration")?;

    write_climate_file(&args.climate_file, &format_climate_file(&season.weather))?;
    tracing::info!(
        path = %args.climate_file.display(),
        days = season.weather.len(),
        "climate file written"
    );

    let oracle = CommandOracle::new(
        args.simulator.clone(),
        args.simulator_args.clone(),
        args.climate_file.clone(),
    );
    let config = OptimizationConfig {
        num_trials: args.trials,
        num_smts: args.stages,
        max_irr_season: args.max_irrigation,
        num_searches: args.searches,
        seed: args.seed,
    };

    let summary = run_trials(&season, &oracle, &config)?;
    for failure in &summary.failures {
        tracing::warn!(%failure, "trial excluded from average");
    }
    tracing::info!(
        completed = summary.completed,
        smts = ?summary.average_smts,
        "average thresholds before safety check"
    );

    let safe_smts = enforce_element_floor(&summary.average_smts, MIN_SAFE_SMT);
    tracing::info!(smts = ?safe_smts, "thresholds after safety check");

    // An unmapped plant type is reported but does not fail the run; the
    // optimization output is still logged above.
    match resolve_smt(&scenario.selected_plant_type, &safe_smts) {
        Ok(value) => {
            FileSink::new(args.output.clone())
                .publish(&scenario.selected_plant_type, value)
                .wrap_err_with(|| format!("publishing to {}", args.output.display()))?;
            tracing::info!(
                plant_type = %scenario.selected_plant_type,
                smt = value,
                "threshold published"
            );
        }
        Err(err) => {
            tracing::error!(%err, "threshold not published");
        }
    }

    Ok(())
}

/// Write via a sibling temp file and rename, so an interrupted run never
/// leaves a partially written climate file behind.
fn write_climate_file(path: &Path, contents: &str) -> color_eyre::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).wrap_err_with(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .wrap_err_with(|| format!("moving climate file into {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use irriplan_core::climate::{CLIMATE_HEADER, build_weather_series};

    #[test]
    fn test_climate_file_written_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("climate.txt");

        let series = build_weather_series(
            jiff::civil::date(2024, 5, 1),
            jiff::civil::date(2024, 5, 5),
            15.0,
            30.0,
            0.5,
        )
        .unwrap();
        write_climate_file(&path, &format_climate_file(&series)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CLIMATE_HEADER));
        assert_eq!(written.lines().count(), 6);
        assert!(!path.with_extension("tmp").exists());
    }
}
