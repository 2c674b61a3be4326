//! Parallel fan-out of independent optimization trials and the per-stage
//! averaging fan-in.

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{AggregateError, TrialError};
use crate::model::SeasonConfig;
use crate::oracle::Oracle;
use crate::safety::{MIN_SAFE_SMT, enforce_mean_floor};

use super::config::OptimizationConfig;
use super::evaluator::Evaluator;
use super::nelder_mead::minimize;
use super::result::{OptimizationSummary, TrialOutcome};
use super::seed::select_starting_point;

/// One full trial: random-start selection, simplex descent, mean-floor
/// check on the refined vector.
fn run_trial<O: Oracle + ?Sized>(
    season: &SeasonConfig,
    oracle: &O,
    config: &OptimizationConfig,
    trial: usize,
) -> Result<TrialOutcome, TrialError> {
    let evaluator = Evaluator::new(season, oracle);
    // Each trial owns its own random stream; a seeded run stays
    // reproducible without making the trials identical.
    let trial_seed = config.seed.map(|base| base.wrapping_add(trial as u64));

    let start = select_starting_point(
        &evaluator,
        config.num_smts,
        config.max_irr_season,
        config.num_searches,
        trial_seed,
    )
    .map_err(|source| TrialError { trial, source })?;

    let refined = minimize(
        |smts| evaluator.score(smts, config.max_irr_season),
        &start,
    )
    .map_err(|source| TrialError { trial, source })?;

    Ok(TrialOutcome {
        smts: enforce_mean_floor(&refined, MIN_SAFE_SMT),
    })
}

#[cfg(feature = "parallel")]
fn run_all<O: Oracle + Sync + ?Sized>(
    season: &SeasonConfig,
    oracle: &O,
    config: &OptimizationConfig,
) -> Vec<Result<TrialOutcome, TrialError>> {
    (0..config.num_trials)
        .into_par_iter()
        .map(|trial| run_trial(season, oracle, config, trial))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_all<O: Oracle + Sync + ?Sized>(
    season: &SeasonConfig,
    oracle: &O,
    config: &OptimizationConfig,
) -> Vec<Result<TrialOutcome, TrialError>> {
    (0..config.num_trials)
        .map(|trial| run_trial(season, oracle, config, trial))
        .collect()
}

/// Run `num_trials` independent trials on worker threads and average their
/// threshold vectors per growth stage.
///
/// No mutable state is shared between trials; the season and the oracle are
/// borrowed read-only by every worker, and the call blocks until all trials
/// finish. Averaging is commutative, so worker completion order never
/// affects the result.
///
/// Failure policy: a failed trial is EXCLUDED from the average and surfaced
/// in the summary, so one flaky simulation cannot invalidate the whole
/// batch. The run errs only when every trial failed.
pub fn run_trials<O: Oracle + Sync + ?Sized>(
    season: &SeasonConfig,
    oracle: &O,
    config: &OptimizationConfig,
) -> Result<OptimizationSummary, AggregateError> {
    summarize(run_all(season, oracle, config), config.num_smts)
}

/// Fold raw trial results into the per-stage average, dropping failures.
fn summarize(
    results: Vec<Result<TrialOutcome, TrialError>>,
    num_smts: usize,
) -> Result<OptimizationSummary, AggregateError> {
    let attempted = results.len();
    let mut outcomes = Vec::with_capacity(attempted);
    let mut failures = Vec::new();

    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => failures.push(err),
        }
    }

    if outcomes.is_empty() {
        return Err(AggregateError::AllTrialsFailed { attempted });
    }

    Ok(OptimizationSummary {
        average_smts: average_stages(&outcomes, num_smts),
        completed: outcomes.len(),
        failures,
    })
}

/// Arithmetic mean of each stage across completed trials.
fn average_stages(outcomes: &[TrialOutcome], num_smts: usize) -> Vec<f64> {
    let mut sums = vec![0.0; num_smts];
    for outcome in outcomes {
        for (sum, value) in sums.iter_mut().zip(outcome.smts.iter()) {
            *sum += value;
        }
    }

    let count = outcomes.len() as f64;
    sums.iter().map(|sum| sum / count).collect()
}
