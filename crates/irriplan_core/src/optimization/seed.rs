//! Random multi-start seed selection.
//!
//! Pure exploration: no local refinement happens here. The point is to
//! start the simplex descent in a good basin instead of wherever it would
//! otherwise converge from an arbitrary point.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::OracleError;
use crate::oracle::Oracle;

use super::evaluator::Evaluator;

/// Draw `num_searches` candidate vectors, each stage uniform in [0, 100),
/// score every one, and return the best as the local-search start.
///
/// A fixed `seed` makes the draws reproducible; `None` samples OS entropy.
/// Ties keep the earliest draw. At least one candidate is always drawn.
pub fn select_starting_point<O: Oracle + ?Sized>(
    evaluator: &Evaluator<'_, O>,
    num_smts: usize,
    max_irr_season: f64,
    num_searches: usize,
    seed: Option<u64>,
) -> Result<Vec<f64>, OracleError> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    };

    let mut best = draw_candidate(&mut rng, num_smts);
    let mut best_score = evaluator.score(&best, max_irr_season)?;

    for _ in 1..num_searches.max(1) {
        let candidate = draw_candidate(&mut rng, num_smts);
        let score = evaluator.score(&candidate, max_irr_season)?;
        if score < best_score {
            best = candidate;
            best_score = score;
        }
    }

    Ok(best)
}

fn draw_candidate(rng: &mut SmallRng, num_smts: usize) -> Vec<f64> {
    (0..num_smts).map(|_| rng.random_range(0.0..100.0)).collect()
}
