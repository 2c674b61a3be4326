//! Nelder-Mead simplex descent
//!
//! Derivative-free local minimization for the black-box simulator
//! objective: no gradients exist, so the method keeps a simplex of n+1
//! points and walks it downhill through reflection, expansion, contraction,
//! and shrink steps until the simplex collapses below tolerance.

use crate::error::OracleError;

/// Standard Nelder-Mead coefficients
const REFLECTION_COEF: f64 = 1.0;
const EXPANSION_COEF: f64 = 2.0;
const CONTRACTION_COEF: f64 = 0.5;
const SHRINK_COEF: f64 = 0.5;

/// Initial-simplex perturbation: 5% per axis, absolute step on zero axes
const NONZERO_DELTA: f64 = 0.05;
const ZERO_DELTA: f64 = 0.00025;

/// Convergence thresholds on coordinate spread and score spread
const X_TOLERANCE: f64 = 1e-4;
const F_TOLERANCE: f64 = 1e-4;

/// Iteration cap, scaled by problem dimension
const MAX_ITER_PER_DIM: usize = 200;

/// A point in threshold space with its score
struct SimplexVertex {
    values: Vec<f64>,
    score: f64,
}

/// Build the initial simplex: the start point plus one perturbed copy per
/// dimension.
fn initial_simplex<F>(objective: &mut F, start: &[f64]) -> Result<Vec<SimplexVertex>, OracleError>
where
    F: FnMut(&[f64]) -> Result<f64, OracleError>,
{
    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(SimplexVertex {
        values: start.to_vec(),
        score: objective(start)?,
    });

    for i in 0..start.len() {
        let mut point = start.to_vec();
        if point[i] == 0.0 {
            point[i] = ZERO_DELTA;
        } else {
            point[i] *= 1.0 + NONZERO_DELTA;
        }
        let score = objective(&point)?;
        simplex.push(SimplexVertex {
            values: point,
            score,
        });
    }

    Ok(simplex)
}

/// Centroid of all vertices except the worst (last).
fn centroid(simplex: &[SimplexVertex]) -> Vec<f64> {
    let n = simplex[0].values.len();
    let mut center = vec![0.0; n];

    for vertex in simplex.iter().take(simplex.len() - 1) {
        for (i, value) in vertex.values.iter().enumerate() {
            center[i] += value;
        }
    }

    let count = (simplex.len() - 1) as f64;
    for value in &mut center {
        *value /= count;
    }

    center
}

/// Step from `point` through the centroid, scaled by `coef`.
fn step_through(point: &[f64], centroid: &[f64], coef: f64) -> Vec<f64> {
    point
        .iter()
        .zip(centroid.iter())
        .map(|(p, c)| c + coef * (c - p))
        .collect()
}

/// Converged when every vertex sits within tolerance of the best one,
/// in both coordinates and score. Expects the simplex sorted best-first.
fn converged(simplex: &[SimplexVertex]) -> bool {
    let best = &simplex[0];
    let coord_spread = simplex[1..]
        .iter()
        .flat_map(|v| {
            v.values
                .iter()
                .zip(best.values.iter())
                .map(|(a, b)| (a - b).abs())
        })
        .fold(0.0_f64, f64::max);
    let score_spread = simplex[1..]
        .iter()
        .map(|v| (v.score - best.score).abs())
        .fold(0.0_f64, f64::max);

    coord_spread <= X_TOLERANCE && score_spread <= F_TOLERANCE
}

fn sort_best_first(simplex: &mut [SimplexVertex]) {
    simplex.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Minimize `objective` from `start`, returning the best vertex found.
///
/// The search is unbounded and silent; it stops on its own convergence
/// criteria or the per-dimension iteration cap. The returned vector has
/// the same arity as `start`. An objective failure aborts the whole
/// descent.
pub fn minimize<F>(mut objective: F, start: &[f64]) -> Result<Vec<f64>, OracleError>
where
    F: FnMut(&[f64]) -> Result<f64, OracleError>,
{
    let n = start.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut simplex = initial_simplex(&mut objective, start)?;
    let max_iterations = MAX_ITER_PER_DIM * n;

    for _ in 0..max_iterations {
        sort_best_first(&mut simplex);
        if converged(&simplex) {
            break;
        }

        let cent = centroid(&simplex);
        let worst_idx = simplex.len() - 1;
        let best_score = simplex[0].score;
        let second_worst_score = simplex[worst_idx - 1].score;
        let worst_score = simplex[worst_idx].score;
        let worst_values = simplex[worst_idx].values.clone();

        // Try reflection
        let reflected = step_through(&worst_values, &cent, REFLECTION_COEF);
        let reflected_score = objective(&reflected)?;

        if reflected_score < best_score {
            // Reflected is best so far - try expansion
            let expanded = step_through(&worst_values, &cent, EXPANSION_COEF);
            let expanded_score = objective(&expanded)?;

            if expanded_score < reflected_score {
                simplex[worst_idx] = SimplexVertex {
                    values: expanded,
                    score: expanded_score,
                };
            } else {
                simplex[worst_idx] = SimplexVertex {
                    values: reflected,
                    score: reflected_score,
                };
            }
        } else if reflected_score < second_worst_score {
            // Reflected beats the second worst - accept it
            simplex[worst_idx] = SimplexVertex {
                values: reflected,
                score: reflected_score,
            };
        } else {
            // Contract toward the better of worst/reflected
            let toward = if reflected_score < worst_score {
                &reflected
            } else {
                &worst_values
            };
            let contracted: Vec<f64> = cent
                .iter()
                .zip(toward.iter())
                .map(|(c, p)| c + CONTRACTION_COEF * (p - c))
                .collect();
            let contracted_score = objective(&contracted)?;

            if contracted_score < worst_score.min(reflected_score) {
                simplex[worst_idx] = SimplexVertex {
                    values: contracted,
                    score: contracted_score,
                };
            } else {
                // Shrink the simplex toward the best point
                let best_values = simplex[0].values.clone();
                for vertex in simplex.iter_mut().skip(1) {
                    let shrunk: Vec<f64> = best_values
                        .iter()
                        .zip(vertex.values.iter())
                        .map(|(b, v)| b + SHRINK_COEF * (v - b))
                        .collect();
                    let shrunk_score = objective(&shrunk)?;
                    *vertex = SimplexVertex {
                        values: shrunk,
                        score: shrunk_score,
                    };
                }
            }
        }
    }

    sort_best_first(&mut simplex);
    Ok(simplex.swap_remove(0).values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic(center: Vec<f64>) -> impl FnMut(&[f64]) -> Result<f64, OracleError> {
        move |x: &[f64]| {
            Ok(x.iter()
                .zip(center.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum())
        }
    }

    #[test]
    fn test_step_through() {
        let point = vec![0.0, 0.0];
        let centroid = vec![1.0, 1.0];

        let reflected = step_through(&point, &centroid, 1.0);
        assert!((reflected[0] - 2.0).abs() < 0.001);
        assert!((reflected[1] - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_centroid_excludes_worst() {
        let simplex = vec![
            SimplexVertex {
                values: vec![0.0, 0.0],
                score: 0.0,
            },
            SimplexVertex {
                values: vec![2.0, 0.0],
                score: 0.5,
            },
            // Worst (last), excluded
            SimplexVertex {
                values: vec![1.0, 2.0],
                score: 9.0,
            },
        ];

        let cent = centroid(&simplex);
        assert!((cent[0] - 1.0).abs() < 0.001);
        assert!((cent[1] - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_minimizes_quadratic() {
        let result = minimize(quadratic(vec![1.0, 2.0]), &[3.0, -2.0]).unwrap();
        assert_eq!(result.len(), 2);
        assert!((result[0] - 1.0).abs() < 1e-2, "got {result:?}");
        assert!((result[1] - 2.0).abs() < 1e-2, "got {result:?}");
    }

    #[test]
    fn test_minimizes_from_zero_start() {
        let result = minimize(quadratic(vec![5.0]), &[0.0]).unwrap();
        assert!((result[0] - 5.0).abs() < 1e-2, "got {result:?}");
    }

    #[test]
    fn test_preserves_arity() {
        let result = minimize(quadratic(vec![70.0; 4]), &[60.0, 80.0, 55.0, 75.0]).unwrap();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_empty_start() {
        let result = minimize(|_| Ok(0.0), &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_objective_failure_aborts() {
        let result = minimize(
            |_| Err(OracleError::Simulator("boom".into())),
            &[1.0, 2.0],
        );
        assert!(result.is_err());
    }
}
