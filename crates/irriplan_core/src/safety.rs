//! Safety floors applied to optimizer output before it is trusted.
//!
//! Two distinct policies exist and are applied at different points in the
//! pipeline: the mean floor runs inside each trial on the refined vector,
//! the element floor runs once on the aggregated average before it is
//! published. They produce materially different results when stage values
//! straddle the floor, so they stay separate named operations.

/// Minimum trusted soil-moisture threshold, percent.
pub const MIN_SAFE_SMT: f64 = 50.0;

/// All-or-nothing floor: a vector whose MEAN falls below `floor` is
/// replaced wholesale with the floor value; otherwise it passes through
/// untouched.
#[must_use]
pub fn enforce_mean_floor(smts: &[f64], floor: f64) -> Vec<f64> {
    if smts.is_empty() {
        return Vec::new();
    }
    let mean = smts.iter().sum::<f64>() / smts.len() as f64;
    if mean < floor {
        vec![floor; smts.len()]
    } else {
        smts.to_vec()
    }
}

/// Per-element floor: only stages below `floor` are raised to it.
#[must_use]
pub fn enforce_element_floor(smts: &[f64], floor: f64) -> Vec<f64> {
    smts.iter().map(|&value| value.max(floor)).collect()
}
