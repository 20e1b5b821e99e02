//! Collision-based ambiguity measures and their closed-form moments
//!
//! `new_ambiguity` is one minus the collision probability of the
//! proper-class sub-vector, conditioned on not landing in the cannot-solve
//! class. The modified variant removes the direct linear contribution of the
//! cannot-solve mass and renormalizes the range.
//!
//! Under a Dirichlet posterior both variants admit closed-form first and
//! second moments, and the plug-in estimator of the unmodified variant has
//! an exact expected value under multinomial sampling. Those formulas live
//! here next to the measures they describe.

use crate::split_cs;

/// Floor for the `1 - p_cs` denominator
pub const CS_MASS_FLOOR: f64 = 1e-7;

/// Collision-based ambiguity
///
/// Defined as 1 when `p_cs = 1` for any residual split: total cannot-solve
/// mass is maximal ambiguity by convention, not a limit.
pub fn new_ambiguity(p: &[f64]) -> f64 {
    let (p_cs, proper) = split_cs(p);
    if p_cs < 1.0 {
        let collision: f64 = proper.iter().map(|&x| x * x).sum();
        1.0 - collision / (1.0 - p_cs).max(CS_MASS_FLOOR)
    } else {
        1.0
    }
}

/// Rescaled collision-based ambiguity with the linear `p_cs` term removed
pub fn modified_new_ambiguity(p: &[f64]) -> f64 {
    let (p_cs, proper) = split_cs(p);
    let c = proper.len() as f64;
    (c * new_ambiguity(p) - p_cs) / (c - 1.0)
}

/// Closed-form posterior mean of the (modified) collision-based ambiguity
/// under Dirichlet parameters `alphas`
pub fn expected_new_ambiguity(alphas: &[f64], modified: bool) -> f64 {
    let (a_cs, reduced) = split_cs(alphas);
    let a0: f64 = alphas.iter().sum();
    let b0 = a0 - a_cs;
    let sum: f64 = reduced.iter().map(|&a| a * (a + 1.0)).sum();
    let mut e = 1.0 - sum / (a0 * (b0 + 1.0));
    if modified {
        let c = reduced.len() as f64;
        e = (c * e - a_cs / a0) / (c - 1.0);
    }
    e
}

/// Closed-form posterior variance of the (modified) collision-based
/// ambiguity under Dirichlet parameters `alphas`
pub fn new_ambiguity_variance(alphas: &[f64], modified: bool) -> f64 {
    let (a_cs, reduced) = split_cs(alphas);
    let a0: f64 = alphas.iter().sum();
    let b0 = a0 - a_cs;
    let denom = a0 * (a0 + 1.0) * (b0 + 2.0) * (b0 + 3.0);
    let nom = (a0 * (b0 + 1.0)).powi(2);
    let rest: f64 = reduced
        .iter()
        .map(|&a| a * (a + 1.0) * ((a + 2.0) * (a + 3.0) - a * (a + 1.0)))
        .sum::<f64>()
        / denom;
    let e = expected_new_ambiguity(alphas, false);
    let mut var = rest + (nom / denom - 1.0) * (1.0 - e) * (1.0 - e);
    if modified {
        // q_cs ~ Beta(a_cs, b0): marginal variance and the covariance with
        // the unmodified measure enter through the linear rescaling.
        let c = reduced.len() as f64;
        let var_qcs = a_cs * b0 / ((a0 + 1.0) * a0 * a0);
        let cov = a_cs / (a0 * (a0 + 1.0)) * (1.0 - e);
        var = (c * c * var + var_qcs - 2.0 * c * cov) / ((c - 1.0) * (c - 1.0));
    }
    var
}

/// Exact expected value of the plug-in collision-based ambiguity estimator
/// under Multinomial(`num_trials`, `q0`) sampling
///
/// A frequentist bias formula, not a posterior moment: it is what the
/// plug-in estimator converges to in expectation when counts are drawn from
/// the true distribution `q0` with `num_trials` trials.
pub fn plug_in_expected_new_ambiguity(num_trials: u64, q0: &[f64]) -> f64 {
    let (q_cs, q_res) = split_cs(q0);
    if q_cs >= 1.0 {
        // Every draw lands in the cannot-solve class and the plug-in value
        // is 1 with probability 1.
        return 1.0;
    }
    let r = num_trials as f64;
    let tail = (1.0 - q_cs.powf(r)) / r;
    let collision: f64 = q_res.iter().map(|&q| q * q).sum();
    1.0 - tail - collision * (1.0 / (1.0 - q_cs) - tail / ((1.0 - q_cs) * (1.0 - q_cs)))
}
