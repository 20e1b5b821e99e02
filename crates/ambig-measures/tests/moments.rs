//! Closed-form posterior moments versus Monte-Carlo estimates
//!
//! The analytical mean and variance of the collision-based measures must
//! agree with sampled estimates from the same Dirichlet parameters.

use ambig_core::{CountMatrix, Matrix};
use ambig_measures::{modified_new_ambiguity, new_ambiguity, Measure};
use ambig_sampling::sample_from;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const REPEATS: usize = 4096;
const TOL: f64 = 0.02;

fn monte_carlo_moments(alphas: &Matrix, f: fn(&[f64]) -> f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let samples = sample_from(f, alphas, REPEATS, &mut rng).unwrap();
    samples
        .vals
        .iter_rows()
        .map(|row| {
            let mean = ambig_core::stats::mean(row);
            let var = ambig_core::stats::variance(row);
            (mean, var)
        })
        .collect()
}

#[test]
fn closed_form_mean_and_variance_match_sampling() {
    let ns = CountMatrix::from_rows(vec![vec![10, 1, 1], vec![5, 0, 0]]).unwrap();
    let alphas = ns.with_pseudo_count(1.0);

    for (measure, f, seed) in [
        (Measure::New, new_ambiguity as fn(&[f64]) -> f64, 17),
        (Measure::ModifiedNew, modified_new_ambiguity as fn(&[f64]) -> f64, 18),
    ] {
        let mc = monte_carlo_moments(&alphas, f, seed);
        for (g, &(mc_mean, mc_var)) in mc.iter().enumerate() {
            let row = alphas.row(g);
            let exact_mean = measure.posterior_mean(row).unwrap();
            let exact_var = measure.posterior_variance(row).unwrap();
            assert!(
                (exact_mean - mc_mean).abs() < TOL,
                "{} mean group {g}: exact {exact_mean}, MC {mc_mean}",
                measure.name()
            );
            assert!(
                (exact_var - mc_var).abs() < TOL,
                "{} variance group {g}: exact {exact_var}, MC {mc_var}",
                measure.name()
            );
        }
    }
}

#[test]
fn closed_form_variance_is_non_negative() {
    for alphas in [
        vec![11.0, 2.0, 2.0],
        vec![6.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0, 1.0],
        vec![100.0, 50.0, 25.0],
    ] {
        assert!(Measure::New.posterior_variance(&alphas).unwrap() >= 0.0);
        assert!(Measure::ModifiedNew.posterior_variance(&alphas).unwrap() >= 0.0);
    }
}
