//! Dirichlet samplers
//!
//! A Dirichlet draw is one independent Gamma(alpha_i, 1) variate per class,
//! normalized to sum 1. The Gamma generator's support is strictly positive
//! almost surely, so no zero-denominator guard is needed here.

use ambig_core::{Error, Matrix, Result};
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use tracing::debug;

fn dirichlet_draw_into<R: Rng + ?Sized>(
    alphas: &[f64],
    out: &mut Vec<f64>,
    rng: &mut R,
) -> Result<()> {
    let start = out.len();
    let mut total = 0.0;
    for &alpha in alphas {
        let gamma = Gamma::new(alpha, 1.0)
            .map_err(|e| Error::InvalidParameter(format!("Gamma shape {alpha}: {e}")))?;
        let g = gamma.sample(rng);
        total += g;
        out.push(g);
    }
    for v in &mut out[start..] {
        *v /= total;
    }
    Ok(())
}

/// Draw one probability vector from the Dirichlet distribution of a single
/// parameter row
pub fn dirichlet_draw_row<R: Rng + ?Sized>(alphas: &[f64], rng: &mut R) -> Result<Vec<f64>> {
    let mut out = Vec::with_capacity(alphas.len());
    dirichlet_draw_into(alphas, &mut out, rng)?;
    Ok(out)
}

/// Draw one probability vector per row of `alphas`
pub fn dirichlet_draw<R: Rng + ?Sized>(alphas: &Matrix, rng: &mut R) -> Result<Matrix> {
    let mut data = Vec::with_capacity(alphas.rows() * alphas.cols());
    for row in alphas.iter_rows() {
        dirichlet_draw_into(row, &mut data, rng)?;
    }
    Matrix::from_flat(data, alphas.cols())
}

/// Draw `repeats` independent probability vectors from a single parameter row
///
/// Returns a `(repeats, classes)` matrix.
pub fn repeated_dirichlet_draws_row<R: Rng + ?Sized>(
    alphas: &[f64],
    repeats: usize,
    rng: &mut R,
) -> Result<Matrix> {
    let mut data = Vec::with_capacity(repeats * alphas.len());
    for _ in 0..repeats {
        dirichlet_draw_into(alphas, &mut data, rng)?;
    }
    Matrix::from_flat(data, alphas.len())
}

/// Draw `repeats` independent probability vectors per row of `alphas`
///
/// Returns one `(repeats, classes)` matrix per input row.
pub fn repeated_dirichlet_draws<R: Rng + ?Sized>(
    alphas: &Matrix,
    repeats: usize,
    rng: &mut R,
) -> Result<Vec<Matrix>> {
    debug!(
        groups = alphas.rows(),
        repeats, "drawing repeated Dirichlet samples"
    );
    alphas
        .iter_rows()
        .map(|row| repeated_dirichlet_draws_row(row, repeats, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_dirichlet_rows_sum_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let alphas = Matrix::from_rows(vec![vec![11.0, 2.0, 2.0], vec![6.0, 1.0, 1.0]]).unwrap();
        let draws = repeated_dirichlet_draws(&alphas, 64, &mut rng).unwrap();
        assert_eq!(draws.len(), 2);
        for group in &draws {
            assert_eq!(group.rows(), 64);
            assert_eq!(group.cols(), 3);
            for row in group.iter_rows() {
                assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
                assert!(row.iter().all(|&p| p >= 0.0));
            }
        }
    }

    #[test]
    fn test_dirichlet_concentrates_with_large_alphas() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draws =
            repeated_dirichlet_draws_row(&[8000.0, 1000.0, 1000.0], 256, &mut rng).unwrap();
        let mean0 =
            draws.iter_rows().map(|r| r[0]).sum::<f64>() / draws.rows() as f64;
        assert_abs_diff_eq!(mean0, 0.8, epsilon = 0.01);
    }

    #[test]
    fn test_dirichlet_rejects_non_positive_alpha() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(dirichlet_draw_row(&[1.0, 0.0], &mut rng).is_err());
    }
}
