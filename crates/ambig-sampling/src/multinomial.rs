//! Multinomial samplers
//!
//! Samples are drawn by sequential conditional-binomial decomposition
//! (stick-breaking): classes are processed from the last index down, each
//! receiving a Binomial draw over the still-unallocated trials with success
//! probability equal to its mass renormalized over the remaining cumulative
//! mass. Class 0 absorbs the remainder. This yields an exact multinomial
//! sample without a per-trial loop.

use ambig_core::{guarded_div, CountMatrix, Error, Matrix, Result};
use rand::Rng;
use rand_distr::{Binomial, Distribution};
use tracing::debug;

fn multinomial_draw_into<R: Rng + ?Sized>(
    n: u64,
    p: &[f64],
    out: &mut Vec<u64>,
    rng: &mut R,
) -> Result<()> {
    let classes = p.len();
    // Cumulative mass of classes 0..=i, the conditioning denominator.
    let mut cum = vec![0.0; classes];
    let mut acc = 0.0;
    for (i, &pi) in p.iter().enumerate() {
        acc += pi;
        cum[i] = acc;
    }

    let start = out.len();
    out.resize(start + classes, 0);
    let mut remaining = n;
    for i in (1..classes).rev() {
        // Conditional probability is 0 wherever the remaining mass is 0.
        let cond = guarded_div(p[i], cum[i]).clamp(0.0, 1.0);
        let binom = Binomial::new(remaining, cond)
            .map_err(|e| Error::InvalidParameter(format!("Binomial p {cond}: {e}")))?;
        let drawn = binom.sample(rng);
        out[start + i] = drawn;
        remaining -= drawn;
    }
    out[start] = remaining;
    Ok(())
}

/// Draw one Multinomial(`n`, row) count vector from a single probability row
pub fn multinomial_draw_row<R: Rng + ?Sized>(
    n: u64,
    p: &[f64],
    rng: &mut R,
) -> Result<Vec<u64>> {
    let mut out = Vec::with_capacity(p.len());
    multinomial_draw_into(n, p, &mut out, rng)?;
    Ok(out)
}

/// Draw one Multinomial(`n`, row) count vector per row of `p`
pub fn multinomial_draw<R: Rng + ?Sized>(
    n: u64,
    p: &Matrix,
    rng: &mut R,
) -> Result<CountMatrix> {
    let mut data = Vec::with_capacity(p.rows() * p.cols());
    for row in p.iter_rows() {
        multinomial_draw_into(n, row, &mut data, rng)?;
    }
    CountMatrix::from_flat(data, p.cols())
}

/// Draw `num_samples` independent Multinomial(`num_trials`, row) realizations
/// per row of `p`
///
/// Returns one `(num_samples, classes)` count matrix per input row. Used to
/// empirically estimate an estimator's expected value under a known true
/// distribution.
pub fn repeated_multinomial_draws<R: Rng + ?Sized>(
    num_trials: u64,
    p: &Matrix,
    num_samples: usize,
    rng: &mut R,
) -> Result<Vec<CountMatrix>> {
    debug!(
        groups = p.rows(),
        num_trials, num_samples, "drawing repeated multinomial samples"
    );
    p.iter_rows()
        .map(|row| {
            let mut data = Vec::with_capacity(num_samples * row.len());
            for _ in 0..num_samples {
                multinomial_draw_into(num_trials, row, &mut data, rng)?;
            }
            CountMatrix::from_flat(data, row.len())
        })
        .collect()
}
