//! Monte-Carlo sampling primitives for ambiguity estimation
//!
//! Stateless samplers for the Dirichlet and multinomial distributions, plus
//! the [`sample_from`] combinator that draws Dirichlet samples and applies a
//! scalar measure function to each drawn probability vector.
//!
//! Every sampler takes the random source as an explicit `&mut R: Rng`
//! argument so callers control seeding and stream independence.
//!
//! # Example
//!
//! ```rust
//! use ambig_core::Matrix;
//! use ambig_sampling::repeated_dirichlet_draws;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let alphas = Matrix::single(&[11.0, 2.0, 2.0]).unwrap();
//! let draws = repeated_dirichlet_draws(&alphas, 16, &mut rng).unwrap();
//! assert_eq!(draws[0].rows(), 16);
//! ```

pub mod dirichlet;
pub mod multinomial;

pub use dirichlet::{
    dirichlet_draw, dirichlet_draw_row, repeated_dirichlet_draws, repeated_dirichlet_draws_row,
};
pub use multinomial::{multinomial_draw, multinomial_draw_row, repeated_multinomial_draws};

use ambig_core::Matrix;
pub use ambig_core::Result;
use rand::Rng;

/// Measure values together with the raw Dirichlet draws they came from
///
/// The raw draws are kept so callers can inspect or re-derive additional
/// statistics without resampling.
#[derive(Debug, Clone)]
pub struct MeasureSamples {
    /// Measure values, one `(groups, repeats)` matrix
    pub vals: Matrix,
    /// Raw probability draws, one `(repeats, classes)` matrix per group
    pub draws: Vec<Matrix>,
}

/// Draw `repeats` Dirichlet samples per row of `alphas` and apply a scalar
/// measure function to each sampled probability vector
pub fn sample_from<F, R>(
    f: F,
    alphas: &Matrix,
    repeats: usize,
    rng: &mut R,
) -> Result<MeasureSamples>
where
    F: Fn(&[f64]) -> f64,
    R: Rng + ?Sized,
{
    let draws = repeated_dirichlet_draws(alphas, repeats, rng)?;
    let mut vals = Vec::with_capacity(alphas.rows() * repeats);
    for group in &draws {
        vals.extend(group.iter_rows().map(&f));
    }
    Ok(MeasureSamples {
        vals: Matrix::from_flat(vals, repeats)?,
        draws,
    })
}
