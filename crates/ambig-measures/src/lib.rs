//! Ambiguity measures over categorical response distributions
//!
//! A measure maps a probability vector whose last entry is the
//! "cannot-solve" mass to a scalar in `[0, 1]` quantifying how undecided the
//! distribution is over the proper classes. Three families are provided:
//!
//! - [`BaselineAmbiguity`]: complement of a cannot-solve-scaled distance to
//!   the uniform proper-class distribution,
//! - [`new_ambiguity`]: one minus the conditional collision probability,
//! - [`modified_new_ambiguity`]: the collision measure with the linear
//!   cannot-solve contribution removed and the range renormalized.
//!
//! The collision-based families carry closed-form Dirichlet posterior
//! moments and an exact plug-in bias formula; the [`Measure`] enum bundles a
//! family with whatever closed forms it has. The [`density`] module
//! additionally evaluates the exact posterior density of the collision-based
//! measures for two proper classes.

pub mod baseline;
pub mod density;
pub mod measure;
pub mod new_ambiguity;

pub use baseline::{BaselineAmbiguity, CantSolveScaling, PROPER_MASS_FLOOR};
pub use density::{ambiguity_pdf, ambiguity_pdf_batch, AmbiguityKind, DEFAULT_TOL};
pub use measure::Measure;
pub use new_ambiguity::{
    expected_new_ambiguity, modified_new_ambiguity, new_ambiguity, new_ambiguity_variance,
    plug_in_expected_new_ambiguity, CS_MASS_FLOOR,
};

pub use ambig_core::Result;

/// Split a class vector into its trailing cannot-solve entry and the
/// proper-class prefix
///
/// An empty slice degenerates to full cannot-solve mass; containers enforce
/// at least two classes, so this only matters for raw-slice callers.
pub(crate) fn split_cs(p: &[f64]) -> (f64, &[f64]) {
    match p.split_last() {
        Some((&cs, proper)) => (cs, proper),
        None => (1.0, &[]),
    }
}
