//! Bayesian and plug-in ambiguity estimation
//!
//! This crate ties the measure library, the sampling engine and the
//! histogram mode estimator together into two estimation philosophies over
//! observed count data:
//!
//! - [`PlugInEstimator`]: substitute empirical frequencies into the measure,
//! - [`BayesEstimator`]: summarize the measure's posterior under a conjugate
//!   Dirichlet-multinomial model (mean or histogram mode).
//!
//! The [`BayesianInference`] context owns the counts and prior strength;
//! [`Posterior`] values borrow it and expose sampling-based and closed-form
//! summaries of one measure each.
//!
//! # Example
//!
//! ```rust
//! use ambig_bayes::{AmbiguityEstimator, BayesEstimator, EstimateParams, EstimatorKind};
//! use ambig_core::CountMatrix;
//! use ambig_measures::Measure;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut estimator = BayesEstimator::new(Measure::New, 1.0, EstimatorKind::Mean).unwrap();
//! let ns = CountMatrix::from_rows(vec![vec![10, 1, 1], vec![5, 0, 0]]).unwrap();
//! estimator.fit(ns).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let values = estimator.value(&EstimateParams::default(), &mut rng).unwrap();
//! assert_eq!(values.len(), 2);
//! ```

pub mod estimator;
pub mod inference;
pub mod posterior;

pub use estimator::{
    monte_carlo_expectation, AmbiguityEstimator, BayesEstimator, EstimateParams, EstimatorKind,
    PlugInEstimator,
};
pub use inference::BayesianInference;
pub use posterior::{Posterior, Reduction};

pub use ambig_core::{Error, Result};
