//! Ambiguity estimation toolkit
//!
//! Estimates a scalar "ambiguity" measure of a categorical response
//! distribution (with a distinguished trailing "cannot-solve" class) from
//! observed count data, by plug-in frequency substitution or by summarizing
//! the measure's posterior under a conjugate Dirichlet-multinomial model.
//!
//! The workspace is split by concern:
//!
//! - [`ambig_core`]: error type and count/probability containers
//! - [`ambig_sampling`]: Dirichlet and multinomial Monte-Carlo samplers
//! - [`ambig_histogram`]: histogram-based mode estimation
//! - [`ambig_measures`]: measure families and their closed-form moments
//! - [`ambig_bayes`]: inference context, posteriors and estimators
//!
//! # Example
//!
//! ```rust
//! use ambiguity_stats::bayes::{
//!     AmbiguityEstimator, BayesEstimator, EstimateParams, EstimatorKind, PlugInEstimator,
//! };
//! use ambiguity_stats::core::CountMatrix;
//! use ambiguity_stats::measures::Measure;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let ns = CountMatrix::from_rows(vec![vec![10, 1, 1], vec![5, 0, 0]]).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let mut plug_in = PlugInEstimator::new(Measure::New);
//! plug_in.fit(ns.clone()).unwrap();
//! let point = plug_in.value(&EstimateParams::default(), &mut rng).unwrap();
//!
//! let mut bayes = BayesEstimator::new(Measure::New, 1.0, EstimatorKind::Mean).unwrap();
//! bayes.fit(ns).unwrap();
//! let posterior_mean = bayes.value(&EstimateParams::default(), &mut rng).unwrap();
//!
//! assert_eq!(point.len(), posterior_mean.len());
//! ```

pub use ambig_bayes as bayes;
pub use ambig_core as core;
pub use ambig_histogram as histogram;
pub use ambig_measures as measures;
pub use ambig_sampling as sampling;

pub use ambig_bayes::{
    AmbiguityEstimator, BayesEstimator, BayesianInference, EstimateParams, EstimatorKind,
    PlugInEstimator, Posterior, Reduction,
};
pub use ambig_core::{CountMatrix, Error, Matrix, Result};
pub use ambig_measures::Measure;
