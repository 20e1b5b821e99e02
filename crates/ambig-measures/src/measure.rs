//! The closed set of measure families
//!
//! Estimators and posteriors are configured with a [`Measure`] value rather
//! than a measure-specific subtype: one tag per family, carrying the
//! family's closed-form moment and bias formulas where they exist.

use crate::baseline::BaselineAmbiguity;
use crate::new_ambiguity::{
    expected_new_ambiguity, modified_new_ambiguity, new_ambiguity, new_ambiguity_variance,
    plug_in_expected_new_ambiguity,
};

/// An ambiguity measure family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Baseline distance-to-uniform ambiguity; sampling-only posterior
    /// summaries
    Baseline(BaselineAmbiguity),
    /// Collision-based ambiguity with closed-form posterior mean/variance
    New,
    /// Rescaled collision-based ambiguity with closed-form posterior
    /// mean/variance
    ModifiedNew,
}

impl Measure {
    /// Short family name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline(_) => "baseline",
            Self::New => "new",
            Self::ModifiedNew => "modified-new",
        }
    }

    /// Minimum number of classes (including cannot-solve) a count matrix
    /// must have for this family to be well defined
    ///
    /// The baseline and modified families divide by `C_res - 1`, so they
    /// need at least two proper classes.
    pub fn min_classes(&self) -> usize {
        match self {
            Self::New => 2,
            Self::Baseline(_) | Self::ModifiedNew => 3,
        }
    }

    /// Evaluate the measure on one probability vector
    pub fn value(&self, p: &[f64]) -> f64 {
        match self {
            Self::Baseline(baseline) => baseline.value(p),
            Self::New => new_ambiguity(p),
            Self::ModifiedNew => modified_new_ambiguity(p),
        }
    }

    /// Closed-form posterior mean under Dirichlet parameters `alphas`, if
    /// the family has one
    pub fn posterior_mean(&self, alphas: &[f64]) -> Option<f64> {
        match self {
            Self::Baseline(_) => None,
            Self::New => Some(expected_new_ambiguity(alphas, false)),
            Self::ModifiedNew => Some(expected_new_ambiguity(alphas, true)),
        }
    }

    /// Closed-form posterior variance under Dirichlet parameters `alphas`,
    /// if the family has one
    pub fn posterior_variance(&self, alphas: &[f64]) -> Option<f64> {
        match self {
            Self::Baseline(_) => None,
            Self::New => Some(new_ambiguity_variance(alphas, false)),
            Self::ModifiedNew => Some(new_ambiguity_variance(alphas, true)),
        }
    }

    /// Exact expected value of the plug-in estimator under
    /// Multinomial(`num_trials`, `q0`) sampling, if the family has one
    pub fn plug_in_expectation(&self, num_trials: u64, q0: &[f64]) -> Option<f64> {
        match self {
            Self::New => Some(plug_in_expected_new_ambiguity(num_trials, q0)),
            Self::Baseline(_) | Self::ModifiedNew => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dispatch_matches_free_functions() {
        let p = [0.6, 0.3, 0.1];
        assert_abs_diff_eq!(Measure::New.value(&p), new_ambiguity(&p));
        assert_abs_diff_eq!(Measure::ModifiedNew.value(&p), modified_new_ambiguity(&p));
        let baseline = BaselineAmbiguity::default();
        assert_abs_diff_eq!(Measure::Baseline(baseline).value(&p), baseline.value(&p));
    }

    #[test]
    fn test_closed_form_availability() {
        let alphas = [11.0, 2.0, 2.0];
        assert!(Measure::New.posterior_mean(&alphas).is_some());
        assert!(Measure::New.posterior_variance(&alphas).is_some());
        assert!(Measure::ModifiedNew.posterior_mean(&alphas).is_some());
        let baseline = Measure::Baseline(BaselineAmbiguity::default());
        assert!(baseline.posterior_mean(&alphas).is_none());
        assert!(baseline.posterior_variance(&alphas).is_none());
        assert!(baseline.plug_in_expectation(10, &alphas).is_none());
        assert!(Measure::ModifiedNew.plug_in_expectation(10, &alphas).is_none());
        assert!(Measure::New.plug_in_expectation(10, &[0.8, 0.1, 0.1]).is_some());
    }

    #[test]
    fn test_min_classes() {
        assert_eq!(Measure::New.min_classes(), 2);
        assert_eq!(Measure::ModifiedNew.min_classes(), 3);
        assert_eq!(Measure::Baseline(BaselineAmbiguity::default()).min_classes(), 3);
    }
}
