//! Baseline ambiguity: complement of a scaled distance-to-uniform
//!
//! The baseline family measures disambiguity as how far the proper-class
//! sub-vector is from uniform, damped by a cannot-solve scaling factor;
//! ambiguity is its complement. No closed-form posterior moments exist for
//! this family, so posterior summaries always go through sampling.

use crate::split_cs;
use ambig_core::{Error, Result};

/// Floor for the proper-class normalization denominator
pub const PROPER_MASS_FLOOR: f64 = 1e-4;

/// Default reference point `p0` for the exponential scaling fit
pub const DEFAULT_P0: f64 = 0.2;
/// Default reference value `eta0` for the exponential scaling fit
pub const DEFAULT_ETA0: f64 = 0.4;

/// How the cannot-solve mass damps the disambiguity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CantSolveScaling {
    /// `1 - p_cs`
    Linear,
    /// `exp(-gamma * p_cs)`, with `gamma` fit so the factor equals `eta0`
    /// at `p_cs = p0`
    Exponential { gamma: f64 },
}

impl CantSolveScaling {
    /// Exponential scaling fit through the configuration point `(p0, eta0)`
    ///
    /// Rejects `p0 <= 0` and `eta0` outside `(0, 1)`; out-of-range
    /// configuration would silently flip the sign of the decay.
    pub fn exponential(p0: f64, eta0: f64) -> Result<Self> {
        if p0 <= 0.0 {
            return Err(Error::non_positive("p0", p0));
        }
        if eta0 <= 0.0 || eta0 >= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "eta0 must lie in (0, 1), got {eta0}"
            )));
        }
        Ok(Self::Exponential { gamma: -eta0.ln() / p0 })
    }

    /// Exponential scaling with the default configuration points
    pub fn default_exponential() -> Self {
        Self::Exponential { gamma: -DEFAULT_ETA0.ln() / DEFAULT_P0 }
    }

    /// Scaling factor at cannot-solve probability `p_cs`
    pub fn factor(&self, p_cs: f64) -> f64 {
        match self {
            Self::Linear => 1.0 - p_cs,
            Self::Exponential { gamma } => (-gamma * p_cs).exp(),
        }
    }
}

/// The baseline ambiguity measure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineAmbiguity {
    eps: f64,
    scaling: CantSolveScaling,
}

impl BaselineAmbiguity {
    /// Create a baseline measure with disambiguity floor `eps` and the given
    /// cannot-solve scaling
    pub fn new(eps: f64, scaling: CantSolveScaling) -> Result<Self> {
        if !(0.0..=1.0).contains(&eps) {
            return Err(Error::InvalidParameter(format!(
                "eps must lie in [0, 1], got {eps}"
            )));
        }
        Ok(Self { eps, scaling })
    }

    /// Disambiguity floor
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Configured cannot-solve scaling
    pub fn scaling(&self) -> CantSolveScaling {
        self.scaling
    }

    /// Rescaled half-L1 distance of the renormalized proper-class sub-vector
    /// to the uniform distribution, blended with the `eps` floor
    pub fn base_disambiguity(&self, p: &[f64]) -> f64 {
        let (_, proper) = split_cs(p);
        let c = proper.len() as f64;
        let mass: f64 = proper.iter().sum();
        let denom = mass.max(PROPER_MASS_FLOOR);
        let dist = 0.5 * c / (c - 1.0)
            * proper.iter().map(|&pi| (pi / denom - 1.0 / c).abs()).sum::<f64>();
        (1.0 - self.eps) * dist + self.eps
    }

    /// Cannot-solve-scaled disambiguity
    pub fn disambiguity(&self, p: &[f64]) -> f64 {
        let (p_cs, _) = split_cs(p);
        self.scaling.factor(p_cs) * self.base_disambiguity(p)
    }

    /// Baseline ambiguity: `1 - disambiguity`
    pub fn value(&self, p: &[f64]) -> f64 {
        1.0 - self.disambiguity(p)
    }
}

impl Default for BaselineAmbiguity {
    fn default() -> Self {
        Self { eps: 0.0, scaling: CantSolveScaling::Linear }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_hot_proper_class_is_unambiguous() {
        let measure = BaselineAmbiguity::default();
        // One-hot proper class, no cannot-solve mass: distance to uniform is
        // maximal, so disambiguity is 1 and ambiguity 0
        assert_abs_diff_eq!(measure.value(&[1.0, 0.0, 0.0]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_proper_classes_are_maximally_ambiguous() {
        let measure = BaselineAmbiguity::default();
        assert_abs_diff_eq!(measure.value(&[0.5, 0.5, 0.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eps_floor_lifts_disambiguity() {
        let measure = BaselineAmbiguity::new(0.25, CantSolveScaling::Linear).unwrap();
        // Uniform proper classes: distance is 0, floor keeps disambiguity at eps
        assert_abs_diff_eq!(measure.value(&[0.5, 0.5, 0.0]), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_scaling_with_cannot_solve_mass() {
        let measure = BaselineAmbiguity::default();
        // Half the mass on cannot-solve damps disambiguity by 0.5
        let v = measure.value(&[0.5, 0.0, 0.5]);
        assert_abs_diff_eq!(v, 1.0 - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_scaling_fit_points() {
        let scaling = CantSolveScaling::exponential(0.2, 0.4).unwrap();
        assert_abs_diff_eq!(scaling.factor(0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaling.factor(0.2), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_scaling_rejects_bad_configuration() {
        assert!(CantSolveScaling::exponential(0.0, 0.4).is_err());
        assert!(CantSolveScaling::exponential(-0.1, 0.4).is_err());
        assert!(CantSolveScaling::exponential(0.2, 0.0).is_err());
        assert!(CantSolveScaling::exponential(0.2, 1.0).is_err());
        assert!(CantSolveScaling::exponential(0.2, 1.5).is_err());
    }

    #[test]
    fn test_near_zero_proper_mass_uses_floor() {
        let measure = BaselineAmbiguity::default();
        // Essentially all mass on cannot-solve: the floored normalization
        // keeps the value finite and in range
        let v = measure.value(&[1e-9, 1e-9, 1.0 - 2e-9]);
        assert!(v.is_finite());
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn test_eps_validation() {
        assert!(BaselineAmbiguity::new(-0.1, CantSolveScaling::Linear).is_err());
        assert!(BaselineAmbiguity::new(1.1, CantSolveScaling::Linear).is_err());
    }
}
