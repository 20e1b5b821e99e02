//! Posterior distribution of a measure under the conjugate model
//!
//! A [`Posterior`] borrows an inference context and carries one measure.
//! Summaries come in two flavors: Monte-Carlo (sample, then reduce along the
//! sample axis) and closed-form (where the measure family provides posterior
//! moment formulas). The mode is always Monte-Carlo, estimated by histogram
//! binning over the unit interval.

use crate::inference::BayesianInference;
use ambig_core::{stats, Error, Matrix, Result};
use ambig_histogram::bin_unit_interval;
use ambig_measures::Measure;
use ambig_sampling::{sample_from, MeasureSamples};
use rand::Rng;

/// Order-agnostic reduction along the sample axis
#[derive(Clone, Copy)]
pub enum Reduction {
    /// Sample mean
    Mean,
    /// Population variance
    Variance,
    /// Population standard deviation
    Std,
    /// Any other order-agnostic statistic
    Custom(fn(&[f64]) -> f64),
}

impl Reduction {
    /// Apply the reduction to one group's samples
    pub fn reduce(&self, samples: &[f64]) -> f64 {
        match self {
            Self::Mean => stats::mean(samples),
            Self::Variance => stats::variance(samples),
            Self::Std => stats::variance(samples).sqrt(),
            Self::Custom(f) => f(samples),
        }
    }
}

/// Posterior over one measure, bound to an inference context
#[derive(Clone, Copy)]
pub struct Posterior<'a> {
    inference: &'a BayesianInference,
    measure: Measure,
}

impl<'a> Posterior<'a> {
    pub(crate) fn new(inference: &'a BayesianInference, measure: Measure) -> Self {
        Self { inference, measure }
    }

    /// The measure this posterior summarizes
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Draw `repeats` measure samples per observation group
    ///
    /// Returns a `(groups, repeats)` matrix of measure values.
    pub fn sample<R: Rng + ?Sized>(&self, repeats: usize, rng: &mut R) -> Result<Matrix> {
        Ok(self.sample_with_draws(repeats, rng)?.vals)
    }

    /// Like [`Posterior::sample`], additionally returning the raw
    /// probability draws
    pub fn sample_with_draws<R: Rng + ?Sized>(
        &self,
        repeats: usize,
        rng: &mut R,
    ) -> Result<MeasureSamples> {
        let alphas = self.inference.alphas()?;
        let measure = self.measure;
        sample_from(move |p| measure.value(p), &alphas, repeats, rng)
    }

    /// Sample and reduce along the sample axis with a named reduction
    pub fn apply<R: Rng + ?Sized>(
        &self,
        reduction: Reduction,
        repeats: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let values = self.sample(repeats, rng)?;
        Ok(values.iter_rows().map(|row| reduction.reduce(row)).collect())
    }

    /// Posterior mean per group: closed form where the measure has one,
    /// Monte-Carlo otherwise
    pub fn mean<R: Rng + ?Sized>(&self, repeats: usize, rng: &mut R) -> Result<Vec<f64>> {
        let alphas = self.inference.alphas()?;
        let closed: Option<Vec<f64>> = alphas
            .iter_rows()
            .map(|row| self.measure.posterior_mean(row))
            .collect();
        match closed {
            Some(means) => Ok(means),
            None => self.apply(Reduction::Mean, repeats, rng),
        }
    }

    /// Posterior variance per group: closed form where the measure has one,
    /// Monte-Carlo otherwise
    pub fn var<R: Rng + ?Sized>(&self, repeats: usize, rng: &mut R) -> Result<Vec<f64>> {
        let alphas = self.inference.alphas()?;
        let closed: Option<Vec<f64>> = alphas
            .iter_rows()
            .map(|row| self.measure.posterior_variance(row))
            .collect();
        match closed {
            Some(vars) => Ok(vars),
            None => self.apply(Reduction::Variance, repeats, rng),
        }
    }

    /// Posterior standard deviation per group
    pub fn std<R: Rng + ?Sized>(&self, repeats: usize, rng: &mut R) -> Result<Vec<f64>> {
        Ok(self.var(repeats, rng)?.into_iter().map(f64::sqrt).collect())
    }

    /// Posterior mode per group, always Monte-Carlo
    ///
    /// Samples, bins into `bins` equal-width bins over `[0, 1]` and reports
    /// the center of the highest-count bin.
    pub fn mode<R: Rng + ?Sized>(
        &self,
        repeats: usize,
        bins: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let values = self.sample(repeats, rng)?;
        values
            .iter_rows()
            .map(|row| {
                bin_unit_interval(row, bins)?.mode().ok_or_else(|| {
                    Error::Computation("empty histogram in mode estimation".to_string())
                })
            })
            .collect()
    }
}
