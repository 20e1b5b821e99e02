//! Plug-in and Bayesian estimators under one contract
//!
//! Both estimator kinds fit a count matrix and report one ambiguity value
//! per observation group. The shared [`AmbiguityEstimator`] trait also
//! provides a generic Monte-Carlo `expectation`: the estimator's expected
//! value under a Multinomial(num_trials, q0) sampling regime, used to probe
//! finite-sample bias. Measures with an exact bias formula override the
//! Monte-Carlo fallback.

use crate::inference::BayesianInference;
use ambig_core::{stats, CountMatrix, Error, Matrix, Result};
use ambig_histogram::DEFAULT_BINS;
use ambig_measures::Measure;
use ambig_sampling::repeated_multinomial_draws;
use rand::Rng;
use tracing::debug;

/// Monte-Carlo knobs for estimator evaluation
///
/// The plug-in path is deterministic and ignores these.
#[derive(Debug, Clone, Copy)]
pub struct EstimateParams {
    /// Posterior sample count per observation group
    pub repeats: usize,
    /// Histogram bin count for mode estimation
    pub bins: usize,
}

impl EstimateParams {
    /// Params with the given sampling budget and default binning
    pub fn new(repeats: usize) -> Self {
        Self { repeats, ..Self::default() }
    }

    /// Override the histogram bin count
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self { repeats: 2048, bins: DEFAULT_BINS }
    }
}

/// The estimator contract: fit counts, produce one value per group
pub trait AmbiguityEstimator {
    /// Bind a count matrix, replacing any previous one
    fn fit(&mut self, ns: CountMatrix) -> Result<()>;

    /// Estimate one ambiguity value per observation group
    ///
    /// Fails with [`Error::NotFitted`] before the first `fit`.
    fn value<R: Rng + ?Sized>(&self, params: &EstimateParams, rng: &mut R) -> Result<Vec<f64>>;

    /// Expected estimator value per row of `q0` under
    /// Multinomial(`num_trials`, row) sampling
    ///
    /// The default implementation simulates: draw `num_samples` repeated
    /// count realizations per row, re-fit, and average the estimator values
    /// over the sample axis. Implementations with an exact bias formula
    /// override this.
    fn expectation<R: Rng + ?Sized>(
        &mut self,
        num_trials: u64,
        q0: &Matrix,
        num_samples: usize,
        params: &EstimateParams,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        monte_carlo_expectation(self, num_trials, q0, num_samples, params, rng)
    }
}

/// Simulated estimator expectation under repeated multinomial sampling
///
/// The generic fallback behind [`AmbiguityEstimator::expectation`], exposed
/// so overriding implementations can delegate to it and tests can compare
/// exact formulas against it.
pub fn monte_carlo_expectation<E, R>(
    estimator: &mut E,
    num_trials: u64,
    q0: &Matrix,
    num_samples: usize,
    params: &EstimateParams,
    rng: &mut R,
) -> Result<Vec<f64>>
where
    E: AmbiguityEstimator + ?Sized,
    R: Rng + ?Sized,
{
    if num_samples == 0 {
        return Err(Error::InvalidParameter(
            "expectation needs at least one sample per group".to_string(),
        ));
    }
    debug!(
        groups = q0.rows(),
        num_trials, num_samples, "simulating estimator expectation"
    );
    let batches = repeated_multinomial_draws(num_trials, q0, num_samples, rng)?;
    // Stack every realization into one fit: rows = groups * num_samples.
    let mut data = Vec::with_capacity(q0.rows() * num_samples * q0.cols());
    for batch in &batches {
        for row in batch.iter_rows() {
            data.extend_from_slice(row);
        }
    }
    estimator.fit(CountMatrix::from_flat(data, q0.cols())?)?;
    let values = estimator.value(params, rng)?;
    Ok(values.chunks_exact(num_samples).map(stats::mean).collect())
}

fn check_classes(measure: Measure, ns: &CountMatrix) -> Result<()> {
    if ns.classes() < measure.min_classes() {
        return Err(Error::InvalidInput(format!(
            "{} measure needs at least {} classes, counts have {}",
            measure.name(),
            measure.min_classes(),
            ns.classes()
        )));
    }
    Ok(())
}

/// Frequency-substitution point estimator
///
/// Deterministic given the fitted counts: normalizes each row and applies
/// the measure, no randomness involved.
#[derive(Debug, Clone)]
pub struct PlugInEstimator {
    measure: Measure,
    ns: Option<CountMatrix>,
}

impl PlugInEstimator {
    /// Create a plug-in estimator for the given measure
    pub fn new(measure: Measure) -> Self {
        Self { measure, ns: None }
    }

    /// The configured measure
    pub fn measure(&self) -> Measure {
        self.measure
    }
}

impl AmbiguityEstimator for PlugInEstimator {
    fn fit(&mut self, ns: CountMatrix) -> Result<()> {
        check_classes(self.measure, &ns)?;
        self.ns = Some(ns);
        Ok(())
    }

    fn value<R: Rng + ?Sized>(&self, _params: &EstimateParams, _rng: &mut R) -> Result<Vec<f64>> {
        let ns = self.ns.as_ref().ok_or_else(|| Error::requires_fit("value"))?;
        let qs = ns.proportions();
        Ok(qs.map_rows(|row| self.measure.value(row)))
    }

    fn expectation<R: Rng + ?Sized>(
        &mut self,
        num_trials: u64,
        q0: &Matrix,
        num_samples: usize,
        params: &EstimateParams,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let exact: Option<Vec<f64>> = q0
            .iter_rows()
            .map(|row| self.measure.plug_in_expectation(num_trials, row))
            .collect();
        match exact {
            Some(values) => Ok(values),
            None => monte_carlo_expectation(self, num_trials, q0, num_samples, params, rng),
        }
    }
}

/// Which posterior summary a Bayesian estimator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorKind {
    /// Posterior mean; closed form where the measure provides one
    Mean,
    /// Posterior mode; always Monte-Carlo histogram binning
    Mode,
}

/// Posterior-summary estimator over the conjugate model
#[derive(Debug, Clone)]
pub struct BayesEstimator {
    measure: Measure,
    kind: EstimatorKind,
    inference: BayesianInference,
}

impl BayesEstimator {
    /// Create a Bayesian estimator with prior strength `beta > 0`
    pub fn new(measure: Measure, beta: f64, kind: EstimatorKind) -> Result<Self> {
        Ok(Self {
            measure,
            kind,
            inference: BayesianInference::new(beta)?,
        })
    }

    /// The configured measure
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// The configured posterior summary
    pub fn kind(&self) -> EstimatorKind {
        self.kind
    }

    /// Borrow the owned inference context
    pub fn inference(&self) -> &BayesianInference {
        &self.inference
    }
}

impl AmbiguityEstimator for BayesEstimator {
    fn fit(&mut self, ns: CountMatrix) -> Result<()> {
        check_classes(self.measure, &ns)?;
        self.inference.fit(ns);
        Ok(())
    }

    fn value<R: Rng + ?Sized>(&self, params: &EstimateParams, rng: &mut R) -> Result<Vec<f64>> {
        let posterior = self.inference.posterior(self.measure)?;
        match self.kind {
            EstimatorKind::Mean => posterior.mean(params.repeats, rng),
            EstimatorKind::Mode => posterior.mode(params.repeats, params.bins, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_value_before_fit_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let params = EstimateParams::default();

        let plug_in = PlugInEstimator::new(Measure::New);
        assert!(matches!(
            plug_in.value(&params, &mut rng),
            Err(Error::NotFitted(_))
        ));

        let bayes = BayesEstimator::new(Measure::New, 1.0, EstimatorKind::Mean).unwrap();
        assert!(matches!(
            bayes.value(&params, &mut rng),
            Err(Error::NotFitted(_))
        ));
    }

    #[test]
    fn test_fit_rejects_incompatible_classes() {
        let ns = CountMatrix::single(&[3, 1]).unwrap();
        let mut plug_in = PlugInEstimator::new(Measure::ModifiedNew);
        assert!(plug_in.fit(ns.clone()).is_err());
        let mut bayes =
            BayesEstimator::new(Measure::ModifiedNew, 1.0, EstimatorKind::Mean).unwrap();
        assert!(bayes.fit(ns).is_err());
    }

    #[test]
    fn test_plug_in_value() {
        let mut plug_in = PlugInEstimator::new(Measure::New);
        plug_in
            .fit(CountMatrix::from_rows(vec![vec![10, 0, 0], vec![1, 1, 0]]).unwrap())
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let values = plug_in.value(&EstimateParams::default(), &mut rng).unwrap();
        // One-hot counts give zero ambiguity, an even split gives 0.5
        assert!((values[0] - 0.0).abs() < 1e-12);
        assert!((values[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bayes_mean_uses_closed_form() {
        let mut bayes = BayesEstimator::new(Measure::New, 1.0, EstimatorKind::Mean).unwrap();
        bayes
            .fit(CountMatrix::from_rows(vec![vec![10, 1, 1], vec![5, 0, 0]]).unwrap())
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // Zero repeats: the MEAN path must not touch the sampler for the
        // New family
        let values = bayes.value(&EstimateParams::new(0), &mut rng).unwrap();
        let alphas = bayes.inference().alphas().unwrap();
        for (v, row) in values.iter().zip(alphas.iter_rows()) {
            assert!((v - Measure::New.posterior_mean(row).unwrap()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_estimate_params_builder() {
        let params = EstimateParams::new(512).with_bins(64);
        assert_eq!(params.repeats, 512);
        assert_eq!(params.bins, 64);
        assert_eq!(EstimateParams::default().bins, DEFAULT_BINS);
    }
}
