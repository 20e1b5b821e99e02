//! Conjugate Dirichlet-multinomial inference context
//!
//! A [`BayesianInference`] binds observed counts to a uniform prior
//! pseudo-count. The Dirichlet posterior parameters are recomputed on demand
//! (`ns + beta`), and all posteriors derived from one context share its
//! counts: re-fitting replaces them wholesale and semantically invalidates
//! samples drawn earlier.

use crate::posterior::Posterior;
use ambig_core::{CountMatrix, Error, Matrix, Result};
use ambig_measures::Measure;
use tracing::debug;

/// Inference context: prior strength plus optionally bound counts
///
/// Starts unbound; `fit` transitions to bound and stays there (later fits
/// replace the counts but never unbind).
#[derive(Debug, Clone)]
pub struct BayesianInference {
    beta: f64,
    ns: Option<CountMatrix>,
}

impl BayesianInference {
    /// Create an unbound context with prior pseudo-count `beta > 0`
    pub fn new(beta: f64) -> Result<Self> {
        if beta <= 0.0 {
            return Err(Error::non_positive("beta", beta));
        }
        Ok(Self { beta, ns: None })
    }

    /// Prior pseudo-count
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Whether counts have been bound
    pub fn is_fitted(&self) -> bool {
        self.ns.is_some()
    }

    /// The bound counts, if any
    pub fn ns(&self) -> Option<&CountMatrix> {
        self.ns.as_ref()
    }

    /// Bind counts, replacing any previous binding
    pub fn fit(&mut self, ns: CountMatrix) -> &mut Self {
        debug!(groups = ns.rows(), classes = ns.classes(), "fitting inference context");
        self.ns = Some(ns);
        self
    }

    /// Dirichlet posterior parameters `ns + beta`, recomputed on demand
    pub fn alphas(&self) -> Result<Matrix> {
        let ns = self.ns.as_ref().ok_or_else(|| Error::requires_fit("alphas"))?;
        Ok(ns.with_pseudo_count(self.beta))
    }

    /// Posterior over the given measure
    ///
    /// Fails with [`Error::NotFitted`] while unbound, and rejects measures
    /// that need more classes than the bound counts have.
    pub fn posterior(&self, measure: Measure) -> Result<Posterior<'_>> {
        let ns = self.ns.as_ref().ok_or_else(|| Error::requires_fit("posterior"))?;
        if ns.classes() < measure.min_classes() {
            return Err(Error::InvalidInput(format!(
                "{} measure needs at least {} classes, counts have {}",
                measure.name(),
                measure.min_classes(),
                ns.classes()
            )));
        }
        Ok(Posterior::new(self, measure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_beta() {
        assert!(BayesianInference::new(0.0).is_err());
        assert!(BayesianInference::new(-1.0).is_err());
        assert!(BayesianInference::new(1.5).is_ok());
    }

    #[test]
    fn test_unbound_access_fails() {
        let inference = BayesianInference::new(1.0).unwrap();
        assert!(!inference.is_fitted());
        assert!(matches!(inference.alphas(), Err(Error::NotFitted(_))));
        assert!(matches!(inference.posterior(Measure::New), Err(Error::NotFitted(_))));
    }

    #[test]
    fn test_alphas_recomputed_from_counts_and_beta() {
        let mut inference = BayesianInference::new(1.5).unwrap();
        inference.fit(CountMatrix::single(&[10, 1, 1]).unwrap());
        let alphas = inference.alphas().unwrap();
        assert_eq!(alphas.row(0), &[11.5, 2.5, 2.5]);

        // Re-fitting replaces the counts wholesale
        inference.fit(CountMatrix::single(&[2, 2, 2]).unwrap());
        let alphas = inference.alphas().unwrap();
        assert_eq!(alphas.row(0), &[3.5, 3.5, 3.5]);
    }

    #[test]
    fn test_posterior_rejects_too_few_classes() {
        let mut inference = BayesianInference::new(1.0).unwrap();
        inference.fit(CountMatrix::single(&[3, 1]).unwrap());
        // Two classes suffice for the collision measure
        assert!(inference.posterior(Measure::New).is_ok());
        // ...but not for the modified one (needs two proper classes)
        assert!(inference.posterior(Measure::ModifiedNew).is_err());
    }
}
