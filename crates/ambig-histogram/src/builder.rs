//! Equal-width binning over the unit interval

use crate::types::{Histogram, HistogramBin};
use ambig_core::{Error, Result};

/// Default number of bins for mode estimation
pub const DEFAULT_BINS: usize = 256;

/// Fixed-range, fixed-width histogram builder over `[0, 1]`
///
/// All bins are half-open `[left, right)`, so a value of exactly 1.0 is not
/// counted. Ambiguity samples live in `[0, 1)` almost surely, so the
/// boundary case does not affect mode estimates in practice.
#[derive(Debug, Clone)]
pub struct UnitIntervalBuilder {
    num_bins: usize,
}

impl UnitIntervalBuilder {
    /// Create a builder with the given number of bins
    pub fn new(num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        Ok(Self { num_bins })
    }

    /// Number of bins this builder produces
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Bin a sample into equal-width bins over `[0, 1]`
    pub fn build(&self, sample: &[f64]) -> Histogram {
        let width = 1.0 / self.num_bins as f64;
        let mut counts = vec![0usize; self.num_bins];
        for &value in sample {
            if (0.0..1.0).contains(&value) {
                // value < 1.0 keeps the index in range
                let idx = (value / width) as usize;
                counts[idx.min(self.num_bins - 1)] += 1;
            }
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                HistogramBin::new(i as f64 * width, (i + 1) as f64 * width, count)
            })
            .collect();
        Histogram::new(bins, sample.len())
    }
}

impl Default for UnitIntervalBuilder {
    fn default() -> Self {
        Self { num_bins: DEFAULT_BINS }
    }
}
