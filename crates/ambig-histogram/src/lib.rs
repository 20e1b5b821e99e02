//! Histogram-based mode estimation for bounded samples
//!
//! This crate provides the narrow collaborator contract the posterior
//! machinery relies on: bin a bounded Monte-Carlo sample into equal-width
//! bins over `[0, 1]` and report the center of the highest-count bin as the
//! mode. The full binning result ([`Histogram`]) stays available for callers
//! that want bin centers, per-bin counts or the max count.
//!
//! # Example
//!
//! ```rust
//! use ambig_histogram::{UnitIntervalBuilder, DEFAULT_BINS};
//!
//! let sample = vec![0.41, 0.42, 0.43, 0.44, 0.9];
//! let builder = UnitIntervalBuilder::new(DEFAULT_BINS).unwrap();
//! let hist = builder.build(&sample);
//! let mode = hist.mode().unwrap();
//! assert!(mode > 0.4 && mode < 0.5);
//! ```

pub mod builder;
pub mod types;

pub use builder::{UnitIntervalBuilder, DEFAULT_BINS};
pub use types::{Histogram, HistogramBin};

pub use ambig_core::Result;

/// Bin a sample into `num_bins` equal-width bins over `[0, 1]`
pub fn bin_unit_interval(sample: &[f64], num_bins: usize) -> Result<Histogram> {
    Ok(UnitIntervalBuilder::new(num_bins)?.build(sample))
}
