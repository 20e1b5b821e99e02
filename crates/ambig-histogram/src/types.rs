//! Core types for histogram representation

use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// A histogram over a bounded sample
///
/// The structured result of binning: bin centers, bin width, per-bin counts,
/// the estimated mode and the maximum bin count are all exposed. The
/// posterior machinery consumes only [`Histogram::mode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize) -> Self {
        Self { bins, total_count }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Width of the bins (equal-width binning)
    pub fn bin_width(&self) -> f64 {
        self.bins.first().map(HistogramBin::width).unwrap_or(0.0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Index of the highest-count bin, ties broken by first occurrence
    pub fn argmax(&self) -> Option<usize> {
        let max = self.max_count();
        self.bins.iter().position(|bin| bin.count == max)
    }

    /// The estimated mode: center of the highest-count bin
    pub fn mode(&self) -> Option<f64> {
        self.argmax().map(|i| self.bins[i].center())
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram({} bins, n={})", self.len(), self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5);
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
    }

    #[test]
    fn test_histogram_mode_first_occurrence_tie_break() {
        let bins = vec![
            HistogramBin::new(0.0, 0.25, 2),
            HistogramBin::new(0.25, 0.5, 5),
            HistogramBin::new(0.5, 0.75, 5),
            HistogramBin::new(0.75, 1.0, 3),
        ];
        let hist = Histogram::new(bins, 15);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.argmax(), Some(1));
        assert_eq!(hist.mode(), Some(0.375));
        assert_eq!(hist.counts(), vec![2, 5, 5, 3]);
        assert_eq!(hist.bin_width(), 0.25);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new(vec![], 0);
        assert!(hist.is_empty());
        assert_eq!(hist.mode(), None);
        assert_eq!(hist.bin_width(), 0.0);
    }
}
