//! Row-major containers for count data and probability/parameter rows
//!
//! The estimation pipeline works on batches of independent observation
//! groups. Both containers store one group per row: [`CountMatrix`] holds
//! observed class counts (last class is the distinguished "cannot-solve"
//! class), [`Matrix`] holds derived real-valued rows (proportions, Dirichlet
//! parameters, Monte-Carlo sample values).

use crate::error::{Error, Result};
use crate::stats::guarded_div;

/// Dense row-major matrix of `f64` values
///
/// Used for probability rows, Dirichlet parameter rows and per-group sample
/// values. Row width is uniform but otherwise unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from a flat row-major buffer
    pub fn from_flat(data: Vec<f64>, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(Error::InvalidInput("matrix must have at least one column".to_string()));
        }
        if data.len() % cols != 0 {
            return Err(Error::size_mismatch(
                cols,
                data.len() % cols,
                "trailing matrix row",
            ));
        }
        let rows = data.len() / cols;
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from per-row vectors; all rows must have equal width
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(Error::InvalidInput("matrix must have at least one non-empty row".to_string()));
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(Error::size_mismatch(cols, row.len(), "matrix row"));
            }
            data.extend_from_slice(row);
        }
        Self::from_flat(data, cols)
    }

    /// Single-row matrix from a slice
    pub fn single(row: &[f64]) -> Result<Self> {
        Self::from_flat(row.to_vec(), row.len())
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// Flat row-major view of the backing buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Apply a scalar function to every row, producing one value per row
    pub fn map_rows<F: Fn(&[f64]) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter_rows().map(f).collect()
    }
}

/// Observed class counts, one observation group per row
///
/// Invariants: at least two classes (the last one is the "cannot-solve"
/// class), uniform row width. Counts are non-negative by construction
/// (`u64`). Replaced wholesale on re-fit; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    data: Vec<u64>,
    rows: usize,
    classes: usize,
}

impl CountMatrix {
    /// Create a count matrix from a flat row-major buffer
    pub fn from_flat(data: Vec<u64>, classes: usize) -> Result<Self> {
        if classes < 2 {
            return Err(Error::InvalidInput(format!(
                "count matrix needs at least 2 classes, got {classes}"
            )));
        }
        if data.is_empty() || data.len() % classes != 0 {
            return Err(Error::size_mismatch(
                classes,
                data.len() % classes,
                "trailing count row",
            ));
        }
        let rows = data.len() / classes;
        Ok(Self { data, rows, classes })
    }

    /// Create a count matrix from per-row vectors
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let classes = rows.first().map(Vec::len).unwrap_or(0);
        if classes < 2 {
            return Err(Error::InvalidInput(format!(
                "count matrix needs at least 2 classes, got {classes}"
            )));
        }
        let mut data = Vec::with_capacity(rows.len() * classes);
        for row in &rows {
            if row.len() != classes {
                return Err(Error::size_mismatch(classes, row.len(), "count row"));
            }
            data.extend_from_slice(row);
        }
        Self::from_flat(data, classes)
    }

    /// Single-group count matrix from a slice
    pub fn single(row: &[u64]) -> Result<Self> {
        Self::from_flat(row.to_vec(), row.len())
    }

    /// Number of observation groups
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of classes, including the trailing cannot-solve class
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.classes..(i + 1) * self.classes]
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> {
        self.data.chunks_exact(self.classes)
    }

    /// Empirical proportions: each row divided by its total
    ///
    /// A zero-count row normalizes to an all-zero row (guarded division);
    /// downstream measures treat that as a degenerate-input policy case
    /// rather than an error.
    pub fn proportions(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.iter_rows() {
            let total: u64 = row.iter().sum();
            for &n in row {
                data.push(guarded_div(n as f64, total as f64));
            }
        }
        Matrix { data, rows: self.rows, cols: self.classes }
    }

    /// Dirichlet posterior parameters: counts plus a uniform pseudo-count
    pub fn with_pseudo_count(&self, beta: f64) -> Matrix {
        let data = self.data.iter().map(|&n| n as f64 + beta).collect();
        Matrix { data, rows: self.rows, cols: self.classes }
    }
}
