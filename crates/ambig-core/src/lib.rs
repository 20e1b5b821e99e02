//! Core types for ambiguity estimation
//!
//! This crate provides the shared foundations of the `ambiguity-stats`
//! workspace: the unified [`Error`] type, the row-major [`CountMatrix`] /
//! [`Matrix`] containers that carry observed counts and derived probability
//! or parameter rows, and the guarded-division policy helper used wherever a
//! conditional probability may have an empty denominator.
//!
//! # Example
//!
//! ```rust
//! use ambig_core::CountMatrix;
//!
//! let ns = CountMatrix::from_rows(vec![vec![10, 1, 1], vec![5, 0, 0]]).unwrap();
//! let qs = ns.proportions();
//! assert_eq!(qs.row(0)[0], 10.0 / 12.0);
//! ```

pub mod error;
pub mod matrix;
pub mod stats;

pub use error::{Error, Result};
pub use matrix::{CountMatrix, Matrix};
pub use stats::guarded_div;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
