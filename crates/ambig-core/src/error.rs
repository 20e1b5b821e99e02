//! Error types for ambiguity estimation
//!
//! Provides a unified error type for all ambig-* crates.

use thiserror::Error;

/// Core error type for ambiguity estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// An estimator or inference context was used before `fit` bound data
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an operation that requires a prior `fit` call
    pub fn requires_fit(operation: &str) -> Self {
        Self::NotFitted(format!("call `fit` before `{operation}`"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }
}
