//! Error types for axis and accumulator construction.

use thiserror::Error;

/// Errors that can occur building binned accumulators.
#[derive(Error, Debug)]
pub enum HistError {
    /// Axis requested with zero bins.
    #[error("axis needs at least one bin")]
    EmptyAxis,

    /// Axis range is inverted, empty, or non-finite.
    #[error("invalid axis range: expected finite low < high, got ({low}, {high})")]
    InvalidRange {
        /// Requested lower edge.
        low: f64,
        /// Requested upper edge.
        high: f64,
    },
}

/// Result alias for accumulator operations.
pub type Result<T> = std::result::Result<T, HistError>;
