//! Error types for rastat-stats

use thiserror::Error;

/// Errors that can occur while collecting statistics
#[derive(Debug, Error)]
pub enum StatsError {
    /// The source could not be opened or a row could not be read
    #[error("source read failure: {0}")]
    Source(#[from] rastat_core::Error),

    /// Logarithmic scaling requested over a range that touches or crosses zero
    #[error("unable to use logarithmic scaling if range includes zero: [{min}, {max}]")]
    RangeIncludesZero { min: f64, max: f64 },

    /// A range bound is not finite
    #[error("invalid value range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
