//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture raster
    #[error("failed to build fixture: {0}")]
    Fixture(#[from] rastat_core::Error),

    /// Fixture rows have different lengths
    #[error("ragged fixture: row {row} has {actual} cells, expected {expected}")]
    RaggedFixture {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
