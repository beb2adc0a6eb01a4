//! Error types for rastat-core
//!
//! Provides a unified error type for raster construction and row access.
//! Every failure a [`RasterSource`](crate::RasterSource) can report while
//! being opened or read is one of these variants.

use thiserror::Error;

/// Rastat core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Cell data does not match the declared dimensions
    #[error("cell data length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Row index past the last row
    #[error("row out of range: {row} >= {rows}")]
    RowOutOfRange { row: usize, rows: usize },

    /// Cell position outside the raster
    #[error("cell out of range: ({row}, {col}) in {rows}x{cols}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Row buffer does not hold exactly one row
    #[error("row buffer length mismatch: expected {expected}, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// Window extends past the raster it restricts
    #[error(
        "window {rows}x{cols} at ({row_off}, {col_off}) exceeds raster {raster_rows}x{raster_cols}"
    )]
    WindowOutOfBounds {
        row_off: usize,
        col_off: usize,
        rows: usize,
        cols: usize,
        raster_rows: usize,
        raster_cols: usize,
    },

    /// Named layer does not exist
    #[error("raster map <{0}> not found")]
    LayerNotFound(String),

    /// I/O error raised by a source backed by external storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rastat core operations
pub type Result<T> = std::result::Result<T, Error>;
