//! Row-oriented raster sources
//!
//! Statistics collectors never see a whole grid at once. They ask a
//! [`RasterSource`] for its extents and then read rows one at a time into
//! a buffer they own.

use super::{Cell, DCell, Raster, RasterKind};
use crate::error::{Error, Result};

/// A raster that can be read one row at a time
///
/// Extents are fixed for the lifetime of a scan. Rows may be requested in
/// either kind regardless of [`kind`](Self::kind); implementations convert
/// with [`dcell_to_cell`](super::dcell_to_cell) and
/// [`cell_to_dcell`](super::cell_to_dcell) semantics.
///
/// A read error aborts the caller's scan. Sources that can be interrupted
/// report the interruption as an error from a row read.
pub trait RasterSource {
    /// Number of rows in the readable region
    fn rows(&self) -> usize;

    /// Number of columns in the readable region
    fn cols(&self) -> usize;

    /// Declared storage kind of the cells
    fn kind(&self) -> RasterKind;

    /// Read row `row` as discrete cells into `buf` (`buf.len() == cols()`)
    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> Result<()>;

    /// Read row `row` as continuous cells into `buf` (`buf.len() == cols()`)
    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> Result<()>;
}

impl<S: RasterSource + ?Sized> RasterSource for &mut S {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn kind(&self) -> RasterKind {
        (**self).kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> Result<()> {
        (**self).read_cell_row(row, buf)
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> Result<()> {
        (**self).read_dcell_row(row, buf)
    }
}

impl<S: RasterSource + ?Sized> RasterSource for Box<S> {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn kind(&self) -> RasterKind {
        (**self).kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> Result<()> {
        (**self).read_cell_row(row, buf)
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> Result<()> {
        (**self).read_dcell_row(row, buf)
    }
}

/// Validate a row request against the source extents.
///
/// Shared by every source implementation in this crate.
pub fn check_row_request(row: usize, rows: usize, buf_len: usize, cols: usize) -> Result<()> {
    if row >= rows {
        return Err(Error::RowOutOfRange { row, rows });
    }
    if buf_len != cols {
        return Err(Error::RowLengthMismatch {
            expected: cols,
            actual: buf_len,
        });
    }
    Ok(())
}

/// Open read handle on an in-memory [`Raster`]
///
/// Dropping the reader closes it; the raster itself is untouched.
#[derive(Debug, Clone, Copy)]
pub struct RasterReader<'a> {
    raster: &'a Raster,
}

impl<'a> RasterReader<'a> {
    /// Open a reader over `raster`
    pub fn new(raster: &'a Raster) -> Self {
        RasterReader { raster }
    }

    /// The raster being read
    pub fn raster(&self) -> &'a Raster {
        self.raster
    }
}

impl RasterSource for RasterReader<'_> {
    fn rows(&self) -> usize {
        self.raster.rows()
    }

    fn cols(&self) -> usize {
        self.raster.cols()
    }

    fn kind(&self) -> RasterKind {
        self.raster.kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> Result<()> {
        check_row_request(row, self.rows(), buf.len(), self.cols())?;
        self.raster.copy_cell_row(row, buf);
        Ok(())
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> Result<()> {
        check_row_request(row, self.rows(), buf.len(), self.cols())?;
        self.raster.copy_dcell_row(row, buf);
        Ok(())
    }
}
