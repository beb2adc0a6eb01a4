//! Fixture rasters and instrumented sources

use crate::error::{TestError, TestResult};
use rastat_core::{Cell, DCell, Raster, RasterKind, RasterSource};

fn flatten<T: Copy>(rows: &[&[T]]) -> TestResult<(usize, usize, Vec<T>)> {
    let ncols = rows.first().map_or(0, |r| r.len());
    let mut data = Vec::with_capacity(rows.len() * ncols);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != ncols {
            return Err(TestError::RaggedFixture {
                row,
                expected: ncols,
                actual: cells.len(),
            });
        }
        data.extend_from_slice(cells);
    }
    Ok((rows.len(), ncols, data))
}

/// Build a discrete raster from literal rows
///
/// ```
/// let raster = rastat_test::discrete_raster(&[&[Some(1), Some(1)], &[Some(2), None]]).unwrap();
/// assert_eq!(raster.null_count(), 1);
/// ```
pub fn discrete_raster(rows: &[&[Cell]]) -> TestResult<Raster> {
    let (nrows, ncols, data) = flatten(rows)?;
    Ok(Raster::from_cells(nrows, ncols, data)?)
}

/// Build a continuous raster from literal rows
pub fn continuous_raster(rows: &[&[DCell]]) -> TestResult<Raster> {
    let (nrows, ncols, data) = flatten(rows)?;
    Ok(Raster::from_dcells(nrows, ncols, data)?)
}

/// Source wrapper that counts row reads
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    reads: usize,
}

impl<S: RasterSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        CountingSource { inner, reads: 0 }
    }

    /// Number of row reads served so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl<S: RasterSource> RasterSource for CountingSource<S> {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn kind(&self) -> RasterKind {
        self.inner.kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> rastat_core::Result<()> {
        self.reads += 1;
        self.inner.read_cell_row(row, buf)
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> rastat_core::Result<()> {
        self.reads += 1;
        self.inner.read_dcell_row(row, buf)
    }
}

/// Source wrapper whose read of one row fails with an I/O error
#[derive(Debug)]
pub struct FailingSource<S> {
    inner: S,
    fail_row: usize,
}

impl<S: RasterSource> FailingSource<S> {
    pub fn new(inner: S, fail_row: usize) -> Self {
        FailingSource { inner, fail_row }
    }

    fn check(&self, row: usize) -> rastat_core::Result<()> {
        if row == self.fail_row {
            return Err(std::io::Error::other(format!("row {row} unreadable")).into());
        }
        Ok(())
    }
}

impl<S: RasterSource> RasterSource for FailingSource<S> {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn kind(&self) -> RasterKind {
        self.inner.kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> rastat_core::Result<()> {
        self.check(row)?;
        self.inner.read_cell_row(row, buf)
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> rastat_core::Result<()> {
        self.check(row)?;
        self.inner.read_dcell_row(row, buf)
    }
}
