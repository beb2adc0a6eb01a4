//! Region windows
//!
//! A [`Window`] is the active sub-region of a raster: the extents a scan
//! reports and the only cells it reads. [`WindowedSource`] applies a window
//! to any other source.

use super::source::check_row_request;
use super::{Cell, DCell, RasterKind, RasterSource};
use crate::error::{Error, Result};

/// Rectangular sub-region of a raster, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// First row covered
    pub row_off: usize,
    /// First column covered
    pub col_off: usize,
    /// Number of rows covered
    pub rows: usize,
    /// Number of columns covered
    pub cols: usize,
}

impl Window {
    /// Create a window
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    pub fn new(row_off: usize, col_off: usize, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Window {
            row_off,
            col_off,
            rows,
            cols,
        })
    }

    /// Window covering a whole `rows` x `cols` raster
    pub fn full(rows: usize, cols: usize) -> Self {
        Window {
            row_off: 0,
            col_off: 0,
            rows,
            cols,
        }
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check that the window lies inside a `rows` x `cols` raster
    pub fn check_within(&self, rows: usize, cols: usize) -> Result<()> {
        let fits_rows = self
            .row_off
            .checked_add(self.rows)
            .is_some_and(|end| end <= rows);
        let fits_cols = self
            .col_off
            .checked_add(self.cols)
            .is_some_and(|end| end <= cols);
        if fits_rows && fits_cols {
            Ok(())
        } else {
            Err(Error::WindowOutOfBounds {
                row_off: self.row_off,
                col_off: self.col_off,
                rows: self.rows,
                cols: self.cols,
                raster_rows: rows,
                raster_cols: cols,
            })
        }
    }
}

/// A source restricted to a [`Window`]
///
/// Row `r` of the windowed source is row `window.row_off + r` of the inner
/// source, clipped to the window's columns.
#[derive(Debug)]
pub struct WindowedSource<S> {
    inner: S,
    window: Window,
    cbuf: Vec<Cell>,
    dbuf: Vec<DCell>,
}

impl<S: RasterSource> WindowedSource<S> {
    /// Restrict `inner` to `window`
    ///
    /// # Errors
    ///
    /// Returns `Error::WindowOutOfBounds` if the window does not fit the
    /// inner source's extents.
    pub fn new(inner: S, window: Window) -> Result<Self> {
        window.check_within(inner.rows(), inner.cols())?;
        Ok(WindowedSource {
            inner,
            window,
            cbuf: Vec::new(),
            dbuf: Vec::new(),
        })
    }

    /// The active window
    pub fn window(&self) -> Window {
        self.window
    }

    /// Release the inner source
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RasterSource> RasterSource for WindowedSource<S> {
    fn rows(&self) -> usize {
        self.window.rows
    }

    fn cols(&self) -> usize {
        self.window.cols
    }

    fn kind(&self) -> RasterKind {
        self.inner.kind()
    }

    fn read_cell_row(&mut self, row: usize, buf: &mut [Cell]) -> Result<()> {
        check_row_request(row, self.window.rows, buf.len(), self.window.cols)?;
        self.cbuf.resize(self.inner.cols(), None);
        self.inner
            .read_cell_row(self.window.row_off + row, &mut self.cbuf)?;
        let start = self.window.col_off;
        buf.copy_from_slice(&self.cbuf[start..start + self.window.cols]);
        Ok(())
    }

    fn read_dcell_row(&mut self, row: usize, buf: &mut [DCell]) -> Result<()> {
        check_row_request(row, self.window.rows, buf.len(), self.window.cols)?;
        self.dbuf.resize(self.inner.cols(), None);
        self.inner
            .read_dcell_row(self.window.row_off + row, &mut self.dbuf)?;
        let start = self.window.col_off;
        buf.copy_from_slice(&self.dbuf[start..start + self.window.cols]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Raster;

    fn grid_3x4() -> Raster {
        let cells = (0..12).map(Some).collect();
        Raster::from_cells(3, 4, cells).unwrap()
    }

    #[test]
    fn test_window_rejects_zero_extent() {
        assert!(Window::new(0, 0, 0, 2).is_err());
        assert_eq!(Window::full(3, 4).cell_count(), 12);
    }

    #[test]
    fn test_window_cell_count_saturates() {
        assert_eq!(Window::full(usize::MAX, 2).cell_count(), usize::MAX);
        assert_eq!(Window::full(usize::MAX / 2, 2).cell_count(), usize::MAX - 1);
    }

    #[test]
    fn test_window_check_within() {
        assert!(Window::new(1, 1, 2, 3).unwrap().check_within(3, 4).is_ok());
        assert!(matches!(
            Window::new(2, 0, 2, 1).unwrap().check_within(3, 4),
            Err(Error::WindowOutOfBounds { .. })
        ));
        assert!(
            Window::new(usize::MAX, 0, 1, 1)
                .unwrap()
                .check_within(3, 4)
                .is_err()
        );
    }

    #[test]
    fn test_windowed_source_reads_sub_region() {
        let raster = grid_3x4();
        let window = Window::new(1, 1, 2, 2).unwrap();
        let mut src = WindowedSource::new(raster.reader(), window).unwrap();
        assert_eq!((src.rows(), src.cols()), (2, 2));

        let mut buf = vec![None; 2];
        src.read_cell_row(0, &mut buf).unwrap();
        assert_eq!(buf, vec![Some(5), Some(6)]);
        src.read_cell_row(1, &mut buf).unwrap();
        assert_eq!(buf, vec![Some(9), Some(10)]);

        let mut dbuf = vec![None; 2];
        src.read_dcell_row(1, &mut dbuf).unwrap();
        assert_eq!(dbuf, vec![Some(9.0), Some(10.0)]);
    }

    #[test]
    fn test_windowed_source_row_out_of_range() {
        let raster = grid_3x4();
        let window = Window::new(0, 0, 1, 4).unwrap();
        let mut src = WindowedSource::new(raster.reader(), window).unwrap();
        let mut buf = vec![None; 4];
        assert!(matches!(
            src.read_cell_row(1, &mut buf),
            Err(Error::RowOutOfRange { row: 1, rows: 1 })
        ));
    }
}
