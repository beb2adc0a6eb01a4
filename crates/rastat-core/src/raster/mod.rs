//! Raster - In-memory 2D grid of cells
//!
//! A [`Raster`] stores one layer of either discrete (integer category) or
//! continuous (floating-point) cells in row-major order. Each cell is an
//! `Option`, with `None` as the null marker.
//!
//! See [`source`] for the row-reading interface and [`window`] for
//! restricting a scan to a sub-region.
//!
//! # Examples
//!
//! ```
//! use rastat_core::{Raster, RasterKind};
//!
//! let raster = Raster::from_cells(2, 2, vec![Some(1), Some(1), Some(2), None]).unwrap();
//! assert_eq!(raster.kind(), RasterKind::Discrete);
//! assert_eq!(raster.get_cell(1, 0).unwrap(), Some(2));
//! assert_eq!(raster.null_count(), 1);
//! ```

pub mod source;
pub mod window;

pub use source::{RasterReader, RasterSource};
pub use window::{Window, WindowedSource};

use crate::error::{Error, Result};

/// A discrete cell: an integer category, or `None` for null
pub type Cell = Option<i32>;

/// A continuous cell: a floating-point value, or `None` for null
pub type DCell = Option<f64>;

/// Declared storage kind of a raster layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterKind {
    /// Integer category cells
    Discrete,
    /// Floating-point measurement cells
    Continuous,
}

/// Widen a discrete cell to a continuous one. Exact for every `i32`.
#[inline]
pub fn cell_to_dcell(cell: Cell) -> DCell {
    cell.map(f64::from)
}

/// Narrow a continuous cell to a discrete one.
///
/// The value is truncated toward zero. NaN, infinities and values outside
/// the `i32` range become null.
#[inline]
pub fn dcell_to_cell(dcell: DCell) -> Cell {
    let v = dcell?.trunc();
    if v.is_finite() && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
        Some(v as i32)
    } else {
        None
    }
}

/// Fold NaN into the null marker.
#[inline]
pub fn normalize_dcell(dcell: DCell) -> DCell {
    dcell.filter(|v| !v.is_nan())
}

#[derive(Debug, Clone, PartialEq)]
enum RasterData {
    Discrete(Vec<Cell>),
    Continuous(Vec<DCell>),
}

/// In-memory raster layer
///
/// # Memory Layout
///
/// Cells are stored in row-major order with no padding. The cell at
/// (row, col) is at index `row * cols + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    data: RasterData,
}

impl Raster {
    /// Create a discrete raster with every cell null
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    pub fn new_discrete(rows: usize, cols: usize) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        Ok(Raster {
            rows,
            cols,
            data: RasterData::Discrete(vec![None; size]),
        })
    }

    /// Create a continuous raster with every cell null
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `rows` or `cols` is 0.
    pub fn new_continuous(rows: usize, cols: usize) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        Ok(Raster {
            rows,
            cols,
            data: RasterData::Continuous(vec![None; size]),
        })
    }

    /// Create a discrete raster from row-major cells
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero extent and
    /// `Error::DataLengthMismatch` if `data.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, data: Vec<Cell>) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        if data.len() != size {
            return Err(Error::DataLengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Raster {
            rows,
            cols,
            data: RasterData::Discrete(data),
        })
    }

    /// Create a continuous raster from row-major cells
    ///
    /// NaN values are stored as null.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero extent and
    /// `Error::DataLengthMismatch` if `data.len() != rows * cols`.
    pub fn from_dcells(rows: usize, cols: usize, data: Vec<DCell>) -> Result<Self> {
        let size = checked_size(rows, cols)?;
        if data.len() != size {
            return Err(Error::DataLengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }
        let data = data.into_iter().map(normalize_dcell).collect();
        Ok(Raster {
            rows,
            cols,
            data: RasterData::Continuous(data),
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Storage kind of the cells
    #[inline]
    pub fn kind(&self) -> RasterKind {
        match self.data {
            RasterData::Discrete(_) => RasterKind::Discrete,
            RasterData::Continuous(_) => RasterKind::Continuous,
        }
    }

    /// Read one cell as discrete, converting continuous storage
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        Ok(match &self.data {
            RasterData::Discrete(d) => d[idx],
            RasterData::Continuous(d) => dcell_to_cell(d[idx]),
        })
    }

    /// Read one cell as continuous, converting discrete storage
    pub fn get_dcell(&self, row: usize, col: usize) -> Result<DCell> {
        let idx = self.index(row, col)?;
        Ok(match &self.data {
            RasterData::Discrete(d) => cell_to_dcell(d[idx]),
            RasterData::Continuous(d) => d[idx],
        })
    }

    /// Store a discrete value, converting to the raster's kind
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index(row, col)?;
        match &mut self.data {
            RasterData::Discrete(d) => d[idx] = cell,
            RasterData::Continuous(d) => d[idx] = cell_to_dcell(cell),
        }
        Ok(())
    }

    /// Store a continuous value, converting to the raster's kind
    pub fn set_dcell(&mut self, row: usize, col: usize, dcell: DCell) -> Result<()> {
        let idx = self.index(row, col)?;
        match &mut self.data {
            RasterData::Discrete(d) => d[idx] = dcell_to_cell(dcell),
            RasterData::Continuous(d) => d[idx] = normalize_dcell(dcell),
        }
        Ok(())
    }

    /// Count the null cells
    pub fn null_count(&self) -> usize {
        match &self.data {
            RasterData::Discrete(d) => d.iter().filter(|c| c.is_none()).count(),
            RasterData::Continuous(d) => d.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Open a reader over the whole raster
    pub fn reader(&self) -> RasterReader<'_> {
        RasterReader::new(self)
    }

    pub(crate) fn copy_cell_row(&self, row: usize, buf: &mut [Cell]) {
        let start = row * self.cols;
        let end = start + self.cols;
        match &self.data {
            RasterData::Discrete(d) => buf.copy_from_slice(&d[start..end]),
            RasterData::Continuous(d) => {
                for (dst, &src) in buf.iter_mut().zip(&d[start..end]) {
                    *dst = dcell_to_cell(src);
                }
            }
        }
    }

    pub(crate) fn copy_dcell_row(&self, row: usize, buf: &mut [DCell]) {
        let start = row * self.cols;
        let end = start + self.cols;
        match &self.data {
            RasterData::Continuous(d) => buf.copy_from_slice(&d[start..end]),
            RasterData::Discrete(d) => {
                for (dst, &src) in buf.iter_mut().zip(&d[start..end]) {
                    *dst = cell_to_dcell(src);
                }
            }
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

fn checked_size(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(Error::InvalidDimension { rows, cols })
}
