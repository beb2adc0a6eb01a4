//! Exact category counts for discrete rasters
//!
//! [`collect_cell_stats`] tallies how often every discrete value occurs in
//! a source. Null cells are counted separately and never become a
//! category.
//!
//! # Examples
//!
//! ```
//! use rastat_core::Raster;
//! use rastat_stats::collect_cell_stats;
//!
//! let raster = Raster::from_cells(2, 2, vec![Some(1), Some(1), Some(2), None]).unwrap();
//! let stats = collect_cell_stats(&mut raster.reader()).unwrap();
//! assert_eq!(stats.get(1), Some(2));
//! assert_eq!(stats.get(2), Some(1));
//! assert_eq!(stats.null_count(), 1);
//! ```

use std::collections::BTreeMap;

use rastat_core::{Cell, RasterSource};
use tracing::debug;

use crate::error::StatsResult;

/// Occurrence count per discrete cell value
///
/// Categories iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    counts: BTreeMap<i32, u64>,
    null_count: u64,
}

impl CategoryStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row of cells
    pub fn update_row(&mut self, row: &[Cell]) {
        for cell in row {
            match cell {
                Some(value) => *self.counts.entry(*value).or_insert(0) += 1,
                None => self.null_count += 1,
            }
        }
    }

    /// Count for `value`, or `None` if it never occurred
    pub fn get(&self, value: i32) -> Option<u64> {
        self.counts.get(&value).copied()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of non-null cells counted
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of null cells seen
    pub fn null_count(&self) -> u64 {
        self.null_count
    }

    /// Smallest category present
    pub fn min_category(&self) -> Option<i32> {
        self.counts.keys().next().copied()
    }

    /// Largest category present
    pub fn max_category(&self) -> Option<i32> {
        self.counts.keys().next_back().copied()
    }

    /// Iterate over `(category, count)` in ascending category order
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Take the underlying category map
    pub fn into_map(self) -> BTreeMap<i32, u64> {
        self.counts
    }
}

/// Count every discrete value in `source`
///
/// Rows are read in order and every non-null cell adds one to its value's
/// count.
///
/// # Errors
///
/// Returns `StatsError::Source` if a row cannot be read; no partial
/// statistics are returned.
pub fn collect_cell_stats<S: RasterSource + ?Sized>(
    source: &mut S,
) -> StatsResult<CategoryStats> {
    let nrows = source.rows();
    let ncols = source.cols();
    debug!(rows = nrows, cols = ncols, "collecting category statistics");

    let mut stats = CategoryStats::new();
    let mut row_buf: Vec<Cell> = vec![None; ncols];
    for row in 0..nrows {
        source.read_cell_row(row, &mut row_buf)?;
        stats.update_row(&row_buf);
    }

    debug!(
        categories = stats.len(),
        nulls = stats.null_count,
        "category statistics complete"
    );
    Ok(stats)
}
