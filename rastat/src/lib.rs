//! Rastat - Value-distribution statistics for raster layers
//!
//! Computes the statistics a color-table builder needs from a raster:
//!
//! - Exact counts of every category in a discrete layer
//! - 1000-bucket histograms of a continuous layer, on a linear,
//!   logarithmic or absolute-logarithmic scale
//!
//! # Example
//!
//! ```
//! use rastat::stats::{collect_cell_stats, collect_fp_stats};
//! use rastat::{Catalog, Raster};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(
//!     "soils",
//!     "PERMANENT",
//!     Raster::from_cells(2, 2, vec![Some(1), Some(1), Some(2), None]).unwrap(),
//! );
//!
//! let mut reader = catalog.open_old("soils", "PERMANENT").unwrap();
//! let cats = collect_cell_stats(&mut reader).unwrap();
//! assert_eq!(cats.get(1), Some(2));
//!
//! let mut reader = catalog.open_old("soils", "PERMANENT").unwrap();
//! let histo = collect_fp_stats(&mut reader, 1.0, 2.0, false, false).unwrap();
//! assert_eq!(histo.total_samples(), 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rastat_core::*;

// Re-export the collectors as a module to keep their error type apart
pub use rastat_stats as stats;
