//! Rastat Stats - Value-distribution statistics over raster layers
//!
//! Two independent single-pass collectors over any
//! [`RasterSource`](rastat_core::RasterSource):
//!
//! - **Category counts** ([`category`]): exact occurrences of every
//!   discrete value, for categorical layers
//! - **Histograms** ([`histogram`]): 1000-bucket histograms of continuous
//!   values, optionally on a logarithmic ([`transform`]) scale
//!
//! Neither collector keeps state between calls or owns the source; open the
//! source before calling and close it afterwards. Collectors emit `tracing`
//! events at debug level and never print.

pub mod category;
pub mod error;
pub mod histogram;
pub mod transform;

// Re-export core types
pub use rastat_core;

pub use error::{StatsError, StatsResult};

pub use category::{CategoryStats, collect_cell_stats};
pub use histogram::{HistogramOptions, HistogramStats, collect_fp_stats, collect_fp_stats_with};
pub use transform::{BUCKET_COUNT, HistogramTransform};
