//! Fixed-resolution histograms for continuous rasters
//!
//! [`collect_fp_stats`] transforms every non-null cell with a
//! [`HistogramTransform`] and counts it in one of [`BUCKET_COUNT`] equal
//! buckets spanning the transformed range, plus one overflow slot for
//! samples at the top of the range.
//!
//! # Examples
//!
//! ```
//! use rastat_core::Raster;
//! use rastat_stats::{BUCKET_COUNT, collect_fp_stats};
//!
//! let raster = Raster::from_dcells(1, 4, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]).unwrap();
//! let stats = collect_fp_stats(&mut raster.reader(), 1.0, 4.0, false, false).unwrap();
//! assert_eq!(stats.total_samples(), 4);
//! assert_eq!(stats.bucket(0), Some(1));
//! assert_eq!(stats.bucket(BUCKET_COUNT), Some(1));
//! ```

use rastat_core::{DCell, RasterSource};
use tracing::debug;

use crate::error::StatsResult;
use crate::transform::{BUCKET_COUNT, HistogramTransform};

/// Options for floating-point histogram collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramOptions {
    /// Lower bound of the raw value range
    pub min: f64,
    /// Upper bound of the raw value range
    pub max: f64,
    /// Bin natural logarithms of the values
    pub logarithmic: bool,
    /// Bin `ln(|x| + 1)` of the (possibly logarithmic) values
    pub log_absolute: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            logarithmic: false,
            log_absolute: false,
        }
    }
}

impl HistogramOptions {
    /// Linear histogram over `[min, max]`
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    pub fn with_log_absolute(mut self, log_absolute: bool) -> Self {
        self.log_absolute = log_absolute;
        self
    }

    /// Derive the transform these options describe
    pub fn transform(&self) -> StatsResult<HistogramTransform> {
        HistogramTransform::new(self.min, self.max, self.logarithmic, self.log_absolute)
    }
}

/// Histogram of transformed cell values
///
/// `buckets()` holds `BUCKET_COUNT + 1` counts and always sums to
/// `total_samples()`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStats {
    transform: HistogramTransform,
    buckets: Vec<u64>,
    total_samples: u64,
}

impl HistogramStats {
    /// Create an empty histogram for `transform`
    pub fn new(transform: HistogramTransform) -> Self {
        HistogramStats {
            transform,
            buckets: vec![0; BUCKET_COUNT + 1],
            total_samples: 0,
        }
    }

    /// Transform and count one raw value
    ///
    /// Returns `false` if the value was skipped (NaN, or undefined under
    /// logarithmic scaling).
    pub fn add_value(&mut self, value: f64) -> bool {
        let Some(x) = self.transform.apply(value) else {
            return false;
        };
        let i = self.transform.bucket_index(x);
        self.buckets[i] += 1;
        self.total_samples += 1;
        true
    }

    /// Add one row of cells, skipping nulls
    pub fn update_row(&mut self, row: &[DCell]) {
        for &value in row.iter().flatten() {
            self.add_value(value);
        }
    }

    /// The transform setup used for binning
    pub fn transform(&self) -> &HistogramTransform {
        &self.transform
    }

    /// Lower bound of the transformed domain
    pub fn transformed_min(&self) -> f64 {
        self.transform.min()
    }

    /// Upper bound of the transformed domain
    pub fn transformed_max(&self) -> f64 {
        self.transform.max()
    }

    /// Number of regular buckets (the overflow slot is not included)
    pub fn bucket_count(&self) -> usize {
        BUCKET_COUNT
    }

    pub fn sign_flip(&self) -> bool {
        self.transform.sign_flip()
    }

    pub fn logarithmic(&self) -> bool {
        self.transform.logarithmic()
    }

    pub fn log_absolute(&self) -> bool {
        self.transform.log_absolute()
    }

    /// All slots, overflow slot last
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Count in slot `index` (`0..=BUCKET_COUNT`)
    pub fn bucket(&self, index: usize) -> Option<u64> {
        self.buckets.get(index).copied()
    }

    /// Number of cells binned
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Transformed-domain interval of slot `index`
    pub fn bucket_bounds(&self, index: usize) -> Option<(f64, f64)> {
        self.transform.bucket_bounds(index)
    }

    /// Map a transformed value back to the raw value domain
    pub fn untransform(&self, x: f64) -> f64 {
        self.transform.untransform(x)
    }
}

/// Build a histogram of the continuous values in `source`
///
/// See [`HistogramTransform::new`] for how `min`, `max`, `logarithmic` and
/// `log_absolute` define the binned domain.
///
/// # Errors
///
/// - `StatsError::RangeIncludesZero` / `StatsError::InvalidRange` for a
///   bad range; nothing is read from `source`
/// - `StatsError::Source` if a row cannot be read; no partial histogram is
///   returned
pub fn collect_fp_stats<S: RasterSource + ?Sized>(
    source: &mut S,
    min: f64,
    max: f64,
    logarithmic: bool,
    log_absolute: bool,
) -> StatsResult<HistogramStats> {
    let options = HistogramOptions {
        min,
        max,
        logarithmic,
        log_absolute,
    };
    collect_fp_stats_with(source, &options)
}

/// Build a histogram of the continuous values in `source` from options
pub fn collect_fp_stats_with<S: RasterSource + ?Sized>(
    source: &mut S,
    options: &HistogramOptions,
) -> StatsResult<HistogramStats> {
    let transform = options.transform()?;
    let nrows = source.rows();
    let ncols = source.cols();
    debug!(
        rows = nrows,
        cols = ncols,
        min = transform.min(),
        max = transform.max(),
        sign_flip = transform.sign_flip(),
        logarithmic = transform.logarithmic(),
        log_absolute = transform.log_absolute(),
        "collecting floating-point statistics"
    );

    let mut stats = HistogramStats::new(transform);
    let mut row_buf: Vec<DCell> = vec![None; ncols];
    for row in 0..nrows {
        source.read_dcell_row(row, &mut row_buf)?;
        stats.update_row(&row_buf);
    }

    debug!(
        total = stats.total_samples,
        "floating-point statistics complete"
    );
    Ok(stats)
}
