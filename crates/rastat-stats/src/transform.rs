//! Value transforms applied before histogram binning
//!
//! A [`HistogramTransform`] is derived once from the caller's value range
//! and scaling flags, then applied to every cell:
//!
//! 1. sign flip (only when logarithmic scaling is requested over a
//!    negative range)
//! 2. natural log (`logarithmic`)
//! 3. `ln(|x| + 1)` (`log_absolute`)
//!
//! The same steps applied to the range bounds give the transformed domain
//! `[min, max]` that the [`BUCKET_COUNT`] buckets divide evenly.

use crate::error::{StatsError, StatsResult};

/// Number of regular buckets in a floating-point histogram.
///
/// Histograms hold one extra slot at index `BUCKET_COUNT` for samples at
/// the top of the range.
pub const BUCKET_COUNT: usize = 1000;

/// Transform setup for one histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramTransform {
    min: f64,
    max: f64,
    sign_flip: bool,
    logarithmic: bool,
    log_absolute: bool,
}

impl HistogramTransform {
    /// Derive the transformed domain from a raw value range
    ///
    /// With `logarithmic`, a negative range is negated first (`sign_flip`)
    /// and its bounds re-ordered so that `min <= max` still holds. With
    /// `log_absolute`, a transformed range that straddles zero gets a lower
    /// bound of exactly 0.
    ///
    /// # Errors
    ///
    /// - `StatsError::InvalidRange` if a bound is not finite
    /// - `StatsError::RangeIncludesZero` if `logarithmic` is set and the
    ///   range crosses zero or has a zero bound
    ///
    /// Reversed bounds are accepted and treated as the same range.
    pub fn new(min: f64, max: f64, logarithmic: bool, log_absolute: bool) -> StatsResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(StatsError::InvalidRange { min, max });
        }

        let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
        let mut sign_flip = false;

        if logarithmic {
            if lo * hi <= 0.0 {
                return Err(StatsError::RangeIncludesZero { min, max });
            }
            if lo < 0.0 {
                sign_flip = true;
                (lo, hi) = (-hi, -lo);
            }
            lo = lo.ln();
            hi = hi.ln();
        }

        if log_absolute {
            let a = (lo.abs() + 1.0).ln();
            let b = (hi.abs() + 1.0).ln();
            let has_zero = lo * hi < 0.0;
            lo = a.min(b);
            hi = a.max(b);
            if has_zero {
                lo = 0.0;
            }
        }

        Ok(HistogramTransform {
            min: lo,
            max: hi,
            sign_flip,
            logarithmic,
            log_absolute,
        })
    }

    /// Lower bound of the transformed domain
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the transformed domain
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn sign_flip(&self) -> bool {
        self.sign_flip
    }

    #[inline]
    pub fn logarithmic(&self) -> bool {
        self.logarithmic
    }

    #[inline]
    pub fn log_absolute(&self) -> bool {
        self.log_absolute
    }

    /// Width of the transformed domain
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Transform one raw value
    ///
    /// Returns `None` for NaN and, under logarithmic scaling, for values
    /// that are not positive once the sign flip has been applied. Such
    /// cells are left out of the histogram like nulls.
    pub fn apply(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let mut x = value;
        if self.sign_flip {
            x = -x;
        }
        if self.logarithmic {
            if x <= 0.0 {
                return None;
            }
            x = x.ln();
        }
        if self.log_absolute {
            x = (x.abs() + 1.0).ln();
        }
        Some(x)
    }

    /// Bucket index of a transformed value
    ///
    /// `floor(BUCKET_COUNT * (x - min) / (max - min))`, clamped to
    /// `0..=BUCKET_COUNT`. A value equal to `max` lands in slot
    /// `BUCKET_COUNT`. Values below `min` go to slot 0 and values above
    /// `max` to slot `BUCKET_COUNT`. When `min == max`, values below `min`
    /// go to slot 0 and all others to slot `BUCKET_COUNT`.
    pub fn bucket_index(&self, x: f64) -> usize {
        let span = self.span();
        if span <= 0.0 {
            return if x < self.min { 0 } else { BUCKET_COUNT };
        }
        if x >= self.max {
            return BUCKET_COUNT;
        }
        let pos = (BUCKET_COUNT as f64 * (x - self.min) / span).floor();
        if pos.is_nan() || pos <= 0.0 {
            0
        } else if pos >= BUCKET_COUNT as f64 {
            BUCKET_COUNT
        } else {
            pos as usize
        }
    }

    /// Transformed-domain interval `[lo, hi)` covered by bucket `index`
    ///
    /// The overflow slot covers the single point `[max, max]`. Returns
    /// `None` past the overflow slot.
    pub fn bucket_bounds(&self, index: usize) -> Option<(f64, f64)> {
        if index > BUCKET_COUNT {
            return None;
        }
        if index == BUCKET_COUNT {
            return Some((self.max, self.max));
        }
        let step = self.span() / BUCKET_COUNT as f64;
        let lo = self.min + step * index as f64;
        let hi = if index + 1 == BUCKET_COUNT {
            self.max
        } else {
            self.min + step * (index + 1) as f64
        };
        Some((lo, hi))
    }

    /// Map a transformed value back to the raw value domain
    ///
    /// `ln(|x| + 1)` loses the sign of its argument; its inverse here
    /// returns the non-negative branch.
    pub fn untransform(&self, x: f64) -> f64 {
        let mut v = x;
        if self.log_absolute {
            v = v.exp_m1();
        }
        if self.logarithmic {
            v = v.exp();
        }
        if self.sign_flip {
            v = -v;
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_linear_setup_keeps_range() {
        let t = HistogramTransform::new(-2.5, 7.0, false, false).unwrap();
        assert_eq!((t.min(), t.max()), (-2.5, 7.0));
        assert!(!t.sign_flip());
        assert_eq!(t.apply(3.0), Some(3.0));
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            HistogramTransform::new(f64::NAN, 1.0, false, false),
            Err(StatsError::InvalidRange { .. })
        ));
        assert!(HistogramTransform::new(0.0, f64::INFINITY, false, true).is_err());
    }

    #[test]
    fn test_reversed_bounds_match_ordered() {
        let cases = [
            (5.0, 1.0, false, false),
            (-1.0, -100.0, true, false),
            (5.0, -3.0, false, true),
            (-1.0, -50.0, true, true),
        ];
        for (min, max, logarithmic, log_absolute) in cases {
            let reversed = HistogramTransform::new(min, max, logarithmic, log_absolute).unwrap();
            let ordered = HistogramTransform::new(max, min, logarithmic, log_absolute).unwrap();
            assert_eq!(reversed, ordered);
        }

        let t = HistogramTransform::new(5.0, -3.0, false, true).unwrap();
        assert_eq!(t.min(), 0.0);
        assert!((t.max() - 6f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_logarithmic_rejects_zero_crossing() {
        assert!(matches!(
            HistogramTransform::new(-5.0, 10.0, true, false),
            Err(StatsError::RangeIncludesZero { min, max }) if min == -5.0 && max == 10.0
        ));
        assert!(matches!(
            HistogramTransform::new(0.0, 10.0, true, false),
            Err(StatsError::RangeIncludesZero { .. })
        ));
        // The absolute transform alone accepts a zero crossing
        assert!(HistogramTransform::new(-5.0, 10.0, false, true).is_ok());
    }

    #[test]
    fn test_logarithmic_positive_range() {
        let t = HistogramTransform::new(1.0, 100.0, true, false).unwrap();
        assert!(!t.sign_flip());
        assert_eq!(t.min(), 0.0);
        assert!((t.max() - 100f64.ln()).abs() < EPS);
        assert_eq!(t.apply(0.0), None);
        assert_eq!(t.apply(-3.0), None);
    }

    #[test]
    fn test_logarithmic_negative_range_flips_and_orders() {
        let t = HistogramTransform::new(-100.0, -1.0, true, false).unwrap();
        assert!(t.sign_flip());
        assert_eq!(t.min(), 0.0);
        assert!((t.max() - 100f64.ln()).abs() < EPS);
        assert!(t.min() <= t.max());

        let x = t.apply(-10.0).unwrap();
        assert!((x - 10f64.ln()).abs() < EPS);
        // Positive outliers are undefined after the flip
        assert_eq!(t.apply(5.0), None);
        assert_eq!(t.bucket_index(t.apply(-1.0).unwrap()), 0);
    }

    #[test]
    fn test_log_absolute_zero_crossing_floors_at_zero() {
        let t = HistogramTransform::new(-3.0, 5.0, false, true).unwrap();
        assert_eq!(t.min(), 0.0);
        assert!((t.max() - 6f64.ln()).abs() < EPS);
        assert!((t.apply(-3.0).unwrap() - 4f64.ln()).abs() < EPS);
        assert_eq!(t.apply(0.0), Some(0.0));
    }

    #[test]
    fn test_log_absolute_negative_range_orders_bounds() {
        let t = HistogramTransform::new(-9.0, -1.0, false, true).unwrap();
        assert!(!t.sign_flip());
        assert!((t.min() - 2f64.ln()).abs() < EPS);
        assert!((t.max() - 10f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_logarithmic_then_log_absolute() {
        // ln(0.5) < 0 < ln(10): the absolute stage sees a zero crossing
        let t = HistogramTransform::new(0.5, 10.0, true, true).unwrap();
        assert_eq!(t.min(), 0.0);
        assert!((t.max() - (10f64.ln() + 1.0).ln()).abs() < EPS);
        assert_eq!(t.apply(1.0), Some(0.0));
    }

    #[test]
    fn test_bucket_index_boundaries() {
        let t = HistogramTransform::new(1.0, 4.0, false, false).unwrap();
        assert_eq!(t.bucket_index(1.0), 0);
        assert_eq!(t.bucket_index(2.0), 333);
        assert_eq!(t.bucket_index(3.0), 666);
        assert_eq!(t.bucket_index(4.0), BUCKET_COUNT);
    }

    #[test]
    fn test_bucket_index_multiplies_before_dividing() {
        // 1000 * 0.111 / 3 is 36.99..., 1000 * (0.111 / 3) rounds up to 37
        let t = HistogramTransform::new(1.0, 4.0, false, false).unwrap();
        assert_eq!(t.bucket_index(1.111), 36);
        assert_eq!(t.bucket_index(1.345), 115);
    }

    #[test]
    fn test_bucket_index_clamps_out_of_range() {
        let t = HistogramTransform::new(0.0, 10.0, false, false).unwrap();
        assert_eq!(t.bucket_index(-1e-9), 0);
        assert_eq!(t.bucket_index(-50.0), 0);
        assert_eq!(t.bucket_index(10.0 + 1e-9), BUCKET_COUNT);
        assert_eq!(t.bucket_index(f64::INFINITY), BUCKET_COUNT);
        assert_eq!(t.bucket_index(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_bucket_index_degenerate_range() {
        let t = HistogramTransform::new(2.0, 2.0, false, false).unwrap();
        assert_eq!(t.bucket_index(2.0), BUCKET_COUNT);
        assert_eq!(t.bucket_index(1.0), 0);
        assert_eq!(t.bucket_index(3.0), BUCKET_COUNT);
    }

    #[test]
    fn test_bucket_bounds() {
        let t = HistogramTransform::new(0.0, 1000.0, false, false).unwrap();
        assert_eq!(t.bucket_bounds(0), Some((0.0, 1.0)));
        assert_eq!(t.bucket_bounds(500), Some((500.0, 501.0)));
        assert_eq!(t.bucket_bounds(999), Some((999.0, 1000.0)));
        assert_eq!(t.bucket_bounds(BUCKET_COUNT), Some((1000.0, 1000.0)));
        assert_eq!(t.bucket_bounds(BUCKET_COUNT + 1), None);
    }

    #[test]
    fn test_untransform_inverts_apply() {
        let t = HistogramTransform::new(-100.0, -1.0, true, false).unwrap();
        let x = t.apply(-42.0).unwrap();
        assert!((t.untransform(x) + 42.0).abs() < 1e-9);

        let t = HistogramTransform::new(0.0, 50.0, false, true).unwrap();
        let x = t.apply(7.0).unwrap();
        assert!((t.untransform(x) - 7.0).abs() < 1e-9);
    }
}
