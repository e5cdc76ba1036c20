//! Axis-interval heuristic for the shared kp axis.

use crate::error::{ProfileError, Result};

/// Tick spacing for short profiles (range up to 2 km).
pub const FINE_INTERVAL: f64 = 0.2;
/// Tick spacing for medium profiles (range above 3 km up to 15 km).
pub const MEDIUM_INTERVAL: f64 = 1.0;
/// Tick spacing for everything else.
pub const COARSE_INTERVAL: f64 = 2.0;

/// Suggested tick interval for a kp range.
///
/// Ranges in `(2.0, 3.0]` match neither the fine nor the medium band and
/// fall through to the coarse interval.
pub fn axis_interval(kp_min: f64, kp_max: f64) -> f64 {
    let range = kp_max - kp_min;
    if range <= 2.0 {
        FINE_INTERVAL
    } else if range > 3.0 && range <= 15.0 {
        MEDIUM_INTERVAL
    } else {
        COARSE_INTERVAL
    }
}

/// Accept an operator supplied interval only if it is a positive, finite number.
pub fn validate_interval(interval: f64) -> Result<f64> {
    if interval.is_finite() && interval > 0.0 {
        Ok(interval)
    } else {
        Err(ProfileError::InvalidInterval(interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_interval_bands() {
        assert_eq!(axis_interval(0.0, 2.0), 0.2);
        assert_eq!(axis_interval(0.0, 10.0), 1.0);
        assert_eq!(axis_interval(0.0, 20.0), 2.0);
        assert_eq!(axis_interval(0.0, 15.0), 1.0);
        assert_eq!(axis_interval(5.0, 5.0), 0.2);
    }

    #[test]
    fn test_axis_interval_gap_falls_through() {
        assert_eq!(axis_interval(0.0, 2.5), 2.0);
        assert_eq!(axis_interval(0.0, 3.0), 2.0);
        assert_eq!(axis_interval(0.0, 3.000_001), 1.0);
        assert_eq!(axis_interval(0.0, 1000.0), 2.0);
    }

    #[test]
    fn test_axis_interval_uses_range_not_bounds() {
        assert_eq!(axis_interval(100.0, 101.5), 0.2);
        assert_eq!(axis_interval(40.0, 50.0), 1.0);
    }

    #[test]
    fn test_validate_interval() {
        assert_eq!(validate_interval(0.5).unwrap(), 0.5);
        assert!(validate_interval(0.0).is_err());
        assert!(validate_interval(-1.0).is_err());
        assert!(validate_interval(f64::NAN).is_err());
        assert!(validate_interval(f64::INFINITY).is_err());
    }
}
