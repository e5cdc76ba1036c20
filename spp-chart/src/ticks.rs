//! Tick placement and gap handling for the kp axis.

use log::warn;

const EPSILON: f64 = 1e-9;

/// Positions of the integer multiples of `interval` inside `[min, max]`.
///
/// When that would be more than `max_ticks` positions the step is widened
/// by the smallest integer factor that brings the count under the limit.
/// An interval too small to widen into a finite step gives no ticks.
pub fn tick_positions(min: f64, max: f64, interval: f64, max_ticks: usize) -> Vec<f64> {
    let limit = max_ticks.max(1) as f64;
    let mut step = interval;

    if tick_count(min, max, step) > limit {
        let mut factor = ((max - min) / limit / interval).floor() + 1.0;
        step = interval * factor;
        // rounding can leave one tick over the limit
        while step.is_finite() && tick_count(min, max, step) > limit {
            factor = (factor + 1.0).max((factor * (1.0 + 1.0 / limit)).ceil());
            step = interval * factor;
        }
        if !step.is_finite() {
            warn!("Interval {} is too small to place ticks on the kp axis", interval);
            return Vec::new();
        }
        warn!(
            "Interval {} gives more than {} ticks; using {} instead",
            interval, max_ticks, step
        );
    }

    let first = (min / step - EPSILON).ceil();
    let count = tick_count(min, max, step) as usize;
    (0..count).map(|k| (first + k as f64) * step).collect()
}

/// Number of multiples of `step` inside `[min, max]`, infinite when the
/// quotient overflows.
fn tick_count(min: f64, max: f64, step: f64) -> f64 {
    let first = (min / step - EPSILON).ceil();
    let last = (max / step + EPSILON).floor();
    let count = last - first + 1.0;
    if count.is_nan() {
        f64::INFINITY
    } else {
        count.max(0.0)
    }
}

/// Split a series with missing values into contiguous runs of defined
/// points, so a gap breaks the line instead of being bridged.
pub fn line_segments<I>(points: I) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        match y {
            Some(y) => current.push((x, y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ticks(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_fine_ticks_include_both_ends() {
        let ticks = tick_positions(0.0, 1.0, 0.2, 500);
        assert_ticks(&ticks, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_snap_to_multiples() {
        assert_ticks(&tick_positions(0.3, 2.1, 1.0, 500), &[1.0, 2.0]);
        assert_ticks(&tick_positions(12.35, 16.9, 2.0, 500), &[14.0, 16.0]);
        assert_ticks(&tick_positions(-1.5, 0.5, 1.0, 500), &[-1.0, 0.0]);
    }

    #[test]
    fn test_no_tick_inside_narrow_range() {
        assert!(tick_positions(0.31, 0.39, 0.2, 500).is_empty());
    }

    #[test]
    fn test_too_many_ticks_are_thinned() {
        let ticks = tick_positions(0.0, 1000.0, 1.0, 100);
        assert!(ticks.len() <= 100);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[1], 11.0);
    }

    #[test]
    fn test_tiny_interval_is_thinned_without_overflow() {
        let ticks = tick_positions(0.0, 1.0, 1e-300, 500);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 500);
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.iter().all(|t| (0.0..=1.0 + 1e-9).contains(t)));
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_interval_too_small_to_widen() {
        let ticks = tick_positions(0.0, 1000.0, 1e-320, 500);
        assert!(ticks.len() <= 500);
        assert!(ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_line_segments_break_on_missing() {
        let points = vec![
            (0.0, None),
            (1.0, Some(1.0)),
            (2.0, Some(2.0)),
            (3.0, None),
            (4.0, Some(4.0)),
            (5.0, None),
        ];
        let segments = line_segments(points);
        assert_eq!(segments, vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(4.0, 4.0)]]);
    }

    #[test]
    fn test_line_segments_all_missing() {
        assert!(line_segments(vec![(0.0, None), (1.0, None)]).is_empty());
    }
}
