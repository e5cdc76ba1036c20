//! The shared kilometer-post axis.

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

const MAX_LABEL_DECIMALS: usize = 6;

/// Linear kp axis whose grid lines and labels sit exactly on the given
/// tick positions. No light grid lines are drawn between ticks.
#[derive(Clone)]
pub struct KpRange {
    linear: RangedCoordf64,
    ticks: Vec<f64>,
    decimals: usize,
}

impl KpRange {
    pub fn new(range: Range<f64>, ticks: Vec<f64>, interval: f64) -> KpRange {
        KpRange {
            linear: range.into(),
            ticks,
            decimals: label_decimals(interval),
        }
    }
}

impl Ranged for KpRange {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.linear.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.linear.range()
    }
}

impl ValueFormatter<f64> for KpRange {
    fn format(value: &f64) -> String {
        format!("{:.1}", value)
    }

    fn format_ext(&self, value: &f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

/// Fewest decimals (at least one) that print every multiple of `interval`
/// without rounding.
pub fn label_decimals(interval: f64) -> usize {
    (1..MAX_LABEL_DECIMALS)
        .find(|&d| {
            let scaled = interval * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(MAX_LABEL_DECIMALS)
}
