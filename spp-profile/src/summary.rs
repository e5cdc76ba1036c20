//! Profile statistics and derived-table export.

use crate::{error::Result, profile::Profile};
use serde::Serialize;
use std::io::Write;

/// Headline numbers for a loaded profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub stations: usize,
    pub kp_start: f64,
    pub kp_end: f64,
    pub kp_min: f64,
    pub kp_max: f64,
    pub kp_range: f64,
    pub depth_min: f64,
    pub depth_max: f64,
    pub max_gradient: Option<f64>,
    pub mean_gradient: Option<f64>,
    pub missing_gradients: usize,
    pub last_moving_average: Option<f64>,
    pub suggested_interval: f64,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        let (kp_min, kp_max) = profile.kp_bounds();
        let (depth_min, depth_max) = profile.depth_bounds();
        let gradients: Vec<f64> = profile.iter().filter_map(|s| s.gradient).collect();
        let max_gradient = gradients.iter().copied().reduce(f64::max);
        let mean_gradient = if gradients.is_empty() {
            None
        } else {
            Some(gradients.iter().sum::<f64>() / gradients.len() as f64)
        };

        ProfileSummary {
            stations: profile.len(),
            kp_start: profile.first().kp,
            kp_end: profile.last().kp,
            kp_min,
            kp_max,
            kp_range: profile.kp_range(),
            depth_min,
            depth_max,
            max_gradient,
            mean_gradient,
            missing_gradients: profile.len() - gradients.len(),
            last_moving_average: profile.iter().rev().find_map(|s| s.moving_average),
            suggested_interval: profile.suggested_interval(),
        }
    }
}

/// Write every derived station as CSV with a header row. Missing values
/// are written as empty cells.
pub fn write_derived_csv<W: Write>(profile: &Profile, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for station in profile {
        wtr.serialize(station)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{LoadOptions, Profile};

    fn sample() -> Profile {
        Profile::from_reader("0.0,10\n0.5,12\n1.0,11\n".as_bytes(), &LoadOptions::default())
            .unwrap()
    }

    #[test]
    fn test_summary() {
        let summary = ProfileSummary::from(&sample());
        assert_eq!(summary.stations, 3);
        assert_eq!(summary.kp_start, 0.0);
        assert_eq!(summary.kp_end, 1.0);
        assert_eq!(summary.kp_range, 1.0);
        assert_eq!(summary.depth_min, 10.0);
        assert_eq!(summary.depth_max, 12.0);
        assert_eq!(summary.missing_gradients, 1);
        assert_eq!(summary.last_moving_average, None);
        assert_eq!(summary.suggested_interval, 0.2);
        let max = summary.max_gradient.unwrap();
        assert!((max - (2.0f64 / 500.0).atan().to_degrees()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_serializes_missing_as_null() {
        let json = serde_json::to_value(ProfileSummary::from(&sample())).unwrap();
        assert_eq!(json["stations"], 3);
        assert!(json["last_moving_average"].is_null());
    }

    #[test]
    fn test_write_derived_csv() {
        let mut out = Vec::new();
        write_derived_csv(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "kp,depth,kp_delta,depth_delta,gradient,moving_average"
        );
        assert_eq!(lines[1], "0.0,10.0,,,,");
        assert!(lines[2].starts_with("0.5,12.0,0.5,2.0,"));
        assert!(lines[3].ends_with(','));
    }
}
