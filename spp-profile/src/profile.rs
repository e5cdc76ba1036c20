use crate::{
    derive::derive,
    error::{ProfileError, Result},
    scale::axis_interval,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// Number of fields in a profile row: `kp,depth`.
pub const CSV_ROW_LENGTH: usize = 2;

/// One raw survey row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Kilometer post
    pub kp: f64,
    /// Seabed depth
    pub depth: f64,
}

/// A survey row together with the values derived from its predecessors.
///
/// `None` marks a value that cannot be computed at this station: the
/// deltas and gradient of the first station, the gradient after a repeated
/// kp, and the moving average before the window is full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStation {
    pub kp: f64,
    pub depth: f64,
    pub kp_delta: Option<f64>,
    pub depth_delta: Option<f64>,
    pub gradient: Option<f64>,
    pub moving_average: Option<f64>,
}

/// How a profile file is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { delimiter: b',' }
    }
}

/// An immutable, non-empty survey profile with its derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    stations: Vec<DerivedStation>,
}

impl Profile {
    /// Load and derive a profile from a headerless two-column file.
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Profile> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let profile = Profile::from_reader(file, options)?;
        info!(
            "Loaded {} stations from {} (KP {:.3} - {:.3})",
            profile.len(),
            path.display(),
            profile.first().kp,
            profile.last().kp
        );
        Ok(profile)
    }

    /// Parse and derive a profile from any reader. A single bad row rejects
    /// the whole input.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Profile> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(options.delimiter)
            .from_reader(reader);

        let mut stations = Vec::new();
        for result in rdr.records() {
            let record = result?;
            stations.push(Station::try_from(&record)?);
        }
        Profile::from_stations(stations)
    }

    /// Derive a profile from raw stations.
    pub fn from_stations(stations: Vec<Station>) -> Result<Profile> {
        if stations.is_empty() {
            return Err(ProfileError::Empty);
        }
        let derived = derive(&stations);
        debug!(
            "Derived {} stations, {} without gradient",
            derived.len(),
            derived.iter().filter(|s| s.gradient.is_none()).count()
        );
        Ok(Profile { stations: derived })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// A loaded profile always holds at least one station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivedStation> {
        self.stations.iter()
    }

    pub fn first(&self) -> &DerivedStation {
        &self.stations[0]
    }

    pub fn last(&self) -> &DerivedStation {
        &self.stations[self.stations.len() - 1]
    }

    /// Minimum and maximum kilometer post.
    pub fn kp_bounds(&self) -> (f64, f64) {
        bounds(self.stations.iter().map(|s| s.kp))
    }

    /// Minimum and maximum depth.
    pub fn depth_bounds(&self) -> (f64, f64) {
        bounds(self.stations.iter().map(|s| s.depth))
    }

    /// Distance between the smallest and largest kp.
    pub fn kp_range(&self) -> f64 {
        let (min, max) = self.kp_bounds();
        max - min
    }

    /// Default x-axis tick spacing for this profile.
    pub fn suggested_interval(&self) -> f64 {
        let (min, max) = self.kp_bounds();
        axis_interval(min, max)
    }

    /// Chart caption, e.g. `Seabed Profile KP 0.00 - KP 1.00`.
    pub fn title(&self) -> String {
        format!(
            "Seabed Profile KP {:.2} - KP {:.2}",
            self.first().kp,
            self.last().kp
        )
    }
}

impl<'a> IntoIterator for &'a Profile {
    type Item = &'a DerivedStation;
    type IntoIter = std::slice::Iter<'a, DerivedStation>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl<'a> TryFrom<&'a StringRecord> for Station {
    type Error = ProfileError;

    fn try_from(record: &'a StringRecord) -> Result<Self> {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != CSV_ROW_LENGTH {
            return Err(ProfileError::ColumnCount {
                line,
                found: record.len(),
            });
        }
        Ok(Station {
            kp: parse_field(record, 0, "kp", line)?,
            depth: parse_field(record, 1, "depth", line)?,
        })
    }
}

fn parse_field(record: &StringRecord, index: usize, column: &'static str, line: u64) -> Result<f64> {
    let raw = record.get(index).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ProfileError::NotNumeric {
            line,
            column,
            value: raw.to_string(),
        }),
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "0.0,10\n0.5,12\n1.0,11\n";

    fn parse(input: &str) -> Result<Profile> {
        Profile::from_reader(input.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn test_from_reader() {
        let profile = parse(SAMPLE).unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.first().kp, 0.0);
        assert_eq!(profile.last().depth, 11.0);
        assert_eq!(profile.kp_bounds(), (0.0, 1.0));
        assert_eq!(profile.depth_bounds(), (10.0, 12.0));
        assert_eq!(profile.suggested_interval(), 0.2);
        assert_eq!(profile.title(), "Seabed Profile KP 0.00 - KP 1.00");
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let profile = parse(" 0.0 , 10\n\n0.5,  12 \n").unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.last().depth, 12.0);
    }

    #[test]
    fn test_alternate_delimiter() {
        let options = LoadOptions { delimiter: b'\t' };
        let profile = Profile::from_reader("1.0\t5\n2.0\t6\n".as_bytes(), &options).unwrap();
        assert_eq!(profile.kp_range(), 1.0);
    }

    #[test]
    fn test_wrong_column_count() {
        match parse("0.0,10\n0.5,12,7\n") {
            Err(ProfileError::ColumnCount { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse("0.0\n"),
            Err(ProfileError::ColumnCount { found: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_fails_whole_load() {
        match parse("kp,depth\n0.0,10\n") {
            Err(ProfileError::NotNumeric { line, column, value }) => {
                assert_eq!(line, 1);
                assert_eq!(column, "kp");
                assert_eq!(value, "kp");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse("0.0,10\n0.5,NaN\n"),
            Err(ProfileError::NotNumeric { column: "depth", .. })
        ));
        assert!(matches!(
            parse("0.0,10\n0.5,\n"),
            Err(ProfileError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(ProfileError::Empty)));
        assert!(matches!(parse("\n\n"), Err(ProfileError::Empty)));
        assert!(matches!(
            Profile::from_stations(Vec::new()),
            Err(ProfileError::Empty)
        ));
    }

    #[test]
    fn test_load_from_file_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..100 {
            writeln!(file, "{},{}", i as f64 * 0.05, 40.0 + (i % 7) as f64 * 0.3).unwrap();
        }
        let first = Profile::load(file.path(), &LoadOptions::default()).unwrap();
        let second = Profile::load(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(first.len(), 100);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.gradient.map(f64::to_bits), b.gradient.map(f64::to_bits));
            assert_eq!(
                a.moving_average.map(f64::to_bits),
                b.moving_average.map(f64::to_bits)
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::load("/nonexistent/profile.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    #[test]
    fn test_derived_lengths_and_markers() {
        let profile = parse(SAMPLE).unwrap();
        let first = profile.first();
        assert!(first.kp_delta.is_none());
        assert!(first.depth_delta.is_none());
        assert!(first.gradient.is_none());
        assert!(profile
            .iter()
            .filter_map(|s| s.gradient)
            .all(|g| g >= 0.0));
    }
}
