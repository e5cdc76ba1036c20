//! The operator's current profile.
//!
//! A `Session` is owned by whatever front end drives the tool and is passed
//! by reference into the render and export steps. Loading replaces the
//! profile wholesale; a failed load leaves the previous state untouched.

use crate::{
    error::Result,
    profile::{LoadOptions, Profile},
    scale::validate_interval,
};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,
    source: Option<PathBuf>,
    interval_override: Option<f64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a profile file. On success the new profile replaces the current
    /// one and the interval override is cleared; on failure nothing changes.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, options: &LoadOptions) -> Result<&Profile> {
        let path = path.as_ref();
        match Profile::load(path, options) {
            Ok(profile) => {
                self.source = Some(path.to_path_buf());
                self.reset_interval();
                Ok(self.profile.insert(profile))
            }
            Err(e) => {
                warn!("Load of {} failed: {}", path.display(), e);
                Err(e)
            }
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Path the current profile was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn suggested_interval(&self) -> Option<f64> {
        self.profile.as_ref().map(Profile::suggested_interval)
    }

    /// Override the suggested tick interval.
    pub fn set_interval(&mut self, interval: f64) -> Result<()> {
        let interval = validate_interval(interval)?;
        info!("Axis interval set to {}", interval);
        self.interval_override = Some(interval);
        Ok(())
    }

    /// Drop the override and go back to the suggested interval.
    pub fn reset_interval(&mut self) {
        self.interval_override = None;
    }

    /// Override if set, otherwise the suggestion for the current profile.
    pub fn interval(&self) -> Option<f64> {
        self.interval_override.or_else(|| self.suggested_interval())
    }
}
