//! Seabed survey profile model.
//!
//! A profile is a headerless two-column file of kilometer posts and depths.
//! Loading it derives per-station deltas, an absolute gradient angle and a
//! trailing moving average; the kp range drives the suggested chart axis
//! interval.

pub mod derive;
pub mod error;
pub mod profile;
pub mod scale;
pub mod session;
pub mod summary;

pub use error::{ProfileError, Result};
pub use profile::{DerivedStation, LoadOptions, Profile, Station};
pub use session::Session;
pub use summary::{write_derived_csv, ProfileSummary};
