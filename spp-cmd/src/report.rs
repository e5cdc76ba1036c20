//! Text reports: kp range, JSON summary and the derived table.

use anyhow::Context;
use log::info;
use spp_profile::{write_derived_csv, Profile, ProfileSummary, Session};
use std::{fs::File, io::Write, path::Path};

fn current(session: &Session) -> anyhow::Result<&Profile> {
    session.profile().context("No profile loaded")
}

/// Print the kp bounds and the suggested tick interval.
pub fn write_interval<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let profile = current(session)?;
    let (kp_min, kp_max) = profile.kp_bounds();
    writeln!(
        out,
        "KP {:.3} - {:.3} (range {:.3})",
        kp_min,
        kp_max,
        profile.kp_range()
    )?;
    writeln!(out, "Suggested interval: {}", profile.suggested_interval())?;
    Ok(())
}

pub fn write_summary<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let summary = ProfileSummary::from(current(session)?);
    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_derived<W: Write>(session: &Session, out: W) -> anyhow::Result<()> {
    write_derived_csv(current(session)?, out)?;
    Ok(())
}

pub fn derive_to_file(session: &Session, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_derived(session, file)?;
    info!("Derived table written to {}", path.display());
    Ok(())
}
