//! Chart preview and export.

use crate::{
    picker::{default_output, ensure_extension, FilePicker},
    ChartArgs,
};
use anyhow::Context;
use log::info;
use spp_profile::Session;
use std::path::{Path, PathBuf};

/// Preview location for a profile: `<temp>/<stem>-preview.svg`.
pub fn preview_path(source: Option<&Path>) -> PathBuf {
    let stem = source
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("profile");
    std::env::temp_dir().join(format!("{}-preview.svg", stem))
}

/// Render the current profile to the preview file and return its path.
pub fn view(session: &mut Session, chart: &ChartArgs) -> anyhow::Result<PathBuf> {
    let path = preview_path(session.source());
    draw(session, chart, &path)?;
    Ok(path)
}

/// Export the current profile. Without an explicit output the picker is
/// asked, starting from the input path with a `.png` extension. Returns
/// `None` when the picker was cancelled.
pub fn export(
    session: &mut Session,
    chart: &ChartArgs,
    output: Option<PathBuf>,
    picker: &dyn FilePicker,
) -> anyhow::Result<Option<PathBuf>> {
    let path = match output {
        Some(path) => path,
        None => {
            let source = session.source().context("No profile loaded")?;
            match picker.pick_save(&default_output(source)) {
                Some(path) => path,
                None => {
                    info!("Export cancelled");
                    return Ok(None);
                }
            }
        }
    };
    let path = ensure_extension(path);
    draw(session, chart, &path)?;
    Ok(Some(path))
}

fn draw(session: &mut Session, chart: &ChartArgs, path: &Path) -> anyhow::Result<()> {
    if let Some(interval) = chart.interval {
        session.set_interval(interval)?;
    }
    let profile = session.profile().context("No profile loaded")?;
    let interval = session.interval().context("No axis interval available")?;
    let figure = spp_chart::render(profile, interval, &chart.config())?;
    figure
        .export(path)
        .with_context(|| format!("Failed to export {}", path.display()))?;
    Ok(())
}
