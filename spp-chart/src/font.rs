//! Bundled typeface for chart text.
//!
//! Charts never look up system fonts; every family name the figure uses
//! is registered against the DejaVu Sans face shipped in `assets/`.

use crate::error::{ChartError, Result};
use log::debug;
use plotters::style::{register_font, FontStyle};
use std::sync::OnceLock;

pub const FONT_FAMILY: &str = "sans-serif";
pub const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register the bundled face once per process. Safe to call before every
/// draw.
pub fn ensure_registered() -> Result<()> {
    let registered = *REGISTERED.get_or_init(|| {
        let ok = register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA).is_ok();
        debug!("Registered bundled {} font: {}", FONT_FAMILY, ok);
        ok
    });
    if registered {
        Ok(())
    } else {
        Err(ChartError::Font(FONT_FAMILY.to_string()))
    }
}
