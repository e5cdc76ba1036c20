//! Choosing input and output files.
//!
//! A picker either returns a path or `None` for "cancelled". Callers must
//! not load or write anything after a cancellation.

use log::info;
use std::path::{Path, PathBuf};

/// Extension used when an output path has none.
pub const DEFAULT_EXTENSION: &str = "png";

pub trait FilePicker {
    /// Ask for a profile to open.
    fn pick_open(&self) -> Option<PathBuf>;

    /// Ask where to save a chart, starting from `suggested`.
    fn pick_save(&self, suggested: &Path) -> Option<PathBuf>;
}

/// Non-interactive picker: nothing to open unless given on the command
/// line, and charts are saved at the suggested path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialog;

impl FilePicker for NoDialog {
    fn pick_open(&self) -> Option<PathBuf> {
        info!("No profile path given");
        None
    }

    fn pick_save(&self, suggested: &Path) -> Option<PathBuf> {
        Some(suggested.to_path_buf())
    }
}

/// Native file dialogs.
#[cfg(feature = "dialog")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialog;

#[cfg(feature = "dialog")]
impl FilePicker for NativeDialog {
    fn pick_open(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select A File")
            .add_filter("CSV files", &["csv"])
            .add_filter("Text files", &["txt"])
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_save(&self, suggested: &Path) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Profile Plot")
            .add_filter("PNG Image", &["png"])
            .add_filter("JPEG Image", &["jpg", "jpeg"])
            .add_filter("SVG Vector", &["svg"])
            .add_filter("PDF Document", &["pdf"]);
        if let Some(dir) = suggested.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name().and_then(|n| n.to_str()) {
            dialog = dialog.set_file_name(name);
        }
        dialog.save_file()
    }
}

/// The picker for this build: native dialogs with the `dialog` feature,
/// otherwise command-line paths only.
pub fn default_picker() -> Box<dyn FilePicker> {
    #[cfg(feature = "dialog")]
    {
        Box::new(NativeDialog)
    }
    #[cfg(not(feature = "dialog"))]
    {
        Box::new(NoDialog)
    }
}

/// `survey.csv` -> `survey.png`, next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension(DEFAULT_EXTENSION)
}

/// Append the default extension when `path` has none.
pub fn ensure_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(DEFAULT_EXTENSION);
        PathBuf::from(name)
    }
}
