//! Command implementations for the seabed profile plotter CLI.
//!
//! Every subcommand follows the same flow: pick and load a profile into a
//! [`Session`], then report on it or render it.

use anyhow::Context;
use clap::{Args, Subcommand};
use log::info;
use spp_chart::ChartConfig;
use spp_profile::{LoadOptions, Session};
use std::path::PathBuf;

pub mod picker;
pub mod plot;
pub mod report;

use picker::FilePicker;

#[derive(Subcommand)]
pub enum Command {
    /// Print the kp range and the suggested axis interval
    Interval {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print profile statistics as JSON
    Summary {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Write the derived table (deltas, gradient, moving average) as CSV
    Derive {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output CSV path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Render a preview chart into the system temp directory
    View {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Export the depth and gradient chart (png, jpg, svg or pdf by extension)
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        chart: ChartArgs,

        /// Output image path (defaults to the input path with a .png extension)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Headerless two-column file of kp and depth
    #[arg(required = !cfg!(feature = "dialog"))]
    pub input: Option<PathBuf>,

    /// Field delimiter
    #[arg(short = 'd', long, default_value_t = ',')]
    pub delimiter: char,
}

impl ProfileArgs {
    pub fn load_options(&self) -> anyhow::Result<LoadOptions> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Delimiter {:?} is not a single ASCII character", self.delimiter))?;
        Ok(LoadOptions { delimiter })
    }
}

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// KP tick interval (defaults to the suggested interval)
    #[arg(short = 'i', long)]
    pub interval: Option<f64>,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,
}

impl ChartArgs {
    pub fn config(&self) -> ChartConfig {
        ChartConfig {
            width: self.width,
            height: self.height,
            ..ChartConfig::default()
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let picker = picker::default_picker();
    run_with(command, picker.as_ref())
}

/// Run a command with an explicit file picker.
pub fn run_with(command: Command, picker: &dyn FilePicker) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    match command {
        Command::Interval { profile } => {
            let Some(session) = open(&profile, picker)? else { return Ok(()) };
            report::write_interval(&session, &mut stdout.lock())
        }
        Command::Summary { profile } => {
            let Some(session) = open(&profile, picker)? else { return Ok(()) };
            report::write_summary(&session, &mut stdout.lock())
        }
        Command::Derive { profile, output } => {
            let Some(session) = open(&profile, picker)? else { return Ok(()) };
            match output {
                Some(path) => report::derive_to_file(&session, &path),
                None => report::write_derived(&session, stdout.lock()),
            }
        }
        Command::View { profile, chart } => {
            let Some(mut session) = open(&profile, picker)? else { return Ok(()) };
            let path = plot::view(&mut session, &chart)?;
            println!("Preview written to {}", path.display());
            Ok(())
        }
        Command::Export {
            profile,
            chart,
            output,
        } => {
            let Some(mut session) = open(&profile, picker)? else { return Ok(()) };
            if let Some(path) = plot::export(&mut session, &chart, output, picker)? {
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}

/// Pick and load the input profile. `Ok(None)` means the picker was
/// cancelled and nothing was loaded.
fn open(args: &ProfileArgs, picker: &dyn FilePicker) -> anyhow::Result<Option<Session>> {
    let Some(path) = args.input.clone().or_else(|| picker.pick_open()) else {
        info!("No profile selected; nothing to do");
        return Ok(None);
    };
    let options = args.load_options()?;
    let mut session = Session::new();
    session
        .load(&path, &options)
        .with_context(|| format!("Failed to load profile {}", path.display()))?;
    Ok(Some(session))
}
