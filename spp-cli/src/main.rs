//! SPP CLI - Command line tool for seabed profile depth and gradient charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "spp",
    version,
    about = "Seabed profile plotter: depth, gradient and moving average by kilometer post"
)]
struct Cli {
    #[command(subcommand)]
    command: spp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("spp {}", env!("CARGO_PKG_VERSION"));
    spp_cmd::run(cli.command)
}
