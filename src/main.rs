//! UHK80 Keycaps - keycap geometry generator for the UHK80 keyboard
//!
//! Derives per-row keycap dimensions, writes JSON build plans and parameter
//! sheets, and exports printable STL meshes when built with the `csg` feature.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uhk80_keycaps::cli::{
    CliResult, ConfigArgs, ExportArgs, LayoutArgs, ParamsArgs, PlanArgs, SheetArgs, ValidateArgs,
};

/// UHK80 Keycaps - keycap geometry generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived parameters of one keycap
    Params(ParamsArgs),
    /// List the keys of a layout
    Layout(LayoutArgs),
    /// Write the keycap build plan as JSON
    Plan(PlanArgs),
    /// Write a markdown parameter sheet
    Sheet(SheetArgs),
    /// Export the keycaps as binary STL
    Export(ExportArgs),
    /// Validate a layout
    Validate(ValidateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Params(args) => args.execute(),
            Self::Layout(args) => args.execute(),
            Self::Plan(args) => args.execute(),
            Self::Sheet(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.code);
    }
}
