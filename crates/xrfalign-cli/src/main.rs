mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xrfalign", about = "XRF tomography projection alignment tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show projection volume metadata
    Info(commands::info::InfoArgs),
    /// Print the per-element intensity summary
    Histogram(commands::histogram::HistogramArgs),
    /// Re-apply a saved alignment to an unshifted volume
    Apply(commands::apply::ApplyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Apply(args) => commands::apply::run(args),
    }
}
