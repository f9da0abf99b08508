use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Oread gravitational-wave ringdown echo search.
#[derive(Parser)]
#[command(
    name = "oread",
    version,
    about = "Delay-scan cross-correlation search for ringdown echoes"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Search a strain file for ringdown echoes.
    Search(SearchArgs),
    /// Generate a synthetic event file with an injected ringdown and echo.
    Inject(InjectArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "oread.toml")]
    pub config: PathBuf,

    /// Override input strain file from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Explicit merger peak time (GPS seconds); overrides config and
    /// auto-detection.
    #[arg(long)]
    pub peak_time: Option<f64>,
}

/// Arguments for the `inject` subcommand.
#[derive(clap::Args)]
pub struct InjectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "oread.toml")]
    pub config: PathBuf,

    /// Path for the generated strain file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// RNG seed for reproducible noise (random if omitted).
    #[arg(short, long)]
    pub seed: Option<u64>,
}
