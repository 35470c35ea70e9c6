use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Work out how many classes you must attend, or can still miss.
#[derive(Parser, Debug)]
#[command(
    name = "attendance-calculator",
    version,
    about = "Attendance threshold calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a YAML file listing the selectable thresholds.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run. Starts the interactive shell when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate once from command line arguments.
    Calculate(CalculateArgs),
    /// Start the interactive calculator.
    Shell,
}

/// Arguments for the `calculate` subcommand.
#[derive(clap::Args, Debug)]
pub struct CalculateArgs {
    /// Number of classes held so far.
    #[arg(short, long, allow_hyphen_values = true)]
    pub total: i64,

    /// Number of classes attended.
    #[arg(short, long, allow_hyphen_values = true)]
    pub attended: i64,

    /// Desired attendance percentage (defaults to the configured default).
    #[arg(short = 'p', long)]
    pub target: Option<u8>,

    /// Print the full calculation record as JSON.
    #[arg(long)]
    pub json: bool,
}
