mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use attendance_calculator::calculation::calculate;
use attendance_calculator::config::ConfigLoader;
use attendance_calculator::error::CalculatorError;
use attendance_calculator::models::AttendanceInput;
use attendance_calculator::shell::{INVALID_INPUT_NOTICE, Session, render_result};

use crate::cli::{CalculateArgs, Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };

    match cli.command {
        Some(Command::Calculate(args)) => calculate_once(&config, args),
        Some(Command::Shell) | None => {
            info!("Starting interactive session");
            Session::new(config).run(io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}

fn calculate_once(config: &ConfigLoader, args: CalculateArgs) -> Result<()> {
    let desired = match args.target {
        Some(target) => config.select_threshold(target),
        None => Ok(config.default_threshold()),
    }
    .map_err(with_notice)?;

    let input = AttendanceInput::new(args.total, args.attended, desired);
    let record = calculate(&input).map_err(with_notice)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", render_result(&record.result, desired));
    }
    Ok(())
}

/// Prefixes errors caused by the entered values with the input notice.
fn with_notice(err: CalculatorError) -> anyhow::Error {
    if err.is_user_error() {
        anyhow::Error::new(err).context(INVALID_INPUT_NOTICE)
    } else {
        err.into()
    }
}
