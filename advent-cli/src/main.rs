//! Advent CLI - runs every daily puzzle solution and prints timing

mod cli;
mod config;
mod driver;
mod error;
mod output;
mod release;

use advent_solver::InputStore;
use clap::Parser;
use cli::Args;
use config::Config;
use driver::Driver;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, level from `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);
    tracing::debug!(inputs = %config.inputs_dir.display(), today = %config.today, "starting");

    let registry = advent_days::registry()?;
    let inputs = InputStore::load(&config.inputs_dir)?;
    if inputs.is_empty() {
        tracing::warn!(dir = %config.inputs_dir.display(), "no inputs found");
    }

    let formatter = OutputFormatter::new(config.quiet);
    let driver = Driver::new(&registry, &inputs, &config);
    let outcomes = driver.run(|outcome| formatter.print_outcome(outcome))?;

    formatter.print_summary(&outcomes);

    match outcomes.iter().filter(|o| o.is_failure()).count() {
        0 => Ok(()),
        failed => Err(error::CliError::DaysFailed(failed)),
    }
}
