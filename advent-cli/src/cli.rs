//! CLI argument parsing using clap

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Daily puzzle runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run every daily puzzle solution", version)]
pub struct Args {
    /// Directory holding `day-N/part-M.txt` inputs
    #[arg(short, long, default_value = "inputs")]
    pub inputs: PathBuf,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Treat this date as today when deciding whether a puzzle is released
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
