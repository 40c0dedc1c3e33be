//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::release;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Root of the input tree
    pub inputs_dir: PathBuf,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// "Today" on the puzzle clock
    pub today: NaiveDate,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            inputs_dir: expand_tilde(&args.inputs),
            day_filter: args.day,
            part_filter: args.part,
            today: args.date.unwrap_or_else(release::puzzle_today),
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
