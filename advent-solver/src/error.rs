//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range (exceeds the solver's parts)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The computation needs an input that the store doesn't have
    #[error("No input for day {day} part {part}")]
    MissingInput { day: u8, part: u8 },
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No computation registered for the given day and part
    #[error("Solver not found for day {0} part {1}")]
    NotFound(u8, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a computation for a day-part combination that already exists
    #[error("Duplicate solver registration for day {0} part {1}")]
    DuplicateSolver(u8, u8),
    /// Day or part outside the supported range
    #[error("Invalid day {0} part {1}")]
    InvalidDayPart(u8, u8),
}

/// Error type for loading the input tree
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading a directory or file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
