//! Error types for the CLI

use crate::release::ReleaseStatus;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Input tree could not be read
    #[error("Input error: {0}")]
    Input(#[from] advent_solver::InputError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// A day has no code and the run cannot go on
    #[error(transparent)]
    MissingComputation(#[from] MissingComputation),

    /// Some days failed; their errors were already reported
    #[error("{0} day(s) failed")]
    DaysFailed(usize),
}

/// No computation registered for a day
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Couldn't find code for day {day}. {}", .status.hint())]
pub struct MissingComputation {
    pub day: u8,
    pub status: ReleaseStatus,
}
