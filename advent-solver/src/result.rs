//! Timed answers produced by the registry

use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Run `f` and stamp its answer with start and end times
    pub fn timed<E>(f: impl FnOnce() -> Result<String, E>) -> Result<Self, E> {
        let solve_start = Utc::now();
        let answer = f()?;
        let solve_end = Utc::now();

        Ok(Self {
            answer,
            solve_start,
            solve_end,
        })
    }

    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}
