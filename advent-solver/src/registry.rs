//! Dispatch table mapping (day, part) to a computation

use crate::error::{RegistrationError, SolverError};
use crate::result::SolveResult;
use crate::solver::{Solver, SolverExt};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Days per event (1-25)
pub const DAYS: u8 = 25;
/// Parts per day (1-2)
pub const PARTS_PER_DAY: u8 = 2;
/// Total capacity of the flat storage
pub const CAPACITY: usize = DAYS as usize * PARTS_PER_DAY as usize;

/// Calculate flat index from day/part, returning None if out of bounds
#[inline]
fn calc_index(day: u8, part: u8) -> Option<usize> {
    if day == 0 || day > DAYS {
        return None;
    }
    if part == 0 || part > PARTS_PER_DAY {
        return None;
    }
    let d = (day - 1) as usize;
    let p = (part - 1) as usize;
    Some(d * PARTS_PER_DAY as usize + p)
}

/// Reconstruct day/part from flat index
#[inline]
fn from_index(index: usize) -> (u8, u8) {
    let day = (index / PARTS_PER_DAY as usize) as u8 + 1;
    let part = (index % PARTS_PER_DAY as usize) as u8 + 1;
    (day, part)
}

// ============================================================================
// Computation Types
// ============================================================================

/// A registered computation: takes the raw input text of its (day, part) and
/// produces the answer
pub type Computation = Box<dyn Fn(&str) -> Result<String, SolverError> + Send + Sync>;

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder detects duplicate and out-of-range registrations; the built
/// registry is immutable.
///
/// # Example
///
/// ```
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register(1, 1, |input| Ok(input.lines().count().to_string()))
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.solve(1, 1, "a\nb").unwrap().answer, "2");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Computation>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a computation for a specific day and part
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the computation registered, ready for chaining
    /// * `Err(RegistrationError)` - Out-of-range key or duplicate registration
    pub fn register<F>(mut self, day: u8, part: u8, computation: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<String, SolverError> + Send + Sync + 'static,
    {
        let index =
            calc_index(day, part).ok_or(RegistrationError::InvalidDayPart(day, part))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day, part));
        }

        self.entries[index] = Some(Box::new(computation));
        Ok(self)
    }

    /// Register every part of a [`Solver`] for `day`
    ///
    /// Each part parses its own input before solving.
    pub fn register_solver<S>(mut self, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        for part in 1..=S::PARTS {
            self = self.register(day, part, move |input: &str| {
                let parsed = S::parse(input)?;
                Ok(S::solve_part_checked_range(&parsed, part)?)
            })?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable dispatch table for looking up and running computations
pub struct SolverRegistry {
    entries: Vec<Option<Computation>>,
}

impl SolverRegistry {
    /// Check if a computation exists for day/part
    pub fn contains(&self, day: u8, part: u8) -> bool {
        calc_index(day, part)
            .and_then(|i| self.entries.get(i))
            .is_some_and(Option::is_some)
    }

    /// Check if any part of `day` has a computation
    pub fn contains_day(&self, day: u8) -> bool {
        self.parts_for_day(day).next().is_some()
    }

    /// Registered parts of `day`, ascending
    pub fn parts_for_day(&self, day: u8) -> impl Iterator<Item = u8> + '_ {
        (1..=PARTS_PER_DAY).filter(move |&part| self.contains(day, part))
    }

    /// Iterate over all registered (day, part) keys in ascending order
    pub fn iter_keys(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_some())
            .map(|(i, _)| from_index(i))
    }

    /// Get the number of registered computations
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Run the computation for day/part on `input`, with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer with its start and end timestamps
    /// * `Err(SolverError)` - Computation not found, or it failed
    pub fn solve(&self, day: u8, part: u8, input: &str) -> Result<SolveResult, SolverError> {
        let computation = calc_index(day, part)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .ok_or(SolverError::NotFound(day, part))?;

        SolveResult::timed(|| computation(input))
    }
}
