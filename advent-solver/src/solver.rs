//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into the data a solver works on
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type Parsed = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Day1::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait PuzzleParser {
    /// The parsed representation of one input text
    type Parsed;

    /// Parse the input string. Implementations trim trailing whitespace themselves.
    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;
}

/// Core trait that every daily solution implements.
///
/// Each part of a day has its own input, so the registry parses once per
/// part before calling [`Solver::solve_part`].
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Sums;
///
/// impl PuzzleParser for Sums {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .trim()
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(parsed.iter().sum::<i64>().to_string()),
///             2 => Ok(parsed.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `parsed` - The parsed input for this part
    /// * `part` - The part number (1, 2, etc.)
    fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
