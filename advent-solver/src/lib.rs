//! Daily Puzzle Solver Library
//!
//! A small framework for running daily puzzle solutions: each day parses its
//! own input text and produces one answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - An explicit dispatch table from (day, part) to a computation
//! - A read-only input store loaded once from a `day-N/part-M.txt` tree
//! - Timed results
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type Parsed = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(parsed.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartOutOfRange(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(1)
//!     .unwrap()
//!     .build();
//!
//! let result = registry.solve(1, 1, "1\n2\n3").unwrap();
//! assert_eq!(result.answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Trait
//!
//! The [`Solver`] trait is the core interface. Implement it together with
//! [`PuzzleParser`] to define:
//! - How to parse input (`Parsed` type and `parse()` method)
//! - How many parts exist (`PARTS`)
//! - How to solve each part (`solve_part()` method)
//!
//! ## Dispatch Table
//!
//! [`RegistryBuilder`] maps each (day, part) to a closure. Solvers are
//! registered explicitly with [`RegistryBuilder::register_solver`], and ad-hoc
//! computations with [`RegistryBuilder::register`].

mod error;
mod input;
mod registry;
mod result;
mod solver;

// Re-export public API
pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use input::InputStore;
pub use registry::{Computation, DAYS, PARTS_PER_DAY, RegistryBuilder, SolverRegistry};
pub use result::SolveResult;
pub use solver::{PuzzleParser, Solver, SolverExt};
