//! Day 3: Binary Diagnostic

pub mod diagnostic;

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use diagnostic::{DiagnosticReport, life_support_rating, power_consumption};

pub struct BinaryDiagnostic;

impl PuzzleParser for BinaryDiagnostic {
    type Parsed = DiagnosticReport;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .parse()
            .map_err(|e: diagnostic::DiagnosticError| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for BinaryDiagnostic {
    const PARTS: u8 = 2;

    fn solve_part(report: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        let reading = match part {
            1 => power_consumption(report),
            2 => life_support_rating(report),
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        reading
            .map(|value| value.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}
