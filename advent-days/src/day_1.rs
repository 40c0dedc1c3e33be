//! Day 1: Sonar Sweep

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use anyhow::Context;
use itertools::Itertools;

pub struct SonarSweep;

impl PuzzleParser for SonarSweep {
    type Parsed = Vec<u32>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::MissingData("no depth measurements".to_string()));
        }
        input
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<u32>()
                    .with_context(|| format!("(line {}) invalid depth {:?}", line_idx + 1, line))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl Solver for SonarSweep {
    const PARTS: u8 = 2;

    fn solve_part(depths: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(count_increases(depths.iter().copied()).to_string()),
            2 => {
                let window_sums = depths
                    .iter()
                    .tuple_windows()
                    .map(|(a, b, c)| u64::from(*a) + u64::from(*b) + u64::from(*c));
                Ok(count_increases(window_sums).to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

/// Number of values larger than the one before
fn count_increases<T: PartialOrd + Clone>(values: impl Iterator<Item = T>) -> usize {
    values
        .tuple_windows()
        .filter(|(previous, next)| next > previous)
        .count()
}
