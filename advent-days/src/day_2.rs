//! Day 2: Dive!

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use anyhow::{anyhow, bail};
use std::str::FromStr;
use thiserror::Error;

pub struct Dive;

/// One submarine course command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, amount) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<direction> <amount>', got {:?}", s))?;
        let amount: i64 = amount.trim().parse()?;
        if amount < 0 {
            bail!("amount must be non negative");
        }
        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(anyhow!("unknown direction {:?}", other)),
        }
    }
}

impl PuzzleParser for Dive {
    type Parsed = Vec<Command>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<Command>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Raised when the submarine's position no longer fits in an `i64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiveError {
    #[error("position overflows at command {command} ({step:?})")]
    CommandOverflow { command: usize, step: Command },
    #[error("{0} * {1} overflows")]
    ProductOverflow(i64, i64),
}

impl Solver for Dive {
    const PARTS: u8 = 2;

    fn solve_part(commands: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        let position = match part {
            1 => follow_course(commands),
            2 => follow_course_with_aim(commands),
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        position
            .map(|product| product.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

/// Up and down move the depth directly; returns horizontal * depth
fn follow_course(commands: &[Command]) -> Result<i64, DiveError> {
    let (horizontal, depth) = commands.iter().enumerate().try_fold(
        (0i64, 0i64),
        |(horizontal, depth), (index, &step)| {
            let next = match step {
                Command::Forward(n) => horizontal.checked_add(n).map(|h| (h, depth)),
                Command::Down(n) => depth.checked_add(n).map(|d| (horizontal, d)),
                Command::Up(n) => depth.checked_sub(n).map(|d| (horizontal, d)),
            };
            next.ok_or(DiveError::CommandOverflow {
                command: index + 1,
                step,
            })
        },
    )?;
    checked_product(horizontal, depth)
}

/// Up and down steer the aim; forward also dives by aim * n
fn follow_course_with_aim(commands: &[Command]) -> Result<i64, DiveError> {
    let (horizontal, depth, _) = commands.iter().enumerate().try_fold(
        (0i64, 0i64, 0i64),
        |(horizontal, depth, aim), (index, &step)| {
            let next = match step {
                Command::Forward(n) => horizontal
                    .checked_add(n)
                    .zip(aim.checked_mul(n).and_then(|dive| depth.checked_add(dive)))
                    .map(|(h, d)| (h, d, aim)),
                Command::Down(n) => aim.checked_add(n).map(|a| (horizontal, depth, a)),
                Command::Up(n) => aim.checked_sub(n).map(|a| (horizontal, depth, a)),
            };
            next.ok_or(DiveError::CommandOverflow {
                command: index + 1,
                step,
            })
        },
    )?;
    checked_product(horizontal, depth)
}

fn checked_product(horizontal: i64, depth: i64) -> Result<i64, DiveError> {
    horizontal
        .checked_mul(depth)
        .ok_or(DiveError::ProductOverflow(horizontal, depth))
}
