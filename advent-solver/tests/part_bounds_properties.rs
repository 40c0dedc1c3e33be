//! Property-based tests for solver part bounds and dispatch-table lookups

use advent_solver::{
    DAYS, PARTS_PER_DAY, ParseError, PuzzleParser, RegistrationError, RegistryBuilder, SolveError,
    Solver, SolverError, SolverExt,
};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> PuzzleParser for TestSolver<N> {
    type Parsed = ();

    fn parse(_input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_parsed: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// *For any* solver with PARTS = N, `solve_part_checked_range(part)` with
    /// part = 0 or part > N returns `PartOutOfRange(part)`.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=2, part in 0u8..=255) {
        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked_range(&(), part),
            _ => TestSolver::<2>::solve_part_checked_range(&(), part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// *For any* in-range key, a registered computation is found and run;
    /// every other in-range key of an otherwise empty registry is `NotFound`.
    #[test]
    fn prop_registered_key_dispatches(day in 1u8..=DAYS, part in 1u8..=PARTS_PER_DAY,
                                      other_day in 1u8..=DAYS, other_part in 1u8..=PARTS_PER_DAY) {
        let registry = RegistryBuilder::new()
            .register(day, part, move |_| Ok(format!("{}-{}", day, part)))
            .unwrap()
            .build();

        prop_assert_eq!(registry.solve(day, part, "").unwrap().answer, format!("{}-{}", day, part));

        if (other_day, other_part) != (day, part) {
            let missing = matches!(
                registry.solve(other_day, other_part, ""),
                Err(SolverError::NotFound(d, p)) if d == other_day && p == other_part
            );
            prop_assert!(missing);
        }
    }

    /// *For any* key outside days 1..=25 or parts 1..=2, registration fails.
    #[test]
    fn prop_invalid_key_rejected(day in 0u8..=255, part in 0u8..=255) {
        prop_assume!(day == 0 || day > DAYS || part == 0 || part > PARTS_PER_DAY);
        let result = RegistryBuilder::new().register(day, part, |_| Ok(String::new()));
        let rejected = matches!(result, Err(RegistrationError::InvalidDayPart(d, p)) if d == day && p == part);
        prop_assert!(rejected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&(), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&(), 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_registered_solver_rejects_nothing_in_range() {
        let registry = RegistryBuilder::new()
            .register_solver::<TestSolver<1>>(9)
            .unwrap()
            .build();

        assert_eq!(registry.solve(9, 1, "").unwrap().answer, "part1");
        assert!(matches!(
            registry.solve(9, 2, ""),
            Err(SolverError::NotFound(9, 2))
        ));
    }
}
