//! Daily puzzle solutions and the dispatch table that routes to them
//!
//! Each day is registered explicitly in [`registry`]; nothing is discovered
//! at link time.

pub mod day_1;
pub mod day_2;
pub mod day_3;

use advent_solver::{RegistrationError, RegistryBuilder, SolverRegistry};

/// Build the dispatch table for every implemented day
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    Ok(RegistryBuilder::new()
        .register_solver::<day_1::SonarSweep>(1)?
        .register_solver::<day_2::Dive>(2)?
        .register_solver::<day_3::BinaryDiagnostic>(3)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_implemented_days() {
        let registry = registry().unwrap();
        let keys: Vec<_> = registry.iter_keys().collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
        assert!(!registry.contains_day(4));
    }
}
