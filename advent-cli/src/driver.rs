//! Sequential driver that runs each day's computations

use crate::config::Config;
use crate::error::{CliError, MissingComputation};
use crate::release::ReleaseStatus;
use advent_solver::{DAYS, InputStore, SolverError, SolverRegistry};
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Answer (or failure) for one part
pub struct PartAnswer {
    pub part: u8,
    pub answer: Result<String, SolverError>,
}

/// Everything computed for one day
pub struct DayReport {
    pub day: u8,
    pub answers: Vec<PartAnswer>,
    /// Wall time for all parts of the day, input lookup included
    pub elapsed: Duration,
}

impl DayReport {
    /// First failure among the parts, if any
    pub fn first_error(&self) -> Option<&SolverError> {
        self.answers.iter().find_map(|a| a.answer.as_ref().err())
    }

    /// Answers of all parts joined in part order
    ///
    /// One part prints bare, several print as `(a, b)`.
    pub fn result_text(&self) -> Result<String, &SolverError> {
        let answers = self
            .answers
            .iter()
            .map(|a| a.answer.as_deref())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match answers.as_slice() {
            [single] => (*single).to_string(),
            many => format!("({})", many.join(", ")),
        })
    }
}

/// What happened to one day
pub enum DayOutcome {
    Solved(DayReport),
    /// No code for a day released earlier; logged and skipped
    Skipped(MissingComputation),
}

impl DayOutcome {
    pub fn is_failure(&self) -> bool {
        match self {
            DayOutcome::Solved(report) => report.first_error().is_some(),
            DayOutcome::Skipped(_) => false,
        }
    }
}

/// Runs every selected day in order
pub struct Driver<'a> {
    registry: &'a SolverRegistry,
    inputs: &'a InputStore,
    days: RangeInclusive<u8>,
    part_filter: Option<u8>,
    today: NaiveDate,
}

impl<'a> Driver<'a> {
    pub fn new(registry: &'a SolverRegistry, inputs: &'a InputStore, config: &Config) -> Self {
        let days = match config.day_filter {
            Some(day) => day..=day,
            None => 1..=DAYS,
        };
        Self {
            registry,
            inputs,
            days,
            part_filter: config.part_filter,
            today: config.today,
        }
    }

    /// Run all selected days, handing each outcome to `on_outcome` as soon as it is known
    ///
    /// Stops with an error at the first day that has no code and is released
    /// today or not yet released. Every other failure stays inside its day.
    pub fn run(&self, mut on_outcome: impl FnMut(&DayOutcome)) -> Result<Vec<DayOutcome>, CliError> {
        let mut outcomes = Vec::new();

        for day in self.days.clone() {
            let outcome = if self.registry.contains_day(day) {
                match self.run_day(day) {
                    Some(report) => DayOutcome::Solved(report),
                    None => continue,
                }
            } else {
                let missing = MissingComputation {
                    day,
                    status: ReleaseStatus::classify(day, self.today),
                };
                if missing.status.is_fatal() {
                    return Err(missing.into());
                }
                tracing::error!(day, "{}", missing);
                DayOutcome::Skipped(missing)
            };

            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Solve the selected parts of one day; None if the part filter leaves nothing
    fn run_day(&self, day: u8) -> Option<DayReport> {
        let parts: Vec<u8> = self
            .registry
            .parts_for_day(day)
            .filter(|part| self.part_filter.is_none_or(|p| p == *part))
            .collect();
        if parts.is_empty() {
            tracing::debug!(day, part = ?self.part_filter, "no selected parts");
            return None;
        }

        let start = Instant::now();
        let answers = parts
            .into_iter()
            .map(|part| PartAnswer {
                part,
                answer: self.solve_part(day, part),
            })
            .collect();

        Some(DayReport {
            day,
            answers,
            elapsed: start.elapsed(),
        })
    }

    fn solve_part(&self, day: u8, part: u8) -> Result<String, SolverError> {
        let input = self.inputs.require(day, part)?;
        let result = self.registry.solve(day, part, input)?;
        tracing::debug!(
            day,
            part,
            micros = result.duration().num_microseconds(),
            "solved"
        );
        Ok(result.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::{RegistryBuilder, SolveError};
    use clap::Parser;

    const DIAGNOSTIC: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    fn config(day_filter: Option<u8>, part_filter: Option<u8>, today: u32) -> Config {
        Config {
            inputs_dir: "inputs".into(),
            day_filter,
            part_filter,
            today: NaiveDate::from_ymd_opt(2021, 12, today).unwrap(),
            quiet: true,
        }
    }

    fn diagnostic_inputs() -> InputStore {
        InputStore::from_texts([
            ((3, 1), DIAGNOSTIC.to_string()),
            ((3, 2), DIAGNOSTIC.to_string()),
        ])
    }

    fn solved(outcome: &DayOutcome) -> &DayReport {
        match outcome {
            DayOutcome::Solved(report) => report,
            DayOutcome::Skipped(m) => panic!("day {} was skipped", m.day),
        }
    }

    #[test]
    fn test_runs_registered_day() {
        let registry = advent_days::registry().unwrap();
        let inputs = diagnostic_inputs();
        let driver = Driver::new(&registry, &inputs, &config(Some(3), None, 25));

        let outcomes = driver.run(|_| {}).unwrap();

        assert_eq!(outcomes.len(), 1);
        let report = solved(&outcomes[0]);
        assert_eq!(report.day, 3);
        assert_eq!(report.result_text().unwrap(), "(198, 230)");
    }

    #[test]
    fn test_part_filter() {
        let registry = advent_days::registry().unwrap();
        let inputs = diagnostic_inputs();
        let driver = Driver::new(&registry, &inputs, &config(Some(3), Some(2), 25));

        let outcomes = driver.run(|_| {}).unwrap();
        assert_eq!(solved(&outcomes[0]).result_text().unwrap(), "230");
    }

    #[test]
    fn test_missing_input_fails_only_that_day() {
        let registry = advent_days::registry().unwrap();
        let inputs = diagnostic_inputs();
        let driver = Driver::new(&registry, &inputs, &config(None, None, 31));

        let outcomes = driver.run(|_| {}).unwrap();

        // days 1 and 2 have no input, day 3 solves, the rest have no code
        assert_eq!(outcomes.len(), DAYS as usize);
        assert!(outcomes[3..].iter().all(|o| matches!(o, DayOutcome::Skipped(_))));
        assert!(outcomes[0].is_failure());
        assert!(matches!(
            solved(&outcomes[0]).first_error(),
            Some(SolverError::SolveError(SolveError::MissingInput { day: 1, part: 1 }))
        ));
        assert!(outcomes[1].is_failure());
        assert!(!outcomes[2].is_failure());
        assert_eq!(solved(&outcomes[2]).result_text().unwrap(), "(198, 230)");
    }

    #[test]
    fn test_released_today_without_code_stops_run() {
        let registry = advent_days::registry().unwrap();
        let inputs = diagnostic_inputs();
        let driver = Driver::new(&registry, &inputs, &config(None, None, 4));

        let mut seen = Vec::new();
        let result = driver.run(|outcome| {
            if let DayOutcome::Solved(report) = outcome {
                seen.push(report.day);
            }
        });

        // days 1..=3 run before day 4 stops everything
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(CliError::MissingComputation(MissingComputation {
                day: 4,
                status: ReleaseStatus::ReleasedToday
            }))
        ));
    }

    #[test]
    fn test_not_yet_released_stops_run() {
        let registry = RegistryBuilder::new().build();
        let inputs = InputStore::default();
        let driver = Driver::new(&registry, &inputs, &config(Some(20), None, 4));

        assert!(matches!(
            driver.run(|_| {}),
            Err(CliError::MissingComputation(MissingComputation {
                day: 20,
                status: ReleaseStatus::NotYetReleased
            }))
        ));
    }

    #[test]
    fn test_earlier_day_without_code_is_skipped() {
        let registry = advent_days::registry().unwrap();
        let inputs = diagnostic_inputs();
        let driver = Driver::new(&registry, &inputs, &config(Some(7), None, 10));

        let outcomes = driver.run(|_| {}).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].is_failure());
        assert!(matches!(
            outcomes[0],
            DayOutcome::Skipped(MissingComputation {
                day: 7,
                status: ReleaseStatus::ReleasedEarlier
            })
        ));
    }

    #[test]
    fn test_runs_from_input_tree_on_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let day_dir = InputStore::day_dir(temp.path(), 3);
        std::fs::create_dir_all(&day_dir).unwrap();
        std::fs::write(day_dir.join("part-1.txt"), DIAGNOSTIC).unwrap();
        std::fs::write(day_dir.join("part-2.txt"), DIAGNOSTIC).unwrap();

        let args = crate::cli::Args::try_parse_from([
            "advent",
            "--inputs",
            temp.path().to_str().unwrap(),
            "--day",
            "3",
            "--date",
            "2021-12-25",
        ])
        .unwrap();
        let config = Config::from_args(args);
        let registry = advent_days::registry().unwrap();
        let inputs = InputStore::load(&config.inputs_dir).unwrap();
        let driver = Driver::new(&registry, &inputs, &config);

        let outcomes = driver.run(|_| {}).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(solved(&outcomes[0]).result_text().unwrap(), "(198, 230)");
    }

    #[test]
    fn test_missing_part_file_fails_that_day() {
        let temp = tempfile::TempDir::new().unwrap();
        let day_dir = InputStore::day_dir(temp.path(), 3);
        std::fs::create_dir_all(&day_dir).unwrap();
        std::fs::write(day_dir.join("part-1.txt"), DIAGNOSTIC).unwrap();

        let registry = advent_days::registry().unwrap();
        let inputs = InputStore::load(temp.path()).unwrap();
        let driver = Driver::new(&registry, &inputs, &config(Some(3), None, 25));

        let outcomes = driver.run(|_| {}).unwrap();
        let report = solved(&outcomes[0]);

        assert_eq!(report.answers[0].answer.as_deref().unwrap(), "198");
        assert!(matches!(
            report.first_error(),
            Some(SolverError::SolveError(SolveError::MissingInput { day: 3, part: 2 }))
        ));
    }
}
