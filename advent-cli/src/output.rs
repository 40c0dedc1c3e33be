//! Output formatting for day outcomes

use crate::driver::{DayOutcome, DayReport};
use std::time::{Duration, Instant};

/// Output formatter for day outcomes
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single outcome
    pub fn print_outcome(&self, outcome: &DayOutcome) {
        let DayOutcome::Solved(report) = outcome else {
            // already logged by the driver
            return;
        };
        if self.quiet {
            self.print_quiet(report);
        } else {
            match format_day(report) {
                Ok(line) => println!("{}", line),
                Err(line) => eprintln!("{}", line),
            }
        }
    }

    /// Print in quiet mode (just the answers, one per line)
    fn print_quiet(&self, report: &DayReport) {
        for part in &report.answers {
            match &part.answer {
                Ok(answer) => println!("{}", answer),
                Err(e) => eprintln!("Day {} part {}: Error - {}", report.day, part.part, e),
            }
        }
    }

    /// Print a summary after all days
    pub fn print_summary(&self, outcomes: &[DayOutcome]) {
        if self.quiet {
            return;
        }

        let reports: Vec<&DayReport> = outcomes
            .iter()
            .filter_map(|o| match o {
                DayOutcome::Solved(report) => Some(report),
                DayOutcome::Skipped(_) => None,
            })
            .collect();
        let failures = reports.iter().filter(|r| r.first_error().is_some()).count();
        let skipped = outcomes.len() - reports.len();
        let total_time: Duration = reports.iter().map(|r| r.elapsed).sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Days: {} solved, {} failed, {} without code",
            reports.len() - failures,
            failures,
            skipped
        );
        println!("Total calculation time: {}", format_millis(total_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_millis(self.start_time.elapsed())
        );
    }
}

/// `Day {day}: {result} (Calculated in {ms}ms)`, or the error line
pub fn format_day(report: &DayReport) -> Result<String, String> {
    match report.result_text() {
        Ok(result) => Ok(format!(
            "Day {}: {} (Calculated in {})",
            report.day,
            result,
            format_millis(report.elapsed)
        )),
        Err(e) => Err(format!("Day {}: Error - {}", report.day, e)),
    }
}

/// Milliseconds with two decimals
fn format_millis(d: Duration) -> String {
    format!("{:.2}ms", d.as_secs_f64() * 1000.0)
}
