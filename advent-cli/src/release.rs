//! Puzzle release calendar

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc};
use std::cmp::Ordering;

/// Puzzles unlock at midnight UTC-5
pub const RELEASE_OFFSET_WEST_SECS: i32 = 5 * 3600;

/// Where a day without code stands relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    NotYetReleased,
    ReleasedToday,
    ReleasedEarlier,
}

impl ReleaseStatus {
    /// Compare `day` with today's day of month
    pub fn classify(day: u8, today: NaiveDate) -> Self {
        match u32::from(day).cmp(&today.day()) {
            Ordering::Greater => ReleaseStatus::NotYetReleased,
            Ordering::Equal => ReleaseStatus::ReleasedToday,
            Ordering::Less => ReleaseStatus::ReleasedEarlier,
        }
    }

    /// Whether a missing solution in this state stops the whole run
    pub fn is_fatal(self) -> bool {
        !matches!(self, ReleaseStatus::ReleasedEarlier)
    }

    /// Sentence shown after "Couldn't find code for day N."
    pub fn hint(self) -> &'static str {
        match self {
            ReleaseStatus::NotYetReleased => {
                "It looks like this puzzle hasn't been released yet. Check back once it releases!"
            }
            ReleaseStatus::ReleasedToday => {
                "It looks like this puzzle was just released today. Solutions to puzzles won't be \
                 updated until the day after it's released. Check back tomorrow!"
            }
            ReleaseStatus::ReleasedEarlier => {
                "It looks like this puzzle has been released. Let the developers know to update the code!"
            }
        }
    }
}

/// Today's date on the puzzle clock
pub fn puzzle_today() -> NaiveDate {
    let offset = FixedOffset::west_opt(RELEASE_OFFSET_WEST_SECS).unwrap_or(Utc.fix());
    Utc::now().with_timezone(&offset).date_naive()
}
