//! Binary diagnostic reducer
//!
//! Column-wise bit statistics over a report of equal-width bit strings, the
//! criterion filter that narrows the report down to a single rating, and the
//! two composite readings built from them.

use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building or reducing a diagnostic report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    /// Statistics or filtering asked for on a report with no entries
    #[error("diagnostic report is empty")]
    EmptyReport,
    /// A value contains something other than '0' and '1', or nothing at all
    #[error("malformed bit string {value:?}")]
    MalformedValue { value: String },
    /// A bit string encodes a number that does not fit in 64 bits
    #[error("bit string of width {width} does not fit in 64 bits")]
    ValueTooWide { width: usize },
    /// An entry's width differs from the first entry's
    #[error("line {line}: expected {expected} bits, found {found}")]
    RaggedReport {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Multiplying two readings overflowed
    #[error("{0} * {1} overflows")]
    ProductOverflow(u64, u64),
}

/// Ordered, immutable sequence of bit strings sharing one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    entries: Vec<String>,
    width: usize,
}

impl DiagnosticReport {
    /// Build a report, checking the alphabet and that every entry has the
    /// first entry's width. An empty sequence gives an empty report.
    pub fn new<I, S>(entries: I) -> Result<Self, DiagnosticError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let width = entries.first().map_or(0, String::len);

        for (index, entry) in entries.iter().enumerate() {
            if !is_bit_string(entry) {
                return Err(DiagnosticError::MalformedValue {
                    value: entry.clone(),
                });
            }
            if entry.len() != width {
                return Err(DiagnosticError::RaggedReport {
                    line: index + 1,
                    expected: width,
                    found: entry.len(),
                });
            }
        }

        Ok(Self { entries, width })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of columns `W`
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for DiagnosticReport {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Self::new(Vec::<String>::new());
        }
        Self::new(s.lines().map(str::trim))
    }
}

fn is_bit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Count of '1' and '0' at one column of a subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnCounts {
    pub ones: usize,
    pub zeros: usize,
}

impl ColumnCounts {
    /// Count the bits at `col` across `entries`
    pub fn at<S: AsRef<str>>(entries: &[S], col: usize) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut counts, entry| {
                match entry.as_ref().as_bytes().get(col) {
                    Some(b'1') => counts.ones += 1,
                    Some(b'0') => counts.zeros += 1,
                    _ => {}
                }
                counts
            })
    }

    /// '1' iff ones >= zeros
    pub fn majority(self) -> u8 {
        if self.ones >= self.zeros { b'1' } else { b'0' }
    }

    /// '1' iff zeros > ones; a tie gives '0'
    pub fn minority(self) -> u8 {
        if self.zeros > self.ones { b'1' } else { b'0' }
    }
}

/// Majority and minority bit of every column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub majority: String,
    pub minority: String,
}

/// Summarise every column of the report
pub fn column_summary(report: &DiagnosticReport) -> Result<ColumnSummary, DiagnosticError> {
    if report.is_empty() {
        return Err(DiagnosticError::EmptyReport);
    }

    let (majority, minority) = (0..report.width())
        .map(|col| ColumnCounts::at(report.entries(), col))
        .map(|counts| (char::from(counts.majority()), char::from(counts.minority())))
        .unzip();

    Ok(ColumnSummary { majority, minority })
}

/// Which bit survives a filtering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Keep the column's majority bit, ties favour '1'
    Oxygen,
    /// Keep the column's minority bit, ties favour '0'
    Co2,
}

impl Criterion {
    /// Target bit for `col`, computed over `subset` only
    pub fn select<S: AsRef<str>>(self, subset: &[S], col: usize) -> u8 {
        let counts = ColumnCounts::at(subset, col);
        match self {
            Criterion::Oxygen => counts.majority(),
            Criterion::Co2 => counts.minority(),
        }
    }
}

/// Narrow the report column by column until one entry is left
///
/// Stops early once a single entry survives. If several survive every
/// column, the first of them is returned. A pass that would drop every
/// survivor leaves the subset unchanged.
pub fn filter_by_criterion(
    report: &DiagnosticReport,
    criterion: Criterion,
) -> Result<&str, DiagnosticError> {
    let mut survivors: Vec<&str> = report.entries().iter().map(String::as_str).collect();
    if survivors.is_empty() {
        return Err(DiagnosticError::EmptyReport);
    }

    let mut col = 0;
    while survivors.len() > 1 && col < report.width() {
        let target = criterion.select(&survivors, col);
        let next: Vec<&str> = survivors
            .iter()
            .copied()
            .filter(|entry| entry.as_bytes().get(col) == Some(&target))
            .collect();

        tracing::trace!(
            ?criterion,
            col,
            target = %char::from(target),
            before = survivors.len(),
            after = next.len(),
            "filter pass"
        );

        if !next.is_empty() {
            survivors = next;
        }
        col += 1;
    }

    Ok(survivors[0])
}

/// Interpret an MSB-first bit string as an unsigned integer
pub fn to_int(bits: &str) -> Result<u64, DiagnosticError> {
    if !is_bit_string(bits) {
        return Err(DiagnosticError::MalformedValue {
            value: bits.to_string(),
        });
    }
    if bits.trim_start_matches('0').len() > u64::BITS as usize {
        return Err(DiagnosticError::ValueTooWide { width: bits.len() });
    }

    Ok(bits
        .bytes()
        .fold(0u64, |value, bit| (value << 1) | u64::from(bit - b'0')))
}

fn checked_product(a: u64, b: u64) -> Result<u64, DiagnosticError> {
    a.checked_mul(b)
        .ok_or(DiagnosticError::ProductOverflow(a, b))
}

/// Majority reading times minority reading
pub fn power_consumption(report: &DiagnosticReport) -> Result<u64, DiagnosticError> {
    let summary = column_summary(report)?;
    checked_product(to_int(&summary.majority)?, to_int(&summary.minority)?)
}

/// Oxygen rating times CO2 rating
pub fn life_support_rating(report: &DiagnosticReport) -> Result<u64, DiagnosticError> {
    let oxygen = to_int(filter_by_criterion(report, Criterion::Oxygen)?)?;
    let co2 = to_int(filter_by_criterion(report, Criterion::Co2)?)?;
    checked_product(oxygen, co2)
}
