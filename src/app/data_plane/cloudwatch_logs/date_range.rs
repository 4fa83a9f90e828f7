//! Inclusive calendar-day ranges and the stream-name prefixes derived from them.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Message carried by every date parsing failure
pub const DATE_FORMAT_ERROR: &str = "Incorrect date format, should be YYYY-MM-DD";

/// Log stream names in the target groups start with the ingestion day in this format
pub const STREAM_PREFIX_FORMAT: &str = "%Y/%m/%d";

/// Parse a `YYYY-MM-DD` date.
///
/// Only the exact zero-padded shape is accepted: no sign, no surrounding
/// whitespace, no single-digit months or days.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if !has_iso_date_shape(input) {
        return Err(anyhow!("{}: got {:?}", DATE_FORMAT_ERROR, input));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| anyhow!("{}: got {:?} ({})", DATE_FORMAT_ERROR, input, e))
}

fn has_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Stream name prefix for one day, e.g. `2024/01/31`
pub fn day_prefix(day: NaiveDate) -> String {
    day.format(STREAM_PREFIX_FORMAT).to_string()
}

/// Inclusive `[from, to]` range of days.
///
/// A range whose start is after its end is empty rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Single-day range
    pub fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Number of days in the range, zero when `from > to`
    pub fn num_days(&self) -> usize {
        let days = (self.to - self.from).num_days() + 1;
        usize::try_from(days).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Days from `from` to `to`, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}
