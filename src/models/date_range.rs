use chrono::{Duration, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// First day of the APOD archive.
pub const ARCHIVE_START: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(d) => d,
    None => panic!("invalid archive start"),
};

pub const DEFAULT_WINDOW_DAYS: u32 = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Inclusive start/end pair selected for a gallery query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window ending on `today`, never reaching back past `archive_start`.
    pub fn trailing_window(today: NaiveDate, days: u32, archive_start: NaiveDate) -> Self {
        let start = today - Duration::days(i64::from(days.max(1)) - 1);
        let (min, max) = Self::bounds(today, archive_start);
        Self { start, end: today }.clamp(min, max)
    }

    pub fn default_window(today: NaiveDate) -> Self {
        Self::trailing_window(today, DEFAULT_WINDOW_DAYS, ARCHIVE_START)
    }

    /// Selectable `(min, max)` for the date inputs.
    pub fn bounds(today: NaiveDate, archive_start: NaiveDate) -> (NaiveDate, NaiveDate) {
        (archive_start, today.max(archive_start))
    }

    pub fn clamp(self, min: NaiveDate, max: NaiveDate) -> Self {
        let max = max.max(min);
        let start = self.start.clamp(min, max);
        let end = self.end.clamp(start, max);
        Self { start, end }
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
