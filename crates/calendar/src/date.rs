//! Immutable date value over a chrono instant.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::CalendarError;
use crate::unit::Field;

/// Rendering used by `Display`, independent of any formatter or locale.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single absolute calendar instant.
///
/// Values are never mutated; every operation in this crate returns a new
/// `DateValue`. Equality and ordering follow the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDateTime);

impl DateValue {
    /// Creates a date at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the fields do not name a
    /// calendar date (e.g. month 13 or February 30).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::with_hms_milli(year, month, day, 0, 0, 0, 0)
    }

    /// Creates a date with a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] or
    /// [`CalendarError::InvalidTime`] for out-of-range fields.
    pub fn with_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        Self::with_hms_milli(year, month, day, hour, minute, second, 0)
    }

    /// Creates a date with a time of day down to the millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] or
    /// [`CalendarError::InvalidTime`] for out-of-range fields.
    pub fn with_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millis: u32,
    ) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        // chrono accepts millis >= 1000 as a leap second; we do not.
        let time = (millis < 1000)
            .then(|| NaiveTime::from_hms_milli_opt(hour, minute, second, millis))
            .flatten()
            .ok_or(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                millis,
            })?;
        Ok(Self(date.and_time(time)))
    }

    /// Returns the current local wall-clock instant.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Returns today's date at midnight.
    pub fn today() -> Self {
        let now = Self::now();
        Self(now.0.date().and_time(NaiveTime::MIN))
    }

    /// Reads one calendar field.
    pub fn get(self, field: Field) -> i32 {
        match field {
            Field::Year => self.year(),
            Field::Month => self.month() as i32,
            Field::Day => self.day() as i32,
            Field::Hour => self.hour() as i32,
            Field::Minute => self.minute() as i32,
            Field::Second => self.second() as i32,
            Field::Millis => self.millis() as i32,
            Field::DayOfWeek => self.day_of_week() as i32,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Returns the millisecond within the second (0..=999).
    pub fn millis(self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Returns the ISO day of week, 1 = Monday through 7 = Sunday.
    pub fn day_of_week(self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Milliseconds since 1970-01-01 00:00:00, reading the value as UTC.
    pub fn timestamp_millis(self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// Returns the underlying chrono value.
    pub fn as_naive(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<DateValue> for NaiveDateTime {
    fn from(value: DateValue) -> Self {
        value.0
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
