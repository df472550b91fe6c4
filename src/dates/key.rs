//! Calendar Day Keys
//!
//! Canonical `YYYY-MM-DD` day values used as the unit of comparison across
//! the engine. Every other module consumes [`DateKey`], never raw strings.

use std::{fmt, str::FromStr};

use jiff::civil::{Date, Weekday};
use thiserror::Error;

/// Errors produced when constructing a [`DateKey`].
#[derive(Debug, Error)]
pub enum InvalidDateError {
    /// Input does not have the canonical `YYYY-MM-DD` shape.
    #[error("malformed calendar date: {0:?}")]
    Malformed(String),

    /// Components have the right shape but name a day that does not exist.
    #[error("no such calendar day: {0:?}")]
    NoSuchDay(String),

    /// Integer components fall outside the supported calendar.
    #[error("calendar components out of range: year {year}, month {month}, day {day}")]
    ComponentsOutOfRange {
        /// Requested year.
        year: i16,

        /// Requested month.
        month: i8,

        /// Requested day of month.
        day: i8,
    },
}

/// An immutable calendar day, independent of time zone and time of day.
///
/// Two keys are equal iff they name the same day; ordering is calendar
/// order, which coincides with lexical order of the canonical text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl DateKey {
    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Rejects malformed shapes, impossible month/day combinations, and any
    /// string carrying a time component.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateError`] describing why the input was rejected.
    pub fn from_iso(text: &str) -> Result<Self, InvalidDateError> {
        let malformed = || InvalidDateError::Malformed(text.to_string());

        let mut parts = text.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(malformed());
        }

        if !digits(year) || !digits(month) || !digits(day) {
            return Err(malformed());
        }

        let year: i16 = year.parse().map_err(|_err| malformed())?;
        let month: i8 = month.parse().map_err(|_err| malformed())?;
        let day: i8 = day.parse().map_err(|_err| malformed())?;

        Date::new(year, month, day)
            .map(Self)
            .map_err(|_err| InvalidDateError::NoSuchDay(text.to_string()))
    }

    /// Parse a date from an external date-or-timestamp string.
    ///
    /// Boundary records may carry full ISO-8601 timestamps; the time
    /// component is truncated and the remaining date parsed strictly.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateError`] if the date portion is not a valid
    /// canonical day.
    pub fn from_external(text: &str) -> Result<Self, InvalidDateError> {
        let trimmed = text.trim();

        let date_part = trimmed
            .split_once(['T', ' '])
            .map_or(trimmed, |(date, _rest)| date);

        Self::from_iso(date_part)
    }

    /// Construct directly from integer components.
    ///
    /// Used when iterating a rendered month grid, where the components are
    /// already numeric.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError::ComponentsOutOfRange`] if the components
    /// do not name a real day.
    pub fn from_calendar_date(year: i16, month: i8, day: i8) -> Result<Self, InvalidDateError> {
        Date::new(year, month, day)
            .map(Self)
            .map_err(|_err| InvalidDateError::ComponentsOutOfRange { year, month, day })
    }

    /// The current date in the system's local calendar.
    #[must_use]
    pub fn today() -> Self {
        Self(jiff::Zoned::now().date())
    }

    /// The day after this one, or `None` at the end of the supported calendar.
    #[must_use]
    pub fn next_day(self) -> Option<Self> {
        self.0.tomorrow().ok().map(Self)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i16 {
        self.0.year()
    }

    /// Calendar month, `1..=12`.
    #[must_use]
    pub fn month(self) -> i8 {
        self.0.month()
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn day(self) -> i8 {
        self.0.day()
    }

    /// Weekday this key falls on.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Number of days in this key's month.
    #[must_use]
    pub fn days_in_month(self) -> i8 {
        self.0.days_in_month()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = InvalidDateError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_iso(text)
    }
}
