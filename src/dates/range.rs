//! Date Ranges
//!
//! Inclusive day ranges used for bulk availability generation and for
//! confirmed booking windows.

use thiserror::Error;

use crate::dates::key::DateKey;

/// Error produced when a range's end precedes its start.
#[derive(Debug, Error)]
#[error("invalid date range: {start} is after {end}")]
pub struct InvalidRangeError {
    /// Requested start day.
    pub start: DateKey,

    /// Requested end day.
    pub end: DateKey,
}

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateKey,
    end: DateKey,
}

impl DateRange {
    /// Create a range from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRangeError`] if `start` is after `end`.
    pub fn new(start: DateKey, end: DateKey) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError { start, end });
        }

        Ok(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub fn start(&self) -> DateKey {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub fn end(&self) -> DateKey {
        self.end
    }

    /// Whether the given day falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every day from start to end inclusive, in ascending order.
    #[must_use]
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Ascending iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<DateKey>,
    end: DateKey,
}

impl Iterator for Days {
    type Item = DateKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        if current > self.end {
            return None;
        }

        self.next = current.next_day().filter(|day| *day <= self.end);

        Some(current)
    }
}
