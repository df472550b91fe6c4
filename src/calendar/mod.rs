//! Calendar Presentation Adapter
//!
//! Maps a month of an [`AvailabilitySnapshot`](crate::availability::AvailabilitySnapshot)
//! into renderable cell states and turns admin clicks into transition
//! requests. Everything here is synchronous pure state; the caller owns
//! applying the requests and re-rendering.

use crate::{
    availability::{AvailabilityError, DateStatus, TransitionRequest},
    dates::{DateKey, InvalidDateError},
};

pub mod grid;
pub mod render;

pub use grid::{MonthCell, MonthGrid};
pub use render::MonthRenderer;

/// Month navigation state for the calendar widget.
///
/// `next` and `previous` wrap across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i16,
    month: i8,
}

impl MonthCursor {
    /// Create a cursor for the given year and month.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateError`] if the components do not name a real
    /// month.
    pub fn new(year: i16, month: i8) -> Result<Self, InvalidDateError> {
        DateKey::from_calendar_date(year, month, 1)?;

        Ok(Self { year, month })
    }

    /// Cursor for the month containing the given day.
    #[must_use]
    pub fn from_date(date: DateKey) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year under the cursor.
    #[must_use]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Calendar month under the cursor, `1..=12`.
    #[must_use]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Advance one month, rolling into January of the next year.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Step back one month, rolling into December of the previous year.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Translate a click on a rendered cell into a transition request.
///
/// Unmarked and excluded days open for rent; available days withhold.
///
/// # Errors
///
/// Clicks on booked or past cells return the matching
/// [`AvailabilityError`]; callers surface these as no-ops rather than hard
/// failures.
pub fn click(cell: MonthCell) -> Result<TransitionRequest, AvailabilityError> {
    match cell.status {
        DateStatus::Booked => Err(AvailabilityError::BookedDateImmutable(cell.date)),
        DateStatus::Past => Err(AvailabilityError::PastDateImmutable(cell.date)),
        DateStatus::Available => Ok(TransitionRequest::Withhold(cell.date)),
        DateStatus::Excluded | DateStatus::Unmarked => Ok(TransitionRequest::Open(cell.date)),
    }
}
