//! Availability model errors.

use thiserror::Error;

use crate::dates::{DateKey, DateRange};

/// Rule violations raised by availability transitions.
///
/// These are returned as values so callers can tell "nothing happened
/// because of a rule" apart from a bug; the admin screens surface them as
/// silent no-ops or inline warnings.
#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// The day is covered by a confirmed booking and cannot be edited.
    #[error("booked day {0} cannot be edited")]
    BookedDateImmutable(DateKey),

    /// The day is in the past and cannot be edited.
    #[error("past day {0} cannot be edited")]
    PastDateImmutable(DateKey),

    /// The day falls outside the range it was supposed to refine.
    #[error("day {date} is outside {}..={}", range.start(), range.end())]
    OutOfRange {
        /// Day the admin tried to exclude.
        date: DateKey,

        /// Range the exclusion was scoped to.
        range: DateRange,
    },

    /// The day is already excluded.
    #[error("day {0} is already excluded")]
    AlreadyExcluded(DateKey),
}
