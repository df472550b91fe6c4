//! Hemline prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    availability::{AvailabilityError, AvailabilitySnapshot, DateStatus, TransitionRequest},
    bookings::{derive_booked, reconcile},
    calendar::{MonthCell, MonthCursor, MonthGrid, MonthRenderer, click},
    dates::{
        DateKey, DateRange, DateSet, InvalidDateError, InvalidRangeError, ListParseError,
        ListParseMode, format_list, parse_list,
    },
    records::{
        BookingWindowRecord, ListingRecord, ListingWriteRecord, RecordError, booked_from_records,
        load_snapshot, save_record, write_record_from_text,
    },
};
