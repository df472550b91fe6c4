//! Listing Records
//!
//! The persistence boundary: serde contract types for the external listing
//! and order records, snapshot loading with booked-set reconciliation, and
//! save payload construction. The external CRUD layers own the transport;
//! this module is a pure codec.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    availability::AvailabilitySnapshot,
    bookings,
    dates::{
        DateKey, DateSet, InvalidDateError, ListParseError, ListParseMode, format_list, parse_list,
    },
};

/// Errors raised while crossing the persistence boundary.
///
/// Transport failures are not represented here; callers surface those
/// separately so model-validation failures stay distinguishable.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A listing must keep at least one rentable day.
    #[error("listing has no available days")]
    EmptyAvailability,

    /// A persisted date string did not survive normalization.
    #[error("invalid date in {field}")]
    InvalidDate {
        /// Contract field the string came from.
        field: &'static str,

        /// Why the string was rejected.
        #[source]
        source: InvalidDateError,
    },

    /// A submitted date list did not survive strict parsing.
    #[error("invalid date list in {field}")]
    InvalidList {
        /// Contract field the list came from.
        field: &'static str,

        /// Why the list was rejected.
        #[source]
        source: ListParseError,
    },
}

/// A confirmed order's booking window as persisted externally.
///
/// Both bounds are date-or-timestamp strings; orders are authoritative and
/// this engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWindowRecord {
    /// First rented day.
    pub start_date: String,

    /// Last rented day, inclusive.
    pub end_date: String,
}

/// The external listing record as read from the product store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    /// Days the admin opened for rent, as date-or-timestamp strings.
    #[serde(default)]
    pub available_dates: Vec<String>,

    /// Days the admin withheld, as date-or-timestamp strings.
    #[serde(default)]
    pub excluded_dates: Vec<String>,

    /// Booking windows of confirmed orders against this listing.
    #[serde(default)]
    pub booked_dates: Vec<BookingWindowRecord>,
}

/// The write payload for the product store.
///
/// Date lists travel as comma-joined canonical strings, matching the
/// legacy text-field submission format. Booked days are order-owned and
/// never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingWriteRecord {
    /// Comma-joined canonical available days, ascending.
    pub available_dates: String,

    /// Comma-joined canonical excluded days, ascending.
    pub excluded_dates: String,
}

/// Normalize a listing record into a reconciled snapshot.
///
/// Every admin date string is normalized through
/// [`DateKey::from_external`] (full ISO-8601 timestamps are truncated to
/// their date portion; anything else invalid is rejected). The booked set
/// is derived fresh from the embedded order windows, with corrupt windows
/// logged and skipped individually.
///
/// # Errors
///
/// Returns [`RecordError::InvalidDate`] for an unusable persisted admin
/// date.
pub fn load_snapshot(record: &ListingRecord) -> Result<AvailabilitySnapshot, RecordError> {
    let available = parse_dates(&record.available_dates, "availableDates")?;
    let excluded = parse_dates(&record.excluded_dates, "excludedDates")?;

    let snapshot = AvailabilitySnapshot::from_sets(available, excluded, DateSet::new());
    let booked = booked_from_records(&record.booked_dates);

    Ok(bookings::reconcile(&snapshot, booked))
}

/// Derive the booked day set from persisted order windows.
///
/// A window with an unparsable bound or an end before its start is logged
/// and skipped on its own; one corrupt order never hides the others.
#[must_use]
pub fn booked_from_records(windows: &[BookingWindowRecord]) -> DateSet {
    let parsed = windows.iter().filter_map(|window| {
        let bounds = DateKey::from_external(&window.start_date)
            .and_then(|start| DateKey::from_external(&window.end_date).map(|end| (start, end)));

        match bounds {
            Ok(bounds) => Some(bounds),
            Err(error) => {
                tracing::warn!(
                    start = %window.start_date,
                    end = %window.end_date,
                    %error,
                    "skipping booking window with unparsable bounds"
                );

                None
            }
        }
    });

    bookings::derive_booked(parsed)
}

/// Build the save payload for a snapshot.
///
/// # Errors
///
/// Returns [`RecordError::EmptyAvailability`] when the snapshot has no
/// available days; the save must be blocked before any network call.
pub fn save_record(snapshot: &AvailabilitySnapshot) -> Result<ListingWriteRecord, RecordError> {
    if snapshot.available().is_empty() {
        return Err(RecordError::EmptyAvailability);
    }

    Ok(ListingWriteRecord {
        available_dates: format_list(snapshot.available()),
        excluded_dates: format_list(snapshot.excluded()),
    })
}

/// Build a save payload from admin-submitted free-text date lists.
///
/// Submitted text is parsed in strict mode, so an invalid token fails the
/// save instead of being dropped silently. The result is normalized
/// against the listing's booked days before serialization.
///
/// # Errors
///
/// Returns [`RecordError::InvalidList`] for an invalid token and
/// [`RecordError::EmptyAvailability`] when nothing rentable remains.
pub fn write_record_from_text(
    available_text: &str,
    excluded_text: &str,
    booked: &DateSet,
) -> Result<ListingWriteRecord, RecordError> {
    let available =
        parse_list(available_text, ListParseMode::Strict).map_err(|source| {
            RecordError::InvalidList {
                field: "availableDates",
                source,
            }
        })?;

    let excluded =
        parse_list(excluded_text, ListParseMode::Strict).map_err(|source| {
            RecordError::InvalidList {
                field: "excludedDates",
                source,
            }
        })?;

    let snapshot = AvailabilitySnapshot::from_sets(available, excluded, booked.clone());

    save_record(&snapshot)
}

fn parse_dates(texts: &[String], field: &'static str) -> Result<DateSet, RecordError> {
    texts
        .iter()
        .map(|text| {
            DateKey::from_external(text).map_err(|source| RecordError::InvalidDate { field, source })
        })
        .collect()
}
