//! Booking Conflict Resolver
//!
//! Expands confirmed order windows into the set of booked days and folds
//! that set back into an [`AvailabilitySnapshot`]. Booked days take
//! precedence over everything the admin has marked; they are derived fresh
//! on every load and never hand-edited.

use crate::{
    availability::AvailabilitySnapshot,
    dates::{DateKey, DateRange, DateSet},
};

/// Expand every order window into individual days and union the results.
///
/// Overlapping orders collapse naturally. A window whose end precedes its
/// start is logged and skipped on its own; one corrupt order never aborts
/// derivation for the whole listing.
#[must_use]
pub fn derive_booked<I>(windows: I) -> DateSet
where
    I: IntoIterator<Item = (DateKey, DateKey)>,
{
    let mut booked = DateSet::new();

    for (start, end) in windows {
        match DateRange::new(start, end) {
            Ok(range) => booked.extend(range.days()),
            Err(error) => {
                tracing::warn!(%error, "skipping malformed booking window");
            }
        }
    }

    booked
}

/// Rebuild a snapshot around a freshly derived booked set.
///
/// The returned snapshot carries `booked` verbatim, with `available` and
/// `excluded` each reduced by set difference so the disjointness guarantees
/// hold even when stale persisted data overlapped. Idempotent.
#[must_use]
pub fn reconcile(snapshot: &AvailabilitySnapshot, booked: DateSet) -> AvailabilitySnapshot {
    snapshot.with_booked(booked)
}
