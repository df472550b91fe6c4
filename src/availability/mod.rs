//! Availability Model
//!
//! The per-listing state: which days the admin has opened for rent, which
//! are withheld, and which are committed to confirmed bookings, plus the
//! validated transitions between those classifications.
//!
//! The three sets are kept pairwise disjoint by every mutation. Booked days
//! are derived from order data (see [`crate::bookings`]) and are never
//! directly editable.

use crate::dates::{DateKey, DateRange, DateSet};

pub mod errors;

pub use errors::AvailabilityError;

/// Classification of a single day, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    /// Covered by a confirmed booking. Overrides everything else.
    Booked,

    /// Explicitly withheld by the admin (maintenance, cleaning, repair).
    Excluded,

    /// Explicitly opened for rent.
    Available,

    /// Before the reference day and not in any explicit set.
    Past,

    /// A future day with no explicit status.
    Unmarked,
}

/// A validated state change for a single day, produced from an admin
/// gesture and applied through [`AvailabilitySnapshot::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Make the day available for rent.
    Open(DateKey),

    /// Withhold the day from rent.
    Withhold(DateKey),
}

impl TransitionRequest {
    /// The day this request targets.
    #[must_use]
    pub fn date(self) -> DateKey {
        match self {
            Self::Open(date) | Self::Withhold(date) => date,
        }
    }
}

/// The three-set availability state for one rentable listing.
///
/// Fields are private; `available` and `excluded` change only through the
/// transition operations below, and `booked` only through
/// [`crate::bookings::reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    available: DateSet,
    excluded: DateSet,
    booked: DateSet,
}

impl AvailabilitySnapshot {
    /// Empty snapshot, the state of a freshly created listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw sets, restoring disjointness.
    ///
    /// Stale persisted data may overlap; precedence is booked over excluded
    /// over available.
    #[must_use]
    pub fn from_sets(available: DateSet, excluded: DateSet, booked: DateSet) -> Self {
        let excluded = excluded.difference(&booked);
        let available = available.difference(&booked).difference(&excluded);

        Self {
            available,
            excluded,
            booked,
        }
    }

    /// Days explicitly opened for rent.
    #[must_use]
    pub fn available(&self) -> &DateSet {
        &self.available
    }

    /// Days explicitly withheld.
    #[must_use]
    pub fn excluded(&self) -> &DateSet {
        &self.excluded
    }

    /// Days covered by at least one confirmed booking.
    #[must_use]
    pub fn booked(&self) -> &DateSet {
        &self.booked
    }

    /// Classify a day relative to the given reference day.
    ///
    /// First match wins: booked, excluded, available, past, unmarked. The
    /// reference day is injected rather than read from the wall clock so
    /// classification stays pure.
    #[must_use]
    pub fn status(&self, date: DateKey, today: DateKey) -> DateStatus {
        if self.booked.contains(date) {
            DateStatus::Booked
        } else if self.excluded.contains(date) {
            DateStatus::Excluded
        } else if self.available.contains(date) {
            DateStatus::Available
        } else if date < today {
            DateStatus::Past
        } else {
            DateStatus::Unmarked
        }
    }

    /// Apply a transition request against the day's current classification.
    ///
    /// Unmarked and excluded days open; available days withhold. Requests
    /// against booked or past days are rejected and leave the snapshot
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::BookedDateImmutable`] or
    /// [`AvailabilityError::PastDateImmutable`] for days that cannot be
    /// edited.
    pub fn apply(
        &mut self,
        request: TransitionRequest,
        today: DateKey,
    ) -> Result<(), AvailabilityError> {
        let date = request.date();

        match self.status(date, today) {
            DateStatus::Booked => return Err(AvailabilityError::BookedDateImmutable(date)),
            DateStatus::Past => return Err(AvailabilityError::PastDateImmutable(date)),
            DateStatus::Available | DateStatus::Excluded | DateStatus::Unmarked => {}
        }

        match request {
            TransitionRequest::Open(date) => {
                self.excluded.remove(date);
                self.available.insert(date);
            }
            TransitionRequest::Withhold(date) => {
                self.available.remove(date);
                self.excluded.insert(date);
            }
        }

        Ok(())
    }

    /// Open every day in the range that has no explicit status yet.
    ///
    /// Days already excluded are skipped rather than overwritten, so an
    /// admin can pre-exclude a day before generating the surrounding range.
    /// Booked days are likewise skipped. Idempotent.
    pub fn apply_available_range(&mut self, range: &DateRange) {
        for day in range.days() {
            if self.excluded.contains(day) || self.booked.contains(day) {
                continue;
            }

            self.available.insert(day);
        }
    }

    /// Exclude a single day scoped to a generation range.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::OutOfRange`] if the day is not within
    /// the range, [`AvailabilityError::AlreadyExcluded`] if it is already
    /// withheld, and [`AvailabilityError::BookedDateImmutable`] if it is
    /// covered by a booking.
    pub fn exclude_within_range(
        &mut self,
        date: DateKey,
        range: &DateRange,
    ) -> Result<(), AvailabilityError> {
        if !range.contains(date) {
            return Err(AvailabilityError::OutOfRange {
                date,
                range: *range,
            });
        }

        if self.booked.contains(date) {
            return Err(AvailabilityError::BookedDateImmutable(date));
        }

        if self.excluded.contains(date) {
            return Err(AvailabilityError::AlreadyExcluded(date));
        }

        self.available.remove(date);
        self.excluded.insert(date);

        Ok(())
    }

    /// Retract a day from the available set. Idempotent.
    pub fn remove_from_available(&mut self, date: DateKey) {
        self.available.remove(date);
    }

    /// Retract a day from the excluded set. Idempotent.
    pub fn remove_from_excluded(&mut self, date: DateKey) {
        self.excluded.remove(date);
    }

    /// Replace the derived booked set, subtracting it from the admin sets.
    ///
    /// Only [`crate::bookings::reconcile`] calls this; it is the single
    /// path by which `booked` changes.
    pub(crate) fn with_booked(&self, booked: DateSet) -> Self {
        Self {
            available: self.available.difference(&booked),
            excluded: self.excluded.difference(&booked),
            booked,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::dates::InvalidDateError;

    use super::*;

    fn day(text: &str) -> Result<DateKey, InvalidDateError> {
        DateKey::from_iso(text)
    }

    fn set(texts: &[&str]) -> Result<DateSet, InvalidDateError> {
        texts.iter().map(|text| DateKey::from_iso(text)).collect()
    }

    fn disjoint(snapshot: &AvailabilitySnapshot) -> bool {
        !snapshot.available().intersects(snapshot.excluded())
            && !snapshot.available().intersects(snapshot.booked())
            && !snapshot.excluded().intersects(snapshot.booked())
    }

    #[test]
    fn new_snapshot_is_empty() {
        let snapshot = AvailabilitySnapshot::new();

        assert!(snapshot.available().is_empty());
        assert!(snapshot.excluded().is_empty());
        assert!(snapshot.booked().is_empty());
    }

    #[test]
    fn from_sets_restores_precedence_on_overlap() -> TestResult {
        let snapshot = AvailabilitySnapshot::from_sets(
            set(&["2024-01-10", "2024-01-11", "2024-01-12"])?,
            set(&["2024-01-11", "2024-01-13"])?,
            set(&["2024-01-12", "2024-01-13"])?,
        );

        assert_eq!(snapshot.available(), &set(&["2024-01-10"])?);
        assert_eq!(snapshot.excluded(), &set(&["2024-01-11"])?);
        assert_eq!(snapshot.booked(), &set(&["2024-01-12", "2024-01-13"])?);
        assert!(disjoint(&snapshot), "sets must be pairwise disjoint");

        Ok(())
    }

    #[test]
    fn status_follows_precedence_order() -> TestResult {
        let snapshot = AvailabilitySnapshot::from_sets(
            set(&["2024-06-10"])?,
            set(&["2024-06-11"])?,
            set(&["2024-06-12"])?,
        );
        let today = day("2024-06-01")?;

        assert_eq!(snapshot.status(day("2024-06-12")?, today), DateStatus::Booked);
        assert_eq!(
            snapshot.status(day("2024-06-11")?, today),
            DateStatus::Excluded
        );
        assert_eq!(
            snapshot.status(day("2024-06-10")?, today),
            DateStatus::Available
        );
        assert_eq!(snapshot.status(day("2024-05-20")?, today), DateStatus::Past);
        assert_eq!(
            snapshot.status(day("2024-06-20")?, today),
            DateStatus::Unmarked
        );

        Ok(())
    }

    #[test]
    fn explicit_status_wins_over_past_classification() -> TestResult {
        // A day before the reference day but in an explicit set keeps its
        // explicit classification.
        let snapshot =
            AvailabilitySnapshot::from_sets(set(&["2024-01-02"])?, DateSet::new(), DateSet::new());
        let today = day("2024-06-01")?;

        assert_eq!(
            snapshot.status(day("2024-01-02")?, today),
            DateStatus::Available
        );

        Ok(())
    }

    #[test]
    fn open_then_withhold_then_open_cycles_a_day() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let today = day("2024-01-01")?;
        let date = day("2024-01-15")?;

        snapshot.apply(TransitionRequest::Open(date), today)?;
        assert_eq!(snapshot.status(date, today), DateStatus::Available);

        snapshot.apply(TransitionRequest::Withhold(date), today)?;
        assert_eq!(snapshot.status(date, today), DateStatus::Excluded);

        snapshot.apply(TransitionRequest::Open(date), today)?;
        assert_eq!(snapshot.status(date, today), DateStatus::Available);

        assert!(disjoint(&snapshot), "sets must stay disjoint");

        Ok(())
    }

    #[test]
    fn apply_rejects_booked_days_unchanged() -> TestResult {
        let mut snapshot =
            AvailabilitySnapshot::from_sets(DateSet::new(), DateSet::new(), set(&["2024-01-15"])?);
        let before = snapshot.clone();
        let today = day("2024-01-01")?;

        let result = snapshot.apply(TransitionRequest::Open(day("2024-01-15")?), today);

        assert!(
            matches!(result, Err(AvailabilityError::BookedDateImmutable(_))),
            "expected BookedDateImmutable, got {result:?}"
        );
        assert_eq!(snapshot, before, "rejected transition must not mutate");

        Ok(())
    }

    #[test]
    fn apply_rejects_past_days_unchanged() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let before = snapshot.clone();

        let result = snapshot.apply(
            TransitionRequest::Open(day("2024-01-15")?),
            day("2024-02-01")?,
        );

        assert!(
            matches!(result, Err(AvailabilityError::PastDateImmutable(_))),
            "expected PastDateImmutable, got {result:?}"
        );
        assert_eq!(snapshot, before, "rejected transition must not mutate");

        Ok(())
    }

    #[test]
    fn apply_available_range_skips_excluded_and_booked_days() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::from_sets(
            DateSet::new(),
            set(&["2024-02-03"])?,
            set(&["2024-02-04"])?,
        );
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        snapshot.apply_available_range(&range);

        assert_eq!(
            snapshot.available(),
            &set(&["2024-02-01", "2024-02-02", "2024-02-05"])?
        );
        assert!(disjoint(&snapshot), "sets must stay disjoint");

        Ok(())
    }

    #[test]
    fn apply_available_range_is_idempotent() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        snapshot.apply_available_range(&range);
        let once = snapshot.clone();

        snapshot.apply_available_range(&range);

        assert_eq!(snapshot, once);

        Ok(())
    }

    #[test]
    fn exclude_within_range_moves_day_out_of_available() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        snapshot.apply_available_range(&range);
        snapshot.exclude_within_range(day("2024-02-03")?, &range)?;

        assert!(!snapshot.available().contains(day("2024-02-03")?));
        assert!(snapshot.excluded().contains(day("2024-02-03")?));

        Ok(())
    }

    #[test]
    fn exclude_within_range_rejects_day_outside_range() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        let result = snapshot.exclude_within_range(day("2024-02-10")?, &range);

        assert!(
            matches!(result, Err(AvailabilityError::OutOfRange { .. })),
            "expected OutOfRange, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn exclude_within_range_rejects_double_exclusion() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::new();
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        snapshot.exclude_within_range(day("2024-02-03")?, &range)?;
        let result = snapshot.exclude_within_range(day("2024-02-03")?, &range);

        assert!(
            matches!(result, Err(AvailabilityError::AlreadyExcluded(_))),
            "expected AlreadyExcluded, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn exclude_within_range_rejects_booked_day() -> TestResult {
        let mut snapshot =
            AvailabilitySnapshot::from_sets(DateSet::new(), DateSet::new(), set(&["2024-02-03"])?);
        let range = DateRange::new(day("2024-02-01")?, day("2024-02-05")?)?;

        let result = snapshot.exclude_within_range(day("2024-02-03")?, &range);

        assert!(
            matches!(result, Err(AvailabilityError::BookedDateImmutable(_))),
            "expected BookedDateImmutable, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn retractions_are_idempotent() -> TestResult {
        let mut snapshot = AvailabilitySnapshot::from_sets(
            set(&["2024-02-01"])?,
            set(&["2024-02-02"])?,
            DateSet::new(),
        );

        snapshot.remove_from_available(day("2024-02-01")?);
        snapshot.remove_from_available(day("2024-02-01")?);
        snapshot.remove_from_excluded(day("2024-02-02")?);
        snapshot.remove_from_excluded(day("2024-02-02")?);

        assert!(snapshot.available().is_empty());
        assert!(snapshot.excluded().is_empty());

        Ok(())
    }
}
