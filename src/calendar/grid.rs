//! Month Grids
//!
//! A month laid out as Sunday-first weeks of seven slots. Slots before the
//! month's starting weekday and after its last day are empty; occupied
//! slots carry the day's computed status.

use smallvec::SmallVec;

use crate::{
    availability::{AvailabilitySnapshot, DateStatus},
    calendar::MonthCursor,
    dates::{DateKey, InvalidDateError},
};

/// One occupied slot of a rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// The day this cell represents.
    pub date: DateKey,

    /// Classification of the day at render time.
    pub status: DateStatus,
}

/// A rendered month: whole weeks of seven slots each.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    cursor: MonthCursor,
    weeks: SmallVec<[[Option<MonthCell>; 7]; 6]>,
}

impl MonthGrid {
    /// Lay out the cursor's month over the given snapshot.
    ///
    /// Every day is classified relative to `today`, the same reference-day
    /// injection used by
    /// [`AvailabilitySnapshot::status`](crate::availability::AvailabilitySnapshot::status).
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateError`] if the cursor's month falls outside
    /// the supported calendar.
    pub fn render(
        cursor: MonthCursor,
        snapshot: &AvailabilitySnapshot,
        today: DateKey,
    ) -> Result<Self, InvalidDateError> {
        let first = DateKey::from_calendar_date(cursor.year(), cursor.month(), 1)?;

        let mut slots: Vec<Option<MonthCell>> = Vec::with_capacity(42);

        for _ in 0..first.weekday().to_sunday_zero_offset() {
            slots.push(None);
        }

        for day in 1..=first.days_in_month() {
            let date = DateKey::from_calendar_date(cursor.year(), cursor.month(), day)?;

            slots.push(Some(MonthCell {
                date,
                status: snapshot.status(date, today),
            }));
        }

        while slots.len() % 7 != 0 {
            slots.push(None);
        }

        let mut weeks = SmallVec::new();

        for chunk in slots.chunks_exact(7) {
            if let Ok(week) = <[Option<MonthCell>; 7]>::try_from(chunk) {
                weeks.push(week);
            }
        }

        Ok(Self { cursor, weeks })
    }

    /// The cursor this grid was rendered for.
    #[must_use]
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The weeks of the month, Sunday first.
    #[must_use]
    pub fn weeks(&self) -> &[[Option<MonthCell>; 7]] {
        &self.weeks
    }

    /// The cell at the given week row and weekday column, if occupied.
    #[must_use]
    pub fn cell(&self, week: usize, slot: usize) -> Option<MonthCell> {
        self.weeks
            .get(week)
            .and_then(|row| row.get(slot))
            .copied()
            .flatten()
    }

    /// The cell for a specific day of the month, if the grid contains it.
    #[must_use]
    pub fn cell_for(&self, date: DateKey) -> Option<MonthCell> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .find(|cell| cell.date == date)
            .copied()
    }
}
