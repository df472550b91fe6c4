//! Date Sets
//!
//! A sorted-vector set of [`DateKey`]s. Membership uses binary search and
//! the set operations are two-pointer merge walks over the sorted storage,
//! so iteration order is always ascending.

use std::cmp::Ordering;

use crate::dates::key::DateKey;

/// An ordered set of calendar days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSet {
    days: Vec<DateKey>,
}

impl DateSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { days: Vec::new() }
    }

    /// Create a set from any sequence of days, deduplicating as needed.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = DateKey>) -> Self {
        let mut days: Vec<DateKey> = days.into_iter().collect();

        days.sort_unstable();
        days.dedup();

        Self { days }
    }

    /// Insert a day. Idempotent.
    pub fn insert(&mut self, day: DateKey) {
        if let Err(pos) = self.days.binary_search(&day) {
            self.days.insert(pos, day);
        }
    }

    /// Remove a day. Idempotent.
    pub fn remove(&mut self, day: DateKey) {
        if let Ok(pos) = self.days.binary_search(&day) {
            self.days.remove(pos);
        }
    }

    /// Whether the set contains the given day.
    #[must_use]
    pub fn contains(&self, day: DateKey) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Iterate the days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.iter().copied()
    }

    /// Days present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let capacity = self.days.len().saturating_add(other.days.len());
        let mut result = Vec::with_capacity(capacity);
        let mut left = self.days.iter().peekable();
        let mut right = other.days.iter().peekable();

        while let (Some(left_day), Some(right_day)) = (left.peek(), right.peek()) {
            match left_day.cmp(right_day) {
                Ordering::Less => result.extend(left.next().copied()),
                Ordering::Greater => result.extend(right.next().copied()),
                Ordering::Equal => {
                    result.extend(left.next().copied());
                    right.next();
                }
            }
        }

        result.extend(left.copied());
        result.extend(right.copied());

        Self { days: result }
    }

    /// Days present in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Vec::with_capacity(self.days.len());
        let mut right = other.days.iter().peekable();

        for day in &self.days {
            while right.next_if(|other_day| *other_day < day).is_some() {}

            if right.peek() != Some(&day) {
                result.push(*day);
            }
        }

        Self { days: result }
    }

    /// Whether the two sets share at least one day.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let mut left = self.days.iter();
        let mut right = other.days.iter();
        let mut left_day = left.next();
        let mut right_day = right.next();

        while let (Some(left_ref), Some(right_ref)) = (left_day, right_day) {
            match left_ref.cmp(right_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_day = left.next(),
                Ordering::Greater => right_day = right.next(),
            }
        }

        false
    }
}

impl FromIterator<DateKey> for DateSet {
    fn from_iter<I: IntoIterator<Item = DateKey>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}

impl Extend<DateKey> for DateSet {
    fn extend<I: IntoIterator<Item = DateKey>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl<'a> IntoIterator for &'a DateSet {
    type Item = DateKey;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, DateKey>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter().copied()
    }
}
