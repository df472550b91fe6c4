//! Listing Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::records::{BookingWindowRecord, ListingRecord};

/// Wrapper for listings in YAML
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Map of listing key -> listing fixture
    pub listings: FxHashMap<String, ListingFixture>,
}

/// Listing Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct ListingFixture {
    /// Days opened for rent, as date-or-timestamp strings
    #[serde(default)]
    pub available_dates: Vec<String>,

    /// Days withheld from rent
    #[serde(default)]
    pub excluded_dates: Vec<String>,

    /// Confirmed booking windows against the listing
    #[serde(default)]
    pub bookings: Vec<BookingFixture>,
}

/// Booking window fixture
#[derive(Debug, Clone, Deserialize)]
pub struct BookingFixture {
    /// First rented day
    pub start_date: String,

    /// Last rented day, inclusive
    pub end_date: String,
}

impl From<&ListingFixture> for ListingRecord {
    fn from(fixture: &ListingFixture) -> Self {
        Self {
            available_dates: fixture.available_dates.clone(),
            excluded_dates: fixture.excluded_dates.clone(),
            booked_dates: fixture
                .bookings
                .iter()
                .map(|booking| BookingWindowRecord {
                    start_date: booking.start_date.clone(),
                    end_date: booking.end_date.clone(),
                })
                .collect(),
        }
    }
}
