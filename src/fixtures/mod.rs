//! Fixtures
//!
//! YAML scenario sets used by the conformance tests: named listings with
//! their persisted date lists and confirmed bookings, loaded through the
//! same records boundary production data crosses.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    availability::AvailabilitySnapshot,
    records::{self, ListingRecord, RecordError},
};

pub mod listings;

pub use listings::{BookingFixture, ListingFixture, ListingsFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Listing not found
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Record boundary error
    #[error("Failed to load listing record")]
    Record(#[from] RecordError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded listing fixtures keyed by name
    listings: FxHashMap<String, ListingFixture>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            listings: FxHashMap::default(),
        }
    }

    /// Load listings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListingsFixture = serde_norway::from_str(&contents)?;

        self.listings.extend(fixture.listings);

        Ok(self)
    }

    /// Load a complete fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_listings(name)?;

        Ok(fixture)
    }

    /// Get a listing fixture by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found.
    pub fn listing(&self, key: &str) -> Result<&ListingFixture, FixtureError> {
        self.listings
            .get(key)
            .ok_or_else(|| FixtureError::ListingNotFound(key.to_string()))
    }

    /// Build the external record for a listing
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found.
    pub fn record(&self, key: &str) -> Result<ListingRecord, FixtureError> {
        Ok(ListingRecord::from(self.listing(key)?))
    }

    /// Load a listing through the records boundary into a reconciled snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found or its record does not
    /// normalize.
    pub fn snapshot(&self, key: &str) -> Result<AvailabilitySnapshot, FixtureError> {
        Ok(records::load_snapshot(&self.record(key)?)?)
    }

    /// Number of loaded listings
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether any listings are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
