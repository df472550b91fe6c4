//! Dates
//!
//! Calendar-day keys, inclusive ranges, ordered day sets, and the
//! comma-separated text form used by the admin screens.

pub mod key;
pub mod listing;
pub mod range;
pub mod set;

pub use key::{DateKey, InvalidDateError};
pub use listing::{ListParseError, ListParseMode, format_list, parse_list};
pub use range::{DateRange, Days, InvalidRangeError};
pub use set::DateSet;
