//! Date List Text Form
//!
//! The comma-separated text rendering of a [`DateSet`], matching the legacy
//! admin text-field format. Parsing is mode-switched: lenient for
//! interactive free-text echo, strict for anything destined for
//! persistence.

use thiserror::Error;

use crate::dates::{
    key::{DateKey, InvalidDateError},
    set::DateSet,
};

/// How [`parse_list`] treats tokens that are not valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListParseMode {
    /// Drop invalid tokens, logging each at debug level.
    ///
    /// Mirrors the storefront's historical free-text behavior; only
    /// appropriate for interactive echo, never for values about to be
    /// persisted.
    Lenient,

    /// Fail on the first invalid token.
    Strict,
}

/// Error produced by strict-mode list parsing.
#[derive(Debug, Error)]
#[error("invalid date {token:?} in date list")]
pub struct ListParseError {
    /// The offending token, as submitted.
    pub token: String,

    /// Why the token was rejected.
    #[source]
    pub source: InvalidDateError,
}

/// Render a set as a comma-joined list of canonical dates, ascending.
#[must_use]
pub fn format_list(days: &DateSet) -> String {
    let rendered: Vec<String> = days.iter().map(|day| day.to_string()).collect();

    rendered.join(",")
}

/// Parse a comma-separated list of dates.
///
/// Tokens are trimmed and empty tokens dropped before parsing.
///
/// # Errors
///
/// In [`ListParseMode::Strict`], returns a [`ListParseError`] for the first
/// token that is not a valid canonical date. Lenient mode never fails.
pub fn parse_list(text: &str, mode: ListParseMode) -> Result<DateSet, ListParseError> {
    let mut days = DateSet::new();

    for token in text.split(',') {
        let token = token.trim();

        if token.is_empty() {
            continue;
        }

        match DateKey::from_iso(token) {
            Ok(day) => days.insert(day),
            Err(source) => match mode {
                ListParseMode::Strict => {
                    return Err(ListParseError {
                        token: token.to_string(),
                        source,
                    });
                }
                ListParseMode::Lenient => {
                    tracing::debug!(token, error = %source, "dropping invalid date list token");
                }
            },
        }
    }

    Ok(days)
}
