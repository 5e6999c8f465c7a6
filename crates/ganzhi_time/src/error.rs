//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil date/time fields are out of range. Never silently clamped.
    InvalidCalendarDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarDate(msg) => write!(f, "invalid calendar date: {msg}"),
        }
    }
}

impl Error for TimeError {}
