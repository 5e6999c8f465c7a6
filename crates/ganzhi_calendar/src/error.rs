//! Error types for calendar assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_search::SearchError;

/// Errors from lunisolar year building and lunar-date resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// A leap-month day attribution was required but no `LeapSplitMode`
    /// was configured. Never defaulted implicitly.
    AmbiguousLeapMonthPolicy,
    /// The instant falls outside the months assembled for the year.
    DateOutsideYear { jd_ut: f64 },
    /// A required solar term was missing from the year's term list.
    MissingTerm(&'static str),
    /// An underlying solver failure; propagated unchanged.
    Search(SearchError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousLeapMonthPolicy => {
                write!(f, "leap month split requires a configured LeapSplitMode")
            }
            Self::DateOutsideYear { jd_ut } => {
                write!(f, "JD {jd_ut:.6} outside the assembled lunisolar year")
            }
            Self::MissingTerm(name) => write!(f, "missing solar term: {name}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for CalendarError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
