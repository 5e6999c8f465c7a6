//! Error type for the almanac facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_calendar::CalendarError;
use ganzhi_ephem::EphemerisError;
use ganzhi_pillars::PillarError;
use ganzhi_search::SearchError;
use ganzhi_time::TimeError;

/// Unified error surface of the facade. Every variant is unrecoverable at
/// this layer and propagates unchanged; nothing is retried and no partial
/// pillars are returned.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The almanac configuration failed validation.
    InvalidConfig(&'static str),
    Time(TimeError),
    Ephemeris(EphemerisError),
    Search(SearchError),
    Calendar(CalendarError),
    Pillar(PillarError),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid almanac config: {msg}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Ephemeris(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Pillar(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AlmanacError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(_) => None,
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Pillar(e) => Some(e),
        }
    }
}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for AlmanacError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<SearchError> for AlmanacError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CalendarError> for AlmanacError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<PillarError> for AlmanacError {
    fn from(e: PillarError) -> Self {
        Self::Pillar(e)
    }
}
