//! Error types for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_ephem::EphemerisError;

/// Errors from the solar-term and syzygy solvers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A solver config failed validation.
    InvalidConfig(&'static str),
    /// The iteration cap was reached before the residual fell under
    /// tolerance. Carries the last estimate for diagnostics; no "good
    /// enough" result is ever returned silently.
    Convergence {
        last_estimate_jd: f64,
        residual_deg: f64,
    },
    /// The underlying ephemeris provider failed; propagated unchanged.
    Ephemeris(EphemerisError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::Convergence {
                last_estimate_jd,
                residual_deg,
            } => write!(
                f,
                "solver failed to converge (last estimate JD {last_estimate_jd:.6}, \
                 residual {residual_deg:.6} deg)"
            ),
            Self::Ephemeris(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
