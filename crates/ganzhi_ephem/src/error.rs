//! Error types for ephemeris providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Body;

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider cannot resolve a position for this body/instant
    /// (e.g. the instant lies outside its table or series range).
    Unavailable { body: Body, reason: &'static str },
    /// The body is not carried by this provider at all.
    UnsupportedBody(Body),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { body, reason } => {
                write!(f, "ephemeris unavailable for {}: {reason}", body.name())
            }
            Self::UnsupportedBody(body) => {
                write!(f, "body {} not supported by this provider", body.name())
            }
        }
    }
}

impl Error for EphemerisError {}
