//! Error types for pillar derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from pillar derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// No jie term at or before the instant in the supplied list; the
    /// month pillar cannot be located.
    MissingJieTerm { jd_ut: f64 },
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingJieTerm { jd_ut } => {
                write!(f, "no jie term at or before JD {jd_ut:.6}")
            }
        }
    }
}

impl Error for PillarError {}
