//! Sexagenary cycle engine: stems, branches, pillars and their derivation.
//!
//! This crate provides:
//! - Closed enumerations for the 10 heavenly stems, 12 earthly branches,
//!   5 elements and yin/yang polarity, with their fixed association tables
//! - `Pillar`, a stem/branch pair addressed by its 60-cycle index
//! - Pure derivation of year/month/day/hour pillars from a civil instant,
//!   calibrated against a single pinned reference day
//! - Void-branch (kongwang) lookup from the day pillar
//!
//! Everything here is cycle arithmetic and table lookups; the astronomical
//! inputs (Lichun, jie terms) are passed in from the solvers.

pub mod engine;
pub mod error;
pub mod ganzhi;
pub mod pillar;
pub mod policy;

pub use engine::{
    DAY_PILLAR_REFERENCE_DAY_NUMBER, DAY_PILLAR_REFERENCE_INDEX, YEAR_PILLAR_REFERENCE_YEAR,
    day_pillar, hour_branch, hour_pillar, month_pillar, void_branches, year_pillar,
};
pub use error::PillarError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, Element, Polarity, Stem,
};
pub use pillar::{FourPillars, Pillar, SEXAGENARY_NAMES};
pub use policy::{DayBoundaryPolicy, ZiHourPolicy};
