//! Astronomical event solvers: solar-term crossings and Sun-Moon syzygies.
//!
//! This crate provides:
//! - Newton-Raphson solver for the instant the Sun reaches a target
//!   ecliptic longitude (the 24 solar terms)
//! - Newton-Raphson solver for new moons (Sun-Moon conjunction)
//! - Year-level enumeration of both event families
//!
//! Both solvers iterate on an angular difference normalized to
//! (-180, +180] degrees so the wrap-around at 0/360 never produces a
//! spurious root.

pub mod error;
mod search_util;
pub mod solar_term;
pub mod solar_term_types;
pub mod syzygy;
pub mod syzygy_types;

pub use error::SearchError;
pub use solar_term::{
    solar_longitude_at, solar_terms_for_year, solve_solar_longitude, solve_solar_term,
};
pub use solar_term_types::{ALL_SOLAR_TERMS, SolarTerm, SolarTermConfig, SolarTermEvent};
pub use syzygy::{elongation_at, new_moons_spanning, next_new_moon};
pub use syzygy_types::{SYNODIC_MONTH_DAYS, SyzygyConfig, SyzygyEvent};
