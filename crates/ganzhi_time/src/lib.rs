//! Civil time and Julian Day conversions for the calendrical engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions (Meeus algorithm)
//! - `CivilDateTime`, a validated civil date/time with explicit UTC offset
//! - Equation of time and true-solar-time correction

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use solar::{apparent_solar_time, equation_of_time_minutes, true_solar_offset_minutes};
