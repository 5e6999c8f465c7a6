//! Civil calendar date/time with an explicit UTC offset.
//!
//! `CivilDateTime` is the canonical input type of the engine. Construction
//! validates every field; out-of-range input is rejected with
//! [`TimeError::InvalidCalendarDate`], never clamped.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Civil date/time with sub-second precision and an explicit UTC offset.
///
/// The fields are local civil time; `utc_offset_hours` relates them to UT
/// (JST is `+9.0`). Offsets may be fractional (e.g. `+5.75` for Nepal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub utc_offset_hours: f64,
}

impl CivilDateTime {
    /// Construct a validated civil date/time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidCalendarDate(format!(
                "month {month} out of range 1-12"
            )));
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(TimeError::InvalidCalendarDate(format!(
                "day {day} out of range 1-{max_day} for {year}-{month:02}"
            )));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidCalendarDate(format!(
                "hour {hour} out of range 0-23"
            )));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidCalendarDate(format!(
                "minute {minute} out of range 0-59"
            )));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidCalendarDate(format!(
                "second {second} out of range [0, 60)"
            )));
        }
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidCalendarDate(format!(
                "UTC offset {utc_offset_hours} out of range [-14, +14]"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Convert to a Julian Day in UT.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac) - self.utc_offset_hours / 24.0
    }

    /// Convert from a Julian Day in UT back to civil time at a given offset.
    pub fn from_jd_utc(jd_utc: f64, utc_offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_utc + utc_offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Julian Day Number of the local civil date (the integer label of the
    /// day this clock reading falls in, ignoring the time fields).
    pub fn local_day_number(&self) -> i64 {
        (calendar_to_jd(self.year, self.month, self.day as f64) + 0.5).floor() as i64
    }

    /// The natural standard meridian of this offset, in degrees east.
    pub fn standard_meridian_deg(&self) -> f64 {
        self.utc_offset_hours * 15.0
    }
}

/// Number of days in a month, leap-year aware (Gregorian rule).
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let off = self.utc_offset_hours.abs();
        let off_h = off.floor() as u32;
        let off_m = ((off - off_h as f64) * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second as u32,
            sign,
            off_h,
            off_m
        )
    }
}
