//! Julian Day ↔ calendar conversions (Meeus, "Astronomical Algorithms" ch. 7).
//!
//! Dates on or after 1582-10-15 are treated as Gregorian, earlier dates as
//! Julian. Day fractions carry the time of day; JD 0.5 boundaries fall at
//! civil midnight.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT, used here as UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Gregorian calendar day, as (year, month, day_frac).
const GREGORIAN_START: (i32, u32, f64) = (1582, 10, 15.0);

/// Convert a calendar date to a Julian Day.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// so `17.75` means 18:00 on the 17th.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (mut y, mut m) = (year, month as i32);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let gregorian = (year, month, day_frac) >= GREGORIAN_START;
    let b = if gregorian {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    } else {
        0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac
        + b as f64
        - 1524.5
}

/// Convert a Julian Day back to a calendar date.
///
/// Returns `(year, month, day_frac)`; the inverse of [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian centuries since J2000.0 for a given Julian Day.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
