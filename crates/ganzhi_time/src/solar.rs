//! Equation of time and true-solar-time correction.
//!
//! The equation of time follows Meeus "Astronomical Algorithms" ch. 28,
//! evaluated from the Sun's mean orbital elements. True solar time combines
//! the longitude offset from the standard meridian (4 minutes per degree)
//! with the equation of time.

use crate::civil::CivilDateTime;
use crate::julian::jd_to_centuries;

/// Equation of time in minutes (apparent minus mean solar time).
///
/// Positive when the sundial runs ahead of the clock (early November),
/// negative when it lags (mid February). Magnitude stays below ~17 minutes.
pub fn equation_of_time_minutes(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    // Geometric mean longitude and mean anomaly of the Sun (deg)
    let l0 = (280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t).rem_euclid(360.0);
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t)
        .rem_euclid(360.0)
        .to_radians();

    // Eccentricity of Earth's orbit and mean obliquity of the ecliptic
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let eps = (23.439_291 - 0.013_004_2 * t).to_radians();

    let y = (eps / 2.0).tan().powi(2);
    let l0r = l0.to_radians();

    let eq = y * (2.0 * l0r).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0r).cos()
        - 0.5 * y * y * (4.0 * l0r).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    // Radians → degrees of hour angle → minutes of time (4 min per degree)
    eq.to_degrees() * 4.0
}

/// Total correction from local standard time to local apparent solar time,
/// in minutes: longitude offset from the standard meridian plus the
/// equation of time.
pub fn true_solar_offset_minutes(jd: f64, longitude_deg: f64, standard_meridian_deg: f64) -> f64 {
    (longitude_deg - standard_meridian_deg) * 4.0 + equation_of_time_minutes(jd)
}

/// Local apparent (true) solar time for a civil clock reading at a given
/// geographic longitude (degrees east positive).
///
/// The standard meridian is taken from the civil offset (`offset × 15°`).
/// The result is a clock reading carrying the same UTC offset field; it is
/// a sundial time, not a timezone time.
pub fn apparent_solar_time(civil: &CivilDateTime, longitude_deg: f64) -> CivilDateTime {
    let jd = civil.to_jd_utc();
    let offset_min =
        true_solar_offset_minutes(jd, longitude_deg, civil.standard_meridian_deg());
    CivilDateTime::from_jd_utc(jd + offset_min / 1440.0, civil.utc_offset_hours)
}
