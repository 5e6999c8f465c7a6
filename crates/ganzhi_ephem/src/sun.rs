//! Low-precision solar theory (Meeus "Astronomical Algorithms" ch. 25).
//!
//! Apparent geocentric longitude good to ~0.01 deg over 1600-2400, which is
//! ample for locating solar terms: the Sun moves one degree per day, so the
//! induced timing error stays under a few minutes.

/// Julian centuries since J2000.0.
fn centuries(jd: f64) -> f64 {
    (jd - 2_451_545.0) / 36_525.0
}

/// Geometric mean longitude of the Sun in degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    (280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t).rem_euclid(360.0)
}

/// Mean anomaly of the Sun in degrees.
fn mean_anomaly_deg(t: f64) -> f64 {
    (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).rem_euclid(360.0)
}

/// Eccentricity of Earth's orbit.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Equation of center in degrees.
fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, [0, 360).
///
/// Includes the nutation-and-aberration correction referred to the true
/// equinox of date.
pub fn apparent_longitude_deg(jd_ut: f64) -> f64 {
    apparent_longitude_and_distance(jd_ut).0
}

/// Apparent longitude (degrees, [0, 360)) and geocentric distance (AU).
pub fn apparent_longitude_and_distance(jd_ut: f64) -> (f64, f64) {
    let t = centuries(jd_ut);
    let l0 = mean_longitude_deg(t);
    let m_deg = mean_anomaly_deg(t);
    let c = equation_of_center_deg(t, m_deg);

    let true_longitude = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = (true_longitude - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0);

    let e = eccentricity(t);
    let nu = (m_deg + c).to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    (apparent, distance_au)
}
