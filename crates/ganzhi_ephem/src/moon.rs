//! Truncated lunar theory (Meeus "Astronomical Algorithms" ch. 47, ELP-2000
//! derived periodic terms).
//!
//! Carries the dominant longitude, latitude and distance terms plus the
//! planetary additives. Longitude accuracy is a few hundredths of a degree;
//! at ~12 deg/day of Sun-relative motion that bounds syzygy timing errors
//! to a handful of minutes.

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Julian centuries since J2000.0.
fn centuries(jd: f64) -> f64 {
    (jd - 2_451_545.0) / 36_525.0
}

/// Fundamental arguments of the lunar theory in degrees:
/// `[L', D, M, M', F]` — mean longitude, mean elongation, solar mean
/// anomaly, lunar mean anomaly, argument of latitude.
fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    [
        lp.rem_euclid(360.0),
        d.rem_euclid(360.0),
        m.rem_euclid(360.0),
        mp.rem_euclid(360.0),
        f.rem_euclid(360.0),
    ]
}

/// Dominant periodic terms for longitude and distance.
///
/// Each row: `[nD, nM, nM', nF, Σl, Σr]` with Σl in 1e-6 deg and Σr in
/// 1e-3 km. Source: Meeus table 47.A, largest-amplitude rows.
#[rustfmt::skip]
static LON_DIST_TERMS: [[i64; 6]; 30] = [
    //  D   M   M'  F        Σl          Σr
    [   0,  0,  1,  0,  6_288_774, -20_905_355],
    [   2,  0, -1,  0,  1_274_027,  -3_699_111],
    [   2,  0,  0,  0,    658_314,  -2_955_968],
    [   0,  0,  2,  0,    213_618,    -569_925],
    [   0,  1,  0,  0,   -185_116,      48_888],
    [   0,  0,  0,  2,   -114_332,      -3_149],
    [   2,  0, -2,  0,     58_793,     246_158],
    [   2, -1, -1,  0,     57_066,    -152_138],
    [   2,  0,  1,  0,     53_322,    -170_733],
    [   2, -1,  0,  0,     45_758,    -204_586],
    [   0,  1, -1,  0,    -40_923,    -129_620],
    [   1,  0,  0,  0,    -34_720,     108_743],
    [   0,  1,  1,  0,    -30_383,     104_755],
    [   2,  0,  0, -2,     15_327,      10_321],
    [   0,  0,  1,  2,    -12_528,           0],
    [   0,  0,  1, -2,     10_980,      79_661],
    [   4,  0, -1,  0,     10_675,     -34_782],
    [   0,  0,  3,  0,     10_034,     -23_210],
    [   4,  0, -2,  0,      8_548,     -21_636],
    [   2,  1, -1,  0,     -7_888,      24_208],
    [   2,  1,  0,  0,     -6_766,      30_824],
    [   1,  0, -1,  0,     -5_163,      -8_379],
    [   1,  1,  0,  0,      4_987,     -16_675],
    [   2, -1,  1,  0,      4_036,     -12_831],
    [   2,  0,  2,  0,      3_994,     -10_445],
    [   4,  0,  0,  0,      3_861,     -11_650],
    [   2,  0, -3,  0,      3_665,      14_403],
    [   0,  1, -2,  0,     -2_689,      -7_003],
    [   2,  0, -1,  2,     -2_602,           0],
    [   2, -1, -2,  0,      2_390,      10_056],
];

/// Dominant periodic terms for latitude.
///
/// Each row: `[nD, nM, nM', nF, Σb]` with Σb in 1e-6 deg.
/// Source: Meeus table 47.B, largest-amplitude rows.
#[rustfmt::skip]
static LAT_TERMS: [[i64; 5]; 15] = [
    //  D   M   M'  F        Σb
    [   0,  0,  0,  1,  5_128_122],
    [   0,  0,  1,  1,    280_602],
    [   0,  0,  1, -1,    277_693],
    [   2,  0,  0, -1,    173_237],
    [   2,  0, -1,  1,     55_413],
    [   2,  0, -1, -1,     46_271],
    [   2,  0,  0,  1,     32_573],
    [   0,  0,  2,  1,     17_198],
    [   2,  0,  1, -1,      9_266],
    [   0,  0,  2, -1,      8_822],
    [   2, -1,  0, -1,      8_216],
    [   2,  0, -2, -1,      4_324],
    [   2,  0,  1,  1,      4_200],
    [   2,  1,  0, -1,     -3_359],
    [   2, -1,  1, -1,      2_463],
];

/// Geocentric apparent ecliptic position of the Moon.
///
/// Returns `(longitude_deg in [0, 360), latitude_deg, distance_au)`.
pub fn position(jd_ut: f64) -> (f64, f64, f64) {
    let t = centuries(jd_ut);
    let [lp, d, m, mp, f] = fundamental_arguments_deg(t);

    // Eccentricity damping for terms involving the solar anomaly
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    // Planetary perturbation arguments (deg)
    let a1 = (119.75 + 131.849 * t).rem_euclid(360.0);
    let a2 = (53.09 + 479_264.290 * t).rem_euclid(360.0);
    let a3 = (313.45 + 481_266.484 * t).rem_euclid(360.0);

    let mut sum_l = 0.0_f64; // 1e-6 deg
    let mut sum_r = 0.0_f64; // 1e-3 km
    for row in &LON_DIST_TERMS {
        let arg = (row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp
            + row[3] as f64 * f)
            .to_radians();
        let damp = match row[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += row[4] as f64 * damp * arg.sin();
        sum_r += row[5] as f64 * damp * arg.cos();
    }
    sum_l += 3_958.0 * a1.to_radians().sin()
        + 1_962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let mut sum_b = 0.0_f64; // 1e-6 deg
    for row in &LAT_TERMS {
        let arg = (row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * mp
            + row[3] as f64 * f)
            .to_radians();
        let damp = match row[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_b += row[4] as f64 * damp * arg.sin();
    }
    sum_b += -2_235.0 * lp.to_radians().sin()
        + 382.0 * a3.to_radians().sin()
        + 175.0 * (a1 - f).to_radians().sin()
        + 175.0 * (a1 + f).to_radians().sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    // Nutation in longitude (dominant terms), for apparent place
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let nutation_deg =
        (-17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * lp.to_radians()).sin()
            + 0.21 * (2.0 * omega).sin())
            / 3600.0;

    let longitude = (lp + sum_l / 1e6 + nutation_deg).rem_euclid(360.0);
    let latitude = sum_b / 1e6;
    let distance_km = 385_000.56 + sum_r / 1e3;

    (longitude, latitude, distance_km / KM_PER_AU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // Meeus example 47.a: 1992 Apr 12.0 TD
        // λ = 133.1626, β = -3.2291, Δ = 368409.7 km
        let (lon, lat, dist) = position(2_448_724.5);
        assert!((lon - 133.16).abs() < 0.05, "lon = {lon}");
        assert!((lat - (-3.229)).abs() < 0.05, "lat = {lat}");
        assert!((dist * KM_PER_AU - 368_409.7).abs() < 500.0, "dist = {dist}");
    }

    #[test]
    fn latitude_stays_in_band() {
        for k in 0..60 {
            let (_, lat, _) = position(2_451_545.0 + k as f64 * 5.0);
            assert!(lat.abs() < 5.4, "k {k}: lat = {lat}");
        }
    }

    #[test]
    fn distance_stays_in_band() {
        for k in 0..60 {
            let (_, _, dist) = position(2_451_545.0 + k as f64 * 5.0);
            let km = dist * KM_PER_AU;
            assert!(km > 356_000.0 && km < 407_000.0, "k {k}: {km} km");
        }
    }

    #[test]
    fn new_moon_2024_jan_11() {
        // New moon 2024-01-11 11:57 UT: elongation from the Sun near zero
        let (moon_lon, _, _) = position(2_460_320.998);
        let sun_lon = crate::sun::apparent_longitude_deg(2_460_320.998);
        let mut elong = (moon_lon - sun_lon).rem_euclid(360.0);
        if elong > 180.0 {
            elong -= 360.0;
        }
        assert!(elong.abs() < 0.5, "elongation = {elong}");
    }

    #[test]
    fn full_moon_2024_jan_25() {
        // Full moon 2024-01-25 17:54 UT: elongation near 180
        let (moon_lon, _, _) = position(2_460_335.246);
        let sun_lon = crate::sun::apparent_longitude_deg(2_460_335.246);
        let elong = (moon_lon - sun_lon).rem_euclid(360.0);
        assert!((elong - 180.0).abs() < 0.5, "elongation = {elong}");
    }
}
