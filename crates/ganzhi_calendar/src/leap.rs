//! Zhongqi detection: does a lunar month contain a multiple-of-30-degree
//! solar-longitude crossing?
//!
//! The test compares the Sun's longitude at the month's two bounding new
//! moons; any 30-degree multiple inside that (wrap-aware) arc was crossed
//! during the month. No additional root-finding is needed.

use ganzhi_ephem::Ephemeris;
use ganzhi_search::{SearchError, solar_longitude_at};

/// Whether `target` lies within the longitude arc swept from `start` to
/// `end`, treating the arc as moving forward through the 0/360 wrap.
/// The bound is half-open at the start: a crossing exactly at the opening
/// new moon belongs to the previous month.
fn longitude_in_arc(target: f64, start: f64, end: f64) -> bool {
    if start <= end {
        start < target && target <= end
    } else {
        target > start || target <= end
    }
}

/// The zhongqi ordinal (`longitude / 30`, 0..=11) crossed during the month
/// `[start_jd, end_jd)`, or `None` if the month contains no zhongqi.
pub fn zhongqi_in_month<E: Ephemeris>(
    eph: &E,
    start_jd: f64,
    end_jd: f64,
) -> Result<Option<u8>, SearchError> {
    let start_lon = solar_longitude_at(eph, start_jd)?;
    let end_lon = solar_longitude_at(eph, end_jd)?;

    for i in 0..12u8 {
        if longitude_in_arc(f64::from(i) * 30.0, start_lon, end_lon) {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Whether the month bounded by `[start_jd, end_jd)` is intercalary.
pub fn is_leap_month<E: Ephemeris>(
    eph: &E,
    start_jd: f64,
    end_jd: f64,
) -> Result<bool, SearchError> {
    Ok(zhongqi_in_month(eph, start_jd, end_jd)?.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_ephem::AnalyticEphemeris;
    use ganzhi_search::{SyzygyConfig, new_moons_spanning};
    use ganzhi_time::calendar_to_jd;

    #[test]
    fn arc_simple_interval() {
        assert!(longitude_in_arc(30.0, 20.0, 45.0));
        assert!(!longitude_in_arc(30.0, 31.0, 45.0));
        assert!(!longitude_in_arc(30.0, 20.0, 29.0));
        // Half-open at the start
        assert!(!longitude_in_arc(30.0, 30.0, 45.0));
        assert!(longitude_in_arc(45.0, 30.0, 45.0));
    }

    #[test]
    fn arc_wraps_through_zero() {
        assert!(longitude_in_arc(0.0, 350.0, 15.0));
        assert!(longitude_in_arc(355.0, 350.0, 15.0));
        assert!(longitude_in_arc(10.0, 350.0, 15.0));
        assert!(!longitude_in_arc(180.0, 350.0, 15.0));
    }

    #[test]
    fn leap_month_2023_has_no_zhongqi() {
        // The month opened by the new moon of 2023-03-21/22 is the
        // intercalary second month of lunar 2023.
        let eph = AnalyticEphemeris::new();
        let config = SyzygyConfig::default();
        let moons = new_moons_spanning(
            &eph,
            calendar_to_jd(2023, 3, 1.0),
            calendar_to_jd(2023, 5, 15.0),
            &config,
        )
        .unwrap();
        assert!(moons.len() >= 3);
        let leap = is_leap_month(&eph, moons[0].jd_ut, moons[1].jd_ut).unwrap();
        assert!(leap, "expected the 2023 leap month to contain no zhongqi");
        // The following month regains a zhongqi (Guyu, 30 deg)
        let next = zhongqi_in_month(&eph, moons[1].jd_ut, moons[2].jd_ut).unwrap();
        assert_eq!(next, Some(1));
    }

    #[test]
    fn ordinary_month_has_zhongqi() {
        let eph = AnalyticEphemeris::new();
        let config = SyzygyConfig::default();
        let moons = new_moons_spanning(
            &eph,
            calendar_to_jd(2024, 1, 1.0),
            calendar_to_jd(2024, 3, 15.0),
            &config,
        )
        .unwrap();
        let z = zhongqi_in_month(&eph, moons[0].jd_ut, moons[1].jd_ut).unwrap();
        assert!(z.is_some());
    }
}
