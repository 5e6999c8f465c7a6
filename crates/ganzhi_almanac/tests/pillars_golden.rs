//! Golden-value tests for the facade: four pillars and lunar dates for
//! known instants, policy behavior, and failure propagation.

use ganzhi_almanac::{Almanac, AlmanacConfig, AlmanacError};
use ganzhi_calendar::LeapSplitMode;
use ganzhi_ephem::AnalyticEphemeris;
use ganzhi_pillars::{Branch, DayBoundaryPolicy};
use ganzhi_search::SearchError;
use ganzhi_time::CivilDateTime;

fn almanac() -> Almanac<AnalyticEphemeris> {
    Almanac::new(AnalyticEphemeris::new(), AlmanacConfig::default()).unwrap()
}

fn jst(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> CivilDateTime {
    CivilDateTime::new(y, m, d, hh, mm, 0.0, 9.0).unwrap()
}

#[test]
fn millennium_noon_pillars() {
    // 2000-01-01 12:00 JST: Ji-Mao year (pre-Lichun), Bing-Zi month,
    // Wu-Wu day, Wu-Wu hour.
    let p = almanac().four_pillars(&jst(2000, 1, 1, 12, 0)).unwrap();
    assert_eq!(p.year.chinese(), "己卯");
    assert_eq!(p.month.chinese(), "丙子");
    assert_eq!(p.day.chinese(), "戊午");
    assert_eq!(p.hour.chinese(), "戊午");
}

#[test]
fn jiazi_day_2024() {
    // 2024-01-01 opens a fresh sexagenary day cycle.
    let p = almanac().four_pillars(&jst(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(p.day.chinese(), "甲子");
    assert_eq!(p.year.chinese(), "癸卯");
}

#[test]
fn dragon_year_new_year_day() {
    // 2024-02-10 (Lunar New Year): Jia-Chen year and Jia-Chen day.
    let a = almanac();
    let p = a.four_pillars(&jst(2024, 2, 10, 12, 0)).unwrap();
    assert_eq!(p.year.chinese(), "甲辰");
    assert_eq!(p.day.chinese(), "甲辰");

    let d = a.lunar_date(&jst(2024, 2, 10, 12, 0)).unwrap();
    assert_eq!((d.year, d.month, d.day), (2024, 1, 1));
}

#[test]
fn day_boundary_scenarios() {
    let a = almanac();
    // Scenario A: 1992-02-17 00:00 under the late-zi roll -> Gui-Hai (59)
    let p0 = a.four_pillars(&jst(1992, 2, 17, 0, 0)).unwrap();
    assert_eq!(p0.day.cycle_index(), 59);
    // Scenario B: same date 23:00 -> rolled to Jia-Zi (0)
    let p23 = a.four_pillars(&jst(1992, 2, 17, 23, 0)).unwrap();
    assert_eq!(p23.day.cycle_index(), 0);
}

#[test]
fn midnight_policy_does_not_roll() {
    let config = AlmanacConfig {
        day_boundary: DayBoundaryPolicy::Midnight,
        ..AlmanacConfig::default()
    };
    let a = Almanac::new(AnalyticEphemeris::new(), config).unwrap();
    let p = a.four_pillars(&jst(1992, 2, 17, 23, 0)).unwrap();
    assert_eq!(p.day.cycle_index(), 59);
}

#[test]
fn leap_month_modes_differ() {
    let date = jst(2023, 4, 10, 0, 0);
    for (mode, expect_leap, expect_month) in [
        (LeapSplitMode::B, true, 2),
        (LeapSplitMode::C, false, 3),
    ] {
        let config = AlmanacConfig {
            leap_split: Some(mode),
            ..AlmanacConfig::default()
        };
        let a = Almanac::new(AnalyticEphemeris::new(), config).unwrap();
        let d = a.lunar_date(&date).unwrap();
        assert_eq!(d.is_leap_month, expect_leap, "{mode:?}");
        assert_eq!(d.month, expect_month, "{mode:?}");
    }
}

#[test]
fn ephemeris_failure_aborts_pillars() {
    // 1500 predates the analytic provider's validity range; the typed
    // provider failure must surface, not a partial result.
    let a = almanac();
    let civil = CivilDateTime::new(1500, 6, 1, 12, 0, 0.0, 0.0).unwrap();
    let err = a.four_pillars(&civil).unwrap_err();
    assert!(matches!(
        err,
        AlmanacError::Search(SearchError::Ephemeris(_))
    ));
}

#[test]
fn invalid_civil_input_is_rejected_upstream() {
    assert!(CivilDateTime::new(2024, 2, 30, 0, 0, 0.0, 9.0).is_err());
}

#[test]
fn sixty_day_pillar_periodicity_through_facade() {
    let a = almanac();
    let p1 = a.four_pillars(&jst(2024, 3, 1, 12, 0)).unwrap();
    let p2 = a.four_pillars(&jst(2024, 4, 30, 12, 0)).unwrap();
    // 60 days apart: identical day pillar
    assert_eq!(p1.day, p2.day);
}

#[test]
fn concurrent_readers_share_cache() {
    use std::sync::Arc;
    let a = Arc::new(almanac());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let a = Arc::clone(&a);
        handles.push(std::thread::spawn(move || {
            let terms = a.solar_terms(2024).unwrap();
            assert_eq!(terms.len(), 24);
            let p = a.four_pillars(&jst(2024, 6, 1, 6, 0)).unwrap();
            p.day.cycle_index()
        }));
    }
    let indices: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(indices.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn void_branches_follow_day_decade() {
    let a = almanac();
    // 2024-01-01 is Jia-Zi (index 0): voids Xu and Hai
    let (v1, v2) = a.void_branches(&jst(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!((v1, v2), (Branch::Xu, Branch::Hai));
}
