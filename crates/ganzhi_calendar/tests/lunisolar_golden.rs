//! Golden-value tests for lunisolar year assembly against the published
//! Chinese calendar: leap-month placement and month numbering.

use ganzhi_calendar::{LeapSplitMode, build_year, lunar_date_at};
use ganzhi_ephem::AnalyticEphemeris;
use ganzhi_search::{SolarTermConfig, SyzygyConfig};
use ganzhi_time::CivilDateTime;

fn build(year: i32) -> ganzhi_calendar::LunisolarYear {
    build_year(
        &AnalyticEphemeris::new(),
        year,
        &SolarTermConfig::default(),
        &SyzygyConfig::default(),
    )
    .unwrap()
}

fn leap_ordinal(year: i32) -> Option<u8> {
    build(year)
        .months
        .iter()
        .find(|m| m.is_leap && m.lunar_year == year)
        .map(|m| m.ordinal)
}

/// Published leap months: 2020 leap 4, 2023 leap 2, 2025 leap 6.
#[test]
fn leap_month_placements() {
    assert_eq!(leap_ordinal(2020), Some(4));
    assert_eq!(leap_ordinal(2023), Some(2));
    assert_eq!(leap_ordinal(2025), Some(6));
}

/// Years with no leap month.
#[test]
fn common_years_have_no_leap() {
    assert_eq!(leap_ordinal(2021), None);
    assert_eq!(leap_ordinal(2022), None);
    assert_eq!(leap_ordinal(2024), None);
}

/// Lunar New Year 2024 fell on Feb 10 (new moon 2024-02-09 22:59 UT).
#[test]
fn lunar_new_year_2024() {
    let y = build(2024);
    let noon_feb_10 = CivilDateTime::new(2024, 2, 10, 12, 0, 0.0, 9.0)
        .unwrap()
        .to_jd_utc();
    let d = lunar_date_at(&y, noon_feb_10, None).unwrap();
    assert_eq!(d.year, 2024);
    assert_eq!(d.month, 1);
    assert_eq!(d.day, 1);
    assert!(!d.is_leap_month);
}

/// The day before Lunar New Year still belongs to lunar 2023 month 12.
#[test]
fn eve_of_lunar_new_year_2024() {
    let y = build(2024);
    let noon_feb_9 = CivilDateTime::new(2024, 2, 9, 12, 0, 0.0, 9.0)
        .unwrap()
        .to_jd_utc();
    let d = lunar_date_at(&y, noon_feb_9, None).unwrap();
    assert_eq!(d.year, 2023);
    assert_eq!(d.month, 12);
}

/// Day counts within a month never leave 1..=30.
#[test]
fn day_counts_bounded() {
    let y = build(2023);
    for month in &y.months {
        let mut jd = month.start_jd + 0.01;
        while jd < month.end_jd {
            let d = lunar_date_at(&y, jd, Some(LeapSplitMode::B)).unwrap();
            assert!((1..=30).contains(&d.day), "day = {}", d.day);
            jd += 1.0;
        }
    }
}

/// Month lengths are always 29 or 30 whole days.
#[test]
fn month_lengths() {
    let y = build(2024);
    for month in &y.months {
        let len = month.end_jd - month.start_jd;
        assert!((29.0..30.0).contains(&len), "length = {len}");
    }
}
