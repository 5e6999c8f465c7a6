//! Golden-value tests for new-moon solutions against published instants.

use ganzhi_ephem::AnalyticEphemeris;
use ganzhi_search::{SyzygyConfig, elongation_at, new_moons_spanning, next_new_moon};
use ganzhi_time::{CivilDateTime, calendar_to_jd};

/// Published UT dates of every new moon of 2024.
const NEW_MOON_DATES_2024: [(u32, u32); 13] = [
    (1, 11),
    (2, 9),
    (3, 10),
    (4, 8),
    (5, 8),
    (6, 6),
    (7, 5),
    (8, 4),
    (9, 3),
    (10, 2),
    (11, 1),
    (12, 1),
    (12, 30),
];

#[test]
fn all_new_moons_of_2024() {
    let eph = AnalyticEphemeris::new();
    let events = new_moons_spanning(
        &eph,
        calendar_to_jd(2024, 1, 1.0),
        calendar_to_jd(2024, 12, 31.5),
        &SyzygyConfig::default(),
    )
    .unwrap();
    assert_eq!(events.len(), NEW_MOON_DATES_2024.len());
    for (event, &(month, day)) in events.iter().zip(&NEW_MOON_DATES_2024) {
        let t = CivilDateTime::from_jd_utc(event.jd_ut, 0.0);
        assert_eq!((t.year, t.month, t.day), (2024, month, day));
    }
}

#[test]
fn next_new_moon_after_mid_month() {
    // From 1992-02-16 the next new moon is 1992-03-04 (13:22 UT)
    let eph = AnalyticEphemeris::new();
    let event = next_new_moon(
        &eph,
        calendar_to_jd(1992, 2, 16.0),
        &SyzygyConfig::default(),
    )
    .unwrap();
    let t = CivilDateTime::from_jd_utc(event.jd_ut, 0.0);
    assert_eq!((t.year, t.month, t.day), (1992, 3, 4));
}

#[test]
fn elongation_zero_at_every_solution() {
    let eph = AnalyticEphemeris::new();
    let config = SyzygyConfig::default();
    let events = new_moons_spanning(
        &eph,
        calendar_to_jd(2023, 1, 1.0),
        calendar_to_jd(2023, 12, 31.0),
        &config,
    )
    .unwrap();
    for event in events {
        let elong = elongation_at(&eph, event.jd_ut).unwrap();
        let wrapped = if elong > 180.0 { elong - 360.0 } else { elong };
        assert!(
            wrapped.abs() < config.tolerance_deg,
            "residual = {wrapped} at JD {}",
            event.jd_ut
        );
    }
}
