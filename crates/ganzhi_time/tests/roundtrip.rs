//! Round-trip properties of the civil ↔ Julian Day conversions.

use ganzhi_time::{CivilDateTime, calendar_to_jd, jd_to_calendar};

#[test]
fn civil_jd_roundtrip_across_offsets() {
    for &offset in &[-11.0, -5.5, 0.0, 5.75, 9.0, 13.0] {
        for &(y, m, d, hh, mm, ss) in &[
            (1900, 1, 1, 0, 0, 0.0),
            (1984, 2, 2, 6, 30, 15.5),
            (1992, 2, 17, 17, 18, 0.0),
            (2000, 2, 29, 23, 59, 59.0),
            (2024, 12, 31, 12, 0, 0.25),
        ] {
            let civil = CivilDateTime::new(y, m, d, hh, mm, ss, offset).unwrap();
            let jd = civil.to_jd_utc();
            let back = CivilDateTime::from_jd_utc(jd, offset);
            // Idempotent to sub-second precision (1e-6 day ~ 0.09 s)
            assert!(
                (back.to_jd_utc() - jd).abs() < 1e-6,
                "{civil} via offset {offset}"
            );
            assert_eq!((back.year, back.month, back.day), (y, m, d), "{civil}");
        }
    }
}

#[test]
fn jd_calendar_roundtrip_dense_sweep() {
    // Every 17 days across two centuries
    let start = calendar_to_jd(1900, 1, 1.0);
    let end = calendar_to_jd(2100, 1, 1.0);
    let mut jd = start;
    while jd < end {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-6, "jd = {jd}");
        jd += 17.0;
    }
}

#[test]
fn offset_shifts_ut_instant() {
    let tokyo = CivilDateTime::new(2024, 1, 1, 9, 0, 0.0, 9.0).unwrap();
    let greenwich = CivilDateTime::new(2024, 1, 1, 0, 0, 0.0, 0.0).unwrap();
    assert!((tokyo.to_jd_utc() - greenwich.to_jd_utc()).abs() < 1e-9);
}
