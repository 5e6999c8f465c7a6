//! Lunisolar year assembly.
//!
//! `build_year` gathers the new moons spanning November of the previous
//! civil year through March of the next, anchors ordinal 11 on the month
//! containing each December winter solstice, and numbers the remaining
//! months by walking the boundaries while leap months repeat their
//! predecessor's ordinal. Between two consecutive solstice months there
//! are either 12 months (no leap) or 13 (exactly one leap).

use ganzhi_ephem::Ephemeris;
use ganzhi_search::{
    SolarTerm, SolarTermConfig, SyzygyConfig, new_moons_spanning, solar_terms_for_year,
    solve_solar_term,
};
use ganzhi_time::calendar_to_jd;

use crate::error::CalendarError;
use crate::leap::zhongqi_in_month;
use crate::types::{LeapSplitMode, LunarDate, LunarMonth, LunisolarYear};

/// Assemble the lunisolar structure anchored on civil `year`.
pub fn build_year<E: Ephemeris>(
    eph: &E,
    year: i32,
    term_config: &SolarTermConfig,
    syzygy_config: &SyzygyConfig,
) -> Result<LunisolarYear, CalendarError> {
    let span_start = calendar_to_jd(year - 1, 11, 1.0);
    let span_end = calendar_to_jd(year + 1, 3, 1.0);
    let new_moons = new_moons_spanning(eph, span_start, span_end, syzygy_config)?;

    let solar_terms = solar_terms_for_year(eph, year, term_config)?;
    let ws_prev = solve_solar_term(eph, SolarTerm::Dongzhi, year - 1, term_config)?;
    let ws_cur = solar_terms
        .iter()
        .find(|e| e.term == SolarTerm::Dongzhi)
        .copied()
        .ok_or(CalendarError::MissingTerm("Dongzhi"))?;

    // Month intervals between consecutive new moons
    let bounds: Vec<(f64, f64)> = new_moons
        .windows(2)
        .map(|w| (w[0].jd_ut, w[1].jd_ut))
        .collect();

    let anchor = bounds
        .iter()
        .position(|&(s, e)| s <= ws_prev.jd_ut && ws_prev.jd_ut < e)
        .ok_or(CalendarError::DateOutsideYear {
            jd_ut: ws_prev.jd_ut,
        })?;

    // Leap flag per interval: no zhongqi crossed
    let mut leap = Vec::with_capacity(bounds.len());
    for &(s, e) in &bounds {
        leap.push(zhongqi_in_month(eph, s, e)?.is_none());
    }

    // The solstice-bearing anchor month is ordinal 11 of lunar `year - 1`.
    // Forward: leap months repeat the ordinal, ordinary months advance,
    // the lunar year label rolls with the wrap to month 1. Backward from
    // the anchor the rules invert; an ordinary month directly before its
    // own leap month shares the ordinal the leap month inherited.
    let mut numbering: Vec<(u8, i32)> = vec![(0, 0); bounds.len()];
    numbering[anchor] = (11, year - 1);

    for i in anchor + 1..bounds.len() {
        let (prev_ord, prev_year) = numbering[i - 1];
        numbering[i] = if leap[i] {
            (prev_ord, prev_year)
        } else if prev_ord == 12 {
            (1, prev_year + 1)
        } else {
            (prev_ord + 1, prev_year)
        };
    }

    for i in (0..anchor).rev() {
        let (next_ord, next_year) = numbering[i + 1];
        numbering[i] = if !leap[i] && leap[i + 1] {
            (next_ord, next_year)
        } else if next_ord == 1 {
            (12, next_year - 1)
        } else {
            (next_ord - 1, next_year)
        };
    }

    let months: Vec<LunarMonth> = bounds
        .iter()
        .zip(numbering.iter())
        .zip(leap.iter())
        .map(|((&(start_jd, end_jd), &(ordinal, lunar_year)), &is_leap)| LunarMonth {
            lunar_year,
            ordinal,
            is_leap,
            start_jd,
            end_jd,
        })
        .collect();

    debug_assert_months_between_solstices(&months, ws_prev.jd_ut, ws_cur.jd_ut);

    Ok(LunisolarYear {
        year,
        new_moons,
        solar_terms,
        months,
    })
}

/// Leap-month law: 12 or 13 months between consecutive winter solstices.
fn debug_assert_months_between_solstices(months: &[LunarMonth], ws_a: f64, ws_b: f64) {
    if cfg!(debug_assertions) {
        let count = months
            .iter()
            .filter(|m| m.start_jd > ws_a && m.start_jd <= ws_b)
            .count();
        debug_assert!(
            count == 12 || count == 13,
            "months between solstices = {count}"
        );
    }
}

/// Resolve an instant to a lunar date within an assembled year.
///
/// The day is `floor(jd - month start) + 1`: whole days elapsed since the
/// syzygy instant. Leap months require an explicit [`LeapSplitMode`].
pub fn lunar_date_at(
    year: &LunisolarYear,
    jd_ut: f64,
    leap_split: Option<LeapSplitMode>,
) -> Result<LunarDate, CalendarError> {
    let month = year
        .month_containing(jd_ut)
        .ok_or(CalendarError::DateOutsideYear { jd_ut })?;
    let day = (jd_ut - month.start_jd).floor() as u8 + 1;

    if !month.is_leap {
        return Ok(LunarDate {
            year: month.lunar_year,
            month: month.ordinal,
            day,
            is_leap_month: false,
        });
    }

    let mode = leap_split.ok_or(CalendarError::AmbiguousLeapMonthPolicy)?;
    let attach_to_next = match mode {
        LeapSplitMode::A => day > 15,
        LeapSplitMode::B => false,
        LeapSplitMode::C => true,
    };

    if attach_to_next {
        let (month_num, lunar_year) = if month.ordinal == 12 {
            (1, month.lunar_year + 1)
        } else {
            (month.ordinal + 1, month.lunar_year)
        };
        Ok(LunarDate {
            year: lunar_year,
            month: month_num,
            day,
            is_leap_month: false,
        })
    } else {
        Ok(LunarDate {
            year: month.lunar_year,
            month: month.ordinal,
            day,
            is_leap_month: true,
        })
    }
}
