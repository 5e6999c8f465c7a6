//! Pillar derivation: pure cycle arithmetic over solver-supplied instants.
//!
//! Calibration: 1992-02-17 (local civil date) carries day-cycle index 59
//! (Gui-Hai), and 1984 is the Jia-Zi reference year. Both anchors agree
//! with the almanac fixpoint 1949-10-01 = Jia-Zi day.

use ganzhi_time::CivilDateTime;
use ganzhi_search::SolarTermEvent;

use crate::error::PillarError;
use crate::ganzhi::{Branch, Stem};
use crate::pillar::Pillar;
use crate::policy::DayBoundaryPolicy;

/// Local day number (JDN) of the reference civil date 1992-02-17.
pub const DAY_PILLAR_REFERENCE_DAY_NUMBER: i64 = 2_448_670;

/// Day-cycle index of the reference date (59 = Gui-Hai).
pub const DAY_PILLAR_REFERENCE_INDEX: i64 = 59;

/// Reference Jia-Zi year for the year pillar.
pub const YEAR_PILLAR_REFERENCE_YEAR: i32 = 1984;

/// Stem opening the Yin month (month 1), indexed by the year stem.
const MONTH_STEM_START: [u8; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

/// Stem opening the Zi hour, indexed by the day stem.
const HOUR_STEM_START: [u8; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Void (kongwang) branch pairs, indexed by `day cycle index / 10`.
const VOID_BRANCH_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Xu, Branch::Hai),
    (Branch::Shen, Branch::You),
    (Branch::Wu, Branch::Wei),
    (Branch::Chen, Branch::Si),
    (Branch::Yin, Branch::Mao),
    (Branch::Zi, Branch::Chou),
];

/// Day pillar for a civil clock reading.
///
/// Counts whole local civil days from the reference date; under
/// [`DayBoundaryPolicy::LateZi`] an instant at or past 23:00 rolls to the
/// next day's pillar.
pub fn day_pillar(civil: &CivilDateTime, policy: DayBoundaryPolicy) -> Pillar {
    let mut day_number = civil.local_day_number();
    if policy == DayBoundaryPolicy::LateZi && civil.hour >= 23 {
        day_number += 1;
    }
    Pillar::from_index(
        DAY_PILLAR_REFERENCE_INDEX + day_number - DAY_PILLAR_REFERENCE_DAY_NUMBER,
    )
}

/// Year pillar for a civil instant, given that civil year's Lichun.
///
/// The sexagenary year opens at Lichun, not January 1: an instant before
/// `lichun_jd_ut` belongs to the previous cycle year.
pub fn year_pillar(civil: &CivilDateTime, lichun_jd_ut: f64) -> Pillar {
    let mut year = civil.year;
    if civil.to_jd_utc() < lichun_jd_ut {
        year -= 1;
    }
    Pillar::from_index((year - YEAR_PILLAR_REFERENCE_YEAR) as i64)
}

/// Month pillar for an instant, from the ordered jie-term events covering
/// it and the (Lichun-adjusted) year stem.
///
/// The branch is fixed by which inter-jie interval contains the instant
/// (Yin month opens at Lichun); the stem follows the year-stem table.
pub fn month_pillar(
    jd_ut: f64,
    jie_events: &[SolarTermEvent],
    year_stem: Stem,
) -> Result<Pillar, PillarError> {
    let month_number = jie_events
        .iter()
        .filter(|e| e.term.is_jie() && e.jd_ut <= jd_ut)
        .max_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut))
        .map(|e| e.term.month_number())
        .ok_or(PillarError::MissingJieTerm { jd_ut })?;

    let branch = Branch::from_index((month_number as i64 + 1) % 12);
    let stem = Stem::from_index(
        MONTH_STEM_START[year_stem.index() as usize] as i64 + month_number as i64 - 1,
    );
    Ok(Pillar { stem, branch })
}

/// Branch of a two-hour window: 23:00-01:00 is Zi, 01:00-03:00 Chou, ...
pub fn hour_branch(hour: u32) -> Branch {
    if hour >= 23 {
        Branch::Zi
    } else {
        Branch::from_index(((hour + 1) / 2) as i64 % 12)
    }
}

/// Hour pillar from the local hour and the anchoring day stem.
///
/// The caller resolves which day's stem anchors a 23:00-24:00 instant
/// (see `ZiHourPolicy`); from here on it is a pure table lookup.
pub fn hour_pillar(hour: u32, anchor_day_stem: Stem) -> Pillar {
    let branch = hour_branch(hour);
    let stem = Stem::from_index(
        HOUR_STEM_START[anchor_day_stem.index() as usize] as i64 + branch.index() as i64,
    );
    Pillar { stem, branch }
}

/// Void (kongwang) branch pair for a day pillar.
pub fn void_branches(day: Pillar) -> (Branch, Branch) {
    VOID_BRANCH_PAIRS[day.cycle_index() as usize / 10]
}
