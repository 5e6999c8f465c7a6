//! Value types for the lunisolar calendar.

use ganzhi_search::{SolarTermEvent, SyzygyEvent};

/// How the days of an intercalary month are attributed.
///
/// A genuine divergence between divination traditions, exposed as
/// configuration rather than baked into the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeapSplitMode {
    /// Days 1-15 stay in the leap month; later days attach to the
    /// following month. The common convention.
    A,
    /// The whole month is treated as leap.
    B,
    /// The whole month is attributed to the following month.
    C,
}

/// One lunar month, bounded by consecutive new moons.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarMonth {
    /// Civil year label of the lunar year this month belongs to.
    pub lunar_year: i32,
    /// Month ordinal 1-12; a leap month carries its predecessor's ordinal.
    pub ordinal: u8,
    /// Whether the month contains no zhongqi.
    pub is_leap: bool,
    /// New moon opening the month (JD UT).
    pub start_jd: f64,
    /// New moon opening the next month (JD UT); exclusive bound.
    pub end_jd: f64,
}

impl LunarMonth {
    /// Whether `jd_ut` falls within this month's half-open interval.
    pub fn contains(&self, jd_ut: f64) -> bool {
        self.start_jd <= jd_ut && jd_ut < self.end_jd
    }
}

/// A lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    /// Month ordinal 1-12.
    pub month: u8,
    /// Day of month, 1-30, counted in whole days from the new moon instant.
    pub day: u8,
    pub is_leap_month: bool,
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "leap " } else { "" };
        write!(
            f,
            "lunar {} year, {}month {}, day {}",
            self.year, leap, self.month, self.day
        )
    }
}

/// A fully assembled lunisolar year: the raw event lists plus the numbered
/// months covering roughly November of the previous civil year through
/// February of the next.
#[derive(Debug, Clone, PartialEq)]
pub struct LunisolarYear {
    /// The civil year this build was anchored on.
    pub year: i32,
    /// New moons spanning the build window, ordered.
    pub new_moons: Vec<SyzygyEvent>,
    /// The 24 solar terms of the civil year, ordered.
    pub solar_terms: Vec<SolarTermEvent>,
    /// Numbered months, ordered by start instant.
    pub months: Vec<LunarMonth>,
}

impl LunisolarYear {
    /// The month containing `jd_ut`, if the instant falls in the window.
    pub fn month_containing(&self, jd_ut: f64) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.contains(jd_ut))
    }
}
