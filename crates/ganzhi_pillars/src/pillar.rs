//! Stem/branch pillars and the 60-term cycle.

use crate::ganzhi::{Branch, Stem};

/// The sixty cycle names in order (index 0 = Jiazi 甲子).
pub const SEXAGENARY_NAMES: [&str; 60] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉",
    "甲戌", "乙亥", "丙子", "丁丑", "戊寅", "己卯", "庚辰", "辛巳", "壬午", "癸未",
    "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑", "庚寅", "辛卯", "壬辰", "癸巳",
    "甲午", "乙未", "丙申", "丁酉", "戊戌", "己亥", "庚子", "辛丑", "壬寅", "癸卯",
    "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥", "壬子", "癸丑",
    "甲寅", "乙卯", "丙辰", "丁巳", "戊午", "己未", "庚申", "辛酉", "壬戌", "癸亥",
];

/// A stem/branch pair labelling a year, month, day or hour.
///
/// Only the 60 parity-matched pairs occur; construct through
/// [`Pillar::from_index`] or the derivation functions to stay inside the
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pillar at a (wrapping) position in the 60-cycle.
    pub fn from_index(index: i64) -> Self {
        let idx = index.rem_euclid(60);
        Self {
            stem: Stem::from_index(idx),
            branch: Branch::from_index(idx),
        }
    }

    /// Position in the 60-cycle, 0..=59.
    ///
    /// Inverse of [`Pillar::from_index`] via the Chinese remainder pairing
    /// of the stem (mod 10) and branch (mod 12) residues.
    pub fn cycle_index(self) -> u8 {
        (6 * self.stem.index() as i64 - 5 * self.branch.index() as i64).rem_euclid(60) as u8
    }

    /// Hanzi cycle name (e.g. 甲子).
    pub fn chinese(self) -> &'static str {
        SEXAGENARY_NAMES[self.cycle_index() as usize]
    }

    /// Pinyin name (e.g. "Jia-Zi").
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

/// The four pillars of a civil instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year, self.month, self.day, self.hour
        )
    }
}
