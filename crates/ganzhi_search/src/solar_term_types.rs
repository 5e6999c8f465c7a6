//! Solar term enumeration and solver configuration.

/// The 24 solar terms, ordered from Lichun (solar longitude 315 deg),
/// the traditional opening of the sexagenary year.
///
/// Terms alternate between "jie" (month-boundary terms, at 315 + 30k deg)
/// and "zhongqi" (mid-month terms, at multiples of 30 deg). The zhongqi
/// govern leap-month detection; the jie govern the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 solar terms in order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
    "Xiaohan",
    "Dahan",
];

const SOLAR_TERM_HANZI: [&str; 24] = [
    "立春", "雨水", "啓蟄", "春分", "清明", "穀雨", "立夏", "小満", "芒種", "夏至", "小暑",
    "大暑", "立秋", "処暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
    "小寒", "大寒",
];

impl SolarTerm {
    /// 0-based index in the Lichun-first ordering.
    pub const fn index(self) -> u8 {
        match self {
            Self::Lichun => 0,
            Self::Yushui => 1,
            Self::Jingzhe => 2,
            Self::Chunfen => 3,
            Self::Qingming => 4,
            Self::Guyu => 5,
            Self::Lixia => 6,
            Self::Xiaoman => 7,
            Self::Mangzhong => 8,
            Self::Xiazhi => 9,
            Self::Xiaoshu => 10,
            Self::Dashu => 11,
            Self::Liqiu => 12,
            Self::Chushu => 13,
            Self::Bailu => 14,
            Self::Qiufen => 15,
            Self::Hanlu => 16,
            Self::Shuangjiang => 17,
            Self::Lidong => 18,
            Self::Xiaoxue => 19,
            Self::Daxue => 20,
            Self::Dongzhi => 21,
            Self::Xiaohan => 22,
            Self::Dahan => 23,
        }
    }

    /// Target solar longitude in degrees, [0, 360).
    pub const fn target_longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// Whether this term is a zhongqi (longitude a multiple of 30 deg).
    pub const fn is_zhongqi(self) -> bool {
        self.index() % 2 == 1
    }

    /// Whether this term is a jie (month-boundary term).
    pub const fn is_jie(self) -> bool {
        !self.is_zhongqi()
    }

    /// Sexagenary month number (1 = Yin month opened by Lichun, ...,
    /// 12 = Chou month opened by Xiaohan). Only meaningful for jie terms;
    /// a zhongqi reports the month its paired jie opened.
    pub const fn month_number(self) -> u8 {
        self.index() / 2 + 1
    }

    /// For zhongqi terms, the zhongqi ordinal `longitude / 30` (0..=11).
    pub const fn zhongqi_number(self) -> Option<u8> {
        if self.is_zhongqi() {
            Some((((315 + 15 * self.index() as u32) % 360) / 30) as u8)
        } else {
            None
        }
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// Hanzi name as carried by the source tradition.
    pub fn chinese(self) -> &'static str {
        SOLAR_TERM_HANZI[self.index() as usize]
    }
}

/// A solved solar-term boundary instant.
///
/// Invariant: the Sun's apparent longitude at `jd_ut` matches the term's
/// target longitude within the solver tolerance used to produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    pub jd_ut: f64,
}

/// Newton-Raphson configuration for the solar-term solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermConfig {
    /// Convergence tolerance on the angular residual, degrees.
    pub tolerance_deg: f64,
    /// Hard iteration cap; exceeding it is a `Convergence` failure.
    pub max_iterations: u32,
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-5,
            max_iterations: 30,
        }
    }
}

impl SolarTermConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive and finite");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        Ok(())
    }
}
