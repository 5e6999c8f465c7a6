//! Heavenly stems, earthly branches, and their fixed association tables.
//!
//! The original engine kept these as string-keyed dictionaries; closed
//! enums with ordinal-indexed arrays give compile-time exhaustiveness
//! instead of lookups that can silently miss.

/// The five elements (wuxing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

impl Stem {
    /// 0-based cycle index (Jia = 0 .. Gui = 9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a (wrapping) cycle position.
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub fn chinese(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    pub fn element(self) -> Element {
        STEM_ELEMENTS[self.index() as usize]
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// Hidden stems (canonical qi) per branch.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gui],
    &[Stem::Ji, Stem::Gui, Stem::Xin],
    &[Stem::Jia, Stem::Bing, Stem::Wu],
    &[Stem::Yi],
    &[Stem::Wu, Stem::Yi, Stem::Gui],
    &[Stem::Bing, Stem::Geng, Stem::Wu],
    &[Stem::Ding, Stem::Ji],
    &[Stem::Ji, Stem::Ding, Stem::Yi],
    &[Stem::Geng, Stem::Ren, Stem::Wu],
    &[Stem::Xin],
    &[Stem::Wu, Stem::Xin, Stem::Ding],
    &[Stem::Ren, Stem::Jia],
];

impl Branch {
    /// 0-based cycle index (Zi = 0 .. Hai = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a (wrapping) cycle position.
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub fn chinese(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems carried by this branch, principal qi first.
    pub fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i64), *b);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Branch::from_index(12), Branch::Zi);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
    }

    #[test]
    fn stem_elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.element(), Element::Wood);
        assert_eq!(Stem::Wu.element(), Element::Earth);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn branch_elements_spot_checks() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Yin.element(), Element::Wood);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::Xu.element(), Element::Earth);
        assert_eq!(Branch::You.element(), Element::Metal);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Branch::Zi.polarity(), Polarity::Yang);
        assert_eq!(Branch::Chou.polarity(), Polarity::Yin);
    }

    #[test]
    fn hidden_stems_principal_qi() {
        assert_eq!(Branch::Zi.hidden_stems(), &[Stem::Gui]);
        assert_eq!(Branch::Mao.hidden_stems(), &[Stem::Yi]);
        assert_eq!(
            Branch::Yin.hidden_stems(),
            &[Stem::Jia, Stem::Bing, Stem::Wu]
        );
        assert_eq!(Branch::Hai.hidden_stems(), &[Stem::Ren, Stem::Jia]);
        for b in ALL_BRANCHES {
            assert!(!b.hidden_stems().is_empty());
        }
    }

    #[test]
    fn hanzi_names_present() {
        assert_eq!(Stem::Jia.chinese(), "甲");
        assert_eq!(Stem::Gui.chinese(), "癸");
        assert_eq!(Branch::Zi.chinese(), "子");
        assert_eq!(Branch::Hai.chinese(), "亥");
    }
}
