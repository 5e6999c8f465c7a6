//! Day-boundary and zi-hour policies.
//!
//! Different divination traditions disagree on when the civil day's pillar
//! rolls and on which day anchors the 23:00-24:00 zi hour. Both choices
//! are explicit configuration; they are selected once per calendar
//! configuration and never mixed within one computation.

/// When the day pillar rolls to the next cycle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayBoundaryPolicy {
    /// Roll at local midnight.
    Midnight,
    /// Roll at local 23:00 (the "late zi" convention): an instant in
    /// 23:00-24:00 already carries the next day's pillar.
    #[default]
    LateZi,
}

/// Which day's stem anchors the 23:00-24:00 zi hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZiHourPolicy {
    /// "Early zi": 23:00-24:00 is the zi hour of the current civil day.
    Early,
    /// "Late zi": 23:00-24:00 anchors on the next day's stem.
    #[default]
    Late,
}
