//! Lunisolar calendar assembly: leap-month detection and month numbering.
//!
//! A lunar month runs new moon to new moon. The month containing the
//! winter solstice is month 11; a month containing no zhongqi (no
//! multiple-of-30-degree solar-longitude crossing) is intercalary and
//! inherits the ordinal of the month before it. This crate builds whole
//! lunisolar years from the solver outputs and resolves instants to
//! lunar dates under an explicit leap-split policy.

pub mod builder;
pub mod error;
pub mod leap;
pub mod types;

pub use builder::{build_year, lunar_date_at};
pub use error::CalendarError;
pub use leap::{is_leap_month, zhongqi_in_month};
pub use types::{LeapSplitMode, LunarDate, LunarMonth, LunisolarYear};
