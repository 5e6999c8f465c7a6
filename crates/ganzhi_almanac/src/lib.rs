//! Calendar facade: one object answering "pillars for instant X" and
//! "lunar date for instant X".
//!
//! [`Almanac`] owns an injected [`Ephemeris`] and read-through per-year
//! caches of solar-term lists and assembled lunisolar years. Entries are
//! immutable once written (calendar facts for a past year do not change),
//! so the caches only lock around population.

pub mod error;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use ganzhi_calendar::{LeapSplitMode, LunarDate, LunisolarYear, build_year, lunar_date_at};
use ganzhi_ephem::Ephemeris;
use ganzhi_pillars::{
    Branch, DayBoundaryPolicy, FourPillars, ZiHourPolicy, day_pillar, hour_pillar, month_pillar,
    void_branches as void_branches_for, year_pillar,
};
use ganzhi_search::{
    SolarTerm, SolarTermConfig, SolarTermEvent, SyzygyConfig, solar_terms_for_year,
};
use ganzhi_time::{CivilDateTime, apparent_solar_time};

pub use error::AlmanacError;

/// Facade configuration: the policy bundle plus the solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmanacConfig {
    /// When the day pillar rolls to the next cycle index.
    pub day_boundary: DayBoundaryPolicy,
    /// Which day's stem anchors the 23:00-24:00 zi hour.
    pub zi_hour: ZiHourPolicy,
    /// How leap-month days are attributed. `None` makes leap-month dates
    /// fail with `AmbiguousLeapMonthPolicy` rather than guessing.
    pub leap_split: Option<LeapSplitMode>,
    /// Geographic longitude (degrees east). When set, the hour pillar is
    /// derived from local apparent solar time instead of clock time.
    pub longitude_deg: Option<f64>,
    pub term_solver: SolarTermConfig,
    pub syzygy_solver: SyzygyConfig,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            day_boundary: DayBoundaryPolicy::LateZi,
            zi_hour: ZiHourPolicy::Late,
            leap_split: Some(LeapSplitMode::A),
            longitude_deg: None,
            term_solver: SolarTermConfig::default(),
            syzygy_solver: SyzygyConfig::default(),
        }
    }
}

impl AlmanacConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(lon) = self.longitude_deg {
            if !lon.is_finite() || lon.abs() > 180.0 {
                return Err("longitude_deg must be finite and within [-180, +180]");
            }
        }
        self.term_solver.validate()?;
        self.syzygy_solver.validate()?;
        Ok(())
    }
}

/// The calendar facade.
pub struct Almanac<E: Ephemeris> {
    ephemeris: E,
    config: AlmanacConfig,
    term_cache: Mutex<HashMap<i32, Arc<Vec<SolarTermEvent>>>>,
    year_cache: Mutex<HashMap<i32, Arc<LunisolarYear>>>,
}

impl<E: Ephemeris> Almanac<E> {
    /// Build a facade around an ephemeris provider.
    pub fn new(ephemeris: E, config: AlmanacConfig) -> Result<Self, AlmanacError> {
        config.validate().map_err(AlmanacError::InvalidConfig)?;
        Ok(Self {
            ephemeris,
            config,
            term_cache: Mutex::new(HashMap::new()),
            year_cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &AlmanacConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// The 24 solar terms of a civil year, ordered by instant. Memoized.
    pub fn solar_terms(&self, year: i32) -> Result<Arc<Vec<SolarTermEvent>>, AlmanacError> {
        if let Some(hit) = self.term_cache.lock().expect("term cache poisoned").get(&year) {
            return Ok(Arc::clone(hit));
        }
        let events = Arc::new(solar_terms_for_year(
            &self.ephemeris,
            year,
            &self.config.term_solver,
        )?);
        debug!(year, "solar term list computed");
        let mut cache = self.term_cache.lock().expect("term cache poisoned");
        Ok(Arc::clone(cache.entry(year).or_insert(events)))
    }

    /// The assembled lunisolar year anchored on a civil year. Memoized.
    pub fn lunisolar_year(&self, year: i32) -> Result<Arc<LunisolarYear>, AlmanacError> {
        if let Some(hit) = self.year_cache.lock().expect("year cache poisoned").get(&year) {
            return Ok(Arc::clone(hit));
        }
        let built = Arc::new(build_year(
            &self.ephemeris,
            year,
            &self.config.term_solver,
            &self.config.syzygy_solver,
        )?);
        debug!(year, months = built.months.len(), "lunisolar year assembled");
        let mut cache = self.year_cache.lock().expect("year cache poisoned");
        Ok(Arc::clone(cache.entry(year).or_insert(built)))
    }

    /// The Lichun event of a civil year.
    pub fn lichun(&self, year: i32) -> Result<SolarTermEvent, AlmanacError> {
        let terms = self.solar_terms(year)?;
        terms
            .iter()
            .find(|e| e.term == SolarTerm::Lichun)
            .copied()
            .ok_or(AlmanacError::Calendar(
                ganzhi_calendar::CalendarError::MissingTerm("Lichun"),
            ))
    }

    /// Lunar calendar date for a civil instant.
    pub fn lunar_date(&self, civil: &CivilDateTime) -> Result<LunarDate, AlmanacError> {
        let year = self.lunisolar_year(civil.year)?;
        Ok(lunar_date_at(
            &year,
            civil.to_jd_utc(),
            self.config.leap_split,
        )?)
    }

    /// The four pillars of a civil instant.
    ///
    /// When a longitude is configured, the hour pillar is taken from local
    /// apparent solar time; the day pillar stays on the civil clock.
    pub fn four_pillars(&self, civil: &CivilDateTime) -> Result<FourPillars, AlmanacError> {
        let jd_ut = civil.to_jd_utc();

        let lichun = self.lichun(civil.year)?;
        let year = year_pillar(civil, lichun.jd_ut);

        let jie = self.jie_events_covering(civil.year)?;
        let month = month_pillar(jd_ut, &jie, year.stem)?;

        let day = day_pillar(civil, self.config.day_boundary);

        let hour_clock = match self.config.longitude_deg {
            Some(longitude) => apparent_solar_time(civil, longitude),
            None => *civil,
        };
        let anchor_stem = if hour_clock.hour >= 23 {
            match self.config.zi_hour {
                ZiHourPolicy::Late => day_pillar(&hour_clock, DayBoundaryPolicy::LateZi).stem,
                ZiHourPolicy::Early => day_pillar(&hour_clock, DayBoundaryPolicy::Midnight).stem,
            }
        } else {
            day_pillar(&hour_clock, DayBoundaryPolicy::Midnight).stem
        };
        let hour = hour_pillar(hour_clock.hour, anchor_stem);

        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }

    /// Void (kongwang) branch pair of the instant's day pillar.
    pub fn void_branches(&self, civil: &CivilDateTime) -> Result<(Branch, Branch), AlmanacError> {
        Ok(void_branches_for(day_pillar(civil, self.config.day_boundary)))
    }

    /// Jie terms of the previous and current civil year, ordered. The
    /// previous year is needed for January instants, whose governing jie
    /// (Daxue or Xiaohan) belongs to the earlier term list.
    fn jie_events_covering(&self, year: i32) -> Result<Vec<SolarTermEvent>, AlmanacError> {
        let mut jie: Vec<SolarTermEvent> = Vec::with_capacity(24);
        for y in [year - 1, year] {
            let terms = self.solar_terms(y)?;
            jie.extend(terms.iter().filter(|e| e.term.is_jie()).copied());
        }
        jie.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
        Ok(jie)
    }
}
