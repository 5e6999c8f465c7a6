//! Newton-Raphson solver for solar-longitude crossings.
//!
//! The zero function is `normalize(target - sun_longitude)` in
//! (-180, +180] degrees; each step divides the residual by the Sun's
//! instantaneous longitude rate from the provider. Convergence is
//! quadratic from any guess within a few weeks of the crossing.

use ganzhi_ephem::{Body, Ephemeris};
use ganzhi_time::calendar_to_jd;
use tracing::debug;

use crate::error::SearchError;
use crate::search_util::normalize_to_pm180;
use crate::solar_term_types::{ALL_SOLAR_TERMS, SolarTerm, SolarTermConfig, SolarTermEvent};

/// Mean solar motion in degrees per day, used when the provider reports a
/// degenerate rate.
const MEAN_SOLAR_MOTION: f64 = 0.985_6;

/// Smallest solar rate accepted as a Newton divisor.
const MIN_SOLAR_SPEED: f64 = 0.5;

/// The Sun's apparent ecliptic longitude at `jd_ut`, degrees [0, 360).
pub fn solar_longitude_at<E: Ephemeris>(eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
    Ok(eph.position(Body::Sun, jd_ut)?.longitude_deg)
}

/// Newton-Raphson iteration toward `target_deg`, starting from `jd_guess`.
///
/// Returns the converged instant, or `SearchError::Convergence` carrying
/// the last estimate and residual once the iteration cap is exhausted.
pub fn solve_solar_longitude<E: Ephemeris>(
    eph: &E,
    target_deg: f64,
    jd_guess: f64,
    config: &SolarTermConfig,
) -> Result<f64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut jd = jd_guess;
    let mut residual = f64::MAX;
    for iteration in 0..config.max_iterations {
        let sun = eph.position(Body::Sun, jd)?;
        residual = normalize_to_pm180(target_deg - sun.longitude_deg);
        if residual.abs() < config.tolerance_deg {
            debug!(target_deg, jd, iteration, "solar longitude solver converged");
            return Ok(jd);
        }
        let speed = if sun.speed_deg_per_day > MIN_SOLAR_SPEED {
            sun.speed_deg_per_day
        } else {
            MEAN_SOLAR_MOTION
        };
        jd += residual / speed;
    }

    Err(SearchError::Convergence {
        last_estimate_jd: jd,
        residual_deg: residual,
    })
}

/// Coarse first guess for a term of the given civil year.
///
/// The Sun runs ~0.9856 deg/day, so the gap from Lichun (315 deg, near
/// Feb 4) maps linearly onto the year. Xiaohan and Dahan fall in January
/// and are anchored to the previous year's Lichun so the solved event
/// lands inside `year`.
fn initial_guess(term: SolarTerm, year: i32) -> f64 {
    let anchor_year = match term {
        SolarTerm::Xiaohan | SolarTerm::Dahan => year - 1,
        _ => year,
    };
    let gap_deg = (term.target_longitude_deg() - 315.0).rem_euclid(360.0);
    calendar_to_jd(anchor_year, 2, 4.0) + gap_deg / 360.0 * 365.25
}

/// Solve the exact instant of one solar term in a civil year.
pub fn solve_solar_term<E: Ephemeris>(
    eph: &E,
    term: SolarTerm,
    year: i32,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    let jd = solve_solar_longitude(
        eph,
        term.target_longitude_deg(),
        initial_guess(term, year),
        config,
    )?;
    Ok(SolarTermEvent { term, jd_ut: jd })
}

/// All 24 solar terms of a civil year, ordered by instant.
pub fn solar_terms_for_year<E: Ephemeris>(
    eph: &E,
    year: i32,
    config: &SolarTermConfig,
) -> Result<Vec<SolarTermEvent>, SearchError> {
    let mut events = Vec::with_capacity(24);
    for term in ALL_SOLAR_TERMS {
        events.push(solve_solar_term(eph, term, year, config)?);
    }
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    Ok(events)
}
