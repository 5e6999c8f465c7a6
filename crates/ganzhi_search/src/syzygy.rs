//! Newton-Raphson solver for Sun-Moon syzygies (new moons).
//!
//! The zero function is the elongation `normalize(moon_lon - sun_lon)`;
//! the Newton divisor is the Moon's Sun-relative longitude rate. From any
//! starting point the iteration lands on the nearest conjunction, so the
//! "next new moon" contract re-solves one synodic month later when the
//! nearest root precedes the requested instant.

use ganzhi_ephem::{Body, Ephemeris};
use tracing::debug;

use crate::error::SearchError;
use crate::search_util::normalize_to_pm180;
use crate::syzygy_types::{SYNODIC_MONTH_DAYS, SyzygyConfig, SyzygyEvent};

/// Mean Sun-relative lunar motion in degrees per day, used when the
/// provider reports a degenerate relative rate.
const MEAN_RELATIVE_MOTION: f64 = 13.2;

/// Smallest relative rate accepted as a Newton divisor.
const MIN_RELATIVE_SPEED: f64 = 6.0;

/// Moon-Sun elongation at `jd_ut`, degrees [0, 360).
pub fn elongation_at<E: Ephemeris>(eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
    let moon = eph.position(Body::Moon, jd_ut)?;
    let sun = eph.position(Body::Sun, jd_ut)?;
    Ok((moon.longitude_deg - sun.longitude_deg).rem_euclid(360.0))
}

/// Newton-Raphson iteration toward the conjunction nearest `jd_guess`.
fn newton_syzygy<E: Ephemeris>(
    eph: &E,
    jd_guess: f64,
    config: &SyzygyConfig,
) -> Result<f64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut jd = jd_guess;
    let mut residual = f64::MAX;
    for iteration in 0..config.max_iterations {
        let moon = eph.position(Body::Moon, jd)?;
        let sun = eph.position(Body::Sun, jd)?;
        residual = normalize_to_pm180(moon.longitude_deg - sun.longitude_deg);
        if residual.abs() < config.tolerance_deg {
            debug!(jd, iteration, "syzygy solver converged");
            return Ok(jd);
        }
        let relative = moon.speed_deg_per_day - sun.speed_deg_per_day;
        let speed = if relative > MIN_RELATIVE_SPEED {
            relative
        } else {
            MEAN_RELATIVE_MOTION
        };
        jd -= residual / speed;
    }

    Err(SearchError::Convergence {
        last_estimate_jd: jd,
        residual_deg: residual,
    })
}

/// Find the first new moon at or after `jd_after`.
pub fn next_new_moon<E: Ephemeris>(
    eph: &E,
    jd_after: f64,
    config: &SyzygyConfig,
) -> Result<SyzygyEvent, SearchError> {
    let mut jd = newton_syzygy(eph, jd_after, config)?;
    while jd < jd_after - 1e-9 {
        jd = newton_syzygy(eph, jd + SYNODIC_MONTH_DAYS, config)?;
    }
    Ok(SyzygyEvent { jd_ut: jd })
}

/// All new moons in `[jd_start, jd_end]`, ordered by instant.
///
/// Enumerates by solving the first conjunction after `jd_start`, then
/// stepping one mean synodic month and re-solving until past `jd_end`.
pub fn new_moons_spanning<E: Ephemeris>(
    eph: &E,
    jd_start: f64,
    jd_end: f64,
    config: &SyzygyConfig,
) -> Result<Vec<SyzygyEvent>, SearchError> {
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let mut events = Vec::new();
    let mut event = next_new_moon(eph, jd_start, config)?;
    while event.jd_ut <= jd_end {
        events.push(event);
        event = next_new_moon(eph, event.jd_ut + SYNODIC_MONTH_DAYS / 2.0, config)?;
    }
    Ok(events)
}
