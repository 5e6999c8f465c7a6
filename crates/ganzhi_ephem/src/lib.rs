//! Ephemeris provider interface and the built-in analytic Sun/Moon provider.
//!
//! The calendrical engine never computes body positions itself; it queries
//! an injected [`Ephemeris`] implementation. This crate defines that
//! contract ([`Body`], [`BodyPosition`], [`EphemerisError`]) and ships
//! [`AnalyticEphemeris`], a data-file-free provider built on truncated
//! Meeus series for the Sun and Moon.

pub mod error;
pub mod moon;
pub mod sun;

pub use error::EphemerisError;

/// Bodies addressable through the provider contract.
///
/// The calendrical core only queries Sun and Moon; the wider set exists so
/// richer providers can be dropped in behind the same trait. A provider
/// that does not carry a body reports it as unsupported rather than
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Compact body code for FFI-style interoperability.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Convert a compact body code back into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sun),
            1 => Some(Self::Moon),
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            7 => Some(Self::Uranus),
            8 => Some(Self::Neptune),
            9 => Some(Self::Pluto),
            _ => None,
        }
    }

    /// Human-readable body name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }
}

/// Geocentric apparent ecliptic position of a body at one instant.
///
/// Produced only by an [`Ephemeris`]; never mutated downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyPosition {
    /// Apparent ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Longitude rate in degrees per day (negative when retrograde).
    pub speed_deg_per_day: f64,
}

/// The injected position provider the whole engine is built against.
pub trait Ephemeris {
    /// Geocentric apparent ecliptic position of `body` at `jd_ut`.
    fn position(&self, body: Body, jd_ut: f64) -> Result<BodyPosition, EphemerisError>;
}

impl<T: Ephemeris + ?Sized> Ephemeris for &T {
    fn position(&self, body: Body, jd_ut: f64) -> Result<BodyPosition, EphemerisError> {
        (**self).position(body, jd_ut)
    }
}

/// Earliest instant the analytic series are trusted (1600-01-01).
pub const ANALYTIC_MIN_JD: f64 = 2_305_447.5;

/// Latest instant the analytic series are trusted (2401-01-01).
pub const ANALYTIC_MAX_JD: f64 = 2_598_007.5;

/// Step used for the central-difference longitude rate (3 hours).
const SPEED_STEP_DAYS: f64 = 0.125;

/// Built-in analytic ephemeris: Meeus low-precision solar theory and a
/// truncated lunar periodic series. Accuracy is a few hundredths of a
/// degree for the Sun and better than a tenth of a degree for the Moon
/// over 1600–2400, which keeps solar-term and syzygy solutions within a
/// few minutes of high-precision ephemerides.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_range(&self, body: Body, jd_ut: f64) -> Result<(), EphemerisError> {
        if !(ANALYTIC_MIN_JD..=ANALYTIC_MAX_JD).contains(&jd_ut) {
            return Err(EphemerisError::Unavailable {
                body,
                reason: "epoch outside the 1600-2400 validity range",
            });
        }
        Ok(())
    }

    fn longitude_deg(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        match body {
            Body::Sun => Ok(sun::apparent_longitude_deg(jd_ut)),
            Body::Moon => Ok(moon::position(jd_ut).0),
            other => Err(EphemerisError::UnsupportedBody(other)),
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn position(&self, body: Body, jd_ut: f64) -> Result<BodyPosition, EphemerisError> {
        self.check_range(body, jd_ut)?;

        let (longitude_deg, latitude_deg, distance_au) = match body {
            Body::Sun => {
                let (lon, dist) = sun::apparent_longitude_and_distance(jd_ut);
                (lon, 0.0, dist)
            }
            Body::Moon => moon::position(jd_ut),
            other => return Err(EphemerisError::UnsupportedBody(other)),
        };

        let before = self.longitude_deg(body, jd_ut - SPEED_STEP_DAYS)?;
        let after = self.longitude_deg(body, jd_ut + SPEED_STEP_DAYS)?;
        let mut delta = (after - before).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        let speed_deg_per_day = delta / (2.0 * SPEED_STEP_DAYS);

        Ok(BodyPosition {
            longitude_deg,
            latitude_deg,
            distance_au,
            speed_deg_per_day,
        })
    }
}
