//! Syzygy (new moon) event and solver configuration.

/// Mean synodic month in days, used to step between successive new moons.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// A solved Sun-Moon conjunction (new moon) instant.
///
/// Invariant: the Moon-Sun longitude difference at `jd_ut` is zero
/// (mod 360) within the solver tolerance used to produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyzygyEvent {
    pub jd_ut: f64,
}

/// Newton-Raphson configuration for the syzygy solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyzygyConfig {
    /// Convergence tolerance on the elongation residual, degrees.
    pub tolerance_deg: f64,
    /// Hard iteration cap; exceeding it is a `Convergence` failure.
    pub max_iterations: u32,
}

impl Default for SyzygyConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-4,
            max_iterations: 50,
        }
    }
}

impl SyzygyConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        assert!(SyzygyConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_tolerance() {
        let mut c = SyzygyConfig::default();
        c.tolerance_deg = -1.0;
        assert!(c.validate().is_err());
    }
}
