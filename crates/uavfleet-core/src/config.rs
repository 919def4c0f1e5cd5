//! Run parameters and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global initial conditions and timing for one run.
///
/// Field names follow the parameter file keys (`Dt`, `N_uav`, `R`, ...).
/// Fields missing from the file stay at zero; `validate` rejects the
/// combinations the navigation core cannot run with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Tick size in seconds.
    pub dt: f64,
    /// Fleet size.
    pub n_uav: u32,
    /// Minimum turn radius shared by every vehicle.
    pub r: f64,
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    /// Initial (and constant) speed.
    pub v0: f64,
    /// Initial azimuth in radians.
    pub az: f64,
    /// Run horizon in seconds.
    pub time_lim: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time step Dt must be finite and positive, got {0}")]
    TimeStep(f64),
    #[error("fleet size N_uav must be at least 1")]
    EmptyFleet,
    #[error("turn radius R must be finite and positive, got {0}")]
    TurnRadius(f64),
    #[error("speed V0 must be finite and positive, got {0}")]
    Speed(f64),
    #[error("time limit TimeLim must be finite and non-negative, got {0}")]
    TimeLimit(f64),
    #[error("initial {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

impl SimParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        if self.n_uav == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        if !(self.r.is_finite() && self.r > 0.0) {
            return Err(ConfigError::TurnRadius(self.r));
        }
        if !(self.v0.is_finite() && self.v0 > 0.0) {
            return Err(ConfigError::Speed(self.v0));
        }
        if !(self.time_lim.is_finite() && self.time_lim >= 0.0) {
            return Err(ConfigError::TimeLimit(self.time_lim));
        }
        for (field, value) in [
            ("X0", self.x0),
            ("Y0", self.y0),
            ("Z0", self.z0),
            ("Az", self.az),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// Number of trace records each vehicle produces over the run.
    pub fn record_count(&self) -> u64 {
        (self.time_lim / self.dt + crate::constants::TIME_EPSILON).floor() as u64 + 1
    }
}
