//! Simulation run failures.

use std::io;

use thiserror::Error;

use uavfleet_core::config::ConfigError;
use uavfleet_nav::NavError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("navigation failed for vehicle {vehicle_id}: {source}")]
    Navigation {
        vehicle_id: u32,
        #[source]
        source: NavError,
    },
    #[error("trace output failed: {0}")]
    Trace(#[from] io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
