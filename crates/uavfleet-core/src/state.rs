//! Fleet snapshots and trace records, the data the driver hands outward.

use serde::{Deserialize, Serialize};

use crate::types::{Position, SimTime};
use crate::vehicle::VehicleState;

/// One trace line for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub azimuth: f64,
}

/// A vehicle as seen from outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: u32,
    pub position: Position,
    pub azimuth: f64,
    pub in_loiter: bool,
    /// Time of the command currently governing this vehicle, if any.
    pub active_command_time: Option<f64>,
}

/// Complete fleet state at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub time: SimTime,
    pub vehicles: Vec<VehicleView>,
}

impl TraceRecord {
    pub fn of(vehicle: &VehicleState, time: f64) -> Self {
        Self {
            time,
            x: vehicle.position.x,
            y: vehicle.position.y,
            azimuth: vehicle.azimuth,
        }
    }
}
