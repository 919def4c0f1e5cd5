//! Per-vehicle kinematic state.
//!
//! Plain data with no behavior beyond construction. Motion and navigation
//! logic lives in `uavfleet-nav`, which mutates this record in place.

use serde::{Deserialize, Serialize};

use crate::config::SimParams;
use crate::types::{normalize_azimuth, Position};

/// Kinematic and mode state of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Fleet identifier, 1-based, fixed for the run.
    pub id: u32,
    pub position: Position,
    /// Heading in radians, always within `[0, 2π)`.
    pub azimuth: f64,
    /// Constant scalar speed.
    pub speed: f64,
    /// Minimum turn radius, also the loiter radius.
    pub turn_radius: f64,
    /// Navigation mode: committed to circling the current destination.
    /// While set, the vehicle sits exactly `turn_radius` from the destination.
    pub in_loiter: bool,
    /// Navigation mode: azimuth was already pointed at the destination while
    /// inside the turn radius, so the approach is not re-aimed every tick.
    pub heading_snapped: bool,
}

impl VehicleState {
    pub fn new(id: u32, position: Position, azimuth: f64, speed: f64, turn_radius: f64) -> Self {
        Self {
            id,
            position,
            azimuth: normalize_azimuth(azimuth),
            speed,
            turn_radius,
            in_loiter: false,
            heading_snapped: false,
        }
    }

    /// Build the initial fleet. Every vehicle starts from the same initial
    /// conditions and differs only by id (`1..=n_uav`).
    pub fn fleet(params: &SimParams) -> Vec<VehicleState> {
        let start = Position::new(params.x0, params.y0, params.z0);
        (1..=params.n_uav)
            .map(|id| VehicleState::new(id, start, params.az, params.v0, params.r))
            .collect()
    }

    /// Clear both navigation mode bits (a fresh command was armed).
    pub fn reset_mode(&mut self) {
        self.in_loiter = false;
        self.heading_snapped = false;
    }
}
