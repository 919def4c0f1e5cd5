//! Waypoint commands issued to individual vehicles.
//!
//! Commands are immutable once parsed. The scheduler decides when each one
//! becomes due; commands for different vehicles never interact.

use serde::{Deserialize, Serialize};

use crate::types::Waypoint;

/// "At `time`, vehicle `vehicle_id` should head for `destination`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Scheduling time in seconds. Due once simulation time passes it.
    pub time: f64,
    pub vehicle_id: u32,
    pub destination: Waypoint,
}

impl Command {
    pub fn new(time: f64, vehicle_id: u32, x: f64, y: f64) -> Self {
        Self {
            time,
            vehicle_id,
            destination: Waypoint::new(x, y),
        }
    }

    /// A command is due strictly after its scheduled time.
    pub fn is_due(&self, current_time: f64) -> bool {
        self.time < current_time
    }
}
