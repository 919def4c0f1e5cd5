//! Fleet command scheduler.
//!
//! Commands are indexed by vehicle and sorted by time once, up front. Each
//! tick the scheduler reports, per vehicle, which command (if any) governs it
//! and whether that command just became due.

use tracing::warn;

use uavfleet_core::commands::Command;
use uavfleet_core::types::Waypoint;

/// What a vehicle should do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// No command has ever become due: keep flying the current azimuth.
    Cruise,
    /// Navigate toward the governing command's destination.
    Navigate {
        destination: Waypoint,
        command_time: f64,
        /// The governing command changed since the last tick.
        fresh: bool,
    },
}

/// Per-vehicle command index plus the last-applied command cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandSchedule {
    /// Slot `id - 1`, ascending by time.
    by_vehicle: Vec<Vec<Command>>,
    /// Exact time of the last command applied to each vehicle.
    cursors: Vec<Option<f64>>,
    dropped: usize,
}

impl CommandSchedule {
    /// Index `commands` for a fleet of `fleet_size` vehicles.
    ///
    /// Commands addressed outside `1..=fleet_size`, or carrying non-finite
    /// values, are dropped. Among commands with equal times the one listed
    /// last wins.
    pub fn new(fleet_size: u32, commands: impl IntoIterator<Item = Command>) -> Self {
        let slots = fleet_size as usize;
        let mut by_vehicle = vec![Vec::new(); slots];
        let mut dropped = 0;

        for command in commands {
            if command.vehicle_id == 0 || command.vehicle_id > fleet_size {
                warn!(
                    vehicle_id = command.vehicle_id,
                    time = command.time,
                    "Dropping command for vehicle outside the fleet"
                );
                dropped += 1;
                continue;
            }
            if !(command.time.is_finite() && command.destination.is_finite()) {
                warn!(
                    vehicle_id = command.vehicle_id,
                    "Dropping command with non-finite time or destination"
                );
                dropped += 1;
                continue;
            }
            by_vehicle[(command.vehicle_id - 1) as usize].push(command);
        }

        // Stable, so equal times keep file order
        for list in &mut by_vehicle {
            list.sort_by(|a, b| a.time.total_cmp(&b.time));
        }

        Self {
            by_vehicle,
            cursors: vec![None; slots],
            dropped,
        }
    }

    /// Resolve the directive for `vehicle_id` at `current_time` and advance
    /// its cursor. Time must not run backwards between calls.
    pub fn resolve(&mut self, vehicle_id: u32, current_time: f64) -> Directive {
        let Some(slot) = (vehicle_id as usize).checked_sub(1) else {
            return Directive::Cruise;
        };
        let Some(list) = self.by_vehicle.get(slot) else {
            return Directive::Cruise;
        };

        let due = list.partition_point(|c| c.is_due(current_time));
        let Some(command) = due.checked_sub(1).map(|i| list[i]) else {
            return Directive::Cruise;
        };

        let cursor = &mut self.cursors[slot];
        let fresh = *cursor != Some(command.time);
        *cursor = Some(command.time);

        Directive::Navigate {
            destination: command.destination,
            command_time: command.time,
            fresh,
        }
    }

    /// Time of the last command applied to `vehicle_id`.
    pub fn cursor(&self, vehicle_id: u32) -> Option<f64> {
        let slot = (vehicle_id as usize).checked_sub(1)?;
        self.cursors.get(slot).copied().flatten()
    }

    /// Number of commands accepted into the schedule.
    pub fn len(&self) -> usize {
        self.by_vehicle.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of commands rejected at construction.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
