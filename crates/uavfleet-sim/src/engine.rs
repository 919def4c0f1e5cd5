//! Simulation engine: the fixed-step driver.
//!
//! `SimulationEngine` owns the fleet and the command schedule, advances time
//! in `Dt` steps, and hands every vehicle's pose to a `TraceSink`. Completely
//! headless and deterministic.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use uavfleet_core::commands::Command;
use uavfleet_core::config::SimParams;
use uavfleet_core::constants::TIME_EPSILON;
use uavfleet_core::state::{FleetSnapshot, TraceRecord, VehicleView};
use uavfleet_core::types::SimTime;
use uavfleet_core::vehicle::VehicleState;
use uavfleet_nav::{cruise, navigate};

use crate::error::{SimError, SimResult};
use crate::scheduler::{CommandSchedule, Directive};
use crate::trace::TraceSink;

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Ticks executed after the initial record.
    pub ticks: u64,
    /// Trace records written across the whole fleet.
    pub records: u64,
}

/// The simulation engine. Owns the fleet and all run state.
pub struct SimulationEngine {
    params: SimParams,
    fleet: Vec<VehicleState>,
    schedule: CommandSchedule,
    time: SimTime,
}

impl SimulationEngine {
    /// Validate `params` and build the fleet at `t = 0`.
    pub fn new(params: SimParams, commands: impl IntoIterator<Item = Command>) -> SimResult<Self> {
        params.validate()?;
        let fleet = VehicleState::fleet(&params);
        let schedule = CommandSchedule::new(params.n_uav, commands);

        Ok(Self {
            params,
            fleet,
            schedule,
            time: SimTime::default(),
        })
    }

    /// Advance time by one `Dt` and update every vehicle.
    ///
    /// Commands due strictly before the new time are considered. Vehicles
    /// never read each other's state.
    pub fn tick(&mut self) -> SimResult<()> {
        let dt = self.params.dt;
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        for vehicle in &mut self.fleet {
            let vehicle_id = vehicle.id;
            let nav_err = |source| SimError::Navigation { vehicle_id, source };

            match self.schedule.resolve(vehicle_id, now) {
                Directive::Cruise => cruise(vehicle, dt).map_err(nav_err)?,
                Directive::Navigate {
                    destination,
                    command_time,
                    fresh,
                } => {
                    if fresh {
                        debug!(
                            vehicle_id,
                            command_time,
                            x = destination.x,
                            y = destination.y,
                            "Command armed"
                        );
                        vehicle.reset_mode();
                    }
                    let update = navigate(vehicle, &destination, dt).map_err(nav_err)?;
                    if update.loiter_entered {
                        debug!(vehicle_id, time = now, "Entered loiter");
                    }
                }
            }
        }
        Ok(())
    }

    /// Emit `t = 0` and one record per tick through `TimeLim`, clearing the
    /// sink's previous traces first.
    pub fn run<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> SimResult<RunStats> {
        let ids: Vec<u32> = self.fleet.iter().map(|v| v.id).collect();
        sink.begin(&ids)?;

        info!(
            vehicles = ids.len(),
            commands = self.schedule.len(),
            dt = self.params.dt,
            time_lim = self.params.time_lim,
            "Simulation started"
        );

        let mut stats = RunStats::default();
        loop {
            self.emit(sink)?;
            stats.records += self.fleet.len() as u64;
            if !self.next_tick_within_horizon() {
                break;
            }
            self.tick()?;
            stats.ticks += 1;
        }
        sink.finish()?;

        info!(ticks = stats.ticks, records = stats.records, "Simulation finished");
        Ok(stats)
    }

    /// Write every vehicle's current pose at the current time.
    pub fn emit<S: TraceSink + ?Sized>(&self, sink: &mut S) -> SimResult<()> {
        let now = self.time.elapsed_secs;
        for vehicle in &self.fleet {
            sink.record(vehicle.id, &TraceRecord::of(vehicle, now))?;
        }
        Ok(())
    }

    fn next_tick_within_horizon(&self) -> bool {
        let dt = self.params.dt;
        let next = (self.time.tick + 1) as f64 * dt;
        next <= self.params.time_lim + TIME_EPSILON * dt
    }

    /// Build a snapshot of the fleet at the current time.
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            time: self.time,
            vehicles: self
                .fleet
                .iter()
                .map(|v| VehicleView {
                    id: v.id,
                    position: v.position,
                    azimuth: v.azimuth,
                    in_loiter: v.in_loiter,
                    active_command_time: self.schedule.cursor(v.id),
                })
                .collect(),
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn fleet(&self) -> &[VehicleState] {
        &self.fleet
    }

    pub fn vehicle(&self, id: u32) -> Option<&VehicleState> {
        self.fleet.get((id as usize).checked_sub(1)?)
    }

    pub fn schedule(&self) -> &CommandSchedule {
        &self.schedule
    }

    /// Mutable access to one vehicle (for tests that need to corrupt state).
    #[cfg(test)]
    pub(crate) fn vehicle_mut(&mut self, id: u32) -> Option<&mut VehicleState> {
        self.fleet.get_mut((id as usize).checked_sub(1)?)
    }
}
