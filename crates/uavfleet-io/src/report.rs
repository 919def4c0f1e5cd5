//! Human-readable run reports: configuration, command list, fleet details.

use uavfleet_core::commands::Command;
use uavfleet_core::config::SimParams;
use uavfleet_core::vehicle::VehicleState;

pub fn configuration(params: &SimParams) -> String {
    format!(
        "Configuration:\n\
         Dt: {}\n\
         N_uav: {}\n\
         R: {:.1}\n\
         X0: {:.2}\n\
         Y0: {:.2}\n\
         Z0: {:.1}\n\
         V0: {:.1}\n\
         Az: {:.2}\n\
         TimeLim: {:.2}\n",
        params.dt,
        params.n_uav,
        params.r,
        params.x0,
        params.y0,
        params.z0,
        params.v0,
        params.az,
        params.time_lim,
    )
}

pub fn commands(commands: &[Command]) -> String {
    let mut out = String::from("Commands:\n");
    for c in commands {
        out.push_str(&format!(
            "Time: {}, Num: {}, X: {}, Y: {}\n",
            c.time, c.vehicle_id, c.destination.x, c.destination.y
        ));
    }
    out
}

pub fn fleet(vehicles: &[VehicleState]) -> String {
    let mut out = String::from("UAV Details:\n");
    for v in vehicles {
        out.push_str(&format!(
            "UAV{id}: X: {:.2}, Y: {:.2}, Z: {:.2}, Azimuth: {:.4}, V: {}, R: {}\n",
            v.position.x,
            v.position.y,
            v.position.z,
            v.azimuth,
            v.speed,
            v.turn_radius,
            id = v.id,
        ));
    }
    out
}
