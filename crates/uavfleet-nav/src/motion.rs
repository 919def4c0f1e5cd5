//! Motion primitives: straight transit and constant-radius loiter.
//!
//! Both are total functions over `duration >= 0` and only touch the
//! horizontal position and azimuth. Preconditions on speed and radius are
//! checked by the navigation FSM before it calls in here.

use glam::DVec2;

use uavfleet_core::types::{normalize_azimuth, Waypoint};
use uavfleet_core::vehicle::VehicleState;

/// Fly along the current azimuth at constant speed for `duration` seconds.
pub fn advance_straight(state: &mut VehicleState, duration: f64) {
    let heading = DVec2::from_angle(state.azimuth);
    let p = state.position.planar() + heading * (state.speed * duration);
    state.position.set_planar(p);
}

/// Circle `center` clockwise at angular rate `speed / turn_radius`.
///
/// The new position is placed on the circle from the new azimuth rather than
/// integrated from velocity, so the vehicle sits exactly `turn_radius` from
/// the center no matter how many ticks it has been circling.
pub fn advance_loiter(state: &mut VehicleState, center: &Waypoint, duration: f64) {
    let angular_rate = state.speed / state.turn_radius;
    state.azimuth = normalize_azimuth(state.azimuth - angular_rate * duration);

    let p = center.as_vec2() - DVec2::from_angle(state.azimuth) * state.turn_radius;
    state.position.set_planar(p);
}
