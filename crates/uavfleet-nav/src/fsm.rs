//! Waypoint navigation state machine.
//!
//! Given a destination and a tick duration, decides how much of the tick is
//! spent in transit and how much circling, then composes the motion
//! primitives accordingly. Operates on plain data; the two mode bits carried
//! across ticks live on `VehicleState` (`in_loiter`, `heading_snapped`).
//!
//! A single tick may span "still approaching", "cross onto the circle" and
//! "begin circling", so every invocation subdivides its own duration instead
//! of assuming one mode for the whole tick.

use glam::DVec2;

use uavfleet_core::types::{normalize_azimuth, Waypoint};
use uavfleet_core::vehicle::VehicleState;

use crate::error::NavError;
use crate::motion::{advance_loiter, advance_straight};

/// How the tick was spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Straight flight for the whole tick.
    Transit,
    /// Circling the destination for the whole tick.
    Loiter,
    /// Part transit, then circling for the remainder.
    TransitThenLoiter,
}

/// Outcome of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavUpdate {
    pub mode: NavMode,
    /// `in_loiter` went from false to true during this step.
    pub loiter_entered: bool,
}

/// Advance `state` toward `destination` for `duration` seconds.
///
/// Requires finite positive speed and turn radius, a finite destination and
/// a finite non-negative duration; anything else is rejected before the
/// state is touched. A zero duration leaves the state untouched.
pub fn navigate(
    state: &mut VehicleState,
    destination: &Waypoint,
    duration: f64,
) -> Result<NavUpdate, NavError> {
    check_preconditions(state, destination, duration)?;

    let was_loitering = state.in_loiter;
    if duration == 0.0 {
        return Ok(NavUpdate {
            mode: if was_loitering {
                NavMode::Loiter
            } else {
                NavMode::Transit
            },
            loiter_entered: false,
        });
    }

    let offset = destination.as_vec2() - state.position.planar();
    let distance = offset.length();
    let radius = state.turn_radius;

    let mode = if state.in_loiter || distance == radius {
        state.in_loiter = true;
        advance_loiter(state, destination, duration);
        NavMode::Loiter
    } else if distance < radius {
        exit_to_circle(state, destination, offset, distance, duration)
    } else {
        approach(state, destination, offset, distance, duration)
    };

    check_pose(state)?;
    Ok(NavUpdate {
        mode,
        loiter_entered: !was_loitering && state.in_loiter,
    })
}

/// Inside the turn radius: fly out through the destination, then circle.
fn exit_to_circle(
    state: &mut VehicleState,
    destination: &Waypoint,
    offset: DVec2,
    distance: f64,
    duration: f64,
) -> NavMode {
    let time_to_dest = distance / state.speed;
    let time_to_radius = state.turn_radius / state.speed;

    if !state.heading_snapped {
        state.azimuth = bearing(offset);
        state.heading_snapped = true;
    }

    if time_to_dest + time_to_radius < duration {
        state.heading_snapped = false;
        advance_straight(state, time_to_dest);
        advance_loiter(
            state,
            destination,
            duration - time_to_dest - time_to_radius,
        );
        // The loiter primitive left the vehicle on the circle.
        state.in_loiter = true;
        NavMode::TransitThenLoiter
    } else {
        advance_straight(state, duration);
        NavMode::Transit
    }
}

/// Outside the turn radius: head straight for the destination, committing to
/// the circle if this tick would reach or overshoot it.
fn approach(
    state: &mut VehicleState,
    destination: &Waypoint,
    offset: DVec2,
    distance: f64,
    duration: f64,
) -> NavMode {
    let radius = state.turn_radius;
    let to_dest = bearing(offset);

    let projected =
        state.position.planar() + DVec2::from_angle(to_dest) * (state.speed * duration);
    let final_distance = projected.distance(destination.as_vec2());

    state.azimuth = to_dest;

    // Lands inside the circle, or flies clean past its far side.
    if final_distance < radius || final_distance - radius > distance {
        let time_to_boundary = (radius - distance).abs() / state.speed;
        advance_straight(state, time_to_boundary);
        state.in_loiter = true;
        advance_loiter(state, destination, duration - time_to_boundary);
        NavMode::TransitThenLoiter
    } else {
        advance_straight(state, duration);
        NavMode::Transit
    }
}

fn bearing(offset: DVec2) -> f64 {
    normalize_azimuth(offset.y.atan2(offset.x))
}

fn check_preconditions(
    state: &VehicleState,
    destination: &Waypoint,
    duration: f64,
) -> Result<(), NavError> {
    if !(state.speed.is_finite() && state.speed > 0.0) {
        return Err(NavError::Speed(state.speed));
    }
    if !(state.turn_radius.is_finite() && state.turn_radius > 0.0) {
        return Err(NavError::TurnRadius(state.turn_radius));
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(NavError::Duration(duration));
    }
    if !destination.is_finite() {
        return Err(NavError::Destination {
            x: destination.x,
            y: destination.y,
        });
    }
    check_pose(state)
}

fn check_pose(state: &VehicleState) -> Result<(), NavError> {
    if state.position.is_finite() && state.azimuth.is_finite() {
        Ok(())
    } else {
        Err(NavError::NonFinitePose {
            x: state.position.x,
            y: state.position.y,
            azimuth: state.azimuth,
        })
    }
}

/// Straight transit with the same preconditions as [`navigate`], for
/// vehicles that have never been commanded.
pub fn cruise(state: &mut VehicleState, duration: f64) -> Result<(), NavError> {
    if !(state.speed.is_finite() && state.speed > 0.0) {
        return Err(NavError::Speed(state.speed));
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(NavError::Duration(duration));
    }
    check_pose(state)?;
    advance_straight(state, duration);
    check_pose(state)
}
