//! Per-vehicle navigation for the UAV fleet simulation.
//!
//! Motion primitives (straight transit, circular loiter) and the waypoint
//! navigation state machine that composes them each tick.

pub mod error;
pub mod fsm;
pub mod motion;

pub use error::NavError;
pub use fsm::{cruise, navigate, NavMode, NavUpdate};
pub use uavfleet_core as core;
