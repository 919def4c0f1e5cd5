//! Simulation engine for the UAV fleet.
//!
//! Resolves which command governs each vehicle every tick, drives the
//! navigation state machine, and streams poses to a trace sink.

pub mod engine;
pub mod error;
pub mod scheduler;
pub mod trace;

pub use engine::{RunStats, SimulationEngine};
pub use error::{SimError, SimResult};
pub use trace::{MemorySink, TraceSink};
pub use uavfleet_core as core;
