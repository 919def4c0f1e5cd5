//! File adapters for the UAV fleet simulation.
//!
//! Parameter and command file loading, per-vehicle trace files,
//! console reports and the JSON run summary.

pub use uavfleet_core as core;

pub mod cmds;
pub mod error;
pub mod params;
pub mod report;
pub mod summary;
pub mod trace_file;

// Re-export key types for convenience.
pub use cmds::{load_commands, parse_commands, CommandList};
pub use error::InputError;
pub use params::{load_params, parse_params};
pub use summary::{load_summary, save_summary, RunSummary};
pub use trace_file::TraceDirectory;
