//! Simulation constants and file-layout defaults.

/// Slack, in fractions of a tick, when comparing elapsed time against the
/// run horizon. Absorbs rounding in `tick * dt`.
pub const TIME_EPSILON: f64 = 1e-9;

// --- File layout ---

/// Default parameter file name.
pub const DEFAULT_PARAMS_FILE: &str = "SimParams.ini";

/// Default command list file name.
pub const DEFAULT_COMMANDS_FILE: &str = "SimCmds.txt";

/// Trace file name prefix; the vehicle id and `.txt` follow.
pub const TRACE_FILE_PREFIX: &str = "UAV";

/// Decimal places written for every trace field.
pub const TRACE_DECIMALS: usize = 2;
