//! JSON run summary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use uavfleet_core::config::SimParams;
use uavfleet_core::state::FleetSnapshot;
use uavfleet_sim::RunStats;

/// What a run consumed and where the fleet ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub params: SimParams,
    /// Commands accepted into the schedule.
    pub commands_accepted: usize,
    /// Command lines that failed to parse.
    pub commands_skipped: usize,
    /// Parsed commands rejected by the scheduler (unknown vehicle, non-finite).
    pub commands_dropped: usize,
    pub stats: RunStats,
    pub final_state: FleetSnapshot,
}

pub fn save_summary(summary: &RunSummary, path: &Path) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

pub fn load_summary(path: &Path) -> io::Result<RunSummary> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uavfleet_core::commands::Command;
    use uavfleet_sim::{MemorySink, SimulationEngine};

    #[test]
    fn test_summary_file_round_trip() {
        let params = SimParams {
            dt: 1.0,
            n_uav: 2,
            r: 5.0,
            v0: 10.0,
            time_lim: 10.0,
            ..Default::default()
        };
        let mut engine =
            SimulationEngine::new(params.clone(), [Command::new(0.0, 1, 20.0, 0.0)]).unwrap();
        let stats = engine.run(&mut MemorySink::new()).unwrap();

        let summary = RunSummary {
            params,
            commands_accepted: engine.schedule().len(),
            commands_skipped: 0,
            commands_dropped: engine.schedule().dropped(),
            stats,
            final_state: engine.snapshot(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        save_summary(&summary, &path).unwrap();
        let back = load_summary(&path).unwrap();
        assert_eq!(back.params, summary.params);
        assert_eq!(back.commands_accepted, 1);
        assert_eq!(back.final_state.vehicles.len(), 2);
        assert!(back.final_state.vehicles[0].in_loiter);
        assert_eq!(back.final_state.vehicles[0].active_command_time, Some(0.0));
        assert_eq!(back.final_state.vehicles[1].active_command_time, None);
        assert_eq!(back.stats.ticks, 10);
    }
}
