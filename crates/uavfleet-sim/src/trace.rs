//! Trace output capability.
//!
//! The engine never resolves paths; callers hand it a sink.

use std::collections::BTreeMap;
use std::io;

use uavfleet_core::state::TraceRecord;

/// Append-only per-vehicle trace destination.
pub trait TraceSink {
    /// Called once before the first record. Clears any traces a previous run
    /// left for these vehicles.
    fn begin(&mut self, vehicle_ids: &[u32]) -> io::Result<()>;

    /// Append one record to `vehicle_id`'s trace.
    fn record(&mut self, vehicle_id: u32, record: &TraceRecord) -> io::Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every trace in memory, keyed by vehicle id.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    traces: BTreeMap<u32, Vec<TraceRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace(&self, vehicle_id: u32) -> &[TraceRecord] {
        self.traces
            .get(&vehicle_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vehicle_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.traces.keys().copied()
    }
}

impl TraceSink for MemorySink {
    fn begin(&mut self, vehicle_ids: &[u32]) -> io::Result<()> {
        for id in vehicle_ids {
            self.traces.insert(*id, Vec::new());
        }
        Ok(())
    }

    fn record(&mut self, vehicle_id: u32, record: &TraceRecord) -> io::Result<()> {
        self.traces.entry(vehicle_id).or_default().push(*record);
        Ok(())
    }
}
