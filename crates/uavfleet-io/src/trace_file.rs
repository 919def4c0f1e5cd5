//! Per-vehicle trace files.
//!
//! One text file per vehicle (`UAV<id>.txt`) in an output directory, one
//! `time x y azimuth` line per record with fixed decimals.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use uavfleet_core::constants::{TRACE_DECIMALS, TRACE_FILE_PREFIX};
use uavfleet_core::state::TraceRecord;
use uavfleet_sim::TraceSink;

/// Trace sink writing `UAV<id>.txt` files into a directory.
pub struct TraceDirectory {
    dir: PathBuf,
    writers: BTreeMap<u32, BufWriter<File>>,
}

impl TraceDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            writers: BTreeMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn writer(&mut self, vehicle_id: u32) -> io::Result<&mut BufWriter<File>> {
        match self.writers.entry(vehicle_id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(trace_path(&self.dir, vehicle_id))?;
                Ok(entry.insert(BufWriter::new(file)))
            }
        }
    }
}

/// Path of `vehicle_id`'s trace file inside `dir`.
pub fn trace_path(dir: &Path, vehicle_id: u32) -> PathBuf {
    dir.join(format!("{TRACE_FILE_PREFIX}{vehicle_id}.txt"))
}

/// Render one record as a trace line (without the newline).
pub fn format_record(record: &TraceRecord) -> String {
    let p = TRACE_DECIMALS;
    format!(
        "{:.p$} {:.p$} {:.p$} {:.p$}",
        record.time, record.x, record.y, record.azimuth
    )
}

impl TraceSink for TraceDirectory {
    fn begin(&mut self, vehicle_ids: &[u32]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.writers.clear();
        for &id in vehicle_ids {
            let path = trace_path(&self.dir, id);
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Removed previous trace"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn record(&mut self, vehicle_id: u32, record: &TraceRecord) -> io::Result<()> {
        let line = format_record(record);
        writeln!(self.writer(vehicle_id)?, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        for writer in self.writers.values_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(time: f64, x: f64, y: f64, azimuth: f64) -> TraceRecord {
        TraceRecord { time, x, y, azimuth }
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(
            format_record(&rec(1.0, 10.456, -3.0, 6.2)),
            "1.00 10.46 -3.00 6.20"
        );
    }

    #[test]
    fn test_trace_path_naming() {
        assert_eq!(
            trace_path(Path::new("out"), 7),
            Path::new("out").join("UAV7.txt")
        );
    }

    #[test]
    fn test_writes_one_file_per_vehicle() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = TraceDirectory::new(dir.path());
        sink.begin(&[1, 2]).unwrap();
        sink.record(1, &rec(0.0, 0.0, 0.0, 0.0)).unwrap();
        sink.record(2, &rec(0.0, 5.0, 5.0, 1.0)).unwrap();
        sink.record(1, &rec(1.0, 10.0, 0.0, 0.0)).unwrap();
        sink.finish().unwrap();

        let one = fs::read_to_string(dir.path().join("UAV1.txt")).unwrap();
        assert_eq!(one, "0.00 0.00 0.00 0.00\n1.00 10.00 0.00 0.00\n");
        let two = fs::read_to_string(dir.path().join("UAV2.txt")).unwrap();
        assert_eq!(two, "0.00 5.00 5.00 1.00\n");
    }

    #[test]
    fn test_begin_clears_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UAV1.txt"), "stale line\n").unwrap();
        fs::write(dir.path().join("UAV9.txt"), "other fleet\n").unwrap();

        let mut sink = TraceDirectory::new(dir.path());
        sink.begin(&[1]).unwrap();
        sink.record(1, &rec(0.0, 1.0, 2.0, 3.0)).unwrap();
        sink.finish().unwrap();

        let one = fs::read_to_string(dir.path().join("UAV1.txt")).unwrap();
        assert_eq!(one, "0.00 1.00 2.00 3.00\n");
        // Vehicles outside this fleet are left alone
        assert!(dir.path().join("UAV9.txt").exists());
    }

    #[test]
    fn test_begin_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("a");
        let mut sink = TraceDirectory::new(&nested);
        sink.begin(&[1]).unwrap();
        assert!(nested.is_dir());
    }
}
