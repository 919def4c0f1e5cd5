//! Key/value parameter file loader.
//!
//! One `Key=Value` pair per line, split at the first `=`. Unknown keys and
//! lines without `=` are ignored; keys that never appear stay at zero and
//! are caught later by `SimParams::validate`.

use std::fs;
use std::path::Path;

use tracing::warn;

use uavfleet_core::config::SimParams;

use crate::error::InputError;

/// Load parameters from a file. A missing or unreadable file is a hard error.
pub fn load_params(path: &Path) -> Result<SimParams, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_params(&text)
}

/// Parse parameter text.
pub fn parse_params(text: &str) -> Result<SimParams, InputError> {
    let mut params = SimParams::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let Some((key, raw)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (name, slot): (&'static str, &mut f64) = match key {
            "Dt" => ("Dt", &mut params.dt),
            "R" => ("R", &mut params.r),
            "X0" => ("X0", &mut params.x0),
            "Y0" => ("Y0", &mut params.y0),
            "Z0" => ("Z0", &mut params.z0),
            "V0" => ("V0", &mut params.v0),
            "Az" => ("Az", &mut params.az),
            "TimeLim" => ("TimeLim", &mut params.time_lim),
            "N_uav" => {
                let value = parse_number(line_no, "N_uav", raw)?;
                if value < 0.0 || value > u32::MAX as f64 {
                    return Err(invalid(line_no, "N_uav", raw));
                }
                // Truncates like an integer read of a real
                params.n_uav = value as u32;
                continue;
            }
            other => {
                warn!(line = line_no, key = other, "Ignoring unknown parameter");
                continue;
            }
        };
        *slot = parse_number(line_no, name, raw)?;
    }

    Ok(params)
}

fn parse_number(line: usize, key: &'static str, raw: &str) -> Result<f64, InputError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(line, key, raw)),
    }
}

fn invalid(line: usize, key: &'static str, raw: &str) -> InputError {
    InputError::InvalidValue {
        line,
        key,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Dt=0.1\nN_uav=3\nR=5\nX0=1.5\nY0=-2\nZ0=100\nV0=20\nAz=0.785\nTimeLim=60\n";

    #[test]
    fn test_parse_all_keys() {
        let p = parse_params(SAMPLE).unwrap();
        assert_eq!(p.dt, 0.1);
        assert_eq!(p.n_uav, 3);
        assert_eq!(p.r, 5.0);
        assert_eq!(p.x0, 1.5);
        assert_eq!(p.y0, -2.0);
        assert_eq!(p.z0, 100.0);
        assert_eq!(p.v0, 20.0);
        assert_eq!(p.az, 0.785);
        assert_eq!(p.time_lim, 60.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_whitespace_and_crlf() {
        let p = parse_params("Dt = 0.5\r\n  N_uav=2 \r\n").unwrap();
        assert_eq!(p.dt, 0.5);
        assert_eq!(p.n_uav, 2);
    }

    #[test]
    fn test_unknown_keys_and_noise_ignored() {
        let p = parse_params("# comment\nColor=blue\n\nDt=0.2\nR=\n").unwrap();
        assert_eq!(p.dt, 0.2);
        assert_eq!(p.r, 0.0);
    }

    #[test]
    fn test_missing_keys_stay_zero() {
        let p = parse_params("Dt=1\n").unwrap();
        assert_eq!(p.n_uav, 0);
        assert_eq!(p.v0, 0.0);
        assert!(p.validate().is_err(), "zeroed fields must not pass validation");
    }

    #[test]
    fn test_fleet_size_truncates() {
        let p = parse_params("N_uav=4.9\n").unwrap();
        assert_eq!(p.n_uav, 4);
    }

    #[test]
    fn test_bad_values_rejected() {
        let err = parse_params("Dt=0.1\nV0=fast\n").unwrap_err();
        match err {
            InputError::InvalidValue { line, key, value } => {
                assert_eq!(line, 2);
                assert_eq!(key, "V0");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(parse_params("N_uav=-1\n").is_err());
        assert!(parse_params("R=inf\n").is_err());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = load_params(Path::new("/nonexistent/SimParams.ini")).unwrap_err();
        assert!(matches!(err, InputError::Unavailable { .. }));
    }
}
