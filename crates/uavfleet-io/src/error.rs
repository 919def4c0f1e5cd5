use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain run inputs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid value {value:?} for {key}")]
    InvalidValue {
        line: usize,
        key: &'static str,
        value: String,
    },
}
