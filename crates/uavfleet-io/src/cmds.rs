//! Command list loader.
//!
//! Each line is `time vehicle_id x y`, whitespace separated. Anything after
//! the fourth token is ignored. Lines that do not parse are skipped and
//! counted; they never abort loading.

use std::fs;
use std::path::Path;

use tracing::warn;

use uavfleet_core::commands::Command;

use crate::error::InputError;

/// Parsed commands in file order, plus the number of lines skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    pub commands: Vec<Command>,
    pub skipped: usize,
}

/// Load a command list from a file. A missing file is a hard error.
pub fn load_commands(path: &Path) -> Result<CommandList, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_commands(&text))
}

pub fn parse_commands(text: &str) -> CommandList {
    let mut list = CommandList::default();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(command) => list.commands.push(command),
            None => {
                warn!(line = idx + 1, content = line, "Skipping malformed command");
                list.skipped += 1;
            }
        }
    }
    list
}

fn parse_line(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let time: f64 = tokens.next()?.parse().ok()?;
    let vehicle_id: u32 = tokens.next()?.parse().ok()?;
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    Some(Command::new(time, vehicle_id, x, y))
}
