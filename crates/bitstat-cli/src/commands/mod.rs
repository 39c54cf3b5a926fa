//! Subcommand implementations.

pub mod bench;
pub mod check;
pub mod report;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader};

/// Read a JSON object mapping generator names to bit sequences.
fn read_sequences(path: &str) -> io::Result<BTreeMap<String, String>> {
    let file = File::open(path)?;
    let sequences = serde_json::from_reader(BufReader::new(file))?;
    Ok(sequences)
}

/// Load sequences from `path`. A missing or malformed file is logged and
/// comes back as an empty map; empty-string sequences are dropped with a
/// warning. Subcommands treat an empty map as "nothing to do" and report
/// it to the user themselves.
pub fn load_sequences(path: &str) -> BTreeMap<String, String> {
    match read_sequences(path) {
        Ok(mut sequences) => {
            sequences.retain(|name, sequence| {
                if sequence.is_empty() {
                    log::warn!("{path}: sequence {name:?} is empty, skipping");
                    return false;
                }
                true
            });
            if sequences.is_empty() {
                log::warn!("{path}: file contains no sequences");
            }
            sequences
        }
        Err(err) => {
            log::error!("error while reading from file {path}: {err}");
            BTreeMap::new()
        }
    }
}
