//! JSON-lines trip loader.
//!
//! # File format
//!
//! One leg per line, waypoints in driving order:
//!
//! ```json
//! {"trip_name": "Pune to Ellora", "maps_link": "https://...", "waypoints": [
//!   {"display": "Pune", "icon": "icon-M", "address": "...", "distance": "104.5 km", "duration": "1 hr 42 min"},
//!   ...
//! ]}
//! ```
//!
//! The trip takes its name from the file stem (`ellora.jsonl` → `"ellora"`);
//! [`load_trip_reader`] takes the name explicitly.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use ev_core::{Leg, Trip};

use crate::plugshare::{normalize, RawWaypoint};
use crate::{DataError, DataResult};

// ── JSONL record ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LegRecord {
    trip_name: String,
    maps_link: String,
    waypoints: Vec<RawWaypoint>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a trip from a `.jsonl` file on disk.
pub fn load_trip(path: &Path) -> DataResult<Trip> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_trip_reader(file, &name)
}

/// Like [`load_trip`] but accepts any `Read` source and an explicit name.
pub fn load_trip_reader<R: Read>(reader: R, name: &str) -> DataResult<Trip> {
    let mut legs = Vec::new();

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(DataError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let record: LegRecord = serde_json::from_str(&line)
            .map_err(|e| DataError::Parse(format!("line {}: {e}", line_no + 1)))?;

        let waypoints = record
            .waypoints
            .iter()
            .map(normalize)
            .collect::<DataResult<Vec<_>>>()
            .map_err(|e| match e {
                DataError::Parse(msg) => DataError::Parse(format!("line {}: {msg}", line_no + 1)),
                other => other,
            })?;

        legs.push(Leg {
            name: record.trip_name,
            maps_link: record.maps_link,
            waypoints,
        });
    }

    Ok(Trip { name: name.to_string(), legs })
}
