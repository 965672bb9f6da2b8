//! PlugShare export normalization.
//!
//! The waypoint scraper dumps each stop as loosely-typed display strings:
//! an icon class standing in for the stop type, distance as `"123.4 km"`,
//! and driving time as `"1 hr 5 min"`.  [`normalize`] turns one raw record
//! into a typed [`Waypoint`].
//!
//! # Icon mapping
//!
//! | Icon     | Kind                    |
//! |----------|-------------------------|
//! | `icon-M` | [`WaypointKind::Marker`]  |
//! | `icon-Y` | [`WaypointKind::Charger`] |
//! | other    | [`WaypointKind::Unknown`] |

use serde::Deserialize;

use ev_core::{Waypoint, WaypointKind};

use crate::{DataError, DataResult};

/// One waypoint as exported, before normalization.
#[derive(Clone, Debug, Deserialize)]
pub struct RawWaypoint {
    /// Display name of the stop.
    pub display: String,
    /// Icon class encoding the stop type.
    pub icon: String,
    pub address: String,
    /// Distance text, e.g. `"104.5 km"`.
    pub distance: String,
    /// Duration text, e.g. `"1 hr 42 min"`.
    pub duration: String,
}

/// Normalize one exported record into a typed [`Waypoint`].
pub fn normalize(raw: &RawWaypoint) -> DataResult<Waypoint> {
    let kind = match raw.icon.as_str() {
        "icon-M" => WaypointKind::Marker,
        "icon-Y" => WaypointKind::Charger,
        _ => WaypointKind::Unknown,
    };

    Ok(Waypoint {
        name: raw.display.clone(),
        kind,
        address: raw.address.clone(),
        distance_km: parse_distance_km(&raw.distance)?,
        duration_min: parse_duration_min(&raw.duration)?,
    })
}

// ── Text parsers ──────────────────────────────────────────────────────────────

/// Parse `"104.5 km"` (or a bare number) into km.
fn parse_distance_km(text: &str) -> DataResult<f64> {
    let token = text
        .trim()
        .split_whitespace()
        .next()
        .ok_or_else(|| DataError::Parse(format!("empty distance text {text:?}")))?;

    token
        .parse::<f64>()
        .map_err(|_| DataError::Parse(format!("invalid distance text {text:?}")))
}

/// Parse unit-labelled duration text (`"1 hr 42 min"`, `"55 min"`,
/// `"2 d 3 hr"`) into total minutes.
fn parse_duration_min(text: &str) -> DataResult<i64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return Err(DataError::Parse(format!("invalid duration text {text:?}")));
    }

    let mut total_min = 0_i64;
    for pair in tokens.chunks(2) {
        let value: i64 = pair[0]
            .parse()
            .map_err(|_| DataError::Parse(format!("invalid duration text {text:?}")))?;
        let per_unit = match pair[1] {
            "min" => 1,
            "hr" | "h" => 60,
            "d" | "day" | "days" => 24 * 60,
            unit => {
                return Err(DataError::Parse(format!(
                    "unknown duration unit {unit:?} in {text:?}"
                )));
            }
        };
        total_min += value * per_unit;
    }

    Ok(total_min)
}
