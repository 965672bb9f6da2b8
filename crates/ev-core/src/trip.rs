//! Trip structure: waypoints grouped into legs, legs grouped into a trip.
//!
//! # Segment convention
//!
//! `Waypoint.distance_km` / `Waypoint.duration_min` describe the road
//! segment driven *after departing* that waypoint, towards the next one.
//! The values on a leg's final waypoint are therefore unused, and the first
//! waypoint of a leg is its origin (nothing was driven to reach it).
//! Leg and trip totals follow the same convention and sum all but the last
//! waypoint of each leg.

use std::fmt;

// ── WaypointKind ──────────────────────────────────────────────────────────────

/// How a waypoint was classified by the source map export.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointKind {
    /// Plain point of interest; drive through without stopping to charge.
    Marker,
    /// A charging station — the planner tops up here opportunistically.
    Charger,
    /// Anything the normalizer could not classify.
    #[default]
    Unknown,
}

impl fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaypointKind::Marker => write!(f, "marker"),
            WaypointKind::Charger => write!(f, "charger"),
            WaypointKind::Unknown => write!(f, "unknown"),
        }
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One stop along a leg.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name:    String,
    pub kind:    WaypointKind,
    pub address: String,

    /// Distance of the outgoing segment in km (see module docs).
    pub distance_km: f64,

    /// Driving time of the outgoing segment in minutes.
    pub duration_min: i64,
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// One day's portion of a trip: an ordered run of waypoints.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub name: String,

    /// External map link for the leg's route (kept verbatim from the export).
    pub maps_link: String,

    /// Ordered waypoints; the first is the leg origin.
    pub waypoints: Vec<Waypoint>,
}

impl Leg {
    /// Total driving distance of the leg in km.
    pub fn distance_km(&self) -> f64 {
        segments(&self.waypoints).map(|wp| wp.distance_km).sum()
    }

    /// Total driving time of the leg in minutes.
    pub fn duration_min(&self) -> i64 {
        segments(&self.waypoints).map(|wp| wp.duration_min).sum()
    }
}

/// All waypoints with a driven outgoing segment (everything but the last).
fn segments(waypoints: &[Waypoint]) -> impl Iterator<Item = &Waypoint> {
    let driven = waypoints.len().saturating_sub(1);
    waypoints.iter().take(driven)
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// A multi-leg journey.  Legs execute sequentially, one per simulated day.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub name: String,
    pub legs: Vec<Leg>,
}

impl Trip {
    /// Total driving distance across all legs in km.
    pub fn distance_km(&self) -> f64 {
        self.legs.iter().map(Leg::distance_km).sum()
    }

    /// Total driving time across all legs in minutes.
    pub fn duration_min(&self) -> i64 {
        self.legs.iter().map(Leg::duration_min).sum()
    }
}
