//! `ev-core` — foundational types for the `ev-trip` itinerary planner.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `chrono`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`vehicle`] | `Car`, `Charger`, `ChargerKind`                   |
//! | [`trip`]    | `Waypoint`, `WaypointKind`, `Leg`, `Trip`         |
//! | [`params`]  | `DriveParams`                                     |
//! | [`time`]    | leg start-time and fractional-hour helpers        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod params;
pub mod time;
pub mod trip;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use params::DriveParams;
pub use time::{hours_delta, leg_start};
pub use trip::{Leg, Trip, Waypoint, WaypointKind};
pub use vehicle::{Car, Charger, ChargerKind};
