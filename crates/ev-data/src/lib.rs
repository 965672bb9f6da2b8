//! `ev-data` — loads the static datasets the planner consumes.
//!
//! Three concerns live here, all upstream of planning:
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`catalog`]   | `CarCatalog`, `ChargerCatalog`: CSV-backed lookup with `find(query)` |
//! | [`plugshare`] | `RawWaypoint` → [`ev_core::Waypoint`] normalization    |
//! | [`loader`]    | JSON-lines trip files → [`ev_core::Trip`]              |
//!
//! All loaders accept any `Read` source so tests can pass in-memory buffers
//! (`std::io::Cursor`) instead of fixture files.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod plugshare;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{CarCatalog, ChargerCatalog};
pub use error::{DataError, DataResult};
pub use loader::{load_trip, load_trip_reader};
pub use plugshare::{normalize, RawWaypoint};
