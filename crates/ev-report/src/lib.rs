//! `ev-report` — presentation layer for planned itineraries.
//!
//! Everything here is a pure function from domain records to text or rows;
//! no decisions are made at this layer.
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`format`] | duration formatting (`"01:30"`, day/hour/minute)  |
//! | [`table`]  | trip summary and itinerary text renderers         |
//! | [`row`]    | flat `DetailRow` export records                   |
//! | [`export`] | CSV writer over any `io::Write` sink              |

pub mod error;
pub mod export;
pub mod format;
pub mod row;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ReportError, ReportResult};
pub use export::write_details_csv;
pub use format::{format_clock_hours, format_minutes_dhm};
pub use row::{flatten, DetailRow};
pub use table::{render_itinerary, render_trip};
