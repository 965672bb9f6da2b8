//! Text renderers for trips and planned itineraries.
//!
//! Output is fixed-width ASCII suitable for a terminal; nothing here is
//! machine-parsed (use [`crate::row`] / [`crate::export`] for that).

use std::fmt::Write;

use ev_core::{Trip, Waypoint};
use ev_plan::ItineraryItem;

use crate::format::format_minutes_dhm;

/// Render a trip as an indented tree of legs and waypoints with per-leg and
/// whole-trip distance/duration totals.
pub fn render_trip(trip: &Trip) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", trip.name);

    for leg in &trip.legs {
        let _ = writeln!(out, "|-- {}", leg.name);
        for wp in &leg.waypoints {
            let _ = writeln!(out, "|   |-- {}", waypoint_line(wp));
        }
        let _ = writeln!(
            out,
            "|   `-- {: >7.2} km | {}",
            leg.distance_km(),
            format_minutes_dhm(leg.duration_min())
        );
    }

    let _ = writeln!(
        out,
        "`-- total {: >7.2} km | {}",
        trip.distance_km(),
        format_minutes_dhm(trip.duration_min())
    );

    out
}

/// Render planned items as one line per detail:
///
/// ```text
/// 1 |-- [ 60.49%] 2022-12-16 10:15:00  100.00 km  Ahmednagar DC
/// ```
pub fn render_itinerary(items: &[ItineraryItem]) -> String {
    let mut out = String::new();

    for item in items {
        for detail in &item.details {
            let _ = writeln!(
                out,
                "{} |-- [{: >6.2}%] {}  {: >7.2} km  {}",
                item.item_id,
                detail.soc,
                detail.datetime.format("%Y-%m-%d %H:%M:%S"),
                detail.distance_km,
                truncate(&detail.name, 40)
            );
        }
    }

    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn waypoint_line(wp: &Waypoint) -> String {
    format!(
        "[{: >7}] | {: >7.2} km | {} | {}",
        wp.kind.to_string(),
        wp.distance_km,
        format_minutes_dhm(wp.duration_min),
        truncate(&wp.name, 40)
    )
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
