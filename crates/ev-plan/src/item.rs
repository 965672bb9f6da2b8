//! Plain record types emitted by the planner.

use chrono::NaiveDateTime;

/// A snapshot of the simulation state at one instant: where the car is,
/// how far it has driven, and how full the battery is.
///
/// Snapshots are append-only once emitted, with one exception: the leg
/// origin snapshot may be rewritten by depletion recovery (see
/// [`Itinerary::plan`][crate::Itinerary::plan]).
#[derive(Clone, PartialEq, Debug)]
pub struct ItineraryDetail {
    pub datetime: NaiveDateTime,
    pub name:     String,
    pub address:  String,

    /// Cumulative odometer reading in km.
    pub distance_km: f64,

    /// Battery state of charge (percent) at this instant.
    pub soc: f64,
}

/// One waypoint-to-waypoint transition in the produced itinerary.
///
/// Usually holds a single detail (arrival).  A charging stop folds a second
/// detail into the same item: arrival state, then post-charge state.
#[derive(Clone, PartialEq, Debug)]
pub struct ItineraryItem {
    pub item_id: u32,
    pub details: Vec<ItineraryDetail>,
}
