//! Plain data rows for downstream tabulation or export.

use chrono::NaiveDateTime;

use ev_plan::ItineraryItem;

/// One itinerary detail flattened to a self-contained record.
#[derive(Clone, PartialEq, Debug)]
pub struct DetailRow {
    pub item_id:     u32,
    pub datetime:    NaiveDateTime,
    pub name:        String,
    pub address:     String,
    pub distance_km: f64,
    pub soc:         f64,
}

/// Flatten planned items into per-detail rows, in itinerary order.
pub fn flatten(items: &[ItineraryItem]) -> Vec<DetailRow> {
    items
        .iter()
        .flat_map(|item| {
            item.details.iter().map(|d| DetailRow {
                item_id:     item.item_id,
                datetime:    d.datetime,
                name:        d.name.clone(),
                address:     d.address.clone(),
                distance_km: d.distance_km,
                soc:         d.soc,
            })
        })
        .collect()
}
