//! CSV export of planned itineraries.
//!
//! The caller supplies the sink, so this layer never decides where output
//! lands — a file, a pipe, or an in-memory buffer in tests.

use std::io::Write;

use csv::Writer;

use ev_plan::ItineraryItem;

use crate::row::flatten;
use crate::ReportResult;

/// Write one CSV row per itinerary detail to `sink`, header included.
pub fn write_details_csv<W: Write>(sink: W, items: &[ItineraryItem]) -> ReportResult<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(["item_id", "datetime", "name", "address", "distance_km", "soc"])?;

    for row in flatten(items) {
        writer.write_record([
            row.item_id.to_string(),
            row.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            row.name,
            row.address,
            format!("{:.2}", row.distance_km),
            format!("{:.2}", row.soc),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
