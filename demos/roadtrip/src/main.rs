//! roadtrip — end-to-end demo for the ev-trip planner.
//!
//! Plans a two-day Pune → Ellora trip for a Tata Nexon EV Max with one DC
//! fast-charge stop en route, then prints the trip tree, the planned
//! itinerary, and a CSV export.  All input data is embedded so the demo
//! runs without fixture files; swap the consts for `load_csv`/`load_trip`
//! calls to plan a real trip.

use std::io::Cursor;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use ev_core::DriveParams;
use ev_data::{load_trip_reader, CarCatalog, ChargerCatalog};
use ev_plan::{Itinerary, ItineraryItem, PlanObserver};
use ev_report::{format_clock_hours, render_itinerary, render_trip, write_details_csv};

// ── Embedded datasets ─────────────────────────────────────────────────────────

const CARS_CSV: &str = "\
make,model,variant,capacity,max_range,exp_range,ac_charge_rate,dc_charge_rate\n\
Tata,Nexon EV,Max,40.5,437,330,7.2,30\n\
Tata,Tiago EV,LR,24,315,250,7.2,25\n\
MG,ZS EV,Excite,50.3,461,370,7.4,80\n\
";

const CHARGERS_CSV: &str = "\
type,charge_rate\n\
AC,3.3\n\
AC,7.2\n\
DC,25\n\
DC,30\n\
";

// One leg per line; waypoint distance/duration describe the segment driven
// after departing that waypoint.
const TRIP_JSONL: &str = concat!(
    r#"{"trip_name": "Pune to Aurangabad", "maps_link": "https://maps.example/leg1", "waypoints": ["#,
    r#"{"display": "Pune", "icon": "icon-M", "address": "Pune, MH", "distance": "120 km", "duration": "2 hr"},"#,
    r#"{"display": "Ahmednagar DC", "icon": "icon-Y", "address": "NH 60, Ahmednagar, MH", "distance": "115 km", "duration": "2 hr 5 min"},"#,
    r#"{"display": "Aurangabad", "icon": "icon-M", "address": "Aurangabad, MH", "distance": "0 km", "duration": "0 min"}]}"#,
    "\n",
    r#"{"trip_name": "Aurangabad to Ellora", "maps_link": "https://maps.example/leg2", "waypoints": ["#,
    r#"{"display": "Aurangabad", "icon": "icon-M", "address": "Aurangabad, MH", "distance": "29 km", "duration": "49 min"},"#,
    r#"{"display": "Ellora Caves", "icon": "icon-M", "address": "Ellora, MH", "distance": "0 km", "duration": "0 min"}]}"#,
    "\n",
);

// ── Progress printer ──────────────────────────────────────────────────────────

struct ProgressPrinter;

impl PlanObserver for ProgressPrinter {
    fn on_leg_start(&mut self, leg: usize, starts_at: chrono::NaiveDateTime) {
        println!("leg {leg} departs {starts_at}");
    }

    fn on_item(&mut self, item: &ItineraryItem) {
        if let Some(detail) = item.details.last() {
            println!(
                "  item {}: {} at {:.1} % SOC",
                item.item_id, detail.name, detail.soc
            );
        }
    }

    fn on_recovery_charge(&mut self, leg: usize, hours: f64) {
        println!("  leg {leg}: overnight recovery charge, {}", format_clock_hours(hours));
    }

    fn on_opportunistic_charge(&mut self, _leg: usize, _waypoint: usize, hours: f64) {
        println!("  fast-charge stop, {}", format_clock_hours(hours));
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn start_date() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2022, 12, 16)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid start date")
}

fn main() -> Result<()> {
    let cars = CarCatalog::from_reader(Cursor::new(CARS_CSV))?;
    let chargers = ChargerCatalog::from_reader(Cursor::new(CHARGERS_CSV))?;

    let car = cars.find("nexon ev max")?.clone();
    let default_charger = *chargers.find("dc 30")?;
    let recovery_charger = *chargers.find("ac 3.3")?;

    let trip = load_trip_reader(Cursor::new(TRIP_JSONL), "ellora")?;
    print!("{}", render_trip(&trip));
    println!();

    let drive_params = DriveParams {
        avg_speed_kmh:                80.0,
        avg_energy_consumption_wh_km: 160.0,
        daily_start_hour:             9,
        charge_limit_pct:             95.0,
    };

    let mut itinerary = Itinerary::new(trip, car, default_charger, drive_params, start_date()?);

    match itinerary.plan_with(&recovery_charger, &mut ProgressPrinter) {
        Ok(()) => println!("\nplanned {} items", itinerary.items.len()),
        // Partial items stay on the itinerary, so the tables below still
        // show how far the trip got.
        Err(err) => println!("\nplan aborted: {err}"),
    }

    println!();
    print!("{}", render_itinerary(&itinerary.items));

    println!();
    write_details_csv(std::io::stdout().lock(), &itinerary.items)?;

    Ok(())
}
