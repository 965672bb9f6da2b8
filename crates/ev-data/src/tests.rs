//! Unit tests for ev-data loaders and catalogs.

use std::io::Cursor;

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

#[cfg(test)]
mod car_catalog {
    use super::*;
    use crate::{CarCatalog, DataError};

    fn catalog() -> CarCatalog {
        CarCatalog::from_reader(Cursor::new(CARS_CSV)).unwrap()
    }

    #[test]
    fn loads_all_rows() {
        assert_eq!(catalog().len(), 3);
    }

    #[test]
    fn find_is_case_insensitive_substring() {
        let catalog = catalog();
        let car = catalog.find("ev max").unwrap();
        assert_eq!(car.model, "Nexon EV");
        assert_eq!(car.capacity_kwh, 40.5);
    }

    #[test]
    fn find_matches_across_make_and_model() {
        let catalog = catalog();
        let car = catalog.find("mg zs").unwrap();
        assert_eq!(car.variant, "Excite");
    }

    #[test]
    fn unknown_car_not_found() {
        let catalog = catalog();
        assert!(matches!(
            catalog.find("cybertruck"),
            Err(DataError::NotFound { kind: "car", .. })
        ));
    }

    #[test]
    fn broad_query_is_ambiguous() {
        let catalog = catalog();
        assert!(matches!(
            catalog.find("tata"),
            Err(DataError::Ambiguous { kind: "car", count: 2, .. })
        ));
    }

    #[test]
    fn empty_query_not_found() {
        let catalog = catalog();
        assert!(matches!(catalog.find("  "), Err(DataError::NotFound { .. })));
    }
}

#[cfg(test)]
mod charger_catalog {
    use super::*;
    use crate::{ChargerCatalog, DataError};
    use ev_core::ChargerKind;

    fn catalog() -> ChargerCatalog {
        ChargerCatalog::from_reader(Cursor::new(CHARGERS_CSV)).unwrap()
    }

    #[test]
    fn find_by_kind_and_rate() {
        let catalog = catalog();
        let charger = catalog.find("dc 30").unwrap();
        assert_eq!(charger.kind, ChargerKind::Dc);
        assert_eq!(charger.charge_rate_kw, 30.0);
    }

    #[test]
    fn kind_alone_is_ambiguous() {
        let catalog = catalog();
        assert!(matches!(
            catalog.find("ac"),
            Err(DataError::Ambiguous { count: 2, .. })
        ));
    }

    #[test]
    fn invalid_kind_in_csv_rejected() {
        let csv = "type,charge_rate\nCCS,50\n";
        assert!(matches!(
            ChargerCatalog::from_reader(Cursor::new(csv)),
            Err(DataError::Parse(_))
        ));
    }
}

#[cfg(test)]
mod plugshare {
    use crate::{normalize, DataError, RawWaypoint};
    use ev_core::WaypointKind;

    fn raw(icon: &str, distance: &str, duration: &str) -> RawWaypoint {
        RawWaypoint {
            display:  "Shell Recharge".to_string(),
            icon:     icon.to_string(),
            address:  "NH 60, Somewhere".to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
        }
    }

    #[test]
    fn marker_icon() {
        let wp = normalize(&raw("icon-M", "104.5 km", "1 hr 42 min")).unwrap();
        assert_eq!(wp.kind, WaypointKind::Marker);
        assert_eq!(wp.distance_km, 104.5);
        assert_eq!(wp.duration_min, 102);
    }

    #[test]
    fn charger_icon() {
        let wp = normalize(&raw("icon-Y", "55 km", "55 min")).unwrap();
        assert_eq!(wp.kind, WaypointKind::Charger);
        assert_eq!(wp.duration_min, 55);
    }

    #[test]
    fn unknown_icon_falls_back() {
        let wp = normalize(&raw("icon-Z", "1 km", "1 min")).unwrap();
        assert_eq!(wp.kind, WaypointKind::Unknown);
    }

    #[test]
    fn day_unit_duration() {
        let wp = normalize(&raw("icon-M", "900 km", "1 d 2 hr 5 min")).unwrap();
        assert_eq!(wp.duration_min, 24 * 60 + 125);
    }

    #[test]
    fn garbage_distance_rejected() {
        assert!(matches!(
            normalize(&raw("icon-M", "far away", "5 min")),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn unknown_duration_unit_rejected() {
        assert!(matches!(
            normalize(&raw("icon-M", "10 km", "3 fortnight")),
            Err(DataError::Parse(_))
        ));
    }
}

#[cfg(test)]
mod trip_loader {
    use std::io::Cursor;

    use crate::load_trip_reader;
    use ev_core::WaypointKind;

    const TRIP_JSONL: &str = concat!(
        r#"{"trip_name": "Pune to Aurangabad", "maps_link": "https://maps.example/leg1", "waypoints": ["#,
        r#"{"display": "Pune", "icon": "icon-M", "address": "Pune, MH", "distance": "120 km", "duration": "2 hr"},"#,
        r#"{"display": "Ahmednagar DC", "icon": "icon-Y", "address": "Ahmednagar, MH", "distance": "115 km", "duration": "2 hr 5 min"},"#,
        r#"{"display": "Aurangabad", "icon": "icon-M", "address": "Aurangabad, MH", "distance": "0 km", "duration": "0 min"}]}"#,
        "\n",
        r#"{"trip_name": "Aurangabad to Ellora", "maps_link": "https://maps.example/leg2", "waypoints": ["#,
        r#"{"display": "Aurangabad", "icon": "icon-M", "address": "Aurangabad, MH", "distance": "29 km", "duration": "49 min"},"#,
        r#"{"display": "Ellora Caves", "icon": "icon-M", "address": "Ellora, MH", "distance": "0 km", "duration": "0 min"}]}"#,
        "\n",
    );

    #[test]
    fn loads_legs_in_order() {
        let trip = load_trip_reader(Cursor::new(TRIP_JSONL), "ellora").unwrap();
        assert_eq!(trip.name, "ellora");
        assert_eq!(trip.legs.len(), 2);
        assert_eq!(trip.legs[0].name, "Pune to Aurangabad");
        assert_eq!(trip.legs[0].waypoints.len(), 3);
        assert_eq!(trip.legs[0].waypoints[1].kind, WaypointKind::Charger);
        assert_eq!(trip.legs[1].waypoints[0].duration_min, 49);
    }

    #[test]
    fn trip_totals_span_both_legs() {
        let trip = load_trip_reader(Cursor::new(TRIP_JSONL), "ellora").unwrap();
        assert!((trip.distance_km() - (120.0 + 115.0 + 29.0)).abs() < 1e-9);
        assert_eq!(trip.duration_min(), 120 + 125 + 49);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = format!("\n{TRIP_JSONL}\n");
        let trip = load_trip_reader(Cursor::new(input), "ellora").unwrap();
        assert_eq!(trip.legs.len(), 2);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let input = "not json\n";
        let err = load_trip_reader(Cursor::new(input), "bad").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
