//! Unit tests for ev-core primitives.

fn wp(name: &str, kind: crate::WaypointKind, distance_km: f64, duration_min: i64) -> crate::Waypoint {
    crate::Waypoint {
        name: name.to_string(),
        kind,
        address: format!("{name} address"),
        distance_km,
        duration_min,
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{Car, Charger, ChargerKind};

    fn nexon() -> Car {
        Car {
            make:              "Tata".to_string(),
            model:             "Nexon EV".to_string(),
            variant:           "Max".to_string(),
            capacity_kwh:      40.5,
            max_range_km:      437.0,
            exp_range_km:      330.0,
            ac_charge_rate_kw: 7.2,
            dc_charge_rate_kw: 30.0,
        }
    }

    #[test]
    fn charger_kind_parse() {
        assert_eq!(ChargerKind::parse("AC"), Some(ChargerKind::Ac));
        assert_eq!(ChargerKind::parse(" dc "), Some(ChargerKind::Dc));
        assert_eq!(ChargerKind::parse("CCS"), None);
    }

    #[test]
    fn onboard_rate_follows_charger_kind() {
        let car = nexon();
        assert_eq!(car.onboard_rate_kw(ChargerKind::Ac), 7.2);
        assert_eq!(car.onboard_rate_kw(ChargerKind::Dc), 30.0);
    }

    #[test]
    fn display() {
        assert_eq!(nexon().to_string(), "Tata Nexon EV Max");
        assert_eq!(Charger::new(ChargerKind::Dc, 30.0).to_string(), "DC 30 kW");
    }
}

#[cfg(test)]
mod trip {
    use super::wp;
    use crate::{Leg, Trip, WaypointKind};

    fn leg(name: &str, waypoints: Vec<crate::Waypoint>) -> Leg {
        Leg {
            name: name.to_string(),
            maps_link: String::new(),
            waypoints,
        }
    }

    #[test]
    fn leg_totals_skip_final_waypoint() {
        let l = leg(
            "day 1",
            vec![
                wp("a", WaypointKind::Marker, 100.0, 90),
                wp("b", WaypointKind::Charger, 50.0, 45),
                // Final waypoint's segment fields are unused.
                wp("c", WaypointKind::Marker, 999.0, 999),
            ],
        );
        assert!((l.distance_km() - 150.0).abs() < 1e-9);
        assert_eq!(l.duration_min(), 135);
    }

    #[test]
    fn single_waypoint_leg_has_zero_totals() {
        let l = leg("stub", vec![wp("a", WaypointKind::Marker, 42.0, 10)]);
        assert_eq!(l.distance_km(), 0.0);
        assert_eq!(l.duration_min(), 0);
    }

    #[test]
    fn empty_leg_has_zero_totals() {
        let l = leg("empty", vec![]);
        assert_eq!(l.distance_km(), 0.0);
        assert_eq!(l.duration_min(), 0);
    }

    #[test]
    fn trip_totals_sum_legs() {
        let t = Trip {
            name: "loop".to_string(),
            legs: vec![
                leg(
                    "out",
                    vec![
                        wp("a", WaypointKind::Marker, 100.0, 80),
                        wp("b", WaypointKind::Marker, 0.0, 0),
                    ],
                ),
                leg(
                    "back",
                    vec![
                        wp("b", WaypointKind::Marker, 120.0, 100),
                        wp("a", WaypointKind::Marker, 0.0, 0),
                    ],
                ),
            ],
        };
        assert!((t.distance_km() - 220.0).abs() < 1e-9);
        assert_eq!(t.duration_min(), 180);
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, TimeDelta};

    use crate::{hours_delta, leg_start};

    fn dec_16() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 12, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn hours_delta_whole_and_fractional() {
        assert_eq!(hours_delta(1.0), TimeDelta::hours(1));
        assert_eq!(hours_delta(0.5), TimeDelta::minutes(30));
        // 10.32 h = 37 152 s
        assert_eq!(hours_delta(10.32), TimeDelta::seconds(37_152));
    }

    #[test]
    fn leg_start_offsets_by_day_and_start_hour() {
        let first = leg_start(dec_16(), 0, 9);
        assert_eq!(first, dec_16() + TimeDelta::hours(9));

        let third = leg_start(dec_16(), 2, 9);
        assert_eq!(third, dec_16() + TimeDelta::days(2) + TimeDelta::hours(9));
    }
}
