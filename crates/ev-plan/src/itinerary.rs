//! The `Itinerary` struct and its planning loop.

use chrono::{NaiveDateTime, TimeDelta};

use ev_core::{hours_delta, leg_start, Car, Charger, DriveParams, Trip, WaypointKind};
use ev_energy::{charge_used, charging_time};

use crate::observer::NoopObserver;
use crate::{ItineraryDetail, ItineraryItem, PlanError, PlanObserver, PlanResult};

/// A trip paired with the car, charger, and driving assumptions needed to
/// simulate it, plus the produced item sequence.
///
/// Construct with [`Itinerary::new`] (the start date is a required input —
/// there is no implicit "now"), then call [`Itinerary::plan`] exactly once.
pub struct Itinerary {
    pub trip: Trip,
    pub car:  Car,

    /// Charger assumed at every waypoint flagged as a charging stop.
    pub default_charger: Charger,

    pub drive_params: DriveParams,

    /// Local wall-clock date the trip begins; leg `i` departs on day
    /// `start_date + i` at `drive_params.daily_start_hour`.
    pub start_date: NaiveDateTime,

    /// The produced item sequence.  Empty until [`Itinerary::plan`] runs;
    /// on failure it holds everything produced before the abort.
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    pub fn new(
        trip: Trip,
        car: Car,
        default_charger: Charger,
        drive_params: DriveParams,
        start_date: NaiveDateTime,
    ) -> Self {
        Self {
            trip,
            car,
            default_charger,
            drive_params,
            start_date,
            items: Vec::new(),
        }
    }

    /// Plan without progress callbacks.  See [`Itinerary::plan_with`].
    pub fn plan(&mut self, recovery_charger: &Charger) -> PlanResult<()> {
        self.plan_with(recovery_charger, &mut NoopObserver)
    }

    /// Run the planning simulation once, appending to `self.items` as it
    /// goes.
    ///
    /// # Contract
    ///
    /// `self.items` is mutated in place so that a failed plan leaves the
    /// items produced before the abort available for inspection.  Call this
    /// at most once per `Itinerary`; re-planning a populated itinerary
    /// appends a second run's items after the first.
    ///
    /// `recovery_charger` is the charger assumed present at a leg's origin
    /// when depletion recovery fires (typically the slow AC wallbox at the
    /// overnight stop).
    ///
    /// # Errors
    ///
    /// [`PlanError::Infeasible`] when the battery would run dry mid-leg
    /// with no recovery opportunity; [`PlanError::Energy`] when charging
    /// arithmetic rejects its inputs (e.g. arriving at a charger waypoint
    /// already above `charge_limit_pct`).
    pub fn plan_with<O: PlanObserver>(
        &mut self,
        recovery_charger: &Charger,
        observer: &mut O,
    ) -> PlanResult<()> {
        let mut counter: u32 = 0;
        let mut odometer_km: f64 = 0.0;
        let mut soc: f64 = 100.0;

        for (leg_idx, leg) in self.trip.legs.iter().enumerate() {
            let Some(origin) = leg.waypoints.first() else {
                continue;
            };

            let mut now = leg_start(self.start_date, leg_idx, self.drive_params.daily_start_hour);
            observer.on_leg_start(leg_idx, now);

            let origin_item = ItineraryItem {
                item_id: counter,
                details: vec![ItineraryDetail {
                    datetime:    now,
                    name:        origin.name.clone(),
                    address:     origin.address.clone(),
                    distance_km: odometer_km,
                    soc,
                }],
            };
            observer.on_item(&origin_item);
            self.items.push(origin_item);

            for (seg_idx, pair) in leg.waypoints.windows(2).enumerate() {
                let (from, to) = (&pair[0], &pair[1]);
                counter += 1;

                odometer_km += from.distance_km;
                now += TimeDelta::minutes(from.duration_min);
                soc -= charge_used(
                    from.distance_km,
                    self.drive_params.avg_energy_consumption_wh_km,
                    self.car.capacity_kwh,
                );

                if soc < 0.0 {
                    if seg_idx > 0 {
                        // Mid-leg depletion: nowhere to retrofit a charge.
                        return Err(PlanError::Infeasible {
                            leg:      leg_idx,
                            waypoint: seg_idx + 1,
                            soc,
                        });
                    }

                    // First segment of the leg: rewrite the origin snapshot
                    // (the most recently appended item) to a full overnight
                    // charge and push the clock forward by its duration.
                    if let Some(detail) =
                        self.items.last_mut().and_then(|item| item.details.last_mut())
                    {
                        let hours =
                            charging_time(&self.car, recovery_charger, detail.soc, 100.0)?;
                        soc += 100.0 - detail.soc;
                        now += hours_delta(hours);
                        detail.datetime += hours_delta(hours);
                        detail.soc = 100.0;
                        observer.on_recovery_charge(leg_idx, hours);
                    }

                    if soc < 0.0 {
                        // Even a full battery cannot cover this segment.
                        return Err(PlanError::Infeasible {
                            leg:      leg_idx,
                            waypoint: seg_idx + 1,
                            soc,
                        });
                    }
                }

                let mut details = vec![ItineraryDetail {
                    datetime:    now,
                    name:        to.name.clone(),
                    address:     to.address.clone(),
                    distance_km: odometer_km,
                    soc,
                }];

                if to.kind == WaypointKind::Charger {
                    let hours = charging_time(
                        &self.car,
                        &self.default_charger,
                        soc,
                        self.drive_params.charge_limit_pct,
                    )?;
                    soc = self.drive_params.charge_limit_pct;
                    now += hours_delta(hours);
                    observer.on_opportunistic_charge(leg_idx, seg_idx + 1, hours);

                    details.push(ItineraryDetail {
                        datetime:    now,
                        name:        to.name.clone(),
                        address:     to.address.clone(),
                        distance_km: odometer_km,
                        soc,
                    });
                }

                let item = ItineraryItem { item_id: counter, details };
                observer.on_item(&item);
                self.items.push(item);
            }

            // Reserve an identifier boundary between legs.
            counter += 1;
        }

        Ok(())
    }

    /// All emitted details in order, flattened across items.
    pub fn details(&self) -> impl Iterator<Item = &ItineraryDetail> {
        self.items.iter().flat_map(|item| item.details.iter())
    }
}
