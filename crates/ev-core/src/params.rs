//! Per-itinerary driving parameters.

/// Driver-supplied assumptions for one planning run.
///
/// Supplied once per itinerary and never mutated by the planner.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveParams {
    /// Assumed cruising speed in km/h.
    pub avg_speed_kmh: f64,

    /// Assumed energy use in Wh per km.
    pub avg_energy_consumption_wh_km: f64,

    /// Hour of day (0–23) at which each leg's driving starts.
    pub daily_start_hour: u32,

    /// SOC ceiling (percent) for opportunistic charging stops.  Charging to
    /// full at every stop wastes time in the taper region, so trips usually
    /// cap at 80–95 %.
    pub charge_limit_pct: f64,
}
