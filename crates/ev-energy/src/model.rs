//! Estimation functions.
//!
//! Units throughout: distance km, capacity kWh, consumption Wh/km, rates kW,
//! SOC percent, charging time fractional hours.

use ev_core::{Car, Charger};

use crate::{EnergyError, EnergyResult};

/// SOC above which a fixed session buffer is added to charging time: the
/// battery tapers its acceptance rate near full, so constant-rate arithmetic
/// underestimates the tail.
const TAPER_THRESHOLD_PCT: f64 = 95.0;

/// Fixed buffer (hours) added when charging past [`TAPER_THRESHOLD_PCT`].
const TAPER_BUFFER_HOURS: f64 = 0.5;

/// Average consumption (Wh/km) implied by covering `distance_km` on one
/// full battery of `capacity_kwh`.
pub fn avg_consumption_from_range(distance_km: f64, capacity_kwh: f64) -> EnergyResult<f64> {
    if distance_km == 0.0 {
        return Err(EnergyError::ZeroDistance);
    }
    Ok(capacity_kwh * 1e3 / distance_km)
}

/// Single-charge range (km) implied by `consumption_wh_km` and a full
/// battery of `capacity_kwh`.  Inverse of [`avg_consumption_from_range`].
pub fn range_from_consumption(consumption_wh_km: f64, capacity_kwh: f64) -> EnergyResult<f64> {
    if consumption_wh_km == 0.0 {
        return Err(EnergyError::ZeroConsumption);
    }
    Ok(capacity_kwh * 1e3 / consumption_wh_km)
}

/// Battery fraction (as SOC percent) consumed by driving `distance_km` at
/// `consumption_wh_km` on a battery of `capacity_kwh`.
///
/// No intermediate rounding is applied; callers that display the value
/// round at the presentation layer.
pub fn charge_used(distance_km: f64, consumption_wh_km: f64, capacity_kwh: f64) -> f64 {
    (distance_km * consumption_wh_km) / (capacity_kwh * 1e3) * 100.0
}

/// Hours needed to charge `car` on `charger` from `from_soc` to `to_soc`.
///
/// The effective rate is the lesser of the charger's rated output and the
/// car's onboard limit for the charger's kind.  Past 95 % SOC a fixed 0.5 h
/// buffer covers the charge-taper tail.  The result is rounded to two
/// decimal places (36 s resolution — finer than anyone plans a stop).
pub fn charging_time(
    car: &Car,
    charger: &Charger,
    from_soc: f64,
    to_soc: f64,
) -> EnergyResult<f64> {
    if !(0.0..=100.0).contains(&from_soc) || !(0.0..=100.0).contains(&to_soc) || to_soc < from_soc {
        return Err(EnergyError::InvalidSocRange { from_soc, to_soc });
    }

    let buffer = if to_soc > TAPER_THRESHOLD_PCT {
        TAPER_BUFFER_HOURS
    } else {
        0.0
    };

    let rate_kw = charger
        .charge_rate_kw
        .min(car.onboard_rate_kw(charger.kind));

    let hours = car.capacity_kwh * ((to_soc - from_soc) / 1e2) / rate_kw + buffer;

    Ok((hours * 100.0).round() / 100.0)
}

/// Arithmetic mean of observed consumption samples (Wh/km).
pub fn mean_consumption(samples: &[f64]) -> EnergyResult<f64> {
    if samples.is_empty() {
        return Err(EnergyError::EmptySamples);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}
