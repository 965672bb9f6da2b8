//! Vehicle and charging-station records.
//!
//! Both types are loaded once (typically from a CSV catalog in `ev-data`)
//! and treated as read-only for the rest of the run.  All rates are in kW,
//! capacity in kWh, ranges in km.

use std::fmt;

// ── ChargerKind ───────────────────────────────────────────────────────────────

/// AC wallbox vs. DC fast charger.
///
/// The kind selects which of the car's onboard rate limits applies: an AC
/// session is capped by the onboard converter (`ac_charge_rate_kw`), a DC
/// session bypasses it and is capped by `dc_charge_rate_kw`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargerKind {
    Ac,
    Dc,
}

impl ChargerKind {
    /// Parse the catalog spelling (`"AC"` / `"DC"`, case-insensitive).
    pub fn parse(s: &str) -> Option<ChargerKind> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AC" => Some(ChargerKind::Ac),
            "DC" => Some(ChargerKind::Dc),
            _ => None,
        }
    }
}

impl fmt::Display for ChargerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargerKind::Ac => write!(f, "AC"),
            ChargerKind::Dc => write!(f, "DC"),
        }
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// One electric-vehicle variant as listed in the car catalog.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    pub make:    String,
    pub model:   String,
    pub variant: String,

    /// Usable battery capacity in kWh.
    pub capacity_kwh: f64,

    /// Manufacturer-claimed single-charge range in km.
    pub max_range_km: f64,

    /// Real-world expected single-charge range in km.
    pub exp_range_km: f64,

    /// Onboard AC converter limit in kW.
    pub ac_charge_rate_kw: f64,

    /// DC fast-charge acceptance limit in kW.
    pub dc_charge_rate_kw: f64,
}

impl Car {
    /// The onboard rate limit that applies when plugged into `kind`.
    #[inline]
    pub fn onboard_rate_kw(&self, kind: ChargerKind) -> f64 {
        match kind {
            ChargerKind::Ac => self.ac_charge_rate_kw,
            ChargerKind::Dc => self.dc_charge_rate_kw,
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.make, self.model, self.variant)
    }
}

// ── Charger ───────────────────────────────────────────────────────────────────

/// A charging station: kind plus rated output.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charger {
    pub kind: ChargerKind,

    /// Rated output in kW.  The effective session rate is the minimum of
    /// this and the car's onboard limit for `kind`.
    pub charge_rate_kw: f64,
}

impl Charger {
    pub fn new(kind: ChargerKind, charge_rate_kw: f64) -> Self {
        Self { kind, charge_rate_kw }
    }
}

impl fmt::Display for Charger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} kW", self.kind, self.charge_rate_kw)
    }
}
