//! `ev-energy` — pure arithmetic behind range, consumption, and charging.
//!
//! Every function here is stateless and deterministic; the planner in
//! `ev-plan` is the only caller with mutable state.  Inputs that would
//! divide by zero or describe an impossible SOC window are rejected with
//! [`EnergyError`] rather than producing NaN/inf.

pub mod error;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EnergyError, EnergyResult};
pub use model::{
    avg_consumption_from_range, charge_used, charging_time, mean_consumption,
    range_from_consumption,
};
