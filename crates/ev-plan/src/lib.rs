//! `ev-plan` — the itinerary planning simulation.
//!
//! [`Itinerary::plan`] walks a trip's legs and waypoints in order as a
//! deterministic, single-threaded state machine: it advances an odometer,
//! a wall clock, and the battery SOC, tops up at charger waypoints, and
//! retrofits an overnight full charge when a leg's first segment would
//! otherwise drain the battery.  A trip that runs dry mid-leg fails with
//! [`PlanError::Infeasible`], leaving the items produced so far on the
//! itinerary for inspection.
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`item`]     | `ItineraryItem`, `ItineraryDetail`         |
//! | [`itinerary`]| `Itinerary` and the planning loop          |
//! | [`observer`] | `PlanObserver`, `NoopObserver`             |
//! | [`error`]    | `PlanError`, `PlanResult`                  |

pub mod error;
pub mod item;
pub mod itinerary;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PlanError, PlanResult};
pub use item::{ItineraryDetail, ItineraryItem};
pub use itinerary::Itinerary;
pub use observer::{NoopObserver, PlanObserver};
