//! Planning observer trait for progress reporting.

use chrono::NaiveDateTime;

use crate::ItineraryItem;

/// Callbacks invoked by [`Itinerary::plan`][crate::Itinerary::plan] at key
/// points in the simulation.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl PlanObserver for ProgressPrinter {
///     fn on_leg_start(&mut self, leg: usize, starts_at: NaiveDateTime) {
///         println!("leg {leg} departs {starts_at}");
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called when a leg's simulation begins, before its origin item is
    /// emitted.
    fn on_leg_start(&mut self, _leg: usize, _starts_at: NaiveDateTime) {}

    /// Called after each item is appended to the itinerary.
    fn on_item(&mut self, _item: &ItineraryItem) {}

    /// Called when depletion recovery rewrites a leg's origin snapshot to a
    /// full charge.  `hours` is the inserted charging duration.
    fn on_recovery_charge(&mut self, _leg: usize, _hours: f64) {}

    /// Called when an opportunistic charge is taken at a charger waypoint.
    fn on_opportunistic_charge(&mut self, _leg: usize, _waypoint: usize, _hours: f64) {}
}

/// An observer that ignores every callback.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
