use ev_energy::EnergyError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    /// The battery would run dry mid-leg with no recovery opportunity.
    /// Items produced before the abort remain on the itinerary.
    #[error(
        "trip is infeasible: battery depleted on leg {leg} before waypoint {waypoint} \
         (SOC would reach {soc:.1} %)"
    )]
    Infeasible {
        /// 0-based index of the failing leg.
        leg: usize,
        /// 0-based index (within the leg) of the waypoint that cannot be reached.
        waypoint: usize,
        /// The negative SOC the segment would have produced.
        soc: f64,
    },

    #[error("energy model rejected the inputs: {0}")]
    Energy(#[from] EnergyError),
}

pub type PlanResult<T> = Result<T, PlanError>;
