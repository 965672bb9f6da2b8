use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EnergyError {
    #[error("distance must be non-zero")]
    ZeroDistance,

    #[error("energy consumption must be non-zero")]
    ZeroConsumption,

    #[error("invalid SOC window: from {from_soc} to {to_soc} (need 0 <= from <= to <= 100)")]
    InvalidSocRange { from_soc: f64, to_soc: f64 },

    #[error("cannot average an empty consumption sample set")]
    EmptySamples,
}

pub type EnergyResult<T> = Result<T, EnergyError>;
