use flow_core::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InflowsError {
    #[error("inflow rate for {veh_type:?} on edge {edge:?} must be a finite non-negative number, got {rate}")]
    NegativeRate {
        veh_type: String,
        edge:     String,
        rate:     f64,
    },

    #[error("inflow probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("depart speed must be a finite non-negative number, got {0}")]
    InvalidDepartSpeed(f64),

    #[error("inflow window must satisfy begin <= end, got [{begin}, {end}]")]
    InvalidWindow { begin: f64, end: f64 },

    #[error("inflow parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InflowsResult<T> = Result<T, InflowsError>;
