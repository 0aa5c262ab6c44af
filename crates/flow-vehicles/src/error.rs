use thiserror::Error;

use flow_core::VehicleTypeName;

#[derive(Debug, Error)]
pub enum VehiclesError {
    #[error("vehicle type {0:?} is already defined")]
    DuplicateType(VehicleTypeName),

    #[error("unknown speed mode {0:?}")]
    UnknownSpeedMode(String),

    #[error("unknown lane change mode {0:?}")]
    UnknownLaneChangeMode(String),
}

pub type VehiclesResult<T> = Result<T, VehiclesError>;
