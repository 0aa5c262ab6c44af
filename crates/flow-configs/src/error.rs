use flow_core::FlowError;
use flow_inflows::InflowsError;
use flow_params::ParamsError;
use flow_rllib::RllibError;
use flow_vehicles::VehiclesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigsError {
    #[error("no experiment named {name:?}; available: {known:?}")]
    UnknownExperiment {
        name:  String,
        known: Vec<String>,
    },

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Vehicles(#[from] VehiclesError),

    #[error(transparent)]
    Inflows(#[from] InflowsError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Rllib(#[from] RllibError),
}

pub type ConfigsResult<T> = Result<T, ConfigsError>;
