use flow_configs::ConfigsError;
use flow_experiment::ExperimentError;
use flow_params::ParamsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulateError {
    #[error("cannot enable both libsumo and aimsun")]
    ConflictingBackends,

    #[error(transparent)]
    Configs(#[from] ConfigsError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Experiment(#[from] ExperimentError),
}

pub type SimulateResult<T> = Result<T, SimulateError>;
