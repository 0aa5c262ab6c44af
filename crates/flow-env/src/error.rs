use flow_params::ParamsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("kernel used before start()")]
    NotStarted,

    #[error("simulator kernel error: {0}")]
    Kernel(String),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

pub type EnvResult<T> = Result<T, EnvError>;
