use flow_core::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("unknown environment parameter {key:?}; recognized keys: {known:?}")]
    UnknownEnvParam {
        key:   String,
        known: Vec<String>,
    },

    #[error("flow params are missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParamsResult<T> = Result<T, ParamsError>;
