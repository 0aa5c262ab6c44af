use flow_env::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RllibError {
    #[error("environment {0:?} is already registered")]
    AlreadyRegistered(String),

    #[error("no environment registered as {0:?}")]
    NotRegistered(String),

    #[error("environment registry lock poisoned")]
    RegistryPoisoned,

    #[error(transparent)]
    Env(#[from] EnvError),
}

pub type RllibResult<T> = Result<T, RllibError>;
