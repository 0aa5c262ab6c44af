use flow_env::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("rollout {run} failed: {source}")]
    Rollout {
        run:    usize,
        #[source]
        source: EnvError,
    },

    #[error(transparent)]
    Env(#[from] EnvError),
}

pub type ExperimentResult<T> = Result<T, ExperimentError>;
