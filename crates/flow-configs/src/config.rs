//! What an experiment module produces.

use std::fmt;

use flow_experiment::CustomCallables;
use flow_params::FlowParams;
use flow_rllib::{EnvCreator, EnvRegistry, MultiAgentConfig};

use crate::ConfigsResult;

/// RL wiring for experiments trained through the environment registry.
#[derive(Clone)]
pub struct RllibSetup {
    /// `"<exp_tag>-v<version>"`.
    pub env_name:   String,
    pub creator:    EnvCreator,
    pub multiagent: MultiAgentConfig,
}

pub struct ExperimentConfig {
    pub flow_params:      FlowParams,
    pub custom_callables: CustomCallables,
    pub rllib:            Option<RllibSetup>,
}

impl ExperimentConfig {
    /// Non-RL experiment.
    pub fn simulation(flow_params: FlowParams, custom_callables: CustomCallables) -> Self {
        Self { flow_params, custom_callables, rllib: None }
    }

    /// Register the RL environment with `registry`.  Returns the registered
    /// name, or `None` for non-RL experiments.
    pub fn register(&self, registry: &mut EnvRegistry) -> ConfigsResult<Option<&str>> {
        let Some(rllib) = &self.rllib else {
            return Ok(None);
        };
        registry.register(rllib.env_name.clone(), rllib.creator.clone())?;
        Ok(Some(rllib.env_name.as_str()))
    }

    /// [`register`](Self::register) against the process-wide registry.
    pub fn register_global(&self) -> ConfigsResult<Option<&str>> {
        let Some(rllib) = &self.rllib else {
            return Ok(None);
        };
        flow_rllib::register_env(rllib.env_name.clone(), rllib.creator.clone())?;
        Ok(Some(rllib.env_name.as_str()))
    }
}

impl fmt::Debug for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentConfig")
            .field("exp_tag", &self.flow_params.exp_tag)
            .field("custom_callables", &self.custom_callables)
            .field("rllib", &self.rllib.as_ref().map(|r| &r.env_name))
            .finish()
    }
}
