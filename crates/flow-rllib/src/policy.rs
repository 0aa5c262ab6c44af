//! Multi-agent policy table.
//!
//! Every agent in the shared-policy setup is controlled by the one policy
//! named [`SHARED_POLICY`].

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use flow_core::{AgentId, Space};

use crate::{EnvCreator, RllibResult};

pub const SHARED_POLICY: &str = "av";

/// One entry of the policy table.  `policy_class: None` lets the trainer
/// pick its default policy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicySpec {
    pub policy_class:      Option<String>,
    pub observation_space: Space,
    pub action_space:      Space,
    pub config:            BTreeMap<String, Value>,
}

pub type PolicyGraphs = BTreeMap<String, PolicySpec>;

/// Maps every agent to [`SHARED_POLICY`].
pub fn policy_mapping_fn(_agent: &AgentId) -> &'static str {
    SHARED_POLICY
}

#[derive(Clone, Debug, Serialize)]
pub struct MultiAgentConfig {
    pub policy_graphs:     PolicyGraphs,
    pub policies_to_train: Vec<String>,
    #[serde(skip)]
    pub policy_mapping_fn: fn(&AgentId) -> &'static str,
}

impl MultiAgentConfig {
    /// One shared, trained policy whose spaces are read off a throwaway
    /// environment built by `creator`.
    pub fn shared_policy(creator: &EnvCreator) -> RllibResult<Self> {
        let mut env = creator()?;
        let spec = PolicySpec {
            policy_class:      None,
            observation_space: env.observation_space().clone(),
            action_space:      env.action_space().clone(),
            config:            BTreeMap::new(),
        };
        env.close()?;

        Ok(Self {
            policy_graphs:     BTreeMap::from([(SHARED_POLICY.to_owned(), spec)]),
            policies_to_train: vec![SHARED_POLICY.to_owned()],
            policy_mapping_fn,
        })
    }

    /// Policy controlling `agent`.
    pub fn policy_for(&self, agent: &AgentId) -> &'static str {
        (self.policy_mapping_fn)(agent)
    }
}
