//! Environment classes and per-rollout environment parameters.

use std::fmt;

use serde::Serialize;
use serde_json::json;

use crate::AdditionalParams;

// ── EnvClass ──────────────────────────────────────────────────────────────────

/// Environment class an experiment runs on.  Serializes as its class name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EnvClass {
    /// Multi-agent I-210 highway with ramps; every AV is an agent.
    I210MultiEnv,
    /// No-op environment for scripted (non-RL) runs.
    TestEnv,
    /// Fully observed acceleration control on closed networks.
    AccelEnv,
    /// Partially observed wave attenuation on a ring.
    WaveAttenuationPOEnv,
    /// Partially observed merge control.
    MergePOEnv,
}

impl EnvClass {
    pub const ALL: [EnvClass; 5] = [
        EnvClass::I210MultiEnv,
        EnvClass::TestEnv,
        EnvClass::AccelEnv,
        EnvClass::WaveAttenuationPOEnv,
        EnvClass::MergePOEnv,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            EnvClass::I210MultiEnv         => "I210MultiEnv",
            EnvClass::TestEnv              => "TestEnv",
            EnvClass::AccelEnv             => "AccelEnv",
            EnvClass::WaveAttenuationPOEnv => "WaveAttenuationPOEnv",
            EnvClass::MergePOEnv           => "MergePOEnv",
        }
    }

    /// Whether each RL vehicle is an independent agent.
    pub fn is_multiagent(self) -> bool {
        matches!(self, EnvClass::I210MultiEnv)
    }

    /// The recognized additional parameters and their defaults.
    pub fn default_params(self) -> AdditionalParams {
        match self {
            EnvClass::I210MultiEnv => AdditionalParams::from_pairs([
                ("max_accel",       json!(1)),
                ("max_decel",       json!(1)),
                ("lead_obs",        json!(true)),
                ("local_reward",    json!(true)),
                ("target_velocity", json!(25)),
                ("reroute_on_exit", json!(false)),
            ]),
            EnvClass::TestEnv => AdditionalParams::new(),
            EnvClass::AccelEnv => AdditionalParams::from_pairs([
                ("max_accel",       json!(3)),
                ("max_decel",       json!(3)),
                ("target_velocity", json!(10)),
                ("sort_vehicles",   json!(false)),
            ]),
            EnvClass::WaveAttenuationPOEnv => AdditionalParams::from_pairs([
                ("max_accel",   json!(1)),
                ("max_decel",   json!(1)),
                ("ring_length", json!([220, 270])),
            ]),
            EnvClass::MergePOEnv => AdditionalParams::from_pairs([
                ("max_accel",       json!(3)),
                ("max_decel",       json!(3)),
                ("target_velocity", json!(25)),
                ("num_rl",          json!(5)),
            ]),
        }
    }
}

impl fmt::Display for EnvClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

// ── EnvParams ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnvParams {
    /// Maximum RL steps per rollout.
    pub horizon:           u32,
    /// Simulation steps run after reset before control starts.
    pub warmup_steps:      u32,
    /// Simulation steps per RL step.
    pub sims_per_step:     u32,
    pub evaluate:          bool,
    pub clip_actions:      bool,
    pub additional_params: AdditionalParams,
}

impl EnvParams {
    pub fn new(horizon: u32) -> Self {
        Self {
            horizon,
            warmup_steps:      0,
            sims_per_step:     1,
            evaluate:          false,
            clip_actions:      true,
            additional_params: AdditionalParams::new(),
        }
    }

    pub fn warmup_steps(mut self, steps: u32) -> Self {
        self.warmup_steps = steps;
        self
    }

    pub fn sims_per_step(mut self, n: u32) -> Self {
        self.sims_per_step = n;
        self
    }

    pub fn additional_params(mut self, params: AdditionalParams) -> Self {
        self.additional_params = params;
        self
    }
}

impl Default for EnvParams {
    fn default() -> Self {
        Self::new(500)
    }
}
