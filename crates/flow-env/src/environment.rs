//! The `Environment` trait and the generic `FlowEnv`.

use std::collections::BTreeMap;

use flow_core::{AgentId, Space, VehicleId};
use flow_params::FlowParams;

use crate::{EnvResult, Kernel, action_space, observation_space};

/// Agent id used by single-agent environment classes.
pub const SINGLE_AGENT: &str = "rl";

pub type Observations = BTreeMap<AgentId, Vec<f64>>;
pub type Actions      = BTreeMap<AgentId, Vec<f64>>;
pub type Rewards      = BTreeMap<AgentId, f64>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepResult {
    pub observations: Observations,
    pub rewards:      Rewards,
    /// `true` once the rollout reached its horizon.
    pub done:         bool,
}

/// A steppable experiment, as seen by the RL library and the experiment
/// driver.
///
/// Multi-agent classes key observations, actions, and rewards by the RL
/// vehicle's id; single-agent classes use the one agent [`SINGLE_AGENT`].
pub trait Environment: Send {
    fn observation_space(&self) -> &Space;

    fn action_space(&self) -> &Space;

    /// Restart the simulation, run the warm-up steps, and return the first
    /// observations.
    fn reset(&mut self) -> EnvResult<Observations>;

    /// Apply `actions` and advance one RL step (`sims_per_step` simulation
    /// steps).
    fn step(&mut self, actions: &Actions) -> EnvResult<StepResult>;

    fn kernel(&self) -> &dyn Kernel;

    /// Seconds per simulation step.
    fn sim_step(&self) -> f64 {
        self.kernel().sim_step()
    }

    fn params(&self) -> &FlowParams;

    /// RL steps taken since the last reset.
    fn step_count(&self) -> u32;

    fn close(&mut self) -> EnvResult<()>;
}

/// Environment over any [`Kernel`].
///
/// Observation per agent is its own speed, zero-padded to the observation
/// dimension (single-agent classes observe every vehicle's speed in id
/// order).  The reward is the mean speed in the network.
pub struct FlowEnv<K: Kernel> {
    params:     FlowParams,
    kernel:     K,
    obs_space:  Space,
    act_space:  Space,
    step_count: u32,
}

impl<K: Kernel> FlowEnv<K> {
    pub fn new(params: FlowParams, kernel: K) -> Self {
        let obs_space = observation_space(&params);
        let act_space = action_space(&params);
        Self { params, kernel, obs_space, act_space, step_count: 0 }
    }

    pub fn kernel_mut(&mut self) -> &mut K {
        &mut self.kernel
    }

    fn multiagent(&self) -> bool {
        self.params.env_name.is_multiagent()
    }

    fn observe(&self) -> Observations {
        let dim = self.obs_space.dim();
        if self.multiagent() {
            self.kernel
                .rl_ids()
                .into_iter()
                .map(|id| {
                    let mut obs = vec![0.0; dim];
                    if let (Some(slot), Some(speed)) = (obs.first_mut(), self.kernel.speed(&id)) {
                        *slot = speed;
                    }
                    (AgentId::from(id), obs)
                })
                .collect()
        } else {
            let mut obs: Vec<f64> = self
                .kernel
                .vehicle_ids()
                .iter()
                .filter_map(|id| self.kernel.speed(id))
                .take(dim)
                .collect();
            obs.resize(dim, 0.0);
            BTreeMap::from([(AgentId::new(SINGLE_AGENT), obs)])
        }
    }

    fn mean_speed(&self) -> f64 {
        let speeds: Vec<f64> = self
            .kernel
            .vehicle_ids()
            .iter()
            .filter_map(|id| self.kernel.speed(id))
            .collect();
        if speeds.is_empty() {
            0.0
        } else {
            speeds.iter().sum::<f64>() / speeds.len() as f64
        }
    }

    fn apply_actions(&mut self, actions: &Actions) {
        let clip = self.params.env.clip_actions;
        if self.multiagent() {
            for (agent, action) in actions {
                let mut action = action.clone();
                if clip {
                    self.act_space.clip(&mut action);
                }
                let Some(&accel) = action.first() else { continue };
                let id = VehicleId::new(agent.as_str());
                self.kernel.apply_acceleration(&id, accel);
            }
        } else if let Some(action) = actions.get(SINGLE_AGENT) {
            let mut action = action.clone();
            if clip {
                self.act_space.clip(&mut action);
            }
            for (id, accel) in self.kernel.rl_ids().into_iter().zip(action) {
                self.kernel.apply_acceleration(&id, accel);
            }
        }
    }
}

impl<K: Kernel> Environment for FlowEnv<K> {
    fn observation_space(&self) -> &Space {
        &self.obs_space
    }

    fn action_space(&self) -> &Space {
        &self.act_space
    }

    fn reset(&mut self) -> EnvResult<Observations> {
        self.kernel.start(&self.params)?;
        for _ in 0..self.params.env.warmup_steps {
            self.kernel.step()?;
        }
        self.step_count = 0;
        Ok(self.observe())
    }

    fn step(&mut self, actions: &Actions) -> EnvResult<StepResult> {
        self.apply_actions(actions);
        for _ in 0..self.params.env.sims_per_step.max(1) {
            self.kernel.step()?;
        }
        self.step_count += 1;

        let observations = self.observe();
        let reward = self.mean_speed();
        let rewards = observations.keys().map(|a| (a.clone(), reward)).collect();
        Ok(StepResult {
            observations,
            rewards,
            done: self.step_count >= self.params.env.horizon,
        })
    }

    fn kernel(&self) -> &dyn Kernel {
        &self.kernel
    }

    fn params(&self) -> &FlowParams {
        &self.params
    }

    fn step_count(&self) -> u32 {
        self.step_count
    }

    fn close(&mut self) -> EnvResult<()> {
        self.kernel.close()
    }
}
