//! Observation and action spaces per environment class.
//!
//! | Class                  | Observation                         | Action                          |
//! |------------------------|-------------------------------------|---------------------------------|
//! | `I210MultiEnv`         | unbounded, 3 (`lead_obs`) or 6      | `[-max_decel, max_accel]`, 1    |
//! | `AccelEnv`             | `[0, 1]`, 2 × initial vehicles      | accel bounds, initial RL count  |
//! | `WaveAttenuationPOEnv` | unbounded, 3                        | accel bounds, 1                 |
//! | `MergePOEnv`           | `[0, 1]`, 5 × `num_rl`              | accel bounds, `num_rl`          |
//! | `TestEnv`              | empty                               | empty                           |
//!
//! A fixed-length vector per agent; multi-agent classes share one pair of
//! spaces across all agents.

use flow_core::Space;
use flow_params::{EnvClass, FlowParams};

fn accel_bounds(params: &FlowParams) -> (f64, f64) {
    let extra = &params.env.additional_params;
    let max_accel = extra.get_f64("max_accel").unwrap_or(1.0);
    let max_decel = extra.get_f64("max_decel").unwrap_or(1.0);
    (-max_decel.abs(), max_accel)
}

fn initial_rl_count(params: &FlowParams) -> usize {
    params.veh.rl_types().map(|t| t.num_vehicles).sum()
}

pub fn observation_space(params: &FlowParams) -> Space {
    let extra = &params.env.additional_params;
    match params.env_name {
        EnvClass::I210MultiEnv => {
            let dim = if extra.get_bool("lead_obs").unwrap_or(true) { 3 } else { 6 };
            Space::unbounded(vec![dim])
        }
        EnvClass::AccelEnv => Space::bounded(0.0, 1.0, vec![2 * params.veh.initial_count()]),
        EnvClass::WaveAttenuationPOEnv => Space::unbounded(vec![3]),
        EnvClass::MergePOEnv => {
            let num_rl = extra.get_u64("num_rl").unwrap_or(5) as usize;
            Space::bounded(0.0, 1.0, vec![5 * num_rl])
        }
        EnvClass::TestEnv => Space::bounded(0.0, 0.0, vec![0]),
    }
}

pub fn action_space(params: &FlowParams) -> Space {
    let (low, high) = accel_bounds(params);
    match params.env_name {
        EnvClass::I210MultiEnv | EnvClass::WaveAttenuationPOEnv => Space::bounded(low, high, vec![1]),
        EnvClass::AccelEnv => Space::bounded(low, high, vec![initial_rl_count(params)]),
        EnvClass::MergePOEnv => {
            let num_rl = params.env.additional_params.get_u64("num_rl").unwrap_or(5) as usize;
            Space::bounded(low, high, vec![num_rl])
        }
        EnvClass::TestEnv => Space::bounded(0.0, 0.0, vec![0]),
    }
}
