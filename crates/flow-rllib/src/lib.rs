//! `flow-rllib` — hooks an experiment into an RL training library.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`factory`]  | `EnvCreator`, `make_create_env`                              |
//! | [`registry`] | `EnvRegistry` — named environment factories, `register_env`  |
//! | [`policy`]   | `PolicySpec`, `MultiAgentConfig`, `policy_mapping_fn`        |
//! | [`error`]    | `RllibError`, `RllibResult<T>`                               |

pub mod error;
pub mod factory;
pub mod policy;
pub mod registry;


pub use error::{RllibError, RllibResult};
pub use factory::{EnvCreator, KernelFactory, make_create_env, make_create_env_with};
pub use policy::{MultiAgentConfig, PolicyGraphs, PolicySpec, SHARED_POLICY, policy_mapping_fn};
pub use registry::{EnvRegistry, register_env};
