//! `flow-env` — the environment an experiment steps, and the simulator
//! connection underneath it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`kernel`]      | `Kernel` trait — one connection to a traffic simulator      |
//! | [`dry_run`]     | `DryRunKernel` — built-in kernel that admits and retires vehicles without traffic dynamics |
//! | [`spaces`]      | observation/action spaces per environment class             |
//! | [`environment`] | `Environment` trait, `FlowEnv<K>`, `StepResult`             |
//! | [`error`]       | `EnvError`, `EnvResult<T>`                                  |
//!
//! External simulator backends (TraCI, libsumo, Aimsun) plug in by
//! implementing [`Kernel`]; nothing above this crate depends on which one
//! is in use.

pub mod dry_run;
pub mod environment;
pub mod error;
pub mod kernel;
pub mod spaces;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dry_run::DryRunKernel;
pub use environment::{Actions, Environment, FlowEnv, Observations, Rewards, SINGLE_AGENT, StepResult};
pub use error::{EnvError, EnvResult};
pub use kernel::{Kernel, default_kernel};
pub use spaces::{action_space, observation_space};
