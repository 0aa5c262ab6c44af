//! `flow-experiment` — runs a configured experiment for a fixed number of
//! rollouts and aggregates what happened.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`callables`] | `CustomCallables` — named per-step metrics               |
//! | [`metrics`]   | `avg_speed`, `avg_outflow`, `energy_consumption`, the I-210 set |
//! | [`runner`]    | `Experiment`, `RunOptions`                               |
//! | [`summary`]   | `ExperimentSummary`, `mean_std`                          |
//! | [`error`]     | `ExperimentError`, `ExperimentResult<T>`                 |
//!
//! # Rollout loop
//!
//! ```text
//! for run in 0..num_runs:
//!     obs = env.reset()                     // warm-up included
//!     for step in 0..horizon:
//!         result = env.step(policy(obs))
//!         record reward, mean speed, every custom callable
//!         stop early if result.done
//!     record outflow over the last 500 s
//! ```

pub mod callables;
pub mod error;
pub mod metrics;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use callables::{CustomCallables, Metric};
pub use error::{ExperimentError, ExperimentResult};
pub use metrics::{avg_outflow, avg_speed, energy_consumption, i210_callables};
pub use runner::{Experiment, RunOptions};
pub use summary::{ExperimentSummary, mean_std};
