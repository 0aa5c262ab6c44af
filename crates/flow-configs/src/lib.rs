//! `flow-configs` — the experiments this repository ships, and the catalog
//! the CLI resolves names against.
//!
//! # Crate layout
//!
//! | Module                | Contents                                                |
//! |-----------------------|---------------------------------------------------------|
//! | [`config`]            | `ExperimentConfig`, `RllibSetup`                        |
//! | [`catalog`]           | `ExperimentCatalog`, `ExperimentEntry`, `ExperimentGroup` |
//! | [`multiagent_i210`]   | I-210 with ramps, shared-policy multi-agent RL          |
//! | [`i210_subnetwork`]   | I-210 with human drivers only                           |
//! | [`highway`]           | straight highway, human/AV inflow split                 |
//! | [`ring`]              | 22 IDM vehicles on a ring road                          |
//! | [`error`]             | `ConfigsError`, `ConfigsResult<T>`                      |
//!
//! Each experiment module exposes `build(&ProjectPaths) -> ConfigsResult<ExperimentConfig>`.
//! Building never touches global state; RL experiments register their
//! environment only when [`ExperimentConfig::register`] is called.

pub mod catalog;
pub mod config;
pub mod error;
pub mod highway;
pub mod i210_subnetwork;
pub mod multiagent_i210;
pub mod ring;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{ExperimentCatalog, ExperimentEntry, ExperimentGroup};
pub use config::{ExperimentConfig, RllibSetup};
pub use error::{ConfigsError, ConfigsResult};
