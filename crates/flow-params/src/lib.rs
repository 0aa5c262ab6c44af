//! `flow-params` — everything an experiment hands to the environment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`additional`]| `AdditionalParams` — free-form extension map with checked overlay  |
//! | [`env`]       | `EnvClass` catalog + `EnvParams`                                   |
//! | [`network`]   | `NetworkClass` catalog, `NetParams`, `InitialConfig`               |
//! | [`sim`]       | `SimParams` (`SumoParams` / `AimsunParams`), `CommonSimParams`     |
//! | [`tls`]       | `TrafficLightParams`                                              |
//! | [`flow`]      | `FlowParams` aggregate + `FlowParamsBuilder`                      |
//! | [`encode`]    | JSON encoding (sorted keys, 4-space indent) and the on-disk dump   |
//! | [`error`]     | `ParamsError`, `ParamsResult<T>`                                  |
//!
//! # Assembly order
//!
//! ```text
//! EnvClass::default_params() ──overlay──► EnvParams.additional_params
//! NetworkClass::default_net_params() ───► NetParams.additional_params
//! VehicleParams + InFlows + InitialConfig + SimParams ──► FlowParams::builder(..).build()
//! ```
//!
//! No cross-field consistency is checked: a network class paired with a
//! template for a different network only fails inside the simulator.

pub mod additional;
pub mod encode;
pub mod env;
pub mod error;
pub mod flow;
pub mod network;
pub mod sim;
pub mod tls;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use additional::{AdditionalParams, ParamValue};
pub use encode::{to_json_string, to_json_value, write_json};
pub use env::{EnvClass, EnvParams};
pub use error::{ParamsError, ParamsResult};
pub use flow::{FlowParams, FlowParamsBuilder};
pub use network::{EdgesDistribution, InitialConfig, NetParams, NetworkClass, I210_EDGES_DISTRIBUTION};
pub use sim::{AimsunOptions, AimsunParams, CommonSimParams, SimParams, SumoOptions, SumoParams};
pub use tls::{TrafficLightParams, TrafficLightPhase, TrafficLightProgram};
