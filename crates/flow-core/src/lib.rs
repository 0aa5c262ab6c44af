//! `flow-core` — foundational types for the flow experiment layer.
//!
//! Every other `flow-*` crate depends on this one.  It has no `flow-*`
//! dependencies and only a handful of external ones (`rand`, `serde`,
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `VehicleTypeName`, `VehicleId`, `EdgeId`, `AgentId`      |
//! | [`simulator`]   | `Simulator` backend selector (`traci` / `aimsun`)        |
//! | [`penetration`] | `PenetrationRate`, `RateSplit`, `RateRounding`           |
//! | [`paths`]       | `ProjectPaths` (project root + template resolution)      |
//! | [`space`]       | `Space` — gym-style observation/action descriptors       |
//! | [`rng`]         | `SimRng` — seeded kernel RNG                             |
//! | [`error`]       | `FlowError`, `FlowResult`                                |

pub mod error;
pub mod ids;
pub mod paths;
pub mod penetration;
pub mod rng;
pub mod simulator;
pub mod space;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlowError, FlowResult};
pub use ids::{AgentId, EdgeId, VehicleId, VehicleTypeName};
pub use paths::{PROJECT_PATH_ENV, ProjectPaths};
pub use penetration::{PenetrationRate, RateRounding, RateSplit};
pub use rng::SimRng;
pub use simulator::Simulator;
pub use space::Space;
