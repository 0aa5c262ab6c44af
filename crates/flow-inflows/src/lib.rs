//! `flow-inflows` — scheduled arrival streams onto network edges.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`inflow`]  | `InflowEntry`, `InflowRate`, `DepartLane`, `DepartSpeed`, `InFlows` |
//! | [`split`]   | `PenetrationSplit` — human/AV inflow pairs from one base rate   |
//! | [`loader`]  | `load_inflows_csv`, `load_inflows_reader`                       |
//! | [`error`]   | `InflowsError`, `InflowsResult<T>`                              |
//!
//! Edge identifiers and vehicle-type names are free-form; only the external
//! simulator knows whether they exist.

pub mod error;
pub mod inflow;
pub mod loader;
pub mod split;

#[cfg(test)]
mod tests;

pub use error::{InflowsError, InflowsResult};
pub use inflow::{DepartLane, DepartSpeed, InFlows, InflowEntry, InflowRate, InflowSpec};
pub use loader::{load_inflows_csv, load_inflows_reader};
pub use split::PenetrationSplit;
