//! `flow-vehicles` — the vehicle-fleet builder.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`controllers`] | `AccelerationController`, `LaneChangeController`, `RoutingController` |
//! | [`sumo`]        | `SumoCarFollowingParams`, `SumoLaneChangeParams`, speed / lane-change modes |
//! | [`fleet`]       | `VehicleType`, `VehicleTypeBuilder`, `VehicleParams`           |
//! | [`error`]       | `VehiclesError`, `VehiclesResult<T>`                           |
//!
//! Everything here is plain data.  The controllers are references to
//! behaviour that the simulator-side environment instantiates; this crate
//! only records which class and which parameters.

pub mod controllers;
pub mod error;
pub mod fleet;
pub mod sumo;


pub use controllers::{
    AccelerationController, IdmParams, LaneChangeController, RoutingController,
    SafeAggressiveParams,
};
pub use error::{VehiclesError, VehiclesResult};
pub use fleet::{VehicleParams, VehicleType, VehicleTypeBuilder};
pub use sumo::{LaneChangeMode, SpeedMode, SumoCarFollowingParams, SumoLaneChangeParams};
