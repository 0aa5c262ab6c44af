//! Vehicle types and the fleet that holds them.
//!
//! # Usage
//!
//! ```rust
//! use flow_vehicles::{AccelerationController, IdmParams, VehicleParams, VehicleType};
//!
//! let mut vehicles = VehicleParams::new();
//! vehicles
//!     .add(
//!         VehicleType::builder("human")
//!             .acceleration_controller(AccelerationController::Idm(IdmParams::default()))
//!             .build(),
//!     )
//!     .unwrap();
//! vehicles
//!     .add(VehicleType::builder("av").acceleration_controller(AccelerationController::Rl).color("red").build())
//!     .unwrap();
//!
//! assert_eq!(vehicles.len(), 2);
//! assert!(vehicles.add(VehicleType::builder("av").build()).is_err());
//! ```

use serde::Serialize;

use flow_core::VehicleTypeName;

use crate::{
    AccelerationController, LaneChangeController, RoutingController, SumoCarFollowingParams,
    SumoLaneChangeParams, VehiclesError, VehiclesResult,
};

// ── VehicleType ───────────────────────────────────────────────────────────────

/// One named vehicle type with its behavioural parameters.
///
/// `num_vehicles` is the count placed on the network at reset.  Types fed
/// purely by inflows start at `0`; the simulator populates them at run time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleType {
    pub veh_id:                  VehicleTypeName,
    pub num_vehicles:            usize,
    pub acceleration_controller: AccelerationController,
    pub lane_change_controller:  LaneChangeController,
    pub routing_controller:      Option<RoutingController>,
    pub car_following_params:    SumoCarFollowingParams,
    pub lane_change_params:      SumoLaneChangeParams,
    pub color:                   Option<String>,
}

impl VehicleType {
    pub fn builder(name: impl Into<VehicleTypeName>) -> VehicleTypeBuilder {
        VehicleTypeBuilder::new(name)
    }

    #[inline]
    pub fn name(&self) -> &VehicleTypeName {
        &self.veh_id
    }

    #[inline]
    pub fn is_rl(&self) -> bool {
        self.acceleration_controller.is_rl()
    }
}

// ── VehicleTypeBuilder ────────────────────────────────────────────────────────

/// Fluent builder for [`VehicleType`].
///
/// | Method                        | Default                       |
/// |-------------------------------|-------------------------------|
/// | `.num_vehicles(n)`            | `0`                           |
/// | `.acceleration_controller(c)` | `SimCarFollowingController`   |
/// | `.lane_change_controller(c)`  | `SimLaneChangeController`     |
/// | `.routing_controller(c)`      | none                          |
/// | `.car_following_params(p)`    | `SumoCarFollowingParams::default()` |
/// | `.lane_change_params(p)`      | `SumoLaneChangeParams::default()`   |
/// | `.color(c)`                   | none (simulator picks)        |
pub struct VehicleTypeBuilder {
    ty: VehicleType,
}

impl VehicleTypeBuilder {
    pub fn new(name: impl Into<VehicleTypeName>) -> Self {
        Self {
            ty: VehicleType {
                veh_id:                  name.into(),
                num_vehicles:            0,
                acceleration_controller: AccelerationController::default(),
                lane_change_controller:  LaneChangeController::default(),
                routing_controller:      None,
                car_following_params:    SumoCarFollowingParams::default(),
                lane_change_params:      SumoLaneChangeParams::default(),
                color:                   None,
            },
        }
    }

    pub fn num_vehicles(mut self, n: usize) -> Self {
        self.ty.num_vehicles = n;
        self
    }

    pub fn acceleration_controller(mut self, c: AccelerationController) -> Self {
        self.ty.acceleration_controller = c;
        self
    }

    pub fn lane_change_controller(mut self, c: LaneChangeController) -> Self {
        self.ty.lane_change_controller = c;
        self
    }

    pub fn routing_controller(mut self, c: RoutingController) -> Self {
        self.ty.routing_controller = Some(c);
        self
    }

    pub fn car_following_params(mut self, p: SumoCarFollowingParams) -> Self {
        self.ty.car_following_params = p;
        self
    }

    pub fn lane_change_params(mut self, p: SumoLaneChangeParams) -> Self {
        self.ty.lane_change_params = p;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.ty.color = Some(color.into());
        self
    }

    pub fn build(self) -> VehicleType {
        self.ty
    }
}

// ── VehicleParams ─────────────────────────────────────────────────────────────

/// The fleet: vehicle types in insertion order, unique by name.
///
/// Grows monotonically while an experiment is being defined; not mutated
/// after the configuration is handed to the runner.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VehicleParams {
    types: Vec<VehicleType>,
}

impl VehicleParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle type.  Fails if a type with the same name exists.
    pub fn add(&mut self, ty: VehicleType) -> VehiclesResult<()> {
        if self.get(ty.veh_id.as_str()).is_some() {
            return Err(VehiclesError::DuplicateType(ty.veh_id));
        }
        self.types.push(ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&VehicleType> {
        self.types.iter().find(|t| t.veh_id.as_str() == name)
    }

    pub fn types(&self) -> &[VehicleType] {
        &self.types
    }

    pub fn type_names(&self) -> impl Iterator<Item = &VehicleTypeName> {
        self.types.iter().map(|t| &t.veh_id)
    }

    /// Types whose acceleration is driven by an RL agent.
    pub fn rl_types(&self) -> impl Iterator<Item = &VehicleType> {
        self.types.iter().filter(|t| t.is_rl())
    }

    /// Vehicles placed on the network at reset (sum of `num_vehicles`).
    pub fn initial_count(&self) -> usize {
        self.types.iter().map(|t| t.num_vehicles).sum()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
