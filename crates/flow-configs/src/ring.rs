//! 22 IDM vehicles on a single-lane ring road.

use flow_core::ProjectPaths;
use flow_experiment::CustomCallables;
use flow_params::{
    CommonSimParams, EnvClass, EnvParams, FlowParams, InitialConfig, NetParams, NetworkClass,
    SumoParams,
};
use flow_vehicles::{AccelerationController, IdmParams, RoutingController, VehicleParams, VehicleType};

use crate::{ConfigsResult, ExperimentConfig};

pub const EXP_TAG: &str = "ring";
pub const HORIZON: u32 = 1_500;
pub const NUM_VEHICLES: usize = 22;

pub fn build(_paths: &ProjectPaths) -> ConfigsResult<ExperimentConfig> {
    let mut vehicles = VehicleParams::new();
    vehicles.add(
        VehicleType::builder("idm")
            .num_vehicles(NUM_VEHICLES)
            .acceleration_controller(AccelerationController::Idm(IdmParams {
                noise: 0.2,
                ..IdmParams::default()
            }))
            .routing_controller(RoutingController::ContinuousRouter)
            .build(),
    )?;

    let flow_params = FlowParams::builder(EXP_TAG, EnvClass::AccelEnv, NetworkClass::Loop)
        .sim(SumoParams {
            common: CommonSimParams { sim_step: 0.1, render: true, ..CommonSimParams::default() },
            ..SumoParams::default()
        })
        .env(EnvParams::new(HORIZON).additional_params(EnvClass::AccelEnv.default_params()))
        .net(NetParams::new().additional_params(NetworkClass::Loop.default_net_params()))
        .veh(vehicles)
        .initial(InitialConfig { bunching: 20.0, ..InitialConfig::default() })
        .build()?;

    Ok(ExperimentConfig::simulation(flow_params, CustomCallables::new()))
}
