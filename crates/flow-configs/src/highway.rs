//! Straight multi-lane highway fed by a human/AV inflow split.
//!
//! Rates are kept fractional here, unlike the truncated I-210 split.

use flow_core::{PenetrationRate, ProjectPaths, RateRounding};
use flow_experiment::{CustomCallables, avg_outflow, avg_speed};
use flow_inflows::{DepartLane, DepartSpeed, InFlows, PenetrationSplit};
use flow_params::{
    CommonSimParams, EnvClass, EnvParams, FlowParams, NetParams, NetworkClass, SumoParams,
};
use flow_vehicles::{AccelerationController, IdmParams, VehicleParams, VehicleType};

use crate::{ConfigsResult, ExperimentConfig};

pub const EXP_TAG: &str = "highway";
pub const HORIZON: u32 = 1_500;
pub const TRAFFIC_FLOW: f64 = 2_215.0;
pub const PENETRATION_RATE: f64 = 10.0;
pub const ENTRY_EDGE: &str = "highway_0";

pub fn inflows(rate: PenetrationRate) -> ConfigsResult<InFlows> {
    let mut inflows = InFlows::new();
    PenetrationSplit::new("human", "av")
        .rounding(RateRounding::Fractional)
        .depart_lane(DepartLane::Free)
        .depart_speed(DepartSpeed::Value(15.0))
        .apply(&mut inflows, ENTRY_EDGE, TRAFFIC_FLOW, rate)?;
    Ok(inflows)
}

pub fn build(_paths: &ProjectPaths) -> ConfigsResult<ExperimentConfig> {
    let mut vehicles = VehicleParams::new();
    vehicles.add(
        VehicleType::builder("human")
            .acceleration_controller(AccelerationController::Idm(IdmParams {
                noise: 0.2,
                ..IdmParams::default()
            }))
            .build(),
    )?;
    vehicles.add(
        VehicleType::builder("av")
            .acceleration_controller(AccelerationController::Idm(IdmParams::default()))
            .color("red")
            .build(),
    )?;

    let rate = PenetrationRate::from_percent(PENETRATION_RATE)?;
    let flow_params = FlowParams::builder(EXP_TAG, EnvClass::TestEnv, NetworkClass::Highway)
        .sim(SumoParams {
            common: CommonSimParams { sim_step: 0.5, ..CommonSimParams::default() },
            ..SumoParams::default()
        })
        .env(EnvParams::new(HORIZON))
        .net(
            NetParams::new()
                .inflows(inflows(rate)?)
                .additional_params(NetworkClass::Highway.default_net_params()),
        )
        .veh(vehicles)
        .build()?;

    let callables = CustomCallables::new()
        .with("avg_speed", avg_speed)
        .with("avg_outflow", avg_outflow);
    Ok(ExperimentConfig::simulation(flow_params, callables))
}
