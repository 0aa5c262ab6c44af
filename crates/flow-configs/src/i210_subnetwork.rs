//! I-210 with ramps, human drivers only.

use flow_core::ProjectPaths;
use flow_experiment::i210_callables;
use flow_inflows::{DepartLane, DepartSpeed, InFlows};
use flow_params::{
    EdgesDistribution, EnvClass, EnvParams, FlowParams, I210_EDGES_DISTRIBUTION, InitialConfig,
    NetParams, NetworkClass,
};
use flow_vehicles::VehicleParams;

use crate::multiagent_i210::{
    HORIZON, MAIN_EDGE, NET_TEMPLATE, VEH_PER_HOUR_BASE_119257914, VEH_PER_HOUR_BASE_27414342,
    VEH_PER_HOUR_BASE_27414345, human, sumo_params,
};
use crate::{ConfigsResult, ExperimentConfig};

pub const EXP_TAG: &str = "I-210_subnetwork";

pub const ON_RAMP_EDGE: &str = "27414345";
pub const SECOND_RAMP_EDGE: &str = "27414342#0";

pub fn inflows() -> ConfigsResult<InFlows> {
    let mut inflows = InFlows::new();
    for (edge, rate) in [
        (MAIN_EDGE, VEH_PER_HOUR_BASE_119257914),
        (ON_RAMP_EDGE, VEH_PER_HOUR_BASE_27414345),
        (SECOND_RAMP_EDGE, VEH_PER_HOUR_BASE_27414342),
    ] {
        inflows.add("human", edge, rate, DepartLane::Random, DepartSpeed::Value(20.0))?;
    }
    Ok(inflows)
}

pub fn build(paths: &ProjectPaths) -> ConfigsResult<ExperimentConfig> {
    let mut vehicles = VehicleParams::new();
    vehicles.add(human())?;

    let flow_params = FlowParams::builder(EXP_TAG, EnvClass::TestEnv, NetworkClass::I210SubNetwork)
        .sim(sumo_params())
        .env(EnvParams::new(HORIZON))
        .net(NetParams::new().inflows(inflows()?).template(paths.template(NET_TEMPLATE)))
        .veh(vehicles)
        .initial(InitialConfig::with_edges(EdgesDistribution::from_edges(I210_EDGES_DISTRIBUTION)))
        .build()?;

    Ok(ExperimentConfig::simulation(flow_params, i210_callables()))
}
