//! Multi-agent I-210.
//!
//! A varying number of AVs, all sharing one policy, on the I-210 highway
//! with ramps.  Humans and AVs enter on the main line; the ramp inflows are
//! disabled in this setup.

use serde_json::json;

use flow_core::{PenetrationRate, ProjectPaths, RateRounding};
use flow_experiment::i210_callables;
use flow_inflows::{DepartLane, DepartSpeed, InFlows, PenetrationSplit};
use flow_params::{
    AdditionalParams, CommonSimParams, EdgesDistribution, EnvClass, EnvParams, FlowParams,
    I210_EDGES_DISTRIBUTION, InitialConfig, NetParams, NetworkClass, SumoOptions, SumoParams,
};
use flow_rllib::{MultiAgentConfig, make_create_env};
use flow_vehicles::{
    AccelerationController, IdmParams, LaneChangeController, LaneChangeMode, SafeAggressiveParams,
    SpeedMode, SumoCarFollowingParams, SumoLaneChangeParams, VehicleParams, VehicleType,
};

use crate::{ConfigsResult, ExperimentConfig, RllibSetup};

pub const EXP_TAG: &str = "I_210_subnetwork";

/// Steps per rollout.
pub const HORIZON: u32 = 4_000;
pub const WARMUP_STEPS: u32 = 700;

pub const VEH_PER_HOUR_BASE_119257914: f64 = 10_800.0;
pub const VEH_PER_HOUR_BASE_27414345:  f64 = 321.0;
pub const VEH_PER_HOUR_BASE_27414342:  f64 = 421.0;

/// Percentage of AVs among main-line vehicles.
pub const PENETRATION_RATE: f64 = 10.0;

pub const MAIN_EDGE: &str = "119257914";

/// Network template, relative to the project root.
pub const NET_TEMPLATE: &str = "examples/exp_configs/templates/sumo/test2.net.xml";

pub(crate) fn human_idm() -> AccelerationController {
    AccelerationController::Idm(IdmParams { a: 0.3, b: 2.0, noise: 0.5, ..IdmParams::default() })
}

pub(crate) fn human() -> VehicleType {
    VehicleType::builder("human")
        .acceleration_controller(human_idm())
        .lane_change_params(SumoLaneChangeParams {
            lc_speed_gain: 0.1,
            ..SumoLaneChangeParams::with_mode(LaneChangeMode::from_bits(21))
        })
        .car_following_params(SumoCarFollowingParams::with_speed_mode(SpeedMode::NoCollide))
        .build()
}

pub fn vehicles() -> ConfigsResult<VehicleParams> {
    let mut vehicles = VehicleParams::new();
    vehicles.add(human())?;
    vehicles.add(
        VehicleType::builder("av")
            .acceleration_controller(AccelerationController::Rl)
            .color("red")
            .build(),
    )?;
    vehicles.add(
        VehicleType::builder("aggressive")
            .acceleration_controller(human_idm())
            .car_following_params(SumoCarFollowingParams::with_speed_mode(SpeedMode::NoCollide))
            .lane_change_params(SumoLaneChangeParams::with_mode(LaneChangeMode::Aggressive))
            .lane_change_controller(LaneChangeController::SafeAggressive(SafeAggressiveParams {
                target_velocity:         100.0,
                threshold:               1.0,
                desired_lc_time_headway: 0.1,
            }))
            .color("green")
            .build(),
    )?;
    Ok(vehicles)
}

/// Main-line human and AV inflows, truncated to whole vehicles per hour.
pub fn inflows(rate: PenetrationRate) -> ConfigsResult<InFlows> {
    let mut inflows = InFlows::new();
    PenetrationSplit::new("human", "av")
        .rounding(RateRounding::Truncate)
        .depart_lane(DepartLane::Random)
        .depart_speed(DepartSpeed::Value(20.0))
        .apply(&mut inflows, MAIN_EDGE, VEH_PER_HOUR_BASE_119257914, rate)?;
    Ok(inflows)
}

pub fn env_params() -> ConfigsResult<EnvParams> {
    let additional = AdditionalParams::overlay(
        &EnvClass::I210MultiEnv.default_params(),
        AdditionalParams::from_pairs([
            ("max_accel", json!(2.6)),
            ("max_decel", json!(4.5)),
            // observe only the leader
            ("lead_obs", json!(true)),
            // reward nearby vehicles' speed too
            ("local_reward", json!(true)),
        ]),
    )?;
    Ok(EnvParams::new(HORIZON)
        .sims_per_step(1)
        .warmup_steps(WARMUP_STEPS)
        .additional_params(additional))
}

pub(crate) fn sumo_params() -> SumoParams {
    SumoParams {
        common: CommonSimParams {
            sim_step:           0.5,
            render:             false,
            restart_instance:   true,
            disable_collisions: true,
            ..CommonSimParams::default()
        },
        sumo: SumoOptions {
            color_by_speed: false,
            use_ballistic:  true,
            ..SumoOptions::default()
        },
    }
}

pub fn flow_params(paths: &ProjectPaths) -> ConfigsResult<FlowParams> {
    let rate = PenetrationRate::from_percent(PENETRATION_RATE)?;
    let params = FlowParams::builder(EXP_TAG, EnvClass::I210MultiEnv, NetworkClass::I210SubNetwork)
        .sim(sumo_params())
        .env(env_params()?)
        .net(NetParams::new().inflows(inflows(rate)?).template(paths.template(NET_TEMPLATE)))
        .veh(vehicles()?)
        .initial(InitialConfig::with_edges(EdgesDistribution::from_edges(I210_EDGES_DISTRIBUTION)))
        .build()?;
    Ok(params)
}

pub fn build(paths: &ProjectPaths) -> ConfigsResult<ExperimentConfig> {
    let flow_params = flow_params(paths)?;
    let (creator, env_name) = make_create_env(&flow_params, 0);
    let multiagent = MultiAgentConfig::shared_policy(&creator)?;
    Ok(ExperimentConfig {
        flow_params,
        custom_callables: i210_callables(),
        rllib: Some(RllibSetup { env_name, creator, multiagent }),
    })
}
