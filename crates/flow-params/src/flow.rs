//! The `FlowParams` aggregate handed to the environment factory.

use serde::Serialize;

use flow_core::Simulator;
use flow_vehicles::VehicleParams;

use crate::{
    EnvClass, EnvParams, InitialConfig, NetParams, NetworkClass, ParamsError, ParamsResult,
    SimParams, TrafficLightParams,
};

/// Complete description of one experiment.
///
/// Built once per invocation, optionally adjusted by the CLI (render flag,
/// backend, emission path), then handed to the runner by value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowParams {
    pub exp_tag:   String,
    pub env_name:  EnvClass,
    pub network:   NetworkClass,
    pub simulator: Simulator,
    pub sim:       SimParams,
    pub env:       EnvParams,
    pub net:       NetParams,
    pub veh:       VehicleParams,
    pub initial:   InitialConfig,
    pub tls:       TrafficLightParams,
}

impl FlowParams {
    pub fn builder(
        exp_tag:  impl Into<String>,
        env_name: EnvClass,
        network:  NetworkClass,
    ) -> FlowParamsBuilder {
        FlowParamsBuilder::new(exp_tag, env_name, network)
    }

    /// Horizon of one rollout, in RL steps.
    pub fn horizon(&self) -> u32 {
        self.env.horizon
    }
}

/// Fluent builder for [`FlowParams`].
///
/// # Required inputs
///
/// - experiment tag, environment class, network class (constructor)
/// - [`EnvParams`] via `.env(..)`
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                        |
/// |-----------------|--------------------------------|
/// | `.simulator(s)` | `Simulator::Traci`             |
/// | `.sim(p)`       | `SumoParams::default()`        |
/// | `.net(p)`       | empty `NetParams`              |
/// | `.veh(v)`       | empty `VehicleParams`          |
/// | `.initial(c)`   | `InitialConfig::default()`     |
/// | `.tls(t)`       | no traffic lights              |
pub struct FlowParamsBuilder {
    exp_tag:   String,
    env_name:  EnvClass,
    network:   NetworkClass,
    simulator: Simulator,
    sim:       SimParams,
    env:       Option<EnvParams>,
    net:       NetParams,
    veh:       VehicleParams,
    initial:   InitialConfig,
    tls:       TrafficLightParams,
}

impl FlowParamsBuilder {
    pub fn new(exp_tag: impl Into<String>, env_name: EnvClass, network: NetworkClass) -> Self {
        Self {
            exp_tag:   exp_tag.into(),
            env_name,
            network,
            simulator: Simulator::default(),
            sim:       SimParams::default(),
            env:       None,
            net:       NetParams::default(),
            veh:       VehicleParams::default(),
            initial:   InitialConfig::default(),
            tls:       TrafficLightParams::default(),
        }
    }

    pub fn simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn sim(mut self, sim: impl Into<SimParams>) -> Self {
        self.sim = sim.into();
        self
    }

    pub fn env(mut self, env: EnvParams) -> Self {
        self.env = Some(env);
        self
    }

    pub fn net(mut self, net: NetParams) -> Self {
        self.net = net;
        self
    }

    pub fn veh(mut self, veh: VehicleParams) -> Self {
        self.veh = veh;
        self
    }

    pub fn initial(mut self, initial: InitialConfig) -> Self {
        self.initial = initial;
        self
    }

    pub fn tls(mut self, tls: TrafficLightParams) -> Self {
        self.tls = tls;
        self
    }

    /// Check that the required parts are present and assemble.
    pub fn build(self) -> ParamsResult<FlowParams> {
        if self.exp_tag.trim().is_empty() {
            return Err(ParamsError::MissingField("exp_tag"));
        }
        let env = self.env.ok_or(ParamsError::MissingField("env"))?;

        Ok(FlowParams {
            exp_tag:   self.exp_tag,
            env_name:  self.env_name,
            network:   self.network,
            simulator: self.simulator,
            sim:       self.sim,
            env,
            net:       self.net,
            veh:       self.veh,
            initial:   self.initial,
            tls:       self.tls,
        })
    }
}
