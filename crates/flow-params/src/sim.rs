//! Simulation-step parameters for the SUMO and Aimsun backends.
//!
//! Fields both backends understand live in [`CommonSimParams`].  Switching a
//! configuration from SUMO to Aimsun with [`SimParams::into_aimsun`] keeps
//! the common block as-is and carries the SUMO-only block along in
//! `inherited`, so no previously set field is lost.

use std::path::PathBuf;

use serde::Serialize;

use flow_core::Simulator;

// ── Shared ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommonSimParams {
    /// Seconds per simulation step.
    pub sim_step:           f64,
    pub render:             bool,
    /// Relaunch the simulator process on every reset.
    pub restart_instance:   bool,
    /// Directory emission output is written to.  `None` disables output.
    pub emission_path:      Option<PathBuf>,
    pub disable_collisions: bool,
    pub save_render:        bool,
    pub sight_radius:       f64,
    pub show_radius:        bool,
    /// Pixels per metre when rendering.
    pub pxpm:               f64,
    pub force_color_update: bool,
}

impl Default for CommonSimParams {
    fn default() -> Self {
        Self {
            sim_step:           0.1,
            render:             false,
            restart_instance:   false,
            emission_path:      None,
            disable_collisions: false,
            save_render:        false,
            sight_radius:       25.0,
            show_radius:        false,
            pxpm:               2.0,
            force_color_update: false,
        }
    }
}

// ── SUMO ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SumoOptions {
    pub port:               Option<u16>,
    pub lateral_resolution: Option<f64>,
    pub overtake_right:     bool,
    pub seed:               Option<u64>,
    pub print_warnings:     bool,
    /// Seconds before a stuck vehicle is teleported; negative disables.
    pub teleport_time:      i32,
    pub num_clients:        u32,
    pub color_by_speed:     bool,
    pub use_ballistic:      bool,
    pub no_step_log:        bool,
    /// Connect through the in-process libsumo bindings instead of TraCI.
    pub use_libsumo:        bool,
}

impl Default for SumoOptions {
    fn default() -> Self {
        Self {
            port:               None,
            lateral_resolution: None,
            overtake_right:     false,
            seed:               None,
            print_warnings:     true,
            teleport_time:      -1,
            num_clients:        1,
            color_by_speed:     false,
            use_ballistic:      false,
            no_step_log:        true,
            use_libsumo:        false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SumoParams {
    #[serde(flatten)]
    pub common: CommonSimParams,
    #[serde(flatten)]
    pub sumo:   SumoOptions,
}

// ── Aimsun ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AimsunOptions {
    pub network_name:         Option<String>,
    pub experiment_name:      Option<String>,
    pub replication_name:     Option<String>,
    pub centroid_config_name: Option<String>,
    pub subnetwork_name:      Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AimsunParams {
    #[serde(flatten)]
    pub common:    CommonSimParams,
    #[serde(flatten)]
    pub aimsun:    AimsunOptions,
    /// SUMO options carried over from a converted configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<SumoOptions>,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "params")]
pub enum SimParams {
    SumoParams(SumoParams),
    AimsunParams(AimsunParams),
}

impl SimParams {
    pub fn common(&self) -> &CommonSimParams {
        match self {
            SimParams::SumoParams(p)   => &p.common,
            SimParams::AimsunParams(p) => &p.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonSimParams {
        match self {
            SimParams::SumoParams(p)   => &mut p.common,
            SimParams::AimsunParams(p) => &mut p.common,
        }
    }

    /// Backend this parameter block is written for.
    pub fn simulator(&self) -> Simulator {
        match self {
            SimParams::SumoParams(_)   => Simulator::Traci,
            SimParams::AimsunParams(_) => Simulator::Aimsun,
        }
    }

    pub fn as_sumo(&self) -> Option<&SumoParams> {
        match self {
            SimParams::SumoParams(p) => Some(p),
            SimParams::AimsunParams(_) => None,
        }
    }

    pub fn as_sumo_mut(&mut self) -> Option<&mut SumoParams> {
        match self {
            SimParams::SumoParams(p) => Some(p),
            SimParams::AimsunParams(_) => None,
        }
    }

    pub fn as_aimsun(&self) -> Option<&AimsunParams> {
        match self {
            SimParams::AimsunParams(p) => Some(p),
            SimParams::SumoParams(_) => None,
        }
    }

    /// Replace this block with Aimsun parameters holding every field set so
    /// far.  Already-Aimsun blocks are returned unchanged.
    pub fn into_aimsun(self) -> SimParams {
        match self {
            SimParams::SumoParams(p) => SimParams::AimsunParams(AimsunParams {
                common:    p.common,
                aimsun:    AimsunOptions::default(),
                inherited: Some(p.sumo),
            }),
            aimsun @ SimParams::AimsunParams(_) => aimsun,
        }
    }

    /// SUMO options, whether native or inherited by a converted block.
    pub fn sumo_options(&self) -> Option<&SumoOptions> {
        match self {
            SimParams::SumoParams(p)   => Some(&p.sumo),
            SimParams::AimsunParams(p) => p.inherited.as_ref(),
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams::SumoParams(SumoParams::default())
    }
}

impl From<SumoParams> for SimParams {
    fn from(p: SumoParams) -> Self {
        SimParams::SumoParams(p)
    }
}

impl From<AimsunParams> for SimParams {
    fn from(p: AimsunParams) -> Self {
        SimParams::AimsunParams(p)
    }
}
