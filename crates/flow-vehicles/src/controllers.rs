//! Controller references with their parameter maps.
//!
//! Each variant names a controller class on the environment side and carries
//! the keyword parameters it is constructed with.  Serialized form is
//! `{"controller": "<ClassName>", ...params}`.

use serde::{Deserialize, Serialize};

// ── Acceleration ──────────────────────────────────────────────────────────────

/// Intelligent Driver Model parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdmParams {
    /// Desirable velocity (m/s).
    pub v0:    f64,
    /// Safe time headway (s).
    #[serde(rename = "T")]
    pub t:     f64,
    /// Maximum acceleration (m/s²).
    pub a:     f64,
    /// Comfortable deceleration (m/s²).
    pub b:     f64,
    /// Acceleration exponent.
    pub delta: f64,
    /// Linear jam distance (m).
    pub s0:    f64,
    /// Std-dev of the Gaussian noise added to the commanded acceleration.
    pub noise: f64,
}

impl Default for IdmParams {
    fn default() -> Self {
        Self { v0: 30.0, t: 1.0, a: 1.0, b: 1.5, delta: 4.0, s0: 2.0, noise: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "controller")]
pub enum AccelerationController {
    #[serde(rename = "IDMController")]
    Idm(IdmParams),
    /// Accelerations are supplied by the RL agent.
    #[serde(rename = "RLController")]
    Rl,
    /// Defer to the simulator's own car-following model.
    #[default]
    #[serde(rename = "SimCarFollowingController")]
    SimCarFollowing,
}

impl AccelerationController {
    pub fn class_name(&self) -> &'static str {
        match self {
            AccelerationController::Idm(_)          => "IDMController",
            AccelerationController::Rl              => "RLController",
            AccelerationController::SimCarFollowing => "SimCarFollowingController",
        }
    }

    #[inline]
    pub fn is_rl(&self) -> bool {
        matches!(self, AccelerationController::Rl)
    }
}

// ── Lane change ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafeAggressiveParams {
    pub target_velocity:         f64,
    pub threshold:               f64,
    pub desired_lc_time_headway: f64,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "controller")]
pub enum LaneChangeController {
    #[default]
    #[serde(rename = "SimLaneChangeController")]
    SimLaneChange,
    #[serde(rename = "SafeAggressiveLaneChanger")]
    SafeAggressive(SafeAggressiveParams),
}

impl LaneChangeController {
    pub fn class_name(&self) -> &'static str {
        match self {
            LaneChangeController::SimLaneChange     => "SimLaneChangeController",
            LaneChangeController::SafeAggressive(_) => "SafeAggressiveLaneChanger",
        }
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "controller")]
pub enum RoutingController {
    /// Keeps vehicles circulating on closed networks (rings, figure-eights).
    ContinuousRouter,
}

impl RoutingController {
    pub fn class_name(&self) -> &'static str {
        match self {
            RoutingController::ContinuousRouter => "ContinuousRouter",
        }
    }
}
