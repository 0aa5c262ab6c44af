//! SUMO-side vehicle parameters.
//!
//! Speed and lane-change modes are SUMO bitsets.  The named modes map to the
//! bit patterns SUMO documents; anything else is kept as a raw integer.
//! Named modes serialize as their name, raw ones as the integer.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::VehiclesError;

// ── SpeedMode ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpeedMode {
    /// Ignore every safety check.
    Aggressive,
    /// Regard safe speed only.
    ObeySafeSpeed,
    /// Safe speed plus maximum acceleration/deceleration, ignore right of way.
    NoCollide,
    /// Everything except maximum deceleration.
    #[default]
    RightOfWay,
    /// All checks on.
    AllChecks,
    Custom(u32),
}

impl SpeedMode {
    pub fn bits(self) -> u32 {
        match self {
            SpeedMode::Aggressive    => 0,
            SpeedMode::ObeySafeSpeed => 1,
            SpeedMode::NoCollide     => 7,
            SpeedMode::RightOfWay    => 25,
            SpeedMode::AllChecks     => 31,
            SpeedMode::Custom(bits)  => bits,
        }
    }

    pub fn from_bits(bits: u32) -> Self {
        match bits {
            0  => SpeedMode::Aggressive,
            1  => SpeedMode::ObeySafeSpeed,
            7  => SpeedMode::NoCollide,
            25 => SpeedMode::RightOfWay,
            31 => SpeedMode::AllChecks,
            b  => SpeedMode::Custom(b),
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            SpeedMode::Aggressive    => Some("aggressive"),
            SpeedMode::ObeySafeSpeed => Some("obey_safe_speed"),
            SpeedMode::NoCollide     => Some("no_collide"),
            SpeedMode::RightOfWay    => Some("right_of_way"),
            SpeedMode::AllChecks     => Some("all_checks"),
            SpeedMode::Custom(_)     => None,
        }
    }
}

impl FromStr for SpeedMode {
    type Err = VehiclesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "aggressive"      => Ok(SpeedMode::Aggressive),
            "obey_safe_speed" => Ok(SpeedMode::ObeySafeSpeed),
            "no_collide"      => Ok(SpeedMode::NoCollide),
            "right_of_way"    => Ok(SpeedMode::RightOfWay),
            "all_checks"      => Ok(SpeedMode::AllChecks),
            n => n
                .parse::<u32>()
                .map(SpeedMode::from_bits)
                .map_err(|_| VehiclesError::UnknownSpeedMode(n.to_owned())),
        }
    }
}

impl Serialize for SpeedMode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => s.serialize_str(name),
            None => s.serialize_u32(self.bits()),
        }
    }
}

// ── LaneChangeMode ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LaneChangeMode {
    /// No lateral collisions; strategic changes only when safe.
    #[default]
    NoLatCollide,
    /// SUMO's default behaviour: strategic, cooperative, speed-gain and
    /// keep-right changes, all while respecting safety gaps.
    Strategic,
    /// Lane changes ignore other vehicles' safety gaps.
    Aggressive,
    Custom(u32),
}

impl LaneChangeMode {
    pub fn bits(self) -> u32 {
        match self {
            LaneChangeMode::NoLatCollide => 512,
            LaneChangeMode::Strategic    => 1621,
            LaneChangeMode::Aggressive   => 0,
            LaneChangeMode::Custom(bits) => bits,
        }
    }

    pub fn from_bits(bits: u32) -> Self {
        match bits {
            512  => LaneChangeMode::NoLatCollide,
            1621 => LaneChangeMode::Strategic,
            0    => LaneChangeMode::Aggressive,
            b    => LaneChangeMode::Custom(b),
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            LaneChangeMode::NoLatCollide => Some("no_lat_collide"),
            LaneChangeMode::Strategic    => Some("strategic"),
            LaneChangeMode::Aggressive   => Some("aggressive"),
            LaneChangeMode::Custom(_)    => None,
        }
    }
}

impl FromStr for LaneChangeMode {
    type Err = VehiclesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "no_lat_collide" => Ok(LaneChangeMode::NoLatCollide),
            "strategic"      => Ok(LaneChangeMode::Strategic),
            "aggressive"     => Ok(LaneChangeMode::Aggressive),
            n => n
                .parse::<u32>()
                .map(LaneChangeMode::from_bits)
                .map_err(|_| VehiclesError::UnknownLaneChangeMode(n.to_owned())),
        }
    }
}

impl Serialize for LaneChangeMode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => s.serialize_str(name),
            None => s.serialize_u32(self.bits()),
        }
    }
}

// ── Parameter groups ──────────────────────────────────────────────────────────

/// Car-following parameters handed to SUMO's `vType`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SumoCarFollowingParams {
    pub speed_mode:        SpeedMode,
    pub accel:             f64,
    pub decel:             f64,
    pub sigma:             f64,
    pub tau:               f64,
    pub min_gap:           f64,
    pub max_speed:         f64,
    pub speed_factor:      f64,
    pub speed_dev:         f64,
    pub impatience:        f64,
    pub car_follow_model:  String,
}

impl Default for SumoCarFollowingParams {
    fn default() -> Self {
        Self {
            speed_mode:       SpeedMode::default(),
            accel:            2.6,
            decel:            7.5,
            sigma:            0.5,
            tau:              1.0,
            min_gap:          2.5,
            max_speed:        30.0,
            speed_factor:     1.0,
            speed_dev:        0.1,
            impatience:       0.5,
            car_follow_model: "IDM".to_owned(),
        }
    }
}

impl SumoCarFollowingParams {
    /// Defaults with the given speed mode.
    pub fn with_speed_mode(speed_mode: SpeedMode) -> Self {
        Self { speed_mode, ..Self::default() }
    }
}

/// Lane-change model parameters (SUMO `LC2013`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SumoLaneChangeParams {
    pub lane_change_mode: LaneChangeMode,
    pub model:            String,
    pub lc_strategic:     f64,
    pub lc_cooperative:   f64,
    pub lc_speed_gain:    f64,
    pub lc_keep_right:    f64,
    pub lc_assertive:     f64,
    pub lc_pushy:         f64,
}

impl Default for SumoLaneChangeParams {
    fn default() -> Self {
        Self {
            lane_change_mode: LaneChangeMode::default(),
            model:            "LC2013".to_owned(),
            lc_strategic:     1.0,
            lc_cooperative:   1.0,
            lc_speed_gain:    1.0,
            lc_keep_right:    1.0,
            lc_assertive:     1.0,
            lc_pushy:         0.0,
        }
    }
}

impl SumoLaneChangeParams {
    pub fn with_mode(lane_change_mode: LaneChangeMode) -> Self {
        Self { lane_change_mode, ..Self::default() }
    }
}
