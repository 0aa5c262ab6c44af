//! Inflow entries and the ordered schedule that holds them.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use flow_core::{EdgeId, VehicleTypeName};

use crate::{InflowsError, InflowsResult};

/// SUMO's default inflow window.
pub const DEFAULT_BEGIN_SECS: f64 = 1.0;
pub const DEFAULT_END_SECS:   f64 = 86_400.0;

// ── Rate ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum InflowRate {
    /// Evenly spaced arrivals, vehicles per hour.
    #[serde(rename = "vehsPerHour")]
    VehsPerHour(f64),
    /// Independent arrival chance per second.
    #[serde(rename = "probability")]
    Probability(f64),
}

impl InflowRate {
    /// Expected arrivals per hour.
    pub fn expected_per_hour(self) -> f64 {
        match self {
            InflowRate::VehsPerHour(r) => r,
            InflowRate::Probability(p) => p * 3_600.0,
        }
    }
}

// ── Departure policy ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DepartLane {
    #[default]
    First,
    Random,
    Free,
    Best,
    Index(u32),
}

impl FromStr for DepartLane {
    type Err = InflowsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first"  => Ok(DepartLane::First),
            "random" => Ok(DepartLane::Random),
            "free"   => Ok(DepartLane::Free),
            "best"   => Ok(DepartLane::Best),
            n => n.parse::<u32>().map(DepartLane::Index).map_err(|_| {
                InflowsError::Parse(format!(
                    "invalid depart_lane {n:?}: expected first, random, free, best, or a lane index"
                ))
            }),
        }
    }
}

impl fmt::Display for DepartLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartLane::First    => f.write_str("first"),
            DepartLane::Random   => f.write_str("random"),
            DepartLane::Free     => f.write_str("free"),
            DepartLane::Best     => f.write_str("best"),
            DepartLane::Index(i) => write!(f, "{i}"),
        }
    }
}

impl Serialize for DepartLane {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            DepartLane::Index(i) => s.serialize_u32(*i),
            other => s.collect_str(other),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DepartSpeed {
    /// Fixed departure speed (m/s).
    Value(f64),
    Random,
    Max,
}

impl Default for DepartSpeed {
    fn default() -> Self {
        DepartSpeed::Value(0.0)
    }
}

impl FromStr for DepartSpeed {
    type Err = InflowsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" => Ok(DepartSpeed::Random),
            "max"    => Ok(DepartSpeed::Max),
            n => n
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(DepartSpeed::Value)
                .ok_or_else(|| {
                    InflowsError::Parse(format!(
                        "invalid depart_speed {n:?}: expected random, max, or a speed in m/s"
                    ))
                }),
        }
    }
}

impl Serialize for DepartSpeed {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            DepartSpeed::Value(v) => s.serialize_f64(*v),
            DepartSpeed::Random   => s.serialize_str("random"),
            DepartSpeed::Max      => s.serialize_str("max"),
        }
    }
}

// ── Entry ─────────────────────────────────────────────────────────────────────

/// One scheduled arrival stream of one vehicle type onto one edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InflowEntry {
    /// Unique flow name, `"<prefix>_<index>"`.
    pub name:         String,
    #[serde(rename = "vtype")]
    pub veh_type:     VehicleTypeName,
    pub edge:         EdgeId,
    #[serde(flatten)]
    pub rate:         InflowRate,
    #[serde(rename = "departLane")]
    pub depart_lane:  DepartLane,
    #[serde(rename = "departSpeed")]
    pub depart_speed: DepartSpeed,
    pub begin:        f64,
    pub end:          f64,
}

/// Everything needed to add one inflow, with SUMO defaults for the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct InflowSpec {
    pub veh_type:     VehicleTypeName,
    pub edge:         EdgeId,
    pub rate:         InflowRate,
    pub depart_lane:  DepartLane,
    pub depart_speed: DepartSpeed,
    pub name:         String,
    pub begin:        f64,
    pub end:          f64,
}

impl InflowSpec {
    pub fn new(veh_type: impl Into<VehicleTypeName>, edge: impl Into<EdgeId>, rate: InflowRate) -> Self {
        Self {
            veh_type:     veh_type.into(),
            edge:         edge.into(),
            rate,
            depart_lane:  DepartLane::default(),
            depart_speed: DepartSpeed::default(),
            name:         "flow".to_owned(),
            begin:        DEFAULT_BEGIN_SECS,
            end:          DEFAULT_END_SECS,
        }
    }

    pub fn depart_lane(mut self, lane: DepartLane) -> Self {
        self.depart_lane = lane;
        self
    }

    pub fn depart_speed(mut self, speed: DepartSpeed) -> Self {
        self.depart_speed = speed;
        self
    }

    /// Prefix for the generated flow name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Active period in simulated seconds.  `begin > end` is rejected when
    /// the spec is added.
    pub fn window(mut self, begin: f64, end: f64) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }
}

// ── InFlows ───────────────────────────────────────────────────────────────────

/// Ordered inflow schedule for one network.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InFlows {
    entries: Vec<InflowEntry>,
}

impl InFlows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicles-per-hour inflow.
    pub fn add(
        &mut self,
        veh_type:     impl Into<VehicleTypeName>,
        edge:         impl Into<EdgeId>,
        vehs_per_hour: f64,
        depart_lane:  DepartLane,
        depart_speed: DepartSpeed,
    ) -> InflowsResult<&InflowEntry> {
        self.add_spec(
            InflowSpec::new(veh_type, edge, InflowRate::VehsPerHour(vehs_per_hour))
                .depart_lane(depart_lane)
                .depart_speed(depart_speed),
        )
    }

    /// Append a fully specified inflow.
    ///
    /// Rejects negative or non-finite rates and depart speeds, probabilities
    /// outside `[0, 1]`, and windows with `begin > end`.
    ///
    /// The flow is named `"<spec.name>_<n>"` where `n` is the number of
    /// entries already present, so names stay unique.
    pub fn add_spec(&mut self, spec: InflowSpec) -> InflowsResult<&InflowEntry> {
        match spec.rate {
            InflowRate::VehsPerHour(r) if !(r.is_finite() && r >= 0.0) => {
                return Err(InflowsError::NegativeRate {
                    veh_type: spec.veh_type.0,
                    edge:     spec.edge.0,
                    rate:     r,
                });
            }
            InflowRate::Probability(p) if !(0.0..=1.0).contains(&p) => {
                return Err(InflowsError::InvalidProbability(p));
            }
            _ => {}
        }
        match spec.depart_speed {
            DepartSpeed::Value(v) if !(v.is_finite() && v >= 0.0) => {
                return Err(InflowsError::InvalidDepartSpeed(v));
            }
            _ => {}
        }
        if spec.begin.is_nan() || spec.end.is_nan() || spec.begin > spec.end {
            return Err(InflowsError::InvalidWindow { begin: spec.begin, end: spec.end });
        }

        let index = self.entries.len();
        self.entries.push(InflowEntry {
            name:         format!("{}_{}", spec.name, index),
            veh_type:     spec.veh_type,
            edge:         spec.edge,
            rate:         spec.rate,
            depart_lane:  spec.depart_lane,
            depart_speed: spec.depart_speed,
            begin:        spec.begin,
            end:          spec.end,
        });
        Ok(&self.entries[index])
    }

    pub fn entries(&self) -> &[InflowEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &InflowEntry> {
        self.entries.iter()
    }

    /// Expected arrivals per hour summed over every type on `edge`.
    pub fn per_edge_total(&self, edge: &str) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.edge.as_str() == edge)
            .map(|e| e.rate.expected_per_hour())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
