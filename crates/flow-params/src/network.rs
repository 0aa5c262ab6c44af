//! Network classes, network parameters, and initial vehicle placement.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};
use serde_json::json;

use flow_core::EdgeId;
use flow_inflows::InFlows;

use crate::AdditionalParams;

// ── NetworkClass ──────────────────────────────────────────────────────────────

/// Pre-built network classes.  Serializes as the scenario class name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NetworkClass {
    /// Base class; geometry comes entirely from the template.
    #[serde(rename = "Scenario")]
    Scenario,
    #[serde(rename = "BayBridgeScenario")]
    BayBridge,
    #[serde(rename = "BottleneckScenario")]
    Bottleneck,
    #[serde(rename = "BBTollScenario")]
    BBToll,
    #[serde(rename = "Figure8Scenario")]
    Figure8,
    #[serde(rename = "SimpleGridScenario")]
    SimpleGrid,
    #[serde(rename = "HighwayScenario")]
    Highway,
    #[serde(rename = "LoopScenario")]
    Loop,
    #[serde(rename = "MergeScenario")]
    Merge,
    #[serde(rename = "NetFileScenario")]
    NetFile,
    /// I-210 subnetwork loaded from a template.
    #[serde(rename = "I210SubNetwork")]
    I210SubNetwork,
}

impl NetworkClass {
    pub const ALL: [NetworkClass; 11] = [
        NetworkClass::Scenario,
        NetworkClass::BayBridge,
        NetworkClass::Bottleneck,
        NetworkClass::BBToll,
        NetworkClass::Figure8,
        NetworkClass::SimpleGrid,
        NetworkClass::Highway,
        NetworkClass::Loop,
        NetworkClass::Merge,
        NetworkClass::NetFile,
        NetworkClass::I210SubNetwork,
    ];

    pub fn scenario_name(self) -> &'static str {
        match self {
            NetworkClass::Scenario       => "Scenario",
            NetworkClass::BayBridge      => "BayBridgeScenario",
            NetworkClass::Bottleneck     => "BottleneckScenario",
            NetworkClass::BBToll         => "BBTollScenario",
            NetworkClass::Figure8        => "Figure8Scenario",
            NetworkClass::SimpleGrid     => "SimpleGridScenario",
            NetworkClass::Highway        => "HighwayScenario",
            NetworkClass::Loop           => "LoopScenario",
            NetworkClass::Merge          => "MergeScenario",
            NetworkClass::NetFile        => "NetFileScenario",
            NetworkClass::I210SubNetwork => "I210SubNetwork",
        }
    }

    /// Generator that writes the network files, if the class has one.
    pub fn generator_name(self) -> Option<&'static str> {
        Some(match self {
            NetworkClass::BayBridge  => "BayBridgeGenerator",
            NetworkClass::Bottleneck => "BottleneckGenerator",
            NetworkClass::BBToll     => "BBTollGenerator",
            NetworkClass::Figure8    => "Figure8Generator",
            NetworkClass::SimpleGrid => "SimpleGridGenerator",
            NetworkClass::Highway    => "HighwayGenerator",
            NetworkClass::Loop       => "CircleGenerator",
            NetworkClass::Merge      => "MergeGenerator",
            NetworkClass::NetFile    => "NetFileGenerator",
            NetworkClass::Scenario | NetworkClass::I210SubNetwork => return None,
        })
    }

    /// Look a class up by scenario or generator name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.scenario_name() == name || c.generator_name() == Some(name))
    }

    /// Networks where vehicles circulate and never leave.
    pub fn is_closed(self) -> bool {
        matches!(self, NetworkClass::Loop | NetworkClass::Figure8)
    }

    /// Net parameters the generator reads, with their defaults.  Empty for
    /// template-only classes.
    pub fn default_net_params(self) -> AdditionalParams {
        match self {
            NetworkClass::Loop => AdditionalParams::from_pairs([
                ("length",      json!(230)),
                ("lanes",       json!(1)),
                ("speed_limit", json!(30)),
                ("resolution",  json!(40)),
            ]),
            NetworkClass::Figure8 => AdditionalParams::from_pairs([
                ("radius_ring", json!(30)),
                ("lanes",       json!(1)),
                ("speed_limit", json!(30)),
                ("resolution",  json!(40)),
            ]),
            NetworkClass::Highway => AdditionalParams::from_pairs([
                ("length",      json!(1000)),
                ("lanes",       json!(4)),
                ("speed_limit", json!(30)),
                ("num_edges",   json!(1)),
            ]),
            NetworkClass::Merge => AdditionalParams::from_pairs([
                ("merge_length",       json!(100)),
                ("pre_merge_length",   json!(200)),
                ("post_merge_length",  json!(100)),
                ("merge_lanes",        json!(1)),
                ("highway_lanes",      json!(1)),
                ("speed_limit",        json!(30)),
            ]),
            NetworkClass::SimpleGrid => AdditionalParams::from_pairs([
                ("row_num",          json!(3)),
                ("col_num",          json!(2)),
                ("inner_length",     json!(500)),
                ("short_length",     json!(500)),
                ("long_length",      json!(500)),
                ("cars_left",        json!(20)),
                ("cars_right",       json!(20)),
                ("cars_top",         json!(20)),
                ("cars_bot",         json!(20)),
                ("horizontal_lanes", json!(1)),
                ("vertical_lanes",   json!(1)),
                ("speed_limit",      json!(35)),
            ]),
            NetworkClass::Bottleneck => AdditionalParams::from_pairs([
                ("scaling",     json!(1)),
                ("speed_limit", json!(23)),
            ]),
            NetworkClass::Scenario
            | NetworkClass::BayBridge
            | NetworkClass::BBToll
            | NetworkClass::NetFile
            | NetworkClass::I210SubNetwork => AdditionalParams::new(),
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scenario_name())
    }
}

/// Edges of the I-210 subnetwork that initial vehicles may be placed on.
pub const I210_EDGES_DISTRIBUTION: [&str; 7] = [
    "119257914",
    "119257908#0",
    "119257908#1-AddedOnRampEdge",
    "119257908#1",
    "119257908#1-AddedOffRampEdge",
    "119257908#2",
    "119257908#3",
];

// ── NetParams ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NetParams {
    pub inflows:           InFlows,
    /// Absolute path of a static network template, read by the simulator.
    pub template:          Option<PathBuf>,
    pub additional_params: AdditionalParams,
}

impl NetParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inflows(mut self, inflows: InFlows) -> Self {
        self.inflows = inflows;
        self
    }

    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    pub fn additional_params(mut self, params: AdditionalParams) -> Self {
        self.additional_params = params;
        self
    }
}

// ── InitialConfig ─────────────────────────────────────────────────────────────

/// Edges initial vehicles may be placed on.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EdgesDistribution {
    #[default]
    All,
    Edges(Vec<EdgeId>),
}

impl EdgesDistribution {
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeId>,
    {
        EdgesDistribution::Edges(edges.into_iter().map(Into::into).collect())
    }
}

impl Serialize for EdgesDistribution {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            EdgesDistribution::All          => s.serialize_str("all"),
            EdgesDistribution::Edges(edges) => edges.serialize(s),
        }
    }
}

/// Placement policy for vehicles present at reset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InitialConfig {
    pub shuffle:            bool,
    /// `"uniform"`, `"random"`, or a network-specific placement.
    pub spacing:            String,
    pub min_gap:            f64,
    pub perturbation:       f64,
    /// Position of the first vehicle (m).
    pub x0:                 f64,
    /// Length of road left empty (m).
    pub bunching:           f64,
    pub lanes_distribution: Option<u32>,
    pub edges_distribution: EdgesDistribution,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            shuffle:            false,
            spacing:            "uniform".to_owned(),
            min_gap:            0.0,
            perturbation:       0.0,
            x0:                 0.0,
            bunching:           0.0,
            lanes_distribution: None,
            edges_distribution: EdgesDistribution::All,
        }
    }
}

impl InitialConfig {
    pub fn with_edges(edges: EdgesDistribution) -> Self {
        Self { edges_distribution: edges, ..Self::default() }
    }
}
