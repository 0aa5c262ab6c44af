//! Traffic-light programs for networks with signalized intersections.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrafficLightPhase {
    /// Seconds.
    pub duration: f64,
    /// SUMO state string, one character per controlled link (`"GrGr"`).
    pub state:    String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrafficLightProgram {
    pub node_id:    String,
    /// `"static"` or `"actuated"`.
    pub tls_type:   String,
    #[serde(rename = "programID")]
    pub program_id: String,
    pub phases:     Vec<TrafficLightPhase>,
}

/// Traffic lights of one configuration.  `baseline` asks the simulator to
/// use its own default programs everywhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrafficLightParams {
    pub baseline: bool,
    pub programs: Vec<TrafficLightProgram>,
}

impl TrafficLightParams {
    pub fn new(baseline: bool) -> Self {
        Self { baseline, programs: Vec::new() }
    }

    /// Add a static program for `node_id`.  A second program for the same
    /// node replaces the first.
    pub fn add(&mut self, node_id: impl Into<String>, phases: Vec<TrafficLightPhase>) {
        let node_id = node_id.into();
        self.programs.retain(|p| p.node_id != node_id);
        self.programs.push(TrafficLightProgram {
            node_id,
            tls_type:   "static".to_owned(),
            program_id: "1".to_owned(),
            phases,
        });
    }

    pub fn get(&self, node_id: &str) -> Option<&TrafficLightProgram> {
        self.programs.iter().find(|p| p.node_id == node_id)
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
