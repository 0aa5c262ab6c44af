//! Simulator backend selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FlowError;

/// The external microscopic simulator an experiment runs on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Simulator {
    /// SUMO, driven over TraCI (or libsumo).
    #[default]
    Traci,
    /// Aimsun Next.
    Aimsun,
}

impl Simulator {
    pub fn as_str(self) -> &'static str {
        match self {
            Simulator::Traci  => "traci",
            Simulator::Aimsun => "aimsun",
        }
    }
}

impl fmt::Display for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Simulator {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traci"  => Ok(Simulator::Traci),
            "aimsun" => Ok(Simulator::Aimsun),
            other => Err(FlowError::Parse(format!(
                "unknown simulator {other:?}: expected \"traci\" or \"aimsun\""
            ))),
        }
    }
}
