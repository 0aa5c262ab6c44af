//! Name → experiment lookup, built once at startup.
//!
//! Names are the experiment module names (`"highway"`).  A name may also be
//! qualified by its group (`"non_rl.highway"`, `"rl.multiagent.multiagent_i210"`).

use std::collections::BTreeMap;
use std::fmt;

use flow_core::ProjectPaths;

use crate::{ConfigsError, ConfigsResult, ExperimentConfig};
use crate::{highway, i210_subnetwork, multiagent_i210, ring};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExperimentGroup {
    NonRl,
    RlMultiagent,
}

impl ExperimentGroup {
    pub fn prefix(self) -> &'static str {
        match self {
            ExperimentGroup::NonRl        => "non_rl",
            ExperimentGroup::RlMultiagent => "rl.multiagent",
        }
    }
}

impl fmt::Display for ExperimentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

pub type BuildFn = fn(&ProjectPaths) -> ConfigsResult<ExperimentConfig>;

#[derive(Copy, Clone)]
pub struct ExperimentEntry {
    pub name:        &'static str,
    pub group:       ExperimentGroup,
    pub description: &'static str,
    pub build:       BuildFn,
}

impl ExperimentEntry {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group.prefix(), self.name)
    }
}

impl fmt::Debug for ExperimentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentEntry")
            .field("name", &self.name)
            .field("group", &self.group)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ExperimentCatalog {
    entries: BTreeMap<&'static str, ExperimentEntry>,
}

impl ExperimentCatalog {
    /// A catalog with no experiments.
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Add `entry`, replacing any entry with the same name.
    pub fn with(mut self, entry: ExperimentEntry) -> Self {
        self.entries.insert(entry.name, entry);
        self
    }

    /// Look up a plain or group-qualified name.
    pub fn get(&self, name: &str) -> ConfigsResult<&ExperimentEntry> {
        if let Some(entry) = self.entries.get(name) {
            return Ok(entry);
        }
        self.entries
            .values()
            .find(|e| e.qualified_name() == name)
            .ok_or_else(|| ConfigsError::UnknownExperiment {
                name:  name.to_owned(),
                known: self.names().map(str::to_owned).collect(),
            })
    }

    /// Resolve `name` and build its configuration.
    pub fn build(&self, name: &str, paths: &ProjectPaths) -> ConfigsResult<ExperimentConfig> {
        let entry = self.get(name)?;
        log::info!("loading experiment {} ({})", entry.name, entry.group);
        (entry.build)(paths)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ExperimentEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExperimentCatalog {
    /// Every experiment shipped in this crate.
    fn default() -> Self {
        Self::empty()
            .with(ExperimentEntry {
                name:        "multiagent_i210",
                group:       ExperimentGroup::RlMultiagent,
                description: "I-210 with ramps, AVs sharing one policy",
                build:       multiagent_i210::build,
            })
            .with(ExperimentEntry {
                name:        "i210_subnetwork",
                group:       ExperimentGroup::NonRl,
                description: "I-210 with ramps, human drivers only",
                build:       i210_subnetwork::build,
            })
            .with(ExperimentEntry {
                name:        "highway",
                group:       ExperimentGroup::NonRl,
                description: "straight highway with a 10% AV inflow",
                build:       highway::build,
            })
            .with(ExperimentEntry {
                name:        "ring",
                group:       ExperimentGroup::NonRl,
                description: "22 IDM vehicles on a ring road",
                build:       ring::build,
            })
    }
}
