//! Stages of one `simulate` invocation.
//!
//! | Stage          | Work                                                    |
//! |----------------|---------------------------------------------------------|
//! | `ParseFlags`   | reject `--libsumo` together with `--aimsun`             |
//! | `LoadConfig`   | look the experiment up in the catalog and build it      |
//! | `MutateConfig` | render, libsumo, simulator, emission path, JSON dump    |
//! | `Run`          | `Experiment::run` for `--num_runs` rollouts             |

use std::fmt;
use std::mem;
use std::path::{Path, PathBuf};

use flow_configs::{ExperimentCatalog, ExperimentConfig};
use flow_core::{ProjectPaths, Simulator};
use flow_experiment::{Experiment, ExperimentSummary};
use flow_params::{FlowParams, write_json};

use crate::{Flags, SimulateError, SimulateResult};

/// Emission output directory used by `--gen_emission`.
pub const DEFAULT_EMISSION_PATH: &str = "./data";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    ParseFlags,
    LoadConfig,
    MutateConfig,
    Run,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::ParseFlags   => "PARSE_FLAGS",
            Stage::LoadConfig   => "LOAD_CONFIG",
            Stage::MutateConfig => "MUTATE_CONFIG",
            Stage::Run          => "RUN",
        })
    }
}

/// Fails before any configuration is loaded.
pub fn check_flags(flags: &Flags) -> SimulateResult<()> {
    if flags.libsumo && flags.aimsun {
        return Err(SimulateError::ConflictingBackends);
    }
    Ok(())
}

/// Apply the command-line overrides to `params`, in order.
///
/// With emission enabled the configuration is written to
/// `<emission_dir>/<exp_tag>.json` after every other override, and the path
/// is returned.
pub fn mutate_config(
    flags: &Flags,
    params: &mut FlowParams,
    emission_dir: &Path,
) -> SimulateResult<Option<PathBuf>> {
    params.sim.common_mut().render = !flags.no_render;

    if flags.libsumo {
        match params.sim.as_sumo_mut() {
            Some(sumo) => {
                log::info!("Running with libsumo! Make sure you have it installed!");
                sumo.sumo.use_libsumo = true;
            }
            None => log::warn!("--libsumo ignored: '{}' is not a SUMO configuration", params.exp_tag),
        }
    }

    params.simulator = if flags.aimsun { Simulator::Aimsun } else { Simulator::Traci };

    if flags.aimsun {
        params.sim = mem::take(&mut params.sim).into_aimsun();
    }

    if !flags.gen_emission() {
        return Ok(None);
    }
    params.sim.common_mut().emission_path = Some(emission_dir.to_path_buf());
    Ok(Some(write_json(params, emission_dir)?))
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Drives the four stages against a catalog.
///
/// | Method               | Default                  |
/// |----------------------|--------------------------|
/// | `.emission_dir(dir)` | [`DEFAULT_EMISSION_PATH`] |
pub struct Runner {
    catalog:      ExperimentCatalog,
    paths:        ProjectPaths,
    emission_dir: PathBuf,
}

impl Runner {
    pub fn new(catalog: ExperimentCatalog, paths: ProjectPaths) -> Self {
        Self { catalog, paths, emission_dir: PathBuf::from(DEFAULT_EMISSION_PATH) }
    }

    pub fn emission_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.emission_dir = dir.into();
        self
    }

    pub fn catalog(&self) -> &ExperimentCatalog {
        &self.catalog
    }

    /// Check, load, and mutate; everything short of running.
    pub fn prepare(&self, flags: &Flags) -> SimulateResult<ExperimentConfig> {
        log::debug!("stage {}", Stage::ParseFlags);
        check_flags(flags)?;

        log::debug!("stage {}", Stage::LoadConfig);
        let mut config = self.catalog.build(&flags.exp_config, &self.paths)?;

        log::debug!("stage {}", Stage::MutateConfig);
        mutate_config(flags, &mut config.flow_params, &self.emission_dir)?;
        Ok(config)
    }

    pub fn run(&self, flags: &Flags) -> SimulateResult<ExperimentSummary> {
        let config = self.prepare(flags)?;

        log::debug!("stage {}", Stage::Run);
        let exp = Experiment::new(config.flow_params, config.custom_callables);
        Ok(exp.run(flags.num_runs, &flags.run_options())?)
    }
}
