//! The experiment driver.

use std::time::Instant;

use serde::Serialize;

use flow_env::{Actions, EnvResult, Environment, Observations};
use flow_params::FlowParams;
use flow_rllib::{EnvCreator, make_create_env};

use crate::summary::mean_std;
use crate::{CustomCallables, ExperimentError, ExperimentResult, ExperimentSummary, avg_speed};

/// Outflow window recorded at the end of each rollout, seconds.
const FINAL_OUTFLOW_WINDOW: f64 = 500.0;

/// Output options carried from the command line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunOptions {
    pub convert_to_csv: bool,
    /// Upload target for results, when uploading was requested.
    pub to_aws:         Option<String>,
    pub only_query:     Vec<String>,
    pub is_baseline:    bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            convert_to_csv: false,
            to_aws:         None,
            only_query:     vec!["all".to_owned()],
            is_baseline:    false,
        }
    }
}

pub struct Experiment {
    flow_params: FlowParams,
    callables:   CustomCallables,
    creator:     EnvCreator,
    env_name:    String,
}

impl Experiment {
    /// Experiment over the default environment factory (version 0).
    pub fn new(flow_params: FlowParams, callables: CustomCallables) -> Self {
        let (creator, env_name) = make_create_env(&flow_params, 0);
        Self::with_creator(flow_params, callables, creator, env_name)
    }

    pub fn with_creator(
        flow_params: FlowParams,
        callables:   CustomCallables,
        creator:     EnvCreator,
        env_name:    impl Into<String>,
    ) -> Self {
        Self { flow_params, callables, creator, env_name: env_name.into() }
    }

    pub fn flow_params(&self) -> &FlowParams {
        &self.flow_params
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn callables(&self) -> &CustomCallables {
        &self.callables
    }

    /// Run `num_runs` rollouts with no RL actions.
    pub fn run(&self, num_runs: usize, options: &RunOptions) -> ExperimentResult<ExperimentSummary> {
        self.run_with_policy(num_runs, options, |_| Actions::new())
    }

    /// Run `num_runs` rollouts, asking `policy` for actions every step.
    pub fn run_with_policy<P>(
        &self,
        num_runs: usize,
        options:  &RunOptions,
        mut policy: P,
    ) -> ExperimentResult<ExperimentSummary>
    where
        P: FnMut(&Observations) -> Actions,
    {
        let horizon = self.flow_params.env.horizon;
        log::info!(
            "running {} for {num_runs} rollout(s) of up to {horizon} steps",
            self.env_name
        );

        let mut env = (self.creator)()?;
        let names: Vec<String> = self.callables.names().map(str::to_owned).collect();
        let mut summary = ExperimentSummary {
            exp_tag: self.flow_params.exp_tag.clone(),
            custom:  names.iter().map(|n| (n.clone(), Vec::with_capacity(num_runs))).collect(),
            options: options.clone(),
            ..ExperimentSummary::default()
        };

        let started = Instant::now();
        let mut outcome: ExperimentResult<()> = Ok(());
        for run in 0..num_runs {
            let rollout = match self.rollout(env.as_mut(), &mut policy) {
                Ok(rollout) => rollout,
                Err(source) => {
                    outcome = Err(ExperimentError::Rollout { run, source });
                    break;
                }
            };
            log::info!("Round {run}, return: {}", rollout.ret);

            summary.total_steps += rollout.steps;
            summary.returns.push(rollout.ret);
            summary.mean_speeds.push(mean_std(&rollout.speeds).0);
            summary.outflows.push(rollout.outflow);
            for (name, values) in names.iter().zip(rollout.custom) {
                if let Some(per_run) = summary.custom.get_mut(name) {
                    per_run.push(mean_std(&values).0);
                }
            }
        }
        // The kernel is closed even when a rollout failed.
        let closed = env.close();
        outcome?;
        closed?;

        let elapsed = started.elapsed().as_secs_f64();
        summary.log();
        if elapsed > 0.0 {
            log::info!(
                "Total time: {elapsed:.2} s, steps/second: {:.1}",
                summary.total_steps as f64 / elapsed
            );
        }
        self.log_skipped_outputs(options);
        Ok(summary)
    }

    fn rollout<P>(&self, env: &mut dyn Environment, policy: &mut P) -> EnvResult<Rollout>
    where
        P: FnMut(&Observations) -> Actions,
    {
        let mut obs = env.reset()?;
        let mut rollout = Rollout {
            custom: vec![Vec::new(); self.callables.len()],
            ..Rollout::default()
        };

        for _ in 0..self.flow_params.env.horizon {
            let actions = policy(&obs);
            let result = env.step(&actions)?;
            rollout.steps += 1;
            rollout.ret += result.rewards.values().sum::<f64>();
            rollout.speeds.push(avg_speed(env));
            for (slot, value) in rollout.custom.iter_mut().zip(self.callables.evaluate(env)) {
                slot.push(value);
            }
            obs = result.observations;
            if result.done {
                break;
            }
        }

        let outflow = env.kernel().outflow_rate(FINAL_OUTFLOW_WINDOW);
        rollout.outflow = if outflow.is_nan() { 0.0 } else { outflow };
        Ok(rollout)
    }

    fn log_skipped_outputs(&self, options: &RunOptions) {
        if let Some(dir) = &self.flow_params.sim.common().emission_path {
            if options.convert_to_csv {
                log::info!(
                    "emission conversion for {} is left to the data pipeline",
                    dir.display()
                );
            }
        }
        if let Some(target) = &options.to_aws {
            log::info!("upload to {target:?} is left to the data pipeline");
        }
    }
}

#[derive(Default)]
struct Rollout {
    ret:     f64,
    steps:   u64,
    speeds:  Vec<f64>,
    custom:  Vec<Vec<f64>>,
    outflow: f64,
}

impl std::fmt::Debug for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Experiment")
            .field("env_name", &self.env_name)
            .field("callables", &self.callables)
            .finish()
    }
}
