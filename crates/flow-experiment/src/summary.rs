//! Aggregated results of a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::RunOptions;

/// Population mean and standard deviation; `(0, 0)` for an empty slice.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// One value per rollout for every tracked quantity.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub exp_tag:     String,
    /// Sum of rewards over the rollout.
    pub returns:     Vec<f64>,
    /// Mean over steps of the network's average speed.
    pub mean_speeds: Vec<f64>,
    /// Outflow over the final 500 s, veh/h.
    pub outflows:    Vec<f64>,
    /// Mean over steps of each custom callable.
    pub custom:      BTreeMap<String, Vec<f64>>,
    pub total_steps: u64,
    pub options:     RunOptions,
}

impl ExperimentSummary {
    pub fn num_runs(&self) -> usize {
        self.returns.len()
    }

    pub fn returns_stats(&self) -> (f64, f64) {
        mean_std(&self.returns)
    }

    pub fn speed_stats(&self) -> (f64, f64) {
        mean_std(&self.mean_speeds)
    }

    pub fn outflow_stats(&self) -> (f64, f64) {
        mean_std(&self.outflows)
    }

    pub fn custom_stats(&self, name: &str) -> Option<(f64, f64)> {
        self.custom.get(name).map(|v| mean_std(v))
    }

    /// Write the averages to the log at `info`.
    pub fn log(&self) {
        let (m, s) = self.returns_stats();
        log::info!("Average, std returns: {m}, {s}");
        let (m, s) = self.speed_stats();
        log::info!("Average, std velocities: {m}, {s}");
        let (m, s) = self.outflow_stats();
        log::info!("Average, std outflows: {m}, {s}");
        for (name, values) in &self.custom {
            let (m, s) = mean_std(values);
            log::info!("Average, std {name}: {m}, {s}");
        }
    }
}
