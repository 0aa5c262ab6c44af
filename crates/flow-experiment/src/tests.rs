#[cfg(test)]
mod helpers {
    use serde_json::json;

    use flow_inflows::{DepartLane, DepartSpeed, InFlows};
    use flow_params::{
        AdditionalParams, CommonSimParams, EnvClass, EnvParams, FlowParams, NetParams,
        NetworkClass, SumoParams,
    };
    use flow_vehicles::{VehicleParams, VehicleType};

    /// One human inflow at 3600 veh/h and 20 m/s, one-second steps.
    pub(crate) fn params(network: NetworkClass, horizon: u32) -> FlowParams {
        let mut inflows = InFlows::new();
        inflows.add("human", "e0", 3_600.0, DepartLane::First, DepartSpeed::Value(20.0)).unwrap();
        let mut veh = VehicleParams::new();
        veh.add(VehicleType::builder("human").build()).unwrap();
        FlowParams::builder("exp", EnvClass::TestEnv, network)
            .sim(SumoParams {
                common: CommonSimParams { sim_step: 1.0, ..CommonSimParams::default() },
                ..SumoParams::default()
            })
            .env(EnvParams::new(horizon))
            .net(
                NetParams::new()
                    .inflows(inflows)
                    .additional_params(AdditionalParams::from_pairs([("length", json!(100))])),
            )
            .veh(veh)
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod metric_tests {
    use flow_env::{DryRunKernel, Environment, FlowEnv};
    use flow_params::NetworkClass;

    use super::helpers::params;
    use crate::{avg_outflow, avg_speed, energy_consumption, i210_callables};

    fn stepped(network: NetworkClass, steps: usize) -> FlowEnv<DryRunKernel> {
        let mut env = FlowEnv::new(params(network, 100), DryRunKernel::new());
        env.reset().unwrap();
        for _ in 0..steps {
            env.step(&Default::default()).unwrap();
        }
        env
    }

    #[test]
    fn avg_speed_of_empty_network_is_zero() {
        let env = stepped(NetworkClass::Loop, 0);
        assert_eq!(avg_speed(&env), 0.0);
    }

    #[test]
    fn avg_speed_of_cruising_fleet() {
        let env = stepped(NetworkClass::Loop, 5);
        assert_eq!(avg_speed(&env), 20.0);
    }

    #[test]
    fn outflow_reads_nan_as_zero() {
        let env = stepped(NetworkClass::Loop, 5);
        assert_eq!(avg_outflow(&env), 0.0);

        let env = stepped(NetworkClass::Highway, 20);
        // 15 vehicles left during the 20 s simulated so far.
        assert_eq!(avg_outflow(&env), 15.0 * 3_600.0 / 20.0);
    }

    #[test]
    fn energy_at_constant_speed() {
        let env = stepped(NetworkClass::Loop, 2);
        let per_vehicle = 1_200.0 * 9.81 * 0.005 * 20.0 + 0.5 * 1.225 * 2.6 * 0.3 * 20.0_f64.powi(3);
        let expected = -0.1 * 2.0 * per_vehicle;
        assert!((energy_consumption(&env, 0.1) - expected).abs() < 1e-6);
    }

    #[test]
    fn i210_set_names_and_signs() {
        let env = stepped(NetworkClass::Loop, 3);
        let callables = i210_callables();
        let names: Vec<&str> = callables.names().collect();
        assert_eq!(names, ["avg_speed", "avg_outflow", "avg_energy", "avg_per_step_energy"]);

        let values = callables.evaluate(&env);
        assert_eq!(values[0], 20.0);
        assert!(values[2] > 0.0);
        assert!((values[3] - values[2] / 3.0).abs() < 1e-9);
    }

    #[test]
    fn per_step_energy_is_zero_without_vehicles() {
        let env = stepped(NetworkClass::Loop, 0);
        let callables = i210_callables();
        let metric = callables.get("avg_per_step_energy").unwrap();
        assert_eq!(metric(&env as &dyn Environment), 0.0);
    }
}

#[cfg(test)]
mod callables_tests {
    use crate::CustomCallables;

    #[test]
    fn reinsert_replaces_in_place() {
        let mut callables = CustomCallables::new()
            .with("a", |_: &dyn flow_env::Environment| 1.0)
            .with("b", |_: &dyn flow_env::Environment| 2.0);
        callables.insert("a", |_: &dyn flow_env::Environment| 3.0);
        let names: Vec<&str> = callables.names().collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(callables.len(), 2);
        assert_eq!(format!("{callables:?}"), r#"["a", "b"]"#);
    }
}

#[cfg(test)]
mod runner_tests {
    use std::cell::Cell;

    use flow_env::Actions;
    use flow_params::NetworkClass;

    use super::helpers::params;
    use crate::{CustomCallables, Experiment, RunOptions, i210_callables, mean_std};

    #[test]
    fn summary_has_one_entry_per_run() {
        let exp = Experiment::new(params(NetworkClass::Loop, 10), i210_callables());
        assert_eq!(exp.env_name(), "exp-v0");
        let summary = exp.run(3, &RunOptions::default()).unwrap();

        assert_eq!(summary.num_runs(), 3);
        assert_eq!(summary.total_steps, 30);
        // One new vehicle per step, all at 20 m/s: reward 20 every step.
        assert_eq!(summary.returns, [200.0, 200.0, 200.0]);
        assert_eq!(summary.mean_speeds, [20.0, 20.0, 20.0]);
        assert_eq!(summary.returns_stats(), (200.0, 0.0));
        assert_eq!(summary.custom.len(), 4);
        assert_eq!(summary.custom["avg_speed"], [20.0, 20.0, 20.0]);
        let (per_step, _) = summary.custom_stats("avg_per_step_energy").unwrap();
        let per_vehicle = 0.1 * (1_200.0 * 9.81 * 0.005 * 20.0 + 0.5 * 1.225 * 2.6 * 0.3 * 8_000.0);
        assert!((per_step - per_vehicle).abs() < 1e-6);
    }

    #[test]
    fn outflow_recorded_on_open_network() {
        let exp = Experiment::new(params(NetworkClass::Highway, 30), CustomCallables::new());
        let summary = exp.run(1, &RunOptions::default()).unwrap();
        // Departures at t = 1..30 leave five seconds later: 25 exits over
        // the 30 s the window actually covers.
        assert_eq!(summary.outflows, [25.0 * 3_600.0 / 30.0]);
    }

    #[test]
    fn zero_runs_gives_empty_summary() {
        let exp = Experiment::new(params(NetworkClass::Loop, 10), CustomCallables::new());
        let summary = exp.run(0, &RunOptions::default()).unwrap();
        assert_eq!(summary.num_runs(), 0);
        assert_eq!(summary.speed_stats(), (0.0, 0.0));
    }

    #[test]
    fn policy_is_asked_every_step() {
        let exp = Experiment::new(params(NetworkClass::Loop, 7), CustomCallables::new());
        let calls = Cell::new(0);
        exp.run_with_policy(2, &RunOptions::default(), |_| {
            calls.set(calls.get() + 1);
            Actions::new()
        })
        .unwrap();
        assert_eq!(calls.get(), 14);
    }

    #[test]
    fn options_are_recorded() {
        let options = RunOptions {
            convert_to_csv: true,
            to_aws:         Some("default".to_owned()),
            only_query:     vec!["avg_speed".to_owned()],
            is_baseline:    true,
        };
        let exp = Experiment::new(params(NetworkClass::Loop, 1), CustomCallables::new());
        let summary = exp.run(1, &options).unwrap();
        assert_eq!(summary.options, options);
        assert_eq!(RunOptions::default().only_query, ["all"]);
    }

    #[test]
    fn mean_std_is_population() {
        let (m, s) = mean_std(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m, 2.5);
        assert!((s - 1.25_f64.sqrt()).abs() < 1e-12);
        assert_eq!(mean_std(&[]), (0.0, 0.0));
    }
}

#[cfg(test)]
mod failure_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use flow_core::{EdgeId, VehicleId, VehicleTypeName};
    use flow_env::{DryRunKernel, EnvError, EnvResult, Kernel};
    use flow_params::{FlowParams, NetworkClass};
    use flow_rllib::{KernelFactory, make_create_env_with};

    use super::helpers::params;
    use crate::{CustomCallables, Experiment, ExperimentError, RunOptions};

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Dry-run kernel that fails on its `fail_at`-th step, counted across
    /// restarts, and counts `close` calls.
    struct FailingKernel {
        inner:   DryRunKernel,
        steps:   usize,
        fail_at: usize,
        closes:  Arc<AtomicUsize>,
    }

    impl Kernel for FailingKernel {
        fn start(&mut self, params: &FlowParams) -> EnvResult<()> {
            self.inner.start(params)
        }

        fn step(&mut self) -> EnvResult<()> {
            self.steps += 1;
            if self.steps == self.fail_at {
                return Err(EnvError::Kernel("connection lost".to_owned()));
            }
            self.inner.step()
        }

        fn sim_step(&self) -> f64 {
            self.inner.sim_step()
        }

        fn time(&self) -> f64 {
            self.inner.time()
        }

        fn vehicle_ids(&self) -> Vec<VehicleId> {
            self.inner.vehicle_ids()
        }

        fn rl_ids(&self) -> Vec<VehicleId> {
            self.inner.rl_ids()
        }

        fn vehicle_type(&self, id: &VehicleId) -> Option<&VehicleTypeName> {
            self.inner.vehicle_type(id)
        }

        fn speed(&self, id: &VehicleId) -> Option<f64> {
            self.inner.speed(id)
        }

        fn previous_speed(&self, id: &VehicleId) -> Option<f64> {
            self.inner.previous_speed(id)
        }

        fn edge(&self, id: &VehicleId) -> Option<&EdgeId> {
            self.inner.edge(id)
        }

        fn outflow_rate(&self, window_secs: f64) -> f64 {
            self.inner.outflow_rate(window_secs)
        }

        fn num_vehicles(&self) -> usize {
            self.inner.num_vehicles()
        }

        fn apply_acceleration(&mut self, id: &VehicleId, accel: f64) {
            self.inner.apply_acceleration(id, accel)
        }

        fn close(&mut self) -> EnvResult<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            self.inner.close()
        }
    }

    fn experiment(fail_at: usize, closes: &Arc<AtomicUsize>) -> Experiment {
        let params = params(NetworkClass::Loop, 10);
        let closes = Arc::clone(closes);
        let kernels: KernelFactory = Arc::new(move |_: &FlowParams| -> Box<dyn Kernel> {
            Box::new(FailingKernel {
                inner: DryRunKernel::new(),
                steps: 0,
                fail_at,
                closes: Arc::clone(&closes),
            })
        });
        let (creator, name) = make_create_env_with(&params, 0, kernels);
        Experiment::with_creator(params, CustomCallables::new(), creator, name)
    }

    // ── Tests ─────────────────────────────────────────────────────────────

    #[test]
    fn failed_rollout_still_closes_kernel() {
        let closes = Arc::new(AtomicUsize::new(0));
        let err = experiment(4, &closes).run(1, &RunOptions::default()).unwrap_err();

        assert!(matches!(err, ExperimentError::Rollout { run: 0, source: EnvError::Kernel(_) }));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn later_runs_are_skipped_after_failure() {
        let closes = Arc::new(AtomicUsize::new(0));
        // 10 steps per rollout, so step 15 falls in the second run.
        let err = experiment(15, &closes).run(3, &RunOptions::default());

        assert!(matches!(err, Err(ExperimentError::Rollout { run: 1, .. })));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_run_closes_kernel_once() {
        let closes = Arc::new(AtomicUsize::new(0));
        experiment(usize::MAX, &closes).run(2, &RunOptions::default()).unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
