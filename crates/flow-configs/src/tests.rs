#[cfg(test)]
mod i210_tests {
    use std::path::Path;

    use flow_core::{PenetrationRate, ProjectPaths, Simulator};
    use flow_inflows::{DepartLane, DepartSpeed, InflowRate};
    use flow_params::{EdgesDistribution, EnvClass, NetworkClass};
    use flow_vehicles::{AccelerationController, LaneChangeController, LaneChangeMode, SpeedMode};

    use crate::multiagent_i210;

    fn paths() -> ProjectPaths {
        ProjectPaths::new("/opt/flow")
    }

    #[test]
    fn main_line_split_is_9720_and_1080() {
        let inflows = multiagent_i210::inflows(PenetrationRate::from_percent(10.0).unwrap()).unwrap();
        let entries = inflows.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].veh_type.as_str(), "human");
        assert_eq!(entries[0].rate, InflowRate::VehsPerHour(9_720.0));
        assert_eq!(entries[1].veh_type.as_str(), "av");
        assert_eq!(entries[1].rate, InflowRate::VehsPerHour(1_080.0));
        for e in entries {
            assert_eq!(e.edge.as_str(), "119257914");
            assert_eq!(e.depart_lane, DepartLane::Random);
            assert_eq!(e.depart_speed, DepartSpeed::Value(20.0));
        }
    }

    #[test]
    fn fleet_has_three_types() {
        let vehicles = multiagent_i210::vehicles().unwrap();
        let names: Vec<&str> = vehicles.type_names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["human", "av", "aggressive"]);
        assert_eq!(vehicles.initial_count(), 0);

        let human = vehicles.get("human").unwrap();
        assert_eq!(human.car_following_params.speed_mode, SpeedMode::NoCollide);
        assert_eq!(human.lane_change_params.lane_change_mode, LaneChangeMode::Custom(21));
        assert_eq!(human.lane_change_params.lc_speed_gain, 0.1);
        match &human.acceleration_controller {
            AccelerationController::Idm(p) => assert_eq!((p.a, p.b, p.noise), (0.3, 2.0, 0.5)),
            other => panic!("unexpected controller {other:?}"),
        }

        let av = vehicles.get("av").unwrap();
        assert!(av.is_rl());
        assert_eq!(av.color.as_deref(), Some("red"));

        let aggressive = vehicles.get("aggressive").unwrap();
        assert_eq!(aggressive.lane_change_params.lane_change_mode, LaneChangeMode::Aggressive);
        assert!(matches!(
            aggressive.lane_change_controller,
            LaneChangeController::SafeAggressive(p) if p.target_velocity == 100.0
        ));
        assert_eq!(aggressive.color.as_deref(), Some("green"));
    }

    #[test]
    fn flow_params_match_experiment() {
        let params = multiagent_i210::flow_params(&paths()).unwrap();
        assert_eq!(params.exp_tag, "I_210_subnetwork");
        assert_eq!(params.env_name, EnvClass::I210MultiEnv);
        assert_eq!(params.network, NetworkClass::I210SubNetwork);
        assert_eq!(params.simulator, Simulator::Traci);
        assert_eq!(params.env.horizon, 4_000);
        assert_eq!(params.env.warmup_steps, 700);
        assert_eq!(params.env.sims_per_step, 1);

        let extra = &params.env.additional_params;
        assert_eq!(extra.get_f64("max_accel"), Some(2.6));
        assert_eq!(extra.get_f64("max_decel"), Some(4.5));
        assert_eq!(extra.get_bool("lead_obs"), Some(true));
        assert_eq!(extra.get_bool("local_reward"), Some(true));

        let common = params.sim.common();
        assert_eq!(common.sim_step, 0.5);
        assert!(!common.render);
        assert!(common.restart_instance);
        assert!(common.disable_collisions);
        let sumo = params.sim.sumo_options().unwrap();
        assert!(sumo.use_ballistic);
        assert!(!sumo.color_by_speed);

        assert_eq!(
            params.net.template.as_deref(),
            Some(Path::new("/opt/flow/examples/exp_configs/templates/sumo/test2.net.xml"))
        );
        match &params.initial.edges_distribution {
            EdgesDistribution::Edges(edges) => {
                assert_eq!(edges.len(), 7);
                assert_eq!(edges[0].as_str(), "119257914");
            }
            EdgesDistribution::All => panic!("expected explicit edges"),
        }
    }

    #[test]
    fn build_wires_shared_policy() {
        let config = multiagent_i210::build(&paths()).unwrap();
        let rllib = config.rllib.as_ref().unwrap();
        assert_eq!(rllib.env_name, "I_210_subnetwork-v0");
        assert_eq!(rllib.multiagent.policies_to_train, ["av"]);
        let spec = &rllib.multiagent.policy_graphs["av"];
        assert_eq!(spec.observation_space.dim(), 3);
        assert_eq!(spec.action_space.dim(), 1);

        let names: Vec<&str> = config.custom_callables.names().collect();
        assert_eq!(names, ["avg_speed", "avg_outflow", "avg_energy", "avg_per_step_energy"]);
    }
}

#[cfg(test)]
mod non_rl_tests {
    use flow_core::ProjectPaths;
    use flow_params::{EnvClass, NetworkClass};
    use flow_vehicles::RoutingController;

    use crate::{highway, i210_subnetwork, ring};

    fn paths() -> ProjectPaths {
        ProjectPaths::new("/opt/flow")
    }

    #[test]
    fn i210_subnetwork_is_human_only() {
        let config = i210_subnetwork::build(&paths()).unwrap();
        assert!(config.rllib.is_none());
        let p = &config.flow_params;
        assert_eq!(p.env_name, EnvClass::TestEnv);
        assert_eq!(p.veh.len(), 1);
        assert!(p.net.inflows.iter().all(|e| e.veh_type.as_str() == "human"));
        assert_eq!(p.net.inflows.per_edge_total("119257914"), 10_800.0);
        assert_eq!(p.net.inflows.per_edge_total("27414345"), 321.0);
        assert_eq!(p.net.inflows.per_edge_total("27414342#0"), 421.0);
    }

    #[test]
    fn highway_keeps_fractional_rates() {
        let config = highway::build(&paths()).unwrap();
        let p = &config.flow_params;
        assert_eq!(p.network, NetworkClass::Highway);
        let entries = p.net.inflows.entries();
        assert_eq!(entries.len(), 2);
        let total = p.net.inflows.per_edge_total("highway_0");
        assert!((total - 2_215.0).abs() < 1e-9);
        assert!((entries[1].rate.expected_per_hour() - 221.5).abs() < 1e-9);
        assert_eq!(p.net.additional_params.get_f64("length"), Some(1_000.0));
    }

    #[test]
    fn ring_places_22_vehicles() {
        let config = ring::build(&paths()).unwrap();
        let p = &config.flow_params;
        assert_eq!(p.network, NetworkClass::Loop);
        assert_eq!(p.env_name, EnvClass::AccelEnv);
        assert_eq!(p.veh.initial_count(), 22);
        assert_eq!(p.veh.types()[0].routing_controller, Some(RoutingController::ContinuousRouter));
        assert_eq!(p.initial.bunching, 20.0);
        assert_eq!(p.net.additional_params.get_f64("length"), Some(230.0));
        assert!(p.net.inflows.is_empty());
    }
}

#[cfg(test)]
mod catalog_tests {
    use flow_core::ProjectPaths;
    use flow_rllib::{EnvRegistry, RllibError};

    use crate::{ConfigsError, ExperimentCatalog, ExperimentGroup};

    #[test]
    fn default_registers_every_experiment() {
        let catalog = ExperimentCatalog::default();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["highway", "i210_subnetwork", "multiagent_i210", "ring"]);
        assert_eq!(catalog.get("multiagent_i210").unwrap().group, ExperimentGroup::RlMultiagent);
    }

    #[test]
    fn qualified_names_resolve() {
        let catalog = ExperimentCatalog::default();
        assert_eq!(catalog.get("non_rl.highway").unwrap().name, "highway");
        assert_eq!(
            catalog.get("rl.multiagent.multiagent_i210").unwrap().name,
            "multiagent_i210"
        );
    }

    #[test]
    fn unknown_name_lists_known() {
        let catalog = ExperimentCatalog::default();
        let err = catalog.build("no_such_exp", &ProjectPaths::new(".")).unwrap_err();
        match err {
            ConfigsError::UnknownExperiment { name, known } => {
                assert_eq!(name, "no_such_exp");
                assert_eq!(known.len(), 4);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn every_entry_builds() {
        let catalog = ExperimentCatalog::default();
        let paths = ProjectPaths::new(".");
        for name in catalog.names() {
            let config = catalog.build(name, &paths).unwrap();
            assert!(!config.flow_params.exp_tag.is_empty(), "{name}");
        }
    }

    #[test]
    fn registration_is_explicit_and_once() {
        let catalog = ExperimentCatalog::default();
        let paths = ProjectPaths::new(".");
        let mut registry = EnvRegistry::new();

        let rl = catalog.build("multiagent_i210", &paths).unwrap();
        assert!(registry.is_empty());
        assert_eq!(rl.register(&mut registry).unwrap(), Some("I_210_subnetwork-v0"));
        assert!(registry.contains("I_210_subnetwork-v0"));
        assert!(matches!(rl.register(&mut registry), Err(ConfigsError::Rllib(_))));

        let non_rl = catalog.build("ring", &paths).unwrap();
        assert_eq!(non_rl.register(&mut registry).unwrap(), None);
        assert_eq!(registry.len(), 1);
    }

    // Only test in this crate that touches the process-wide registry.
    #[test]
    fn global_registration_rejects_duplicates() {
        let catalog = ExperimentCatalog::default();
        let paths = ProjectPaths::new(".");

        let rl = catalog.build("multiagent_i210", &paths).unwrap();
        assert_eq!(rl.register_global().unwrap(), Some("I_210_subnetwork-v0"));
        assert!(EnvRegistry::global().lock().unwrap().contains("I_210_subnetwork-v0"));

        let err = rl.register_global().unwrap_err();
        assert!(matches!(
            err,
            ConfigsError::Rllib(RllibError::AlreadyRegistered(n)) if n == "I_210_subnetwork-v0"
        ));

        let non_rl = catalog.build("ring", &paths).unwrap();
        assert_eq!(non_rl.register_global().unwrap(), None);
    }
}
