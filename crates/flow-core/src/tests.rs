//! Unit tests for flow-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeMap;

    use crate::{AgentId, EdgeId, VehicleId, VehicleTypeName};

    #[test]
    fn display_is_the_raw_name() {
        assert_eq!(EdgeId::from("27414342#0").to_string(), "27414342#0");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut m = BTreeMap::new();
        m.insert(VehicleTypeName::from("human"), 1);
        assert_eq!(m.get("human"), Some(&1));
        assert_eq!(m.get("av"), None);
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&EdgeId::from("119257914")).unwrap();
        assert_eq!(json, "\"119257914\"");
    }

    #[test]
    fn agent_from_vehicle() {
        let agent: AgentId = VehicleId::from("av_0").into();
        assert_eq!(agent.as_str(), "av_0");
    }
}

#[cfg(test)]
mod simulator {
    use crate::Simulator;

    #[test]
    fn default_is_traci() {
        assert_eq!(Simulator::default(), Simulator::Traci);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("aimsun".parse::<Simulator>().unwrap(), Simulator::Aimsun);
        assert_eq!(" TraCI ".parse::<Simulator>().unwrap(), Simulator::Traci);
        assert_eq!(Simulator::Aimsun.to_string(), "aimsun");
        assert!("vissim".parse::<Simulator>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Simulator::Traci).unwrap(), "\"traci\"");
        let s: Simulator = serde_json::from_str("\"aimsun\"").unwrap();
        assert_eq!(s, Simulator::Aimsun);
    }
}

#[cfg(test)]
mod penetration {
    use crate::{FlowError, PenetrationRate, RateRounding};

    #[test]
    fn i210_main_highway_split() {
        // 10 % of 10 800 veh/h.
        let p = PenetrationRate::from_percent(10.0).unwrap();
        let split = p.split(10_800.0).rounded(RateRounding::Truncate);
        assert_eq!(split.human, 9_720.0);
        assert_eq!(split.av, 1_080.0);
    }

    #[test]
    fn split_sums_to_base_before_rounding() {
        for &p in &[0.001, 0.05, 0.1, 0.25, 0.333, 0.5, 0.75, 0.999] {
            for &base in &[1.0, 321.0, 421.0, 2_215.0, 10_800.0] {
                let split = PenetrationRate::new(p).unwrap().split(base);
                assert!(
                    (split.total() - base).abs() <= 1e-9 * base,
                    "p={p} base={base} total={}",
                    split.total()
                );
            }
        }
    }

    #[test]
    fn boundaries_rejected() {
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(
                matches!(PenetrationRate::new(p), Err(FlowError::Validation(_))),
                "p={p} should be rejected"
            );
        }
    }

    #[test]
    fn over_and_under_messages_differ() {
        let over = PenetrationRate::new(1.0).unwrap_err().to_string();
        let under = PenetrationRate::new(0.0).unwrap_err().to_string();
        assert!(over.contains("over 100%"));
        assert!(under.contains("above zero"));
    }

    #[test]
    fn from_percent_matches_fraction() {
        assert_eq!(
            PenetrationRate::from_percent(25.0).unwrap().get(),
            PenetrationRate::new(0.25).unwrap().get()
        );
        assert!(PenetrationRate::from_percent(100.0).is_err());
    }

    #[test]
    fn fractional_rounding_keeps_product() {
        let split = PenetrationRate::new(0.1).unwrap().split(321.0);
        let kept = split.rounded(RateRounding::Fractional);
        let cut = split.rounded(RateRounding::Truncate);
        assert!((kept.av - 32.1).abs() < 1e-9);
        assert_eq!(cut.av, 32.0);
        assert_eq!(cut.human, 288.0);
    }
}

#[cfg(test)]
mod paths {
    use std::path::Path;

    use crate::ProjectPaths;

    #[test]
    fn template_joins_root() {
        let paths = ProjectPaths::new("/opt/flow");
        assert_eq!(
            paths.template("examples/exp_configs/templates/sumo/test2.net.xml"),
            Path::new("/opt/flow/examples/exp_configs/templates/sumo/test2.net.xml")
        );
    }
}

#[cfg(test)]
mod space {
    use crate::Space;

    #[test]
    fn dim_and_contains() {
        let s = Space::bounded(-4.5, 2.6, vec![1]);
        assert_eq!(s.dim(), 1);
        assert!(s.contains(&[0.0]));
        assert!(!s.contains(&[3.0]));
        assert!(!s.contains(&[0.0, 0.0]));
        assert!(Space::unbounded(vec![3]).contains(&[1e9, -1e9, 0.0]));
        assert!(Space::Discrete { n: 3 }.contains(&[2.0]));
        assert!(!Space::Discrete { n: 3 }.contains(&[3.0]));
    }

    #[test]
    fn clip_clamps_into_box() {
        let s = Space::bounded(-1.0, 1.0, vec![3]);
        let mut x = [-5.0, 0.5, 9.0];
        s.clip(&mut x);
        assert_eq!(x, [-1.0, 0.5, 1.0]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }
}
