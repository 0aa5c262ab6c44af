#[cfg(test)]
mod inflow_tests {
    use crate::{DepartLane, DepartSpeed, InFlows, InflowRate, InflowSpec, InflowsError};

    #[test]
    fn names_are_unique_per_schedule() {
        let mut inflows = InFlows::new();
        inflows.add("human", "e0", 100.0, DepartLane::Free, DepartSpeed::Max).unwrap();
        inflows.add("human", "e0", 200.0, DepartLane::Free, DepartSpeed::Max).unwrap();
        inflows
            .add_spec(InflowSpec::new("av", "e1", InflowRate::Probability(0.1)).name("rl"))
            .unwrap();

        let names: Vec<&str> = inflows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["flow_0", "flow_1", "rl_2"]);
    }

    #[test]
    fn spec_defaults_match_sumo_window() {
        let mut inflows = InFlows::new();
        let entry = inflows
            .add_spec(InflowSpec::new("human", "e0", InflowRate::VehsPerHour(10.0)))
            .unwrap();
        assert_eq!(entry.begin, 1.0);
        assert_eq!(entry.end, 86_400.0);
        assert_eq!(entry.depart_lane, DepartLane::First);
        assert_eq!(entry.depart_speed, DepartSpeed::Value(0.0));
    }

    #[test]
    fn rejects_negative_rate() {
        let mut inflows = InFlows::new();
        let err = inflows
            .add("human", "e0", -1.0, DepartLane::First, DepartSpeed::Max)
            .unwrap_err();
        assert!(matches!(err, InflowsError::NegativeRate { rate, .. } if rate == -1.0));
        assert!(inflows.is_empty());
    }

    #[test]
    fn rejects_non_finite_rate() {
        let mut inflows = InFlows::new();
        assert!(inflows.add("human", "e0", f64::NAN, DepartLane::First, DepartSpeed::Max).is_err());
        assert!(inflows.add("human", "e0", f64::INFINITY, DepartLane::First, DepartSpeed::Max).is_err());
    }

    #[test]
    fn rejects_probability_above_one() {
        let mut inflows = InFlows::new();
        let err = inflows
            .add_spec(InflowSpec::new("human", "e0", InflowRate::Probability(1.5)))
            .unwrap_err();
        assert!(matches!(err, InflowsError::InvalidProbability(_)));
    }

    #[test]
    fn rejects_bad_depart_speed() {
        let mut inflows = InFlows::new();
        for v in [-1.0, f64::NAN, f64::INFINITY] {
            let err = inflows
                .add("human", "e0", 100.0, DepartLane::First, DepartSpeed::Value(v))
                .unwrap_err();
            assert!(matches!(err, InflowsError::InvalidDepartSpeed(_)));
        }
        assert!(inflows.is_empty());
        // The CSV path rejects the same values.
        assert!("-1".parse::<DepartSpeed>().is_err());
        assert!("inf".parse::<DepartSpeed>().is_err());
    }

    #[test]
    fn rejects_inverted_window() {
        let mut inflows = InFlows::new();
        let err = inflows
            .add_spec(InflowSpec::new("human", "e0", InflowRate::VehsPerHour(10.0)).window(100.0, 50.0))
            .unwrap_err();
        assert!(matches!(err, InflowsError::InvalidWindow { begin, end } if begin == 100.0 && end == 50.0));
        assert!(
            inflows
                .add_spec(InflowSpec::new("human", "e0", InflowRate::VehsPerHour(10.0)).window(f64::NAN, 50.0))
                .is_err()
        );

        let entry = inflows
            .add_spec(InflowSpec::new("human", "e0", InflowRate::VehsPerHour(10.0)).window(50.0, 50.0))
            .unwrap();
        assert_eq!((entry.begin, entry.end), (50.0, 50.0));
    }

    #[test]
    fn zero_rate_is_allowed() {
        let mut inflows = InFlows::new();
        inflows.add("human", "e0", 0.0, DepartLane::First, DepartSpeed::Max).unwrap();
        assert_eq!(inflows.len(), 1);
    }

    #[test]
    fn per_edge_total_sums_types() {
        let mut inflows = InFlows::new();
        inflows.add("human", "e0", 900.0, DepartLane::Random, DepartSpeed::Random).unwrap();
        inflows.add("av", "e0", 100.0, DepartLane::Random, DepartSpeed::Random).unwrap();
        inflows.add("human", "e1", 50.0, DepartLane::Random, DepartSpeed::Random).unwrap();
        inflows
            .add_spec(InflowSpec::new("av", "e1", InflowRate::Probability(0.01)))
            .unwrap();
        assert_eq!(inflows.per_edge_total("e0"), 1_000.0);
        assert!((inflows.per_edge_total("e1") - 86.0).abs() < 1e-9);
        assert_eq!(inflows.per_edge_total("missing"), 0.0);
    }

    #[test]
    fn serializes_with_sumo_keys() {
        let mut inflows = InFlows::new();
        inflows.add("av", "119257914", 1_080.0, DepartLane::Random, DepartSpeed::Value(20.0)).unwrap();
        let v = serde_json::to_value(&inflows).unwrap();
        let entry = &v[0];
        assert_eq!(entry["name"], "flow_0");
        assert_eq!(entry["vtype"], "av");
        assert_eq!(entry["edge"], "119257914");
        assert_eq!(entry["vehsPerHour"], 1_080.0);
        assert_eq!(entry["departLane"], "random");
        assert_eq!(entry["departSpeed"], 20.0);
    }

    #[test]
    fn depart_policies_parse() {
        assert_eq!("random".parse::<DepartLane>().unwrap(), DepartLane::Random);
        assert_eq!("2".parse::<DepartLane>().unwrap(), DepartLane::Index(2));
        assert!("left".parse::<DepartLane>().is_err());
        assert_eq!("max".parse::<DepartSpeed>().unwrap(), DepartSpeed::Max);
        assert_eq!("23.5".parse::<DepartSpeed>().unwrap(), DepartSpeed::Value(23.5));
        assert!("-3".parse::<DepartSpeed>().is_err());
    }
}

#[cfg(test)]
mod split_tests {
    use flow_core::{PenetrationRate, RateRounding};

    use crate::{DepartLane, DepartSpeed, InFlows, InflowRate, InflowsError, PenetrationSplit};

    fn i210_split() -> PenetrationSplit {
        PenetrationSplit::new("human", "av")
            .rounding(RateRounding::Truncate)
            .depart_lane(DepartLane::Random)
            .depart_speed(DepartSpeed::Value(20.0))
    }

    #[test]
    fn ten_percent_of_mainline() {
        let mut inflows = InFlows::new();
        let rate = PenetrationRate::new(0.1).unwrap();
        let split = i210_split().apply(&mut inflows, "119257914", 10_800.0, rate).unwrap();

        assert_eq!(split.human, 9_720.0);
        assert_eq!(split.av, 1_080.0);
        let entries = inflows.entries();
        assert_eq!(entries[0].veh_type.as_str(), "human");
        assert_eq!(entries[0].rate, InflowRate::VehsPerHour(9_720.0));
        assert_eq!(entries[1].veh_type.as_str(), "av");
        assert_eq!(entries[1].rate, InflowRate::VehsPerHour(1_080.0));
        assert_eq!(inflows.per_edge_total("119257914"), 10_800.0);
    }

    #[test]
    fn truncation_drops_fractional_vehicles() {
        let mut inflows = InFlows::new();
        let rate = PenetrationRate::new(0.1).unwrap();
        let split = i210_split().apply(&mut inflows, "27414345", 321.0, rate).unwrap();
        assert_eq!(split.av, 32.0);
        assert_eq!(split.human, 288.0);
    }

    #[test]
    fn fractional_rounding_preserves_total() {
        let mut inflows = InFlows::new();
        let split = PenetrationSplit::new("human", "av")
            .apply_fraction(&mut inflows, "highway_0", 2_215.0, 0.1)
            .unwrap();
        assert!((split.total() - 2_215.0).abs() < 1e-9);
        assert!((inflows.per_edge_total("highway_0") - 2_215.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_fraction_adds_nothing() {
        let mut inflows = InFlows::new();
        for bad in [0.0, 1.0, -0.1, 1.5] {
            let err = i210_split()
                .apply_fraction(&mut inflows, "119257914", 10_800.0, bad)
                .unwrap_err();
            assert!(matches!(err, InflowsError::Flow(_)), "fraction {bad}");
        }
        assert!(inflows.is_empty());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Write;

    use crate::{load_inflows_csv, load_inflows_reader, DepartLane, DepartSpeed, InflowRate, InflowsError};

    const CSV: &str = "\
veh_type,edge,vehs_per_hour,depart_lane,depart_speed
human,119257914,9720,random,20
av,119257914,1080,random,20
human,27414345,321,,max
";

    #[test]
    fn loads_rows_in_order() {
        let inflows = load_inflows_reader(CSV.as_bytes()).unwrap();
        assert_eq!(inflows.len(), 3);
        let last = &inflows.entries()[2];
        assert_eq!(last.name, "flow_2");
        assert_eq!(last.edge.as_str(), "27414345");
        assert_eq!(last.rate, InflowRate::VehsPerHour(321.0));
        assert_eq!(last.depart_lane, DepartLane::First);
        assert_eq!(last.depart_speed, DepartSpeed::Max);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inflows.csv");
        std::fs::File::create(&path).unwrap().write_all(CSV.as_bytes()).unwrap();
        let inflows = load_inflows_csv(&path).unwrap();
        assert_eq!(inflows.per_edge_total("119257914"), 10_800.0);
    }

    #[test]
    fn bad_lane_is_parse_error() {
        let csv = "veh_type,edge,vehs_per_hour,depart_lane,depart_speed\nhuman,e0,1,left,0\n";
        let err = load_inflows_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, InflowsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_inflows_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, InflowsError::Io(_)));
    }
}
