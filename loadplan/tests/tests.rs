#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use loadplan::config::LoadPlanConfig;
    use loadplan::io;
    use loadplan::io::output::LoadPlanOutput;
    use stage_dp::util::assertions::result_is_consistent;
    use stage_dp::util::{SolverConfig, StageOrdering};
    use stage_dp::{LoadError, solve};
    use test_case::test_case;

    fn init() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/course_q10.json", 20.0, 5; "course_q10")]
    #[test_case("../assets/single_q10.json", 15.0, 1; "single_q10")]
    #[test_case("../assets/mixed_q29.json", 44.5, 2; "mixed_q29")]
    fn test_instance(instance_path: &str, max_value: f64, n_solutions: usize) {
        init();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = stage_dp::io::import(&ext_instance).unwrap();

        for stage_ordering in [StageOrdering::DescendingId, StageOrdering::AscendingId] {
            let result = solve(&instance, SolverConfig { stage_ordering });
            assert!(approx_eq!(f64, result.max_value, max_value, ulps = 4));
            assert!(result_is_consistent(&result));
            if stage_ordering == StageOrdering::DescendingId {
                assert_eq!(result.n_solutions(), n_solutions);
            }
        }
    }

    #[test]
    fn exported_result_reports_weights() {
        init();
        let ext_instance = io::read_instance(Path::new("../assets/course_q10.json")).unwrap();
        let instance = stage_dp::io::import(&ext_instance).unwrap();
        let result = solve(&instance, SolverConfig::default());
        let ext_result = stage_dp::io::export(&result);

        assert_eq!(ext_result.capacity, 10);
        assert_eq!(ext_result.max_value, 20.0);
        assert_eq!(ext_result.solutions.len(), 5);
        for s in &ext_result.solutions {
            assert_eq!(s.total_weight, 10);
            assert_eq!(s.total_value, 20.0);
            assert_eq!(s.counts.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        }
        let second = &ext_result.solutions[1];
        assert_eq!(second.counts[&1], 1);
        assert_eq!(second.counts[&4], 2);
    }

    #[test]
    fn output_round_trips_through_json() {
        let ext_instance = io::read_instance(Path::new("../assets/single_q10.json")).unwrap();
        let instance = stage_dp::io::import(&ext_instance).unwrap();
        let result = solve(&instance, SolverConfig::default());
        let output = LoadPlanOutput {
            instance: ext_instance.clone(),
            result: stage_dp::io::export(&result),
            config: LoadPlanConfig::default(),
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], "single_q10");
        assert_eq!(json["capacity"], 10);
        assert_eq!(json["result"]["max_value"], 15.0);
        assert_eq!(json["result"]["solutions"][0]["counts"]["1"], 3);

        let parsed: LoadPlanOutput = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.instance, ext_instance);
        assert_eq!(parsed.result, output.result);
    }

    #[test]
    fn invalid_instance_is_rejected() {
        let ext_instance = io::read_instance(Path::new("../assets/invalid_weight.json")).unwrap();
        match stage_dp::io::import(&ext_instance) {
            Err(LoadError::InvalidItem { id, .. }) => assert_eq!(id, 2),
            other => panic!("expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn missing_instance_file_is_an_error() {
        assert!(io::read_instance(Path::new("../assets/does_not_exist.json")).is_err());
    }
}
