#[cfg(test)]
mod tests {
    use locf::config::SimConfig;
    use locf::simulator::Simulator;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    fn seeded_simulator(seed: u64) -> Simulator {
        Simulator::new(SimConfig::default(), SmallRng::seed_from_u64(seed))
    }

    #[test_case(1, 50; "single experiment")]
    #[test_case(10, 100; "ten experiments")]
    #[test_case(25, 1; "one item per trial")]
    fn report_has_one_line_per_experiment(n_experiments: usize, n_items: usize) {
        let mut sink = Vec::new();
        let summary = seeded_simulator(0)
            .run_experiments(n_experiments, n_items, &mut sink)
            .unwrap();
        let report = String::from_utf8(sink).unwrap();

        assert_eq!(report.lines().count(), n_experiments);
        assert_eq!(summary.n_experiments, n_experiments);

        for line in report.lines() {
            let (head, log) = line.split_once(": ").unwrap();
            let (items, containers) = head.split_once(" in ").unwrap();
            assert_eq!(items.parse::<usize>().unwrap(), n_items);

            let n_containers: usize = containers.parse().unwrap();
            assert_eq!(log.split_whitespace().count(), n_containers);
        }
    }

    #[test]
    fn summary_bounds_are_consistent() {
        let n_items = 100;
        let mut sink = Vec::new();
        let summary = seeded_simulator(1)
            .run_experiments(20, n_items, &mut sink)
            .unwrap();

        assert!(summary.min_containers <= summary.max_containers);
        // every container holds at least one and at most capacity items
        assert!(summary.min_containers >= n_items.div_ceil(SimConfig::default().capacity));
        assert!(summary.max_containers <= n_items);
    }

    #[test]
    fn trial_respects_configured_capacity() {
        let config = SimConfig {
            capacity: 3,
            prng_seed: Some(0),
        };
        let mut simulator = Simulator::new(config, SmallRng::seed_from_u64(0));
        let outcome = simulator.run_trial(30).unwrap();

        assert_eq!(outcome.n_items, 30);
        assert!(outcome.n_containers >= 10);
        assert_eq!(
            outcome.compact_log.split_whitespace().count(),
            outcome.n_containers
        );
        // every token reports between 1 and capacity items
        for token in outcome.compact_log.split_whitespace() {
            let count: usize = token[2..token.len() - 1].parse().unwrap();
            assert!(count >= 1 && count <= 3);
        }
    }

    #[test]
    fn equal_seeds_produce_equal_reports() {
        let mut sink_a = Vec::new();
        let mut sink_b = Vec::new();
        let summary_a = seeded_simulator(7)
            .run_experiments(5, 200, &mut sink_a)
            .unwrap();
        let summary_b = seeded_simulator(7)
            .run_experiments(5, 200, &mut sink_b)
            .unwrap();

        assert_eq!(sink_a, sink_b);
        assert_eq!(summary_a, summary_b);
    }

    #[test]
    fn empty_run_yields_empty_report_and_zero_summary() {
        let mut sink = Vec::new();
        let summary = seeded_simulator(0).run_experiments(0, 100, &mut sink).unwrap();

        assert!(sink.is_empty());
        assert_eq!(summary.min_containers, 0);
        assert_eq!(summary.max_containers, 0);
    }
}
