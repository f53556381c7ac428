#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use anyhow::Result;
    use boxpack::engine::PackingEngine;
    use boxpack::io::import::import_items;
    use boxpack::strategy::StrategyKind;
    use boxpack::util::PackConfig;
    use boxpack_cli::config::BoxPackConfig;
    use boxpack_cli::generator::generate_items;
    use boxpack_cli::io::output::PackOutput;
    use boxpack_cli::{best_solution, io};
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn prompt_retries_until_valid_line() -> Result<()> {
        init_logger();
        let mut input = Cursor::new("12x4\n\n");
        let mut output = vec![];

        let items = io::prompt_items(&mut input, &mut output, &PackConfig::default())?;
        assert!(items.is_empty());

        let mut input = Cursor::new("12x4\n0\n1639\n");
        let mut output = vec![];
        let items = io::prompt_items(&mut input, &mut output, &PackConfig::default())?;
        assert_eq!(items.iter().map(|i| i.size).collect::<Vec<_>>(), vec![1, 6, 3, 9]);

        let transcript = String::from_utf8(output)?;
        assert_eq!(transcript.matches("Please enter a list of items").count(), 3);
        assert_eq!(transcript.matches("ERROR - ").count(), 2);
        assert!(transcript.contains("between 1 and 9"));
        Ok(())
    }

    #[test]
    fn prompt_discards_undecodable_line() -> Result<()> {
        init_logger();
        let mut input = Cursor::new(&b"12\xff4\n1639\n"[..]);
        let mut output = vec![];

        let items = io::prompt_items(&mut input, &mut output, &PackConfig::default())?;
        assert_eq!(items.iter().map(|i| i.size).collect::<Vec<_>>(), vec![1, 6, 3, 9]);

        let transcript = String::from_utf8(output)?;
        assert_eq!(transcript.matches("Please enter a list of items").count(), 2);
        assert_eq!(transcript.matches("ERROR - ").count(), 1);
        Ok(())
    }

    #[test]
    fn prompt_fails_when_input_ends() {
        init_logger();
        let mut input = Cursor::new("abc\n");
        let mut output = vec![];
        assert!(io::prompt_items(&mut input, &mut output, &PackConfig::default()).is_err());
    }

    #[test]
    fn reports_of_all_strategies() -> Result<()> {
        init_logger();
        let items = import_items("19", &PackConfig::default())?;
        let solutions = PackingEngine::default().pack_all(&StrategyKind::ALL, &items)?;

        let mut output = vec![];
        io::write_reports(&solutions, &mut output)?;

        let expected = [
            "---Sorting Solution".to_string(),
            "Result: 91/".to_string(),
            "Nb boxes: 1".to_string(),
            "-".repeat(19),
            "---Fill Solution".to_string(),
            "Result: 19/".to_string(),
            "Nb boxes: 1".to_string(),
            "-".repeat(16),
            "---Map Solution".to_string(),
            "Result: 91/".to_string(),
            "Nb boxes: 1".to_string(),
            "-".repeat(15),
        ];
        assert_eq!(String::from_utf8(output)?, expected.join("\n") + "\n");
        Ok(())
    }

    #[test]
    fn empty_input_reports_no_boxes() -> Result<()> {
        let solutions = PackingEngine::default().pack_all(&StrategyKind::ALL, &[])?;
        let mut output = vec![];
        io::write_reports(&solutions, &mut output)?;
        assert_eq!(String::from_utf8(output)?.matches("No boxes").count(), 3);
        Ok(())
    }

    #[test_case("727272723333", StrategyKind::SizeClassGreedy, 5)]
    #[test_case("53789357725987638927987528622862", StrategyKind::DescendingFit, 21)]
    #[test_case("163841689525773", StrategyKind::DescendingFit, 8)]
    fn best_solution_has_fewest_bins(line: &str, strategy: StrategyKind, n_bins: usize) -> Result<()> {
        let items = import_items(line, &PackConfig::default())?;
        let solutions = PackingEngine::default().pack_all(&StrategyKind::ALL, &items)?;
        let best = best_solution(&solutions).expect("three solutions");
        assert_eq!(best.strategy, strategy);
        assert_eq!(best.n_bins(), n_bins);
        Ok(())
    }

    #[test]
    fn generated_items_are_seeded_and_in_range() {
        let config = PackConfig::default();
        let a = generate_items(100, &config, &mut SmallRng::seed_from_u64(3));
        let b = generate_items(100, &config, &mut SmallRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(a.iter().all(|i| (1..=9).contains(&i.size)));
        assert!(a.iter().enumerate().all(|(id, i)| i.id == id));
    }

    #[test]
    fn config_defaults_and_parsing() -> Result<()> {
        let default = BoxPackConfig::default();
        assert_eq!(default.pack_config, PackConfig::default());
        assert_eq!(default.strategies, StrategyKind::ALL.to_vec());

        let json = r#"{ "pack_config": { "capacity": 6, "max_item_size": 5 }, "prng_seed": null }"#;
        let config: BoxPackConfig = serde_json::from_str(json)?;
        config.validate()?;
        assert_eq!(config.pack_config.capacity, 6);
        assert_eq!(config.strategies, StrategyKind::ALL.to_vec());
        assert_eq!(config.prng_seed, None);

        let json = r#"{ "pack_config": { "capacity": 10, "max_item_size": 9 }, "strategies": ["size-class-greedy"], "prng_seed": 1 }"#;
        let config: BoxPackConfig = serde_json::from_str(json)?;
        assert_eq!(config.strategies, vec![StrategyKind::SizeClassGreedy]);

        let invalid: BoxPackConfig = serde_json::from_str(
            r#"{ "pack_config": { "capacity": 5, "max_item_size": 9 }, "strategies": [], "prng_seed": null }"#,
        )?;
        assert!(invalid.validate().is_err());
        Ok(())
    }

    #[test]
    fn solution_file_round_trip() -> Result<()> {
        let config = BoxPackConfig::default();
        let items = import_items("163841689525773", &config.pack_config)?;
        let solutions = PackingEngine::default().pack_all(&config.strategies, &items)?;
        let output = PackOutput::new(&items, &solutions, config);

        let path = std::env::temp_dir().join(format!("boxpack_sol_{}.json", std::process::id()));
        io::write_json(&output, &path)?;
        let read_back: serde_json::Value = serde_json::from_reader(std::fs::File::open(&path)?)?;
        std::fs::remove_file(&path)?;

        assert_eq!(read_back["items"].as_array().map(|a| a.len()), Some(15));
        let solutions = read_back["solutions"].as_array().expect("solutions array");
        assert_eq!(solutions.len(), 3);
        assert_eq!(solutions[0]["strategy"], "descending-fit");
        assert_eq!(solutions[0]["n_bins"], 8);
        assert_eq!(solutions[0]["lower_bound"], 8);
        let packed = solutions[2]["bins"]
            .as_array()
            .expect("bins array")
            .iter()
            .map(|b| b["occupied"].as_u64().unwrap_or(0))
            .sum::<u64>();
        assert_eq!(packed, 75);
        Ok(())
    }
}
