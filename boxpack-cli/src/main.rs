use anyhow::{Context, Result};
use boxpack::engine::PackingEngine;
use boxpack::entities::lower_bound;
use boxpack::io::import::import_items;
use boxpack_cli::config::BoxPackConfig;
use boxpack_cli::generator::generate_items;
use boxpack_cli::io::cli::Cli;
use boxpack_cli::io::output::PackOutput;
use boxpack_cli::{best_solution, io};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BoxPackConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if !args.strategy.is_empty() {
        config.strategies = args.strategy.iter().map(|&s| s.into()).collect_vec();
    }

    info!("[MAIN] Successfully parsed BoxPackConfig: {config:?}");

    let engine = PackingEngine::new(config.pack_config)?;

    let items = match (&args.items, args.generate) {
        (Some(line), _) => {
            import_items(line, &config.pack_config).context("invalid list of items")?
        }
        (None, Some(n_items)) => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let items = generate_items(n_items, &config.pack_config, &mut rng);
            info!(
                "[MAIN] generated items: {}",
                items.iter().map(|i| i.to_string()).join("")
            );
            items
        }
        (None, None) => {
            let stdin = std::io::stdin();
            io::prompt_items(&mut stdin.lock(), &mut std::io::stdout(), &config.pack_config)?
        }
    };

    let solutions = engine.pack_all(&config.strategies, &items)?;
    io::write_reports(&solutions, &mut std::io::stdout().lock())?;

    if let Some(best) = best_solution(&solutions) {
        info!(
            "[MAIN] {} used the fewest bins: {} (lower bound {})",
            best.strategy,
            best.n_bins(),
            lower_bound(&items, config.pack_config.capacity)
        );
    }

    if let Some(solution_file) = &args.solution_file {
        let output = PackOutput::new(&items, &solutions, config);
        io::write_json(&output, solution_file)?;
    }

    Ok(())
}
