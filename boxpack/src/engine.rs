use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::entities::{Item, PackingSolution, lower_bound};
use crate::strategy::StrategyKind;
use crate::util::{PackConfig, assertions};

/// Runs the packing strategies over snapshots of items.
/// Every run works on its own copy of the items, runs never influence each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackingEngine {
    config: PackConfig,
}

impl PackingEngine {
    pub fn new(config: PackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Packs `items` with a single strategy.
    pub fn pack(&self, kind: StrategyKind, items: &[Item]) -> Result<PackingSolution> {
        let start = Instant::now();

        let strategy = kind.strategy();
        let bins = strategy
            .pack(items.to_vec(), &self.config)
            .with_context(|| format!("{} failed to pack {} items", strategy.kind(), items.len()))?;

        debug_assert!(assertions::items_conserved(items, &bins));
        debug_assert!(assertions::bins_within_capacity(&bins));

        let solution = PackingSolution {
            strategy: kind,
            bins,
            run_time: start.elapsed(),
        };

        info!(
            "[ENGINE] {} packed {} items in {} bins (lower bound {}, density {:.1}%) in {:.3}ms",
            kind,
            items.len(),
            solution.n_bins(),
            lower_bound(items, self.config.capacity),
            solution.density() * 100.0,
            solution.run_time.as_secs_f64() * 1000.0
        );

        Ok(solution)
    }

    /// Packs the same `items` independently with every strategy in `kinds`.
    pub fn pack_all(&self, kinds: &[StrategyKind], items: &[Item]) -> Result<Vec<PackingSolution>> {
        kinds.iter().map(|k| self.pack(*k, items)).collect()
    }

    pub fn descending_fit(&self, items: &[Item]) -> Result<PackingSolution> {
        self.pack(StrategyKind::DescendingFit, items)
    }

    pub fn single_pass_fit(&self, items: &[Item]) -> Result<PackingSolution> {
        self.pack(StrategyKind::SinglePassFit, items)
    }

    pub fn size_class_greedy(&self, items: &[Item]) -> Result<PackingSolution> {
        self.pack(StrategyKind::SizeClassGreedy, items)
    }
}
