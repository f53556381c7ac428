use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use boxpack::strategy::StrategyKind;
use boxpack::util::PackConfig;

/// Configuration for the boxpack front-end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BoxPackConfig {
    /// Capacity of the bins and range of the item sizes
    pub pack_config: PackConfig,
    /// Strategies to run, in order
    #[serde(default = "all_strategies")]
    pub strategies: Vec<StrategyKind>,
    /// Seed for the PRNG used to generate items. If undefined, items are generated using entropy
    pub prng_seed: Option<u64>,
}

impl BoxPackConfig {
    pub fn validate(&self) -> Result<()> {
        self.pack_config.validate()?;
        ensure!(!self.strategies.is_empty(), "at least one strategy must be configured");
        Ok(())
    }
}

fn all_strategies() -> Vec<StrategyKind> {
    StrategyKind::ALL.to_vec()
}

impl Default for BoxPackConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            strategies: all_strategies(),
            prng_seed: Some(0),
        }
    }
}
