use boxpack::entities::{Item, PackingSolution, lower_bound};
use boxpack::io::export;
use boxpack::io::ext_repr::ExtSolution;
use serde::{Deserialize, Serialize};

use crate::config::BoxPackConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    /// Sizes of the input items, in input order
    pub items: Vec<u32>,
    pub config: BoxPackConfig,
    pub solutions: Vec<ExtSolution>,
}

impl PackOutput {
    pub fn new(items: &[Item], solutions: &[PackingSolution], config: BoxPackConfig) -> Self {
        let lb = lower_bound(items, config.pack_config.capacity);
        Self {
            items: items.iter().map(|i| i.size).collect(),
            solutions: solutions.iter().map(|s| export::export(s, lb)).collect(),
            config,
        }
    }
}
