//! Packing heuristics

mod descending_fit;
mod single_pass_fit;
mod size_class_greedy;

pub use descending_fit::DescendingFit;
pub use single_pass_fit::SinglePassFit;
pub use size_class_greedy::SizeClassGreedy;

use std::fmt::{Display, Formatter};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::entities::{Bin, Item};
use crate::util::PackConfig;

/// Trait for packing heuristics that can be plugged into the [`PackingEngine`](crate::engine::PackingEngine)
pub trait PackingStrategy {
    fn kind(&self) -> StrategyKind;

    /// Packs all `items` into bins of `config.capacity`, in the order the bins are emitted.
    ///
    /// `items` is a working copy owned by the strategy, the caller's list is never touched.
    /// Fails only if an insertion into a bin is rejected, which cannot happen for items
    /// sized within `1..=config.max_item_size`.
    fn pack(&self, items: Vec<Item>, config: &PackConfig) -> Result<Vec<Bin>>;
}

/// The available packing heuristics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Largest remaining item first, completed with the smallest remaining ones
    DescendingFit,
    /// Single first-fit pass over the unsorted items per bin
    SinglePassFit,
    /// Items grouped per size, complementary sizes paired first
    SizeClassGreedy,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::DescendingFit,
        StrategyKind::SinglePassFit,
        StrategyKind::SizeClassGreedy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::DescendingFit => "Sorting Solution",
            StrategyKind::SinglePassFit => "Fill Solution",
            StrategyKind::SizeClassGreedy => "Map Solution",
        }
    }

    pub fn strategy(&self) -> &'static dyn PackingStrategy {
        match self {
            StrategyKind::DescendingFit => &DescendingFit,
            StrategyKind::SinglePassFit => &SinglePassFit,
            StrategyKind::SizeClassGreedy => &SizeClassGreedy,
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::DescendingFit => "descending-fit",
            StrategyKind::SinglePassFit => "single-pass-fit",
            StrategyKind::SizeClassGreedy => "size-class-greedy",
        };
        f.write_str(name)
    }
}
