use std::time::Duration;

use crate::entities::{Bin, Item};
use crate::io::report::Report;
use crate::strategy::StrategyKind;

/// Ordered sequence of bins produced by one strategy over one snapshot of items.
#[derive(Clone, Debug)]
pub struct PackingSolution {
    /// The strategy that produced the bins
    pub strategy: StrategyKind,
    /// Bins in the order they were emitted
    pub bins: Vec<Bin>,
    /// Time it took the strategy to produce the bins
    pub run_time: Duration,
}

impl PackingSolution {
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// Sum of the sizes of all packed items
    pub fn total_size(&self) -> u32 {
        self.bins.iter().map(|b| b.occupied()).sum()
    }

    /// Ratio of the packed item sizes to the total capacity of the used bins
    pub fn density(&self) -> f32 {
        let total_capacity = self.bins.iter().map(|b| b.capacity()).sum::<u32>();
        match total_capacity {
            0 => 0.0,
            c => self.total_size() as f32 / c as f32,
        }
    }

    pub fn report(&self) -> Report {
        Report::new(&self.bins)
    }
}

/// Minimum number of bins any packing of `items` needs: `ceil(sum of sizes / capacity)`.
/// `capacity` must be non-zero, as guaranteed by a validated [`PackConfig`](crate::util::PackConfig).
pub fn lower_bound(items: &[Item], capacity: u32) -> usize {
    let total = items.iter().map(|i| i.size as usize).sum::<usize>();
    total.div_ceil(capacity as usize)
}
