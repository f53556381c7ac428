use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// External representation of a [`Bin`](crate::entities::Bin)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBin {
    /// Sizes of the packed items
    pub items: Vec<u32>,
    /// Sum of the sizes of the packed items
    pub occupied: u32,
}

/// External representation of a [`PackingSolution`](crate::entities::PackingSolution)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Strategy used to produce the solution
    pub strategy: StrategyKind,
    /// Bins which compose the solution, in emission order
    pub bins: Vec<ExtBin>,
    pub n_bins: usize,
    /// Minimum number of bins any packing of the same items requires
    pub lower_bound: usize,
    /// Sum of the sizes of the items divided by the total capacity of the bins
    pub density: f32,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: f64,
}
