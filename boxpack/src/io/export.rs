use crate::entities::{Bin, PackingSolution};
use crate::io::ext_repr::{ExtBin, ExtSolution};

pub fn export_bin(bin: &Bin) -> ExtBin {
    ExtBin {
        items: bin.items().map(|i| i.size).collect(),
        occupied: bin.occupied(),
    }
}

/// Exports a solution out of the library
pub fn export(solution: &PackingSolution, lower_bound: usize) -> ExtSolution {
    ExtSolution {
        strategy: solution.strategy,
        bins: solution.bins.iter().map(export_bin).collect(),
        n_bins: solution.n_bins(),
        lower_bound,
        density: solution.density(),
        run_time_ms: solution.run_time.as_secs_f64() * 1000.0,
    }
}
