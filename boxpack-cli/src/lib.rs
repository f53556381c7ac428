use std::sync::LazyLock;
use std::time::Instant;

use boxpack::entities::PackingSolution;

pub mod config;
pub mod generator;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// The solution with the fewest bins, the earliest one on ties
pub fn best_solution(solutions: &[PackingSolution]) -> Option<&PackingSolution> {
    solutions.iter().min_by_key(|s| s.n_bins())
}
