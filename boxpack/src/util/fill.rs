use anyhow::Result;

use crate::entities::{Bin, Item};

/// Greedily moves candidates into `bin`, scanning them in their current order.
/// Every candidate that fits is removed from `candidates` and packed, the scan stops as soon as the bin is full.
/// Returns the number of items moved.
pub fn fill_bin(bin: &mut Bin, candidates: &mut Vec<Item>) -> Result<usize> {
    let mut n_moved = 0;
    let mut i = 0;
    while i < candidates.len() && !bin.is_full() {
        if bin.can_accept(&candidates[i]) {
            // remove by position, items of equal size are not interchangeable
            let item = candidates.remove(i);
            bin.add(item)?;
            n_moved += 1;
        } else {
            i += 1;
        }
    }
    Ok(n_moved)
}
