use std::collections::HashSet;

use itertools::Itertools;
use log::error;

use crate::entities::{Bin, Item};

//Various checks to verify correctness of the output of the strategies
//Used in debug_assert!() blocks and tests

/// Every input item ends up in exactly one bin, and no other item does
pub fn items_conserved(items: &[Item], bins: &[Bin]) -> bool {
    let packed = bins.iter().flat_map(|b| b.items()).collect_vec();
    let packed_ids = packed.iter().map(|i| i.id).collect::<HashSet<_>>();

    if packed.len() != items.len() || packed_ids.len() != packed.len() {
        error!(
            "{} items packed ({} unique) while {} items were provided",
            packed.len(),
            packed_ids.len(),
            items.len()
        );
        return false;
    }

    items.iter().all(|item| {
        packed
            .iter()
            .any(|p| p.id == item.id && p.size == item.size)
    })
}

/// The multiset of packed sizes equals the multiset of input sizes
pub fn sizes_conserved(items: &[Item], bins: &[Bin]) -> bool {
    let input = items.iter().map(|i| i.size).sorted().collect_vec();
    let packed = bins
        .iter()
        .flat_map(|b| b.items())
        .map(|i| i.size)
        .sorted()
        .collect_vec();
    input == packed
}

pub fn bins_within_capacity(bins: &[Bin]) -> bool {
    bins.iter().all(|b| {
        let occupied = b.items().map(|i| i.size).sum::<u32>();
        occupied == b.occupied() && occupied <= b.capacity()
    })
}

pub fn no_empty_bins(bins: &[Bin]) -> bool {
    bins.iter().all(|b| !b.is_empty())
}
