use anyhow::Result;
use log::debug;

use crate::entities::{Bin, Item};
use crate::strategy::{PackingStrategy, StrategyKind};
use crate::util::PackConfig;

/// Sorts the items by decreasing size. Every bin is opened with the largest remaining item
/// and then completed with the smallest remaining items, as long as they fit.
///
/// Only the tail of the sorted list (the smallest remaining item) is inspected,
/// the first tail item that does not fit closes the bin.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescendingFit;

impl PackingStrategy for DescendingFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DescendingFit
    }

    fn pack(&self, mut items: Vec<Item>, config: &PackConfig) -> Result<Vec<Bin>> {
        // stable: items of equal size keep their input order
        items.sort_by(|a, b| b.size.cmp(&a.size));

        let mut bins = vec![];
        while !items.is_empty() {
            let mut bin = Bin::new(config.capacity);
            bin.add(items.remove(0))?;

            while let Some(smallest) = items.pop_if(|s| bin.can_accept(s)) {
                bin.add(smallest)?;
            }

            debug!("[DF] bin {} closed: [{}]", bins.len(), bin);
            bins.push(bin);
        }
        Ok(bins)
    }
}
