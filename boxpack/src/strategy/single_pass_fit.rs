use anyhow::Result;
use log::debug;

use crate::entities::{Bin, Item};
use crate::strategy::{PackingStrategy, StrategyKind};
use crate::util::{PackConfig, fill_bin};

/// Items are kept in input order. Every bin is opened with the first remaining item,
/// then a single forward pass adds every following item that still fits until the bin is full.
///
/// The outcome depends on the order of the input.
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePassFit;

impl PackingStrategy for SinglePassFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SinglePassFit
    }

    fn pack(&self, mut items: Vec<Item>, config: &PackConfig) -> Result<Vec<Bin>> {
        let mut bins = vec![];
        while !items.is_empty() {
            let mut bin = Bin::new(config.capacity);
            bin.add(items.remove(0))?;
            fill_bin(&mut bin, &mut items)?;

            debug!("[SPF] bin {} closed: [{}]", bins.len(), bin);
            bins.push(bin);
        }
        Ok(bins)
    }
}
