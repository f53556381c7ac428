use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;

use crate::entities::{Bin, Item};
use crate::strategy::{PackingStrategy, StrategyKind};
use crate::util::{PackConfig, fill_bin};

/// Groups the items per size (size classes), keeping their input order within each class.
/// Size classes are drained from the largest to the smallest. Every bin is opened with the first
/// item of the class being drained, paired with one item of the complementary size (`capacity - size`)
/// if any is left, and finally topped off with the remaining items of the same and all smaller classes,
/// largest class first.
///
/// With a capacity of 10 this pairs 9+1, 8+2, 7+3, 6+4 and 5+5 before falling back to greedy top-off.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeClassGreedy;

impl PackingStrategy for SizeClassGreedy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SizeClassGreedy
    }

    fn pack(&self, items: Vec<Item>, config: &PackConfig) -> Result<Vec<Bin>> {
        let mut classes = SizeClasses::new(items, config.max_item_size)?;

        let mut bins = vec![];
        for size in config.size_classes_desc() {
            while let Some(first) = classes.pop_front(size) {
                let mut bin = Bin::new(config.capacity);
                bin.add(first)?;

                let complement = config.capacity - size;
                if let Some(partner) = classes.pop_front_if(complement, |i| bin.can_accept(i)) {
                    bin.add(partner)?;
                }

                for smaller in (1..=size).rev() {
                    if bin.is_full() {
                        break;
                    }
                    fill_bin(&mut bin, classes.get_mut(smaller))?;
                }

                debug!("[SCG] size class {size}, bin {} closed: [{}]", bins.len(), bin);
                bins.push(bin);
            }
        }
        debug_assert!(classes.is_empty());
        Ok(bins)
    }
}

/// One queue of items per size, indexed by `size - 1`
struct SizeClasses(Vec<Vec<Item>>);

impl SizeClasses {
    fn new(items: Vec<Item>, max_item_size: u32) -> Result<Self> {
        let mut classes = (0..max_item_size).map(|_| vec![]).collect_vec();
        for item in items {
            ensure!(
                (1..=max_item_size).contains(&item.size),
                "item {} has size {}, outside of 1..={}",
                item.id,
                item.size,
                max_item_size
            );
            classes[item.size as usize - 1].push(item);
        }
        Ok(SizeClasses(classes))
    }

    fn get_mut(&mut self, size: u32) -> &mut Vec<Item> {
        &mut self.0[size as usize - 1]
    }

    fn pop_front(&mut self, size: u32) -> Option<Item> {
        self.pop_front_if(size, |_| true)
    }

    /// Removes the first item of a size class if there is one and `pred` holds for it.
    /// Sizes without a class (0 or above the maximum) yield nothing.
    fn pop_front_if(&mut self, size: u32, pred: impl FnOnce(&Item) -> bool) -> Option<Item> {
        if size == 0 || size as usize > self.0.len() {
            return None;
        }
        let class = self.get_mut(size);
        match class.first() {
            Some(first) if pred(first) => Some(class.remove(0)),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.is_empty())
    }
}
