use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use slotmap::{SlotMap, new_key_type};

use crate::entities::Item;

new_key_type! {
    /// Unique key for each [`Item`] held by a [`Bin`]
    pub struct BItemKey;
}

/// A [`Bin`] is a fixed-capacity container in which items can be packed.
/// The sum of the sizes of all contained items never exceeds the capacity.
#[derive(Clone, Debug)]
pub struct Bin {
    capacity: u32,
    /// All the items packed in this bin, indexed by a unique key
    items: SlotMap<BItemKey, Item>,
    /// Sum of the sizes of all contained items
    occupied: u32,
}

impl Bin {
    pub fn new(capacity: u32) -> Self {
        Bin {
            capacity,
            items: SlotMap::with_key(),
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sum of the sizes of the items currently in the bin
    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn remaining_space(&self) -> u32 {
        self.capacity - self.occupied
    }

    /// True if `item` fits in the remaining space of the bin.
    /// Sizes are not validated, any size larger than the remaining space is simply refused.
    pub fn can_accept(&self, item: &Item) -> bool {
        item.size <= self.remaining_space()
    }

    /// Packs `item` into the bin and returns its key.
    /// Fails, leaving the bin untouched, if the bin is already full, if the item does not fit
    /// or if the very same item is already contained.
    pub fn add(&mut self, item: Item) -> Result<BItemKey> {
        ensure!(
            !self.is_full(),
            "bin is full, cannot add item {} (size {})",
            item.id,
            item.size
        );
        ensure!(
            self.can_accept(&item),
            "item {} (size {}) does not fit in bin with {} remaining space",
            item.id,
            item.size,
            self.remaining_space()
        );
        ensure!(
            !self.contains(&item),
            "item {} is already packed in this bin",
            item.id
        );

        self.occupied += item.size;
        Ok(self.items.insert(item))
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.values().any(|i| i.id == item.id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Concatenation of the sizes of all contained items.
    /// The order of the items is not part of the contract.
    pub fn render(&self) -> String {
        self.items.values().map(|i| i.to_string()).collect()
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
