use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Capacity of a bin in the classic instance of the problem
pub const DEFAULT_CAPACITY: u32 = 10;

/// Largest item size in the classic instance of the problem
pub const DEFAULT_MAX_ITEM_SIZE: u32 = 9;

/// Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackConfig {
    /// Sum of item sizes a single bin can hold
    pub capacity: u32,
    /// Largest accepted item size, items are sized in `1..=max_item_size`
    pub max_item_size: u32,
}

impl PackConfig {
    pub fn new(capacity: u32, max_item_size: u32) -> Result<Self> {
        let config = PackConfig {
            capacity,
            max_item_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Every item has to fit in an empty bin
    pub fn validate(&self) -> Result<()> {
        ensure!(self.capacity > 0, "bin capacity must be positive");
        ensure!(self.max_item_size > 0, "maximum item size must be positive");
        ensure!(
            self.max_item_size <= self.capacity,
            "maximum item size ({}) exceeds bin capacity ({})",
            self.max_item_size,
            self.capacity
        );
        Ok(())
    }

    /// All valid item sizes, largest first
    pub fn size_classes_desc(&self) -> impl Iterator<Item = u32> {
        (1..=self.max_item_size).rev()
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_item_size: DEFAULT_MAX_ITEM_SIZE,
        }
    }
}
