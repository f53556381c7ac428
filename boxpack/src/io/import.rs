use anyhow::{Result, bail};

use crate::entities::Item;
use crate::util::PackConfig;

/// Converts a line of digits into items, one item per digit.
///
/// A trailing line terminator is ignored, every other character must be a digit in `1..=max_item_size`.
/// The line is either accepted as a whole or rejected, an empty line yields no items.
pub fn import_items(line: &str, config: &PackConfig) -> Result<Vec<Item>> {
    let line = line.trim_end_matches(['\n', '\r']);

    let mut items = Vec::with_capacity(line.len());
    for (pos, c) in line.chars().enumerate() {
        let size = match c.to_digit(10) {
            Some(d) => d,
            None => bail!("the list of items must contain only digits, found {c:?} at position {pos}"),
        };
        if size == 0 || size > config.max_item_size {
            bail!(
                "item size {size} at position {pos} is outside of 1..={}",
                config.max_item_size
            );
        }
        items.push(Item::new(pos, size));
    }
    Ok(items)
}
