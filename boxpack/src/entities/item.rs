use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Item to be packed in a [`Bin`](crate::entities::Bin).
///
/// Two items of the same size are distinct: `id` is the identity of the item,
/// `size` is only used for capacity accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier of the item within one input (its position in the input line)
    pub id: usize,
    /// Space the item occupies in a bin
    pub size: u32,
}

impl Item {
    pub fn new(id: usize, size: u32) -> Self {
        Item { id, size }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.size)
    }
}
