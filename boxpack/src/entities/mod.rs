mod bin;
mod item;
mod solution;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use bin::BItemKey;

#[doc(inline)]
pub use solution::PackingSolution;

#[doc(inline)]
pub use solution::lower_bound;
