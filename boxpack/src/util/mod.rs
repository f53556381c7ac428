/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fill;

#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use config::{DEFAULT_CAPACITY, DEFAULT_MAX_ITEM_SIZE};
#[doc(inline)]
pub use fill::fill_bin;
