use boxpack::entities::Item;
use boxpack::util::PackConfig;
use rand::Rng;

/// Generates `n_items` items with sizes drawn uniformly from `1..=max_item_size`
pub fn generate_items(n_items: usize, config: &PackConfig, rng: &mut impl Rng) -> Vec<Item> {
    (0..n_items)
        .map(|id| Item::new(id, rng.random_range(1..=config.max_item_size)))
        .collect()
}
