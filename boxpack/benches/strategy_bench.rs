use boxpack::engine::PackingEngine;
use boxpack::entities::Item;
use boxpack::strategy::StrategyKind;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, strategy_bench);

const N_ITEMS: [usize; 3] = [15, 100, 1000];

fn create_items(n_items: usize, seed: u64) -> Vec<Item> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n_items)
        .map(|id| Item::new(id, rng.random_range(1..=9)))
        .collect()
}

/// Benchmark how many complete packings every strategy performs per second for instances of growing size.
fn strategy_bench(c: &mut Criterion) {
    let engine = PackingEngine::default();

    for kind in StrategyKind::ALL {
        let mut group = c.benchmark_group(format!("pack_{kind}"));
        for n_items in N_ITEMS {
            let items = create_items(n_items, 0);
            group.throughput(criterion::Throughput::Elements(n_items as u64));
            group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
                b.iter(|| {
                    engine
                        .pack(kind, &items)
                        .expect("random items are always within the size range")
                })
            });
        }
        group.finish();
    }
}
