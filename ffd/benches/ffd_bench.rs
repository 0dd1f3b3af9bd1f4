use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use ffd::opt::FFDOptimizer;
use stockcut::decompose::decompose_all;
use stockcut::entities::{CutRequirement, StockSpec};
use stockcut::util::CutConfig;

criterion_main!(benches);
criterion_group!(benches, ffd_bench);

const N_REQUIREMENTS: usize = 200;

fn ffd_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let stock = StockSpec::new(12.0, 0.005, 0.64).unwrap();
    let config = CutConfig::default();

    let reqs = (0..N_REQUIREMENTS)
        .map(|i| {
            let length = (rng.random_range(0.3..20.0f64) * 1000.0).round() / 1000.0;
            CutRequirement::new(length, rng.random_range(1..20), format!("R{i}"))
        })
        .collect::<Vec<_>>();
    let pieces = decompose_all(&reqs, &stock, &config);
    let optimizer = FFDOptimizer::new(stock, config);

    let mut group = c.benchmark_group("ffd");
    group.bench_function("decompose", |b| {
        b.iter(|| decompose_all(black_box(&reqs), &stock, &config))
    });
    group.bench_function("pack", |b| b.iter(|| optimizer.solve(black_box(&pieces))));
    group.finish();
}
