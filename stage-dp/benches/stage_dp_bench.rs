use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stage_dp::entities::{ItemType, LoadInstance};
use stage_dp::solve;
use stage_dp::util::SolverConfig;
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, solve_bench);

const CAPACITIES: [i64; 3] = [10, 100, 500];

/// Full solve (backward pass, first-stage ties and reconstruction) of the course dataset at growing capacities.
fn solve_bench(c: &mut Criterion) {
    let items = vec![
        ItemType::new(1, 2, 4.0),
        ItemType::new(2, 8, 10.0),
        ItemType::new(3, 3, 6.0),
        ItemType::new(4, 4, 8.0),
    ];

    let mut group = c.benchmark_group("solve_course");
    for capacity in CAPACITIES {
        let instance = LoadInstance::new(capacity, items.clone()).expect("valid instance");
        group.bench_function(BenchmarkId::from_parameter(capacity), |b| {
            b.iter(|| solve(black_box(&instance), SolverConfig::default()))
        });
    }
    group.finish();
}
