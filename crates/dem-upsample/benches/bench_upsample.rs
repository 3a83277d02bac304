use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dem_grid::{Grid, GridSize};
use dem_upsample::{parallel::ExecutionStrategy, upsample_with};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(size: GridSize) -> Grid {
    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..size.num_samples())
        .map(|_| rng.random_range(0..4000))
        .collect();
    Grid::new(size, data).unwrap()
}

fn bench_upsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("Upsample");
    group.sample_size(10);

    // SRTM3 and SRTM1 tile sides
    for side in [1201usize, 3601].iter() {
        let src = random_grid([*side, *side].into());

        for rate in [2usize, 3].iter() {
            let parameter_string = format!("{side}x{side}_x{rate}");

            group.bench_with_input(
                BenchmarkId::new("serial", &parameter_string),
                &(&src, rate),
                |b, i| {
                    let (src, rate) = (i.0, *i.1);
                    b.iter(|| {
                        black_box(upsample_with(src, rate, ExecutionStrategy::Serial).unwrap())
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("parallel_rows", &parameter_string),
                &(&src, rate),
                |b, i| {
                    let (src, rate) = (i.0, *i.1);
                    b.iter(|| {
                        black_box(
                            upsample_with(src, rate, ExecutionStrategy::ParallelRows).unwrap(),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_upsample);
criterion_main!(benches);
