use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ravel_testing::FakeMeasurable;
use ravel_ui_layout::{staggered_grid, Constraints};

fn children(count: i32) -> Vec<FakeMeasurable> {
    (0..count)
        .map(|i| FakeMeasurable::new(40 + (i * 7) % 60, 24 + (i * 3) % 16))
        .collect()
}

fn bench_staggered_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_grid");
    for count in [12, 120, 1200] {
        let items = children(count);
        for rows in [3usize, 16] {
            group.bench_with_input(
                BenchmarkId::new(format!("rows_{rows}"), count),
                &items,
                |b, items| {
                    b.iter(|| {
                        staggered_grid(black_box(items), Constraints::unbounded(), rows)
                            .expect("valid layout")
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_staggered_grid);
criterion_main!(benches);
