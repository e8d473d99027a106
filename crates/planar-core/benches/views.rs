//! Micro-benchmarks for bounds iteration and view operations.
//!
//! Dynamic and fully fixed bounds are measured side by side, so the cost of
//! runtime shape information shows up directly in the results.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench views
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use planar_core::{
    Bounds, BoundsLike, Extents, FixedGrid, FixedOriginExtentsBounds, Grid, GridRead, GridWrite,
    Indices,
};

fn bench_bounds_iteration(c: &mut Criterion) {
    let dynamic = Bounds::new(Indices::new(4, 4), Extents::new(32, 32));
    let fixed = FixedOriginExtentsBounds::<4, 4, 32, 32>::new();

    c.bench_function("row_major/dynamic", |b| {
        b.iter(|| hint::black_box(&dynamic).row_major().fold(0, |acc, pt| acc + pt.col));
    });
    c.bench_function("row_major/fixed", |b| {
        b.iter(|| hint::black_box(&fixed).row_major().fold(0, |acc, pt| acc + pt.col));
    });
    c.bench_function("col_major/dynamic", |b| {
        b.iter(|| hint::black_box(&dynamic).col_major().fold(0, |acc, pt| acc + pt.row));
    });
}

fn bench_view_fill(c: &mut Criterion) {
    let grid = Grid::<u32>::new(Extents::new(256, 256));

    for size in [8usize, 64, 200] {
        let region = Bounds::new(Indices::new(16, 16), Extents::new(size, size));
        c.bench_with_input(BenchmarkId::new("view_fill", size), &region, |b, region| {
            b.iter_batched_ref(
                || grid.clone(),
                |grid| grid.view_mut(*region).fill(hint::black_box(7)),
                BatchSize::LargeInput,
            );
        });
        c.bench_with_input(BenchmarkId::new("view_iter_mut", size), &region, |b, region| {
            b.iter_batched_ref(
                || grid.clone(),
                |grid| {
                    for cell in &mut grid.view_mut(*region) {
                        *cell = hint::black_box(7);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
}

fn bench_view_assign(c: &mut Criterion) {
    let grid = Grid::<u32>::new(Extents::new(256, 256));
    let patch = FixedGrid::<u32, 16, 16>::new(3);

    c.bench_function("assign/fixed_into_fixed_view", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |grid| {
                grid.view_mut(FixedOriginExtentsBounds::<100, 100, 16, 16>::new())
                    .assign(hint::black_box(&patch));
            },
            BatchSize::LargeInput,
        );
    });
    c.bench_function("assign/view_into_view", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |grid| {
                let src = Grid::filled(Extents::new(64, 64), 1u32);
                let src_view = src.view(Bounds::new(Indices::ZERO, Extents::new(64, 64)));
                grid.view_mut(Bounds::new(Indices::new(8, 8), Extents::new(64, 64)))
                    .assign(hint::black_box(&src_view));
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_bounds_iteration,
    bench_view_fill,
    bench_view_assign,
);
criterion_main!(benches);
