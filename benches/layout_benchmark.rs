//! Layout benchmark: Measure region resolution and stack solving.
//!
//! Target: < 1µs to resolve the standard region set

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis::layout::{regions, MainAxisAlignment};
use trellis::{solve_stack, Rect, RegionLayout, StackConfig, StackItem};

fn region_single(c: &mut Criterion) {
    let layout = RegionLayout::new();

    c.bench_function("region_content_200x50", |b| {
        b.iter(|| layout.region(black_box(regions::CONTENT), black_box(200), black_box(50)));
    });
}

fn region_resolve_all(c: &mut Criterion) {
    let layout = RegionLayout::new();

    c.bench_function("region_resolve_all_200x50", |b| {
        b.iter(|| layout.resolve_all(black_box(200), black_box(50)));
    });
}

fn stack_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_stack");
    let config = StackConfig::horizontal()
        .with_spacing(1)
        .with_main_align(MainAxisAlignment::Center);
    let area = Rect::new(0, 0, 1000, 50);

    for count in [3usize, 30, 300] {
        let items: Vec<StackItem> = (0..count)
            .map(|i| if i % 3 == 0 { StackItem::stretch() } else { StackItem::fixed(2, 0) })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| solve_stack(black_box(items), area, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, region_single, region_resolve_all, stack_solve);
criterion_main!(benches);
