//! Gradient benchmark: Measure theme resolution with and without the cache.
//!
//! Target: cached lookups well under 1µs regardless of width

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis::theme::props;
use trellis::{Gradient, GradientDirection, GradientStop, Rgb, ThemeResolver};

fn rainbow() -> Gradient {
    Gradient::new(
        GradientDirection::Horizontal,
        [
            GradientStop::new(0.0, Rgb::new(255, 0, 0)),
            GradientStop::new(0.25, Rgb::new(255, 255, 0)),
            GradientStop::new(0.5, Rgb::new(0, 255, 0)),
            GradientStop::new(0.75, Rgb::new(0, 0, 255)),
            GradientStop::new(1.0, Rgb::new(255, 0, 255)),
        ],
    )
}

fn gradient_sample(c: &mut Criterion) {
    let gradient = rainbow();
    let mut group = c.benchmark_group("gradient_sample");

    for width in [80usize, 200, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| gradient.sample(black_box(width)));
        });
    }

    group.finish();
}

fn gradient_resolve_cached(c: &mut Criterion) {
    let mut theme = ThemeResolver::new();
    theme.set_property("Rainbow", rainbow());
    let _ = theme.resolve_gradient("Rainbow", 200);

    c.bench_function("resolve_gradient_cached_200", |b| {
        b.iter(|| theme.resolve_gradient(black_box("Rainbow"), black_box(200)));
    });

    c.bench_function("resolve_background_cached_200", |b| {
        b.iter(|| theme.resolve_background(black_box("Rainbow"), 200, black_box(137)));
    });
}

fn gradient_resolve_after_invalidate(c: &mut Criterion) {
    let mut theme = ThemeResolver::new();
    theme.set_property("Rainbow", rainbow());

    c.bench_function("resolve_gradient_cold_200", |b| {
        b.iter(|| {
            theme.invalidate_cache();
            theme.resolve_gradient(black_box("Rainbow"), black_box(200))
        });
    });
}

fn solid_resolve(c: &mut Criterion) {
    let theme = ThemeResolver::with_defaults();
    let _ = theme.resolve_foreground(props::CONTENT_FG);

    c.bench_function("resolve_foreground_solid", |b| {
        b.iter(|| theme.resolve_foreground(black_box(props::CONTENT_FG)));
    });
}

criterion_group!(
    benches,
    gradient_sample,
    gradient_resolve_cached,
    gradient_resolve_after_invalidate,
    solid_resolve,
);
criterion_main!(benches);
