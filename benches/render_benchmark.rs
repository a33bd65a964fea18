//! Render benchmark: Measure a full screen composition pass.
//!
//! Target: < 1ms for a 200×50 screen

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis::widget::{Menu, StackPanel, StatusBar};
use trellis::{AppContext, BufferSurface, ScreenComposer, StackConfig};

fn build_screen(width: u16, height: u16) -> ScreenComposer {
    let mut screen = ScreenComposer::new("Benchmark", AppContext::new().shared());
    screen.menu_bar_mut().add_menu(Menu::new("File").item("Quit", "app.quit"));
    screen.menu_bar_mut().add_menu(Menu::new("View").item("Timeline", "view.timeline"));
    screen.header_mut().set_breadcrumb(["Home", "Today"]);
    screen.footer_mut().push_hint("F10", "Menu");
    screen.status_bar_mut().set_all("12 tasks", "tracking", "01:24:09");

    let mut tasks = StackPanel::new(StackConfig::vertical().with_spacing(1));
    for row in 0..10u16 {
        let mut line = StatusBar::new();
        line.set_all(format!("task {row}"), "in progress", "00:15");
        tasks.push(Box::new(line));
    }
    screen.add_content_widget(Box::new(tasks));

    screen.resize(width, height).expect("standard regions are defined");
    screen
}

fn render_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_screen");

    for (width, height) in [(80u16, 24u16), (200, 50)] {
        let screen = build_screen(width, height);
        let mut surface = BufferSurface::new(width, height);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &screen,
            |b, screen| {
                b.iter(|| screen.render(black_box(&mut surface)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, render_screen);
criterion_main!(benches);
