// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use std::hint::black_box;
use toasty::toast::{layout, HeuristicMeasurer, SurfaceMetrics, ToastContentConfig, ToastUIConfig};

fn bench_layout(c: &mut Criterion) {
    let ui = ToastUIConfig::default();
    let surface = SurfaceMetrics::new(Size::new(1280.0, 800.0), 0.0);
    let short = ToastContentConfig::new("Saved");
    let long = ToastContentConfig::new("lorem ipsum ".repeat(40)).with_title("Alert");

    let mut group = c.benchmark_group("toast_layout");
    group.bench_function("short_body", |b| {
        b.iter(|| layout(black_box(&ui), black_box(&short), &surface, &HeuristicMeasurer));
    });
    group.bench_function("long_body_widened", |b| {
        b.iter(|| layout(black_box(&ui), black_box(&long), &surface, &HeuristicMeasurer));
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
