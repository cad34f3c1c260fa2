//! Criterion benchmarks for layout composition.
//!
//! Run with:
//!   cargo bench -p vidlay

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vidlay::prelude::*;
use vidlay::switcher::render_screen;

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let cfg = LayoutConfig::default();
    let dims = ViewportDimensions::new(1440.0, 900.0);

    for preset in PresetId::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(preset.route_name()),
            preset,
            |b, &preset| {
                b.iter(|| compose(black_box(preset), black_box(dims), HostPlatform::Web, &cfg));
            },
        );
    }
    group.finish();
}

fn bench_render_screen(c: &mut Criterion) {
    let cfg = LayoutConfig::default();
    let backend = select_backend(HostPlatform::Native, PlaybackPreference::Auto);
    let def = ScreenDef::from_preset(PresetId::TwoVideosWithDesc);

    c.bench_function("render_screen/two_videos_with_desc", |b| {
        let mut w = 320.0f32;
        b.iter(|| {
            w = if w > 2000.0 { 320.0 } else { w + 7.0 };
            render_screen(
                black_box(&def),
                ViewportDimensions::new(w, 900.0),
                HostPlatform::Native,
                &cfg,
                backend.as_ref(),
            )
        });
    });
}

criterion_group!(benches, bench_compose, bench_render_screen);
criterion_main!(benches);
