use criterion::{criterion_group, criterion_main, Criterion};
use image::Rgba;

use storeshots::canvas::{Canvas, Gradient};
use storeshots::screens::{all_screens, Screen};
use storeshots::theme;
use storeshots::typeface::{wrap, FontSet, Typeface};

// Consolidated benchmark suite for storeshots. Run with:
//    cargo bench

/// Bench: full-width vertical gradient fill
fn bench_gradient_fill(c: &mut Criterion) {
    let mut canvas = Canvas::new(2048, 512, theme::BG);
    c.bench_function("gradient_fill_2048x512", |b| {
        b.iter(|| {
            canvas.gradient_rect(
                0,
                0,
                2047,
                512,
                Rgba([40, 30, 80, 255]),
                Rgba([20, 15, 45, 255]),
                Gradient::Vertical,
            );
        })
    });
}

/// Bench: greedy word-wrap of a long chat message
fn bench_text_wrap(c: &mut Criterion) {
    let face = Typeface::builtin();
    let text = "Here are 3 ad copy variations engineered for peak performance with \
                lightweight design responsive cushioning and breathable mesh keeping \
                you cool mile after mile on every single training run"
        .repeat(4);
    c.bench_function("wrap_long_message", |b| {
        b.iter(|| {
            let lines = wrap(&face, 26.0, &text, 1500.0);
            assert!(!lines.is_empty());
        })
    });
}

/// Bench: compose one full screen at a reduced canvas size
fn bench_compose_dashboard(c: &mut Criterion) {
    let screens = all_screens();
    let dashboard = &screens[0];
    let fonts = FontSet::builtin();
    c.bench_function("compose_dashboard_512", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(512, 683, theme::BG);
            dashboard.compose(&mut canvas, &fonts);
        })
    });
}

criterion_group!(
    benches,
    bench_gradient_fill,
    bench_text_wrap,
    bench_compose_dashboard
);
criterion_main!(benches);
