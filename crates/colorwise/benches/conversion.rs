use std::hint::black_box;

use colorwise::difference::{delta_e, Cie94Params, DeltaEMethod, DeltaEOptions};
use colorwise::{parse_css, Color, ColorSpace};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let teal = Color::from_24bit(0, 128, 128);
    let tomato = Color::from_24bit(255, 99, 71);

    // Conversions to the models that go through XYZ or LMS.
    let mut group = c.benchmark_group("conversion");
    group.bench_function("to-hsl", |b| b.iter(|| black_box(&teal).to_hsl()));
    group.bench_function("to-lab", |b| b.iter(|| black_box(&teal).to_lab()));
    group.bench_function("to-oklch", |b| b.iter(|| black_box(&teal).to_oklch()));
    group.bench_function("from-p3", |b| {
        b.iter(|| Color::from_space(ColorSpace::DisplayP3, black_box([0.9, 0.2, 0.1]), 1.0))
    });
    group.finish();

    let mut group = c.benchmark_group("parsing");
    for text in ["#ff6347", "rebeccapurple", "hsl(9deg 100% 64%)", "oklch(0.7 0.15 30 / 50%)"] {
        group.bench_function(text, |b| b.iter(|| parse_css(black_box(text))));
    }
    group.finish();

    let mut group = c.benchmark_group("delta-e");
    for method in [
        DeltaEMethod::Cie76,
        DeltaEMethod::Cie94(Cie94Params::default()),
        DeltaEMethod::Ciede2000,
    ] {
        let options = DeltaEOptions { method };
        group.bench_function(method.name(), |b| {
            b.iter(|| delta_e(black_box(&teal), black_box(&tomato), &options))
        });
    }
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
