//! Benchmarks for look operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use look_adjust::{AdjustmentSet, ScalarKey};
use look_lut::{compile_cube_to, compile_lut, CompileOptions, Lut3D, CUBE_SIZE};
use look_ops::{Pipeline, Stage, STAGE_ORDER};

fn full_set() -> AdjustmentSet {
    AdjustmentSet::new()
        .with_scalar(ScalarKey::Exposure, 20.0)
        .with_scalar(ScalarKey::Contrast, 30.0)
        .with_scalar(ScalarKey::Brightness, -5.0)
        .with_scalar(ScalarKey::Saturation, 15.0)
        .with_scalar(ScalarKey::Temperature, 40.0)
        .with_scalar(ScalarKey::Gamma, 1.1)
        .with_scalar(ScalarKey::Highlights, -20.0)
        .with_scalar(ScalarKey::Shadows, 25.0)
        .with_scalar(ScalarKey::Vibrance, 30.0)
        .with_scalar(ScalarKey::Hue, 8.0)
}

fn sample_colors(count: usize) -> Vec<[f64; 3]> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            [t, (t * 3.7).fract(), (t * 11.3).fract()]
        })
        .collect()
}

/// Per-stage cost on a batch of samples.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage");
    let colors = sample_colors(10_000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    for stage in STAGE_ORDER {
        let magnitude = if stage == Stage::Gamma { 1.8 } else { 35.0 };
        group.bench_with_input(BenchmarkId::from_parameter(stage), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&rgb| stage.apply(black_box(rgb), magnitude))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Whole pipeline with all ten stages active.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::from_adjustments(&full_set());

    for size in [1_000, 100_000] {
        let colors = sample_colors(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("apply", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|&rgb| pipeline.apply(black_box(rgb))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// 64³ grid evaluation and serialization.
fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    group.sample_size(20);
    group.throughput(Throughput::Elements((CUBE_SIZE * CUBE_SIZE * CUBE_SIZE) as u64));

    let set = full_set();
    group.bench_function("grid_parallel", |b| {
        b.iter(|| compile_lut(black_box(&set), &CompileOptions::default()))
    });
    group.bench_function("grid_sequential", |b| {
        let opts = CompileOptions::default().with_parallel(false);
        b.iter(|| compile_lut(black_box(&set), &opts))
    });
    group.bench_function("cube_text", |b| {
        let opts = CompileOptions::default();
        let mut buf = Vec::with_capacity(8 << 20);
        b.iter(|| {
            buf.clear();
            compile_cube_to(&mut buf, black_box(&set), &opts)
        })
    });

    group.finish();
}

/// Trilinear lookup in a compiled LUT.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut3d");
    let lut = compile_lut(&full_set(), &CompileOptions::default()).unwrap_or_else(|_| Lut3D::identity(CUBE_SIZE));
    let colors = sample_colors(10_000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("trilinear", |b| {
        b.iter(|| colors.iter().map(|&rgb| lut.apply(black_box(rgb))).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_pipeline, bench_compile, bench_lookup);
criterion_main!(benches);
