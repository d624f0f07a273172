use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schwarzschild::{Cartesian, Schwarzschild, Vec4};

/// Fixed grid of Schwarzschild points: radius, azimuth and polar angle sweeps.
fn schwarzschild_grid(n: usize) -> Vec<Vec4<f64>> {
    (0..n)
        .map(|i| {
            let f = i as f64 / n as f64;
            Vec4::new(1.0 + 20.0 * f, core::f64::consts::TAU * f, core::f64::consts::PI * f, f)
        })
        .collect()
}

fn by_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("schwarzschild_to_rect");
    let points = schwarzschild_grid(1024);

    group.bench_function("by_value", |b| {
        b.iter(|| {
            let mut sum = Vec4::zero();
            for p in &points {
                sum += black_box(*p).schwarzschild_to_rect();
            }
            black_box(sum)
        })
    });

    group.bench_function("in_place", |b| {
        b.iter(|| {
            let mut sum = Vec4::zero();
            for p in &points {
                let mut v = black_box(*p);
                v.convert_schwarzschild_to_rect();
                sum += v;
            }
            black_box(sum)
        })
    });

    group.bench_function("tagged", |b| {
        b.iter(|| {
            let mut sum = Vec4::zero();
            for p in &points {
                let c: Cartesian<f64> = Schwarzschild::from_vec4(black_box(*p)).into();
                sum += c.to_vec4();
            }
            black_box(sum)
        })
    });

    group.finish();
}

fn inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_to_schwarzschild");
    let points: Vec<_> = schwarzschild_grid(1024)
        .into_iter()
        .map(Vec4::schwarzschild_to_rect)
        .collect();

    group.bench_function("f64", |b| {
        b.iter(|| {
            let mut sum = Vec4::zero();
            for p in &points {
                sum += black_box(*p).rect_to_schwarzschild();
            }
            black_box(sum)
        })
    });

    group.finish();
}

criterion_group!(benches, by_value, inverse);
criterion_main!(benches);
