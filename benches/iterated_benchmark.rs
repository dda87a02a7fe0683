use criterion::{criterion_group, criterion_main, Criterion};

use emath::core::*;
use emath::integrators::iterated_integral;

fn benchmark_iterated() {
    let field = FnField::new(|x: &[f64]| vec![x[0] * x[1] * x[2]], 3, 1);
    let limits = [Interval::new(0.0, 1.0); 3];

    let _ = iterated_integral(&limits, &field, &[0.02; 3]);
}

fn criterion_iterated_benchmark(c: &mut Criterion) {
    c.bench_function("iterated 3d", |b| b.iter(benchmark_iterated));
}

criterion_group!(benches, criterion_iterated_benchmark);
criterion_main!(benches);
