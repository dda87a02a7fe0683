use criterion::{criterion_group, criterion_main, Criterion};

use emath::callbacks::EstimateHistory;
use emath::integrators::{binary_integrate, def_integrate};

fn integrand(x: f64) -> f64 {
    (-x * x).exp()
}

fn benchmark_binary() {
    let _ = binary_integrate(0.0, 4.0, &integrand, 16, None);
}

fn benchmark_binary_observed() {
    let mut history = EstimateHistory::<f64>::new();
    let _ = binary_integrate(0.0, 4.0, &integrand, 16, Some(&mut history));
}

/// Recomputing every level from scratch, what the binary integrator avoids.
fn benchmark_fixed_step_levels() {
    for level in 0..=16 {
        let _ = def_integrate(0.0, 4.0, &integrand, 4.0 / f64::from(1 << level));
    }
}

fn criterion_binary_benchmark(c: &mut Criterion) {
    c.bench_function("binary depth 16", |b| b.iter(benchmark_binary));
    c.bench_function("binary depth 16 observed", |b| {
        b.iter(benchmark_binary_observed)
    });
    c.bench_function("fixed step levels 0..=16", |b| {
        b.iter(benchmark_fixed_step_levels)
    });
}

criterion_group!(benches, criterion_binary_benchmark);
criterion_main!(benches);
