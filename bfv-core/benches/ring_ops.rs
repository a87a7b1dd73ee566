//! Benchmarks for the ring arithmetic hot path: convolution and negacyclic reduction.
//!
//! Run with `cargo bench -p bfv-core --features benchmark`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bfv_core::primitives::poly::Poly;
use bfv_core::primitives::ring::ring_mul_mod;
use bfv_core::primitives::sample::{uniform, Entropy};

fn ring_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_mul_mod");
    let q = 1i64 << 28;

    for &n in &[16usize, 64, 256, 1024] {
        let mut rng = Entropy::from_seed(0);
        let a = uniform(n, q, &mut rng);
        let b = uniform(n, q, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| ring_mul_mod(&a, &b, q, n).unwrap());
        });
    }

    group.finish();
}

fn dense_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul_dense");

    for &n in &[64usize, 256, 1024] {
        let a = Poly::from_coeffs((0..n).map(|i| i as i128 + 1).collect());
        let b = Poly::from_coeffs((0..n).map(|i| (n - i) as i128).collect());

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| a.mul(&b).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, ring_multiplication, dense_convolution);
criterion_main!(benches);
