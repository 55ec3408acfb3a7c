//! Benchmarks for polynomial arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use monic_poly::Polynomial;
use monic_rings::Domain;

/// Generates a dense polynomial over Q.
fn poly_q(degree: usize) -> Polynomial {
    let coeffs: Vec<i64> = (0..=degree).map(|i| (i as i64 % 100) - 50).collect();
    Polynomial::from_ints(&coeffs, Domain::Rational)
}

/// Generates a dense polynomial over GF(998244353).
fn poly_gf(degree: usize) -> Polynomial {
    let coeffs: Vec<i64> = (0..=degree).map(|i| (i as i64 % 1000) + 1).collect();
    Polynomial::from_ints(&coeffs, Domain::Residue(998_244_353))
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = poly_q(size);
        let q = poly_q(size);
        group.bench_with_input(BenchmarkId::new("Q", size), &size, |b, _| {
            b.iter(|| black_box(p.mul(&q).unwrap()));
        });

        let p = poly_gf(size);
        let q = poly_gf(size);
        group.bench_with_input(BenchmarkId::new("GF(p)", size), &size, |b, _| {
            b.iter(|| black_box(p.mul(&q).unwrap()));
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div_rem");

    for size in [16, 64, 256] {
        let num = poly_q(2 * size);
        let den = poly_q(size);
        group.bench_with_input(BenchmarkId::new("Q", size), &size, |b, _| {
            b.iter(|| black_box(num.div_rem(&den).unwrap()));
        });

        let num = poly_gf(2 * size);
        let den = poly_gf(size);
        group.bench_with_input(BenchmarkId::new("GF(p)", size), &size, |b, _| {
            b.iter(|| black_box(num.div_rem(&den).unwrap()));
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_eval");

    for size in [16, 64, 256] {
        let p = poly_q(size);
        group.bench_with_input(BenchmarkId::new("Q", size), &size, |b, _| {
            b.iter(|| black_box(p.eval(3).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_division, bench_evaluation);
criterion_main!(benches);
