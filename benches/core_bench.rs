use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primewitness::factorize::factorize;
use primewitness::modpow::power;
use primewitness::{evaluate, evaluate_parallel, Witnesses};
use rug::Integer;

fn m127() -> Integer {
    (Integer::from(1u32) << 127u32) - 1u32
}

/// 2^1279 - 1, the smallest Mersenne prime above a thousand bits.
fn m1279() -> Integer {
    (Integer::from(1u32) << 1279u32) - 1u32
}

fn bench_power_m127(c: &mut Criterion) {
    let n = m127();
    let exp = Integer::from(&n - 1u32);
    let base = Integer::from(3u32);
    c.bench_function("power(3, M127-1, M127)", |b| {
        b.iter(|| power(black_box(&base), black_box(&exp), black_box(&n)));
    });
}

fn bench_factorize(c: &mut Criterion) {
    let value = Integer::from(12345u32) << 4000u32;
    c.bench_function("factorize(12345 * 2^4000)", |b| {
        b.iter(|| factorize(black_box(&value)));
    });
}

fn bench_evaluate_prime(c: &mut Criterion) {
    let n = m127();
    let witnesses = Witnesses::default();
    c.bench_function("evaluate(M127)", |b| {
        b.iter(|| evaluate(black_box(&n), black_box(&witnesses)));
    });
}

fn bench_evaluate_composite(c: &mut Criterion) {
    // Carmichael number 561 = 3 * 11 * 17, rejected by the first witness
    let n = Integer::from(561);
    let witnesses = Witnesses::default();
    c.bench_function("evaluate(561)", |b| {
        b.iter(|| evaluate(black_box(&n), black_box(&witnesses)));
    });
}

fn bench_evaluate_m1279(c: &mut Criterion) {
    let n = m1279();
    let witnesses = Witnesses::default();
    let mut group = c.benchmark_group("evaluate(M1279)");
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.iter(|| evaluate(black_box(&n), black_box(&witnesses)));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| evaluate_parallel(black_box(&n), black_box(&witnesses)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_power_m127,
    bench_factorize,
    bench_evaluate_prime,
    bench_evaluate_composite,
    bench_evaluate_m1279,
);
criterion_main!(benches);
