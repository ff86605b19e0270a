use criterion::{Criterion, criterion_group, criterion_main};
use identifiers::alphabet::charsets::{ID_NONSTART, ID_START};
use identifiers::id::{generate_per_char_with, generate_with};
use identifiers::{make_random_id, make_random_password};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

pub fn bench_random_id(c: &mut Criterion) {
    c.bench_function("make_random_id 10", |b| {
        b.iter(|| make_random_id(black_box(10)))
    });
}

pub fn bench_batched_vs_per_char(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("batched id 32", |b| {
        b.iter(|| generate_with(&mut rng, black_box(32), &ID_START, &ID_NONSTART))
    });

    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("per-char id 32", |b| {
        b.iter(|| generate_per_char_with(&mut rng, black_box(32), &ID_START, &ID_NONSTART))
    });
}

pub fn bench_password(c: &mut Criterion) {
    c.bench_function("make_random_password 16", |b| {
        b.iter(|| make_random_password(black_box(16)))
    });
}

criterion_group!(
    benches,
    bench_random_id,
    bench_batched_vs_per_char,
    bench_password
);
criterion_main!(benches);
