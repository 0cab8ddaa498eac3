use smcrypto::hash::sm3;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sm3(c: &mut Criterion) {
    c.bench_function("sm3 64 bytes", |b| b.iter(|| sm3(black_box(&[0u8; 64]))));

    c.bench_function("sm3 4096 bytes", |b| {
        b.iter(|| sm3(black_box(&[0u8; 4096])))
    });
}

criterion_group!(benches, bench_sm3);
criterion_main!(benches);
