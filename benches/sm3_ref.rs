use criterion::{Criterion, criterion_group, criterion_main};
use sm3::{Digest, Sm3};
use std::hint::black_box;

// Reference numbers from the RustCrypto implementation, for comparison
// against the sibling `sm3` bench.
pub fn bench_sm3_ref(c: &mut Criterion) {
    c.bench_function("sm3 64 bytes (rustcrypto)", |b| {
        b.iter(|| Sm3::digest(black_box(&[0u8; 64])))
    });

    c.bench_function("sm3 4096 bytes (rustcrypto)", |b| {
        b.iter(|| Sm3::digest(black_box(&[0u8; 4096])))
    });
}

criterion_group!(benches, bench_sm3_ref);
criterion_main!(benches);
