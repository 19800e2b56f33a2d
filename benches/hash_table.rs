//! Criterion benchmarks for [`ulib::UHashSet`]'s insert/contains/remove
//! path, grounded on `bench/src/uhash_bench.c`'s timed-block structure.
//!
//! Run with:
//!   cargo bench --bench hash_table

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ulib::UHashSet;

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as u32) % bound.max(1)
    }
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_set_insert");
    for &size in &[1_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut set: UHashSet<u32> = UHashSet::new();
                let mut rng = Lcg(31);
                for _ in 0..size {
                    let _ = set.insert(rng.next(size / 2));
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_set_contains");
    for &size in &[1_000u32, 100_000] {
        let mut set: UHashSet<u32> = UHashSet::new();
        let mut rng = Lcg(31);
        for _ in 0..size {
            let _ = set.insert(rng.next(size / 2));
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = Lcg(31);
            b.iter(|| {
                let mut found = 0u32;
                for _ in 0..size {
                    if set.contains(&rng.next(size / 2)) {
                        found += 1;
                    }
                }
                found
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
