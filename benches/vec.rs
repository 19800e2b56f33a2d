//! Criterion benchmarks for [`ulib::UVec`]'s push/sort/search path,
//! grounded on `bench/src/uvec_bench.c`'s timed-block structure.
//!
//! Run with:
//!   cargo bench --bench vec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ulib::UVec;

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as u32) % bound.max(1)
    }
}

fn random_vec(size: u32, bound: u32) -> UVec<u32> {
    let mut rng = Lcg(31);
    let mut vec: UVec<u32> = UVec::new();
    for _ in 0..size {
        vec.push(rng.next(bound)).unwrap();
    }
    vec
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push");
    for &size in &[1_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| random_vec(size, size));
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_sort");
    for &size in &[1_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || random_vec(size, size),
                |mut vec| vec.sort(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_sorted_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_insert_sorted");
    for &size in &[1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = Lcg(31);
            b.iter(|| {
                let mut vec: UVec<u32> = UVec::new();
                for _ in 0..size {
                    vec.insert_sorted(rng.next(size)).unwrap();
                }
                vec
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_sort, bench_sorted_insert);
criterion_main!(benches);
