//! Benchmark binary, grounded on `bench/src/ubench.c`'s timed-block
//! reporting idiom. Reads no arguments and always exits 0.

use ulib::time::{interval_unit_auto, monotonic_ns};
use ulib::{UHashSet, UVec};

const SEED: u64 = 31;
const COUNT: u32 = 1000;

struct Rng(u64);

impl Rng {
    fn range(&mut self, bound: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as u32) % bound.max(1)
    }
}

fn report(name: &str, f: impl FnOnce()) {
    let start = monotonic_ns();
    f();
    let elapsed = monotonic_ns() - start;
    let unit = interval_unit_auto(elapsed);
    println!("{name}: {}", ulib::time::interval_to_ustring(elapsed, unit).unwrap());
}

fn bench_hash_set() {
    let mut set: UHashSet<u32> = UHashSet::new();
    let mut rng = Rng(SEED);

    report("hash set insert", || {
        for _ in 0..COUNT {
            let key = rng.range(COUNT / 2);
            let _ = set.insert(key);
        }
    });

    report("hash set contains", || {
        for _ in 0..COUNT {
            let key = rng.range(COUNT / 2);
            let _ = set.contains(&key);
        }
    });

    report("hash set remove", || {
        for _ in 0..COUNT {
            let key = rng.range(COUNT / 2);
            let _ = set.remove(&key);
        }
    });
}

fn bench_vec_sort() {
    let mut rng = Rng(SEED);
    let mut vec: UVec<u32> = UVec::new();

    report("vec push", || {
        for _ in 0..COUNT {
            let _ = vec.push(rng.range(COUNT));
        }
    });

    report("vec sort", || {
        vec.sort();
    });
}

fn main() {
    bench_hash_set();
    bench_vec_sort();
}
