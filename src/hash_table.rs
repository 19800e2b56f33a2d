//! Open-addressing hash table, grounded on `uhash.h`'s khashl-derived
//! core (`uhash_get`/`uhash_put`/`uhash_delete`/`uhash_resize`).
//!
//! Buckets live in a flat `Vec` alongside a used/empty bitset (one bit per
//! bucket, packed into `u32` words exactly as `p_uhf_is_used` does).
//! Probing is linear over Fibonacci-hashed starting positions; deletion
//! back-shifts displaced keys into the gap instead of leaving tombstones,
//! so `get` never has to skip over dead slots.
//!
//! [`UHashMap`] and [`UHashSet`] are both thin wrappers over the same
//! generic table, with the set using `()` as its value type so the value
//! buffer costs nothing.

use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;

use crate::error::{UError, UResult};
use crate::hash_func;
use crate::numeric::UInt;

/// Sentinel returned in place of an index when a key is not present.
pub const INDEX_MISSING: UInt = UInt::MAX;

/// Outcome of an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutResult {
    /// The key was already present; no new slot was created.
    Present,
    /// The key was absent and has been inserted into a new slot.
    Inserted,
}

struct UHasher {
    state: UInt,
}

impl UHasher {
    #[inline]
    fn mix(&mut self, h: UInt) {
        self.state = hash_func::hash_combine(self.state, h);
    }
}

impl Hasher for UHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.mix(hash_func::hash_mem_kr2(0, bytes));
    }
    fn write_u8(&mut self, i: u8) {
        self.mix(hash_func::hash_int8(i));
    }
    fn write_u16(&mut self, i: u16) {
        self.mix(hash_func::hash_int16(i));
    }
    fn write_u32(&mut self, i: u32) {
        self.mix(hash_func::hash_int32(i));
    }
    fn write_u64(&mut self, i: u64) {
        self.mix(hash_func::hash_int64(i));
    }
    fn write_usize(&mut self, i: usize) {
        self.mix(hash_func::hash_int64(i as u64));
    }
    fn finish(&self) -> u64 {
        self.state as u64
    }
}

fn hash_key<K: Hash>(key: &K) -> UInt {
    let mut hasher = UHasher { state: 0 };
    key.hash(&mut hasher);
    hasher.state
}

/// Fibonacci-hashes `hash` down to `bits` bits, matching `p_uhash_fib`.
/// The golden-ratio multiplier is specific to [`UInt`]'s configured width.
#[inline]
fn fib(hash: UInt, bits: u8) -> usize {
    debug_assert!(bits > 0);
    #[cfg(all(feature = "tiny", not(feature = "huge")))]
    let out = (hash as u16).wrapping_mul(40503u16) >> (16 - bits);
    #[cfg(feature = "huge")]
    let out = hash.wrapping_mul(11400714819323198485u64) >> (64 - bits);
    #[cfg(not(any(feature = "tiny", feature = "huge")))]
    let out = hash.wrapping_mul(2654435769u32) >> (32 - bits);
    out as usize
}

#[inline]
fn size_from_exp(exp: u8) -> usize {
    if exp == 0 { 0 } else { 1usize << exp }
}

#[inline]
fn exp_from_size(size: usize) -> u8 {
    crate::numeric::ceil_log2(size as UInt) as u8
}

#[inline]
fn upper_bound(buckets: usize) -> usize {
    (buckets >> 1) + (buckets >> 2)
}

#[inline]
fn words_for(buckets: usize) -> usize {
    buckets.div_ceil(32).max(if buckets > 0 { 1 } else { 0 })
}

struct Flags {
    words: Vec<u32>,
}

impl Flags {
    fn new(buckets: usize) -> Flags {
        Flags { words: vec![0u32; words_for(buckets)] }
    }

    #[inline]
    fn is_used(&self, i: usize) -> bool {
        (self.words[i >> 5] >> (i & 31)) & 1 != 0
    }

    #[inline]
    fn set_used(&mut self, i: usize) {
        self.words[i >> 5] |= 1 << (i & 31);
    }

    #[inline]
    fn set_empty(&mut self, i: usize) {
        self.words[i >> 5] &= !(1 << (i & 31));
    }

    fn clear(&mut self) {
        for w in &mut self.words {
            *w = 0;
        }
    }
}

/// Shared implementation backing both [`UHashMap`] and [`UHashSet`].
/// `V = ()` for a set, so the value buffer is zero-sized.
struct UHashTable<K, V> {
    exp: u8,
    count: usize,
    flags: Flags,
    keys: Vec<MaybeUninit<K>>,
    vals: Vec<MaybeUninit<V>>,
}

impl<K, V> UHashTable<K, V> {
    fn new() -> Self {
        UHashTable { exp: 0, count: 0, flags: Flags::new(0), keys: Vec::new(), vals: Vec::new() }
    }

    #[inline]
    fn buckets(&self) -> usize {
        size_from_exp(self.exp)
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        if self.count == 0 {
            return;
        }
        for i in 0..self.buckets() {
            if self.flags.is_used(i) {
                unsafe {
                    self.keys[i].assume_init_drop();
                    self.vals[i].assume_init_drop();
                }
            }
        }
        self.flags.clear();
        self.count = 0;
    }
}

impl<K, V> Drop for UHashTable<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Eq + Hash, V> UHashTable<K, V> {
    fn get_index(&self, key: &K) -> Option<usize> {
        if self.exp == 0 {
            return None;
        }
        let mask = self.buckets() - 1;
        let mut i = fib(hash_key(key), self.exp);
        while self.flags.is_used(i) {
            if unsafe { self.keys[i].assume_init_ref() } == key {
                return Some(i);
            }
            i = (i + 1) & mask;
        }
        None
    }

    /// Ensures the table can hold at least `new_size` buckets without
    /// exceeding the load factor, rehashing in place. Matches
    /// `uhash_resize`.
    fn resize(&mut self, mut new_size: usize) -> UResult<()> {
        if new_size < 4 {
            new_size = 4;
        }
        let new_exp = exp_from_size(new_size);
        new_size = size_from_exp(new_exp);
        if self.exp == new_exp || self.count >= upper_bound(new_size) {
            return Ok(());
        }

        let expand = new_exp > self.exp;
        if expand {
            self.keys.resize_with(new_size, MaybeUninit::uninit);
            self.vals.resize_with(new_size, MaybeUninit::uninit);
        }

        self.rehash(new_exp)?;

        if !expand {
            self.keys.truncate(new_size);
            self.keys.shrink_to_fit();
            self.vals.truncate(new_size);
            self.vals.shrink_to_fit();
        }

        self.exp = new_exp;
        Ok(())
    }

    /// Rebuilds the flag bitset (and, transitively, slot occupancy) for a
    /// new bucket count, kicking out and reinserting any key that no
    /// longer lands on an empty or self slot. Matches
    /// `p_uhash_rehash_##T`.
    fn rehash(&mut self, new_exp: u8) -> UResult<()> {
        let new_size = size_from_exp(new_exp);
        let mut new_flags = Flags::new(new_size);
        let mask = new_size - 1;
        let cur_size = self.buckets();

        for j in 0..cur_size {
            if self.flags.is_empty(j) {
                continue;
            }

            let mut key = unsafe { std::ptr::read(self.keys[j].as_ptr()) };
            let mut val = unsafe { std::ptr::read(self.vals[j].as_ptr()) };
            self.flags.set_empty(j);

            loop {
                let mut i = fib(hash_key(&key), new_exp);
                while new_flags.is_used(i) {
                    i = (i + 1) & mask;
                }
                new_flags.set_used(i);

                if i < cur_size && self.flags.is_used(i) {
                    std::mem::swap(&mut key, unsafe { &mut *(self.keys[i].as_mut_ptr()) });
                    std::mem::swap(&mut val, unsafe { &mut *(self.vals[i].as_mut_ptr()) });
                    self.flags.set_empty(i);
                } else {
                    self.keys[i] = MaybeUninit::new(key);
                    self.vals[i] = MaybeUninit::new(val);
                    break;
                }
            }
        }

        self.flags = new_flags;
        Ok(())
    }

    /// Inserts `key` if absent, returning the slot index and whether it
    /// was newly inserted. The caller is responsible for writing the
    /// value for a freshly inserted slot. Matches `uhash_put`.
    fn put(&mut self, key: K) -> UResult<(usize, PutResult)> {
        let size = self.buckets();
        if self.count >= upper_bound(size) {
            self.resize(size + 1)?;
        }
        let mask = self.buckets() - 1;
        let mut i = fib(hash_key(&key), self.exp);

        while self.flags.is_used(i) {
            if unsafe { self.keys[i].assume_init_ref() } == &key {
                return Ok((i, PutResult::Present));
            }
            i = (i + 1) & mask;
        }

        self.keys[i] = MaybeUninit::new(key);
        self.flags.set_used(i);
        self.count += 1;
        Ok((i, PutResult::Inserted))
    }

    /// Shrinks bucket storage down to the smallest size that still fits
    /// the current entries without exceeding the load factor. Matches
    /// `uhash_shrink`, which just calls `uhash_resize(h, h->_count)`.
    fn shrink(&mut self) -> UResult<()> {
        self.resize(self.count)
    }

    /// Removes the key (and value) at bucket `i`, back-shifting any
    /// displaced keys from later in the probe sequence into the gap.
    /// Matches `uhash_delete`.
    fn delete(&mut self, i: usize) -> Option<(K, V)> {
        if self.exp == 0 || self.flags.is_empty(i) {
            return None;
        }

        let removed_key = unsafe { std::ptr::read(self.keys[i].as_ptr()) };
        let removed_val = unsafe { std::ptr::read(self.vals[i].as_ptr()) };

        let mask = self.buckets() - 1;
        let mut i = i;
        let mut j = i;
        loop {
            j = (j + 1) & mask;
            if i == j || self.flags.is_empty(j) {
                break;
            }
            let k = fib(hash_key(unsafe { self.keys[j].assume_init_ref() }), self.exp);
            if (j > i && (k <= i || k > j)) || (j < i && (k <= i && k > j)) {
                self.keys.swap(i, j);
                self.vals.swap(i, j);
                i = j;
            }
        }

        self.flags.set_empty(i);
        self.count -= 1;
        Some((removed_key, removed_val))
    }
}

impl Flags {
    #[inline]
    fn is_empty(&self, i: usize) -> bool {
        !self.is_used(i)
    }
}

/// A hash map with open addressing and Fibonacci-hashed linear probing.
pub struct UHashMap<K, V> {
    table: UHashTable<K, V>,
}

impl<K, V> UHashMap<K, V> {
    pub fn new() -> Self {
        UHashMap { table: UHashTable::new() }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.buckets()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K, V> Default for UHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> UHashMap<K, V> {
    pub fn reserve(&mut self, additional: usize) -> UResult<()> {
        let target = self.table.len() + additional;
        self.table.resize(target)
    }

    /// Shrinks bucket storage to the smallest capacity that still fits
    /// the current entries. Matches `uhash_shrink`.
    pub fn shrink(&mut self) -> UResult<()> {
        self.table.shrink()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.table.get_index(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let i = self.table.get_index(key)?;
        Some(unsafe { self.table.vals[i].assume_init_ref() })
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.table.get_index(key)?;
        Some(unsafe { self.table.vals[i].assume_init_mut() })
    }

    /// Inserts `key -> value`. Returns the previous value, if any
    /// (matches `uhmap_set`'s `existing` out-parameter).
    pub fn insert(&mut self, key: K, value: V) -> UResult<Option<V>> {
        let (i, result) = self.table.put(key)?;
        match result {
            PutResult::Inserted => {
                self.table.vals[i] = MaybeUninit::new(value);
                Ok(None)
            }
            PutResult::Present => {
                let old = std::mem::replace(&mut self.table.vals[i], MaybeUninit::new(value));
                Ok(Some(unsafe { old.assume_init() }))
            }
        }
    }

    /// Inserts `key -> value` only if `key` is absent. Returns `false`
    /// (without overwriting) if it was already present. Matches
    /// `uhmap_add`.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> UResult<bool> {
        let (i, result) = self.table.put(key)?;
        if result == PutResult::Inserted {
            self.table.vals[i] = MaybeUninit::new(value);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Replaces the value for `key` only if it is already present.
    /// Returns the replaced value, or `None` if absent. Matches
    /// `uhmap_replace`.
    pub fn replace(&mut self, key: &K, value: V) -> Option<V> {
        let i = self.table.get_index(key)?;
        let old = std::mem::replace(&mut self.table.vals[i], MaybeUninit::new(value));
        Some(unsafe { old.assume_init() })
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.table.get_index(key)?;
        self.table.delete(i).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let i = self.table.get_index(key)?;
        self.table.delete(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        (0..self.table.buckets()).filter(move |&i| self.table.flags.is_used(i)).map(move |i| unsafe {
            (self.table.keys[i].assume_init_ref(), self.table.vals[i].assume_init_ref())
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Clone for UHashMap<K, V> {
    /// Deep-copies every key and value into a freshly allocated table.
    /// Matches `uhash_copy`.
    fn clone(&self) -> Self {
        let mut out = UHashMap::new();
        if out.table.resize(self.len()).is_ok() {
            for (k, v) in self.iter() {
                let _ = out.insert(k.clone(), v.clone());
            }
        }
        out
    }
}

/// A hash set with the same open-addressing core as [`UHashMap`], using a
/// zero-sized value type so no value buffer is ever allocated.
pub struct UHashSet<K> {
    table: UHashTable<K, ()>,
}

impl<K> UHashSet<K> {
    pub fn new() -> Self {
        UHashSet { table: UHashTable::new() }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.buckets()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K> Default for UHashSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> UHashSet<K> {
    pub fn reserve(&mut self, additional: usize) -> UResult<()> {
        let target = self.table.len() + additional;
        self.table.resize(target)
    }

    /// Shrinks bucket storage to the smallest capacity that still fits
    /// the current entries. Matches `uhash_shrink`.
    pub fn shrink(&mut self) -> UResult<()> {
        self.table.shrink()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.table.get_index(key).is_some()
    }

    /// Inserts `key`. Returns `true` iff it was not already present.
    /// Matches `uhset_insert`.
    pub fn insert(&mut self, key: K) -> UResult<bool> {
        let (i, result) = self.table.put(key)?;
        if result == PutResult::Inserted {
            self.table.vals[i] = MaybeUninit::new(());
        }
        Ok(result == PutResult::Inserted)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        match self.table.get_index(key) {
            Some(i) => {
                self.table.delete(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        (0..self.table.buckets())
            .filter(move |&i| self.table.flags.is_used(i))
            .map(move |i| unsafe { self.table.keys[i].assume_init_ref() })
    }
}

impl<K: Eq + Hash + Clone> Clone for UHashSet<K> {
    /// Deep-copies every key into a freshly allocated table. Matches
    /// `uhash_copy_as_set`.
    fn clone(&self) -> Self {
        let mut out = UHashSet::new();
        if out.table.resize(self.len()).is_ok() {
            for k in self.iter() {
                let _ = out.insert(k.clone());
            }
        }
        out
    }
}

impl<K: Eq + Hash + Clone> UHashSet<K> {
    /// Whether `self` is a superset of `other` (every key in `other` is in `self`).
    pub fn is_superset(&self, other: &UHashSet<K>) -> bool {
        other.iter().all(|k| self.contains(k))
    }

    /// Whether `self` and `other` contain the same keys.
    pub fn equals(&self, other: &UHashSet<K>) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }

    /// Inserts every key of `other` into `self`.
    pub fn union_with(&mut self, other: &UHashSet<K>) -> UResult<()> {
        for k in other.iter() {
            self.insert(k.clone())?;
        }
        Ok(())
    }

    /// Removes every key of `self` not present in `other`. Iterates
    /// whichever of the two sets is smaller, since the membership checks
    /// against the larger set are the same cost either way.
    pub fn intersect_with(&mut self, other: &UHashSet<K>) {
        if self.len() <= other.len() {
            let to_remove: Vec<K> = self.iter().filter(|k| !other.contains(k)).cloned().collect();
            for k in to_remove {
                self.remove(&k);
            }
        } else {
            let to_keep: Vec<K> = other.iter().filter(|k| self.contains(k)).cloned().collect();
            self.clear();
            for k in to_keep {
                let _ = self.insert(k);
            }
        }
    }

    /// Removes every key of `self` present in `other`. Iterates whichever
    /// of the two sets is smaller.
    pub fn subtract(&mut self, other: &UHashSet<K>) {
        if other.len() <= self.len() {
            let to_remove: Vec<K> = other.iter().filter(|k| self.contains(k)).cloned().collect();
            for k in to_remove {
                self.remove(&k);
            }
        } else {
            let to_remove: Vec<K> = self.iter().filter(|k| other.contains(k)).cloned().collect();
            for k in to_remove {
                self.remove(&k);
            }
        }
    }

    /// A hash combining every member's hash, order-independent (XOR-folded).
    pub fn set_hash(&self) -> UInt {
        self.iter().fold(0, |acc, k| acc ^ hash_key(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut m: UHashMap<i32, &str> = UHashMap::new();
        assert_eq!(m.insert(1, "one").unwrap(), None);
        assert_eq!(m.insert(2, "two").unwrap(), None);
        assert_eq!(m.get(&1), Some(&"one"));
        assert_eq!(m.insert(1, "uno").unwrap(), Some("one"));
        assert_eq!(m.get(&1), Some(&"uno"));
        assert_eq!(m.remove(&2), Some("two"));
        assert!(!m.contains_key(&2));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn scenario_insert_remove_0_to_99() {
        let mut m: UHashMap<i32, i32> = UHashMap::new();
        for i in 0..100 {
            assert_eq!(m.insert(i, i * i).unwrap(), None);
        }
        assert_eq!(m.len(), 100);
        for i in 0..100 {
            assert_eq!(m.get(&i), Some(&(i * i)));
        }
        for i in (0..100).step_by(2) {
            assert_eq!(m.remove(&i), Some(i * i));
        }
        assert_eq!(m.len(), 50);
        for i in (0..100).step_by(2) {
            assert!(!m.contains_key(&i));
        }
        for i in (1..100).step_by(2) {
            assert!(m.contains_key(&i));
        }
    }

    #[test]
    fn set_insert_is_idempotent() {
        let mut s: UHashSet<i32> = UHashSet::new();
        assert!(s.insert(5).unwrap());
        assert!(!s.insert(5).unwrap());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn set_union_intersect_subtract() {
        let mut a: UHashSet<i32> = UHashSet::new();
        let mut b: UHashSet<i32> = UHashSet::new();
        for x in [1, 2, 3] {
            a.insert(x).unwrap();
        }
        for x in [2, 3, 4] {
            b.insert(x).unwrap();
        }

        let mut union = a.clone();
        union.union_with(&b).unwrap();
        assert_eq!(union.len(), 4);

        let mut intersect = a.clone();
        intersect.intersect_with(&b);
        let mut intersect_items: Vec<i32> = intersect.iter().copied().collect();
        intersect_items.sort();
        assert_eq!(intersect_items, vec![2, 3]);

        let mut diff = a.clone();
        diff.subtract(&b);
        let diff_items: Vec<i32> = diff.iter().copied().collect();
        assert_eq!(diff_items, vec![1]);
    }

    #[test]
    fn is_superset_and_equals() {
        let mut a: UHashSet<i32> = UHashSet::new();
        let mut b: UHashSet<i32> = UHashSet::new();
        for x in [1, 2, 3] {
            a.insert(x).unwrap();
        }
        for x in [1, 2] {
            b.insert(x).unwrap();
        }
        assert!(a.is_superset(&b));
        assert!(!b.is_superset(&a));
        assert!(!a.equals(&b));
        b.insert(3).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn resize_preserves_all_entries() {
        let mut m: UHashMap<u64, u64> = UHashMap::new();
        for i in 0..1000u64 {
            m.insert(i, i.wrapping_mul(31)).unwrap();
        }
        for i in 0..1000u64 {
            assert_eq!(m.get(&i), Some(&i.wrapping_mul(31)));
        }
    }

    #[test]
    fn drop_runs_key_and_value_destructors() {
        use std::rc::Rc;
        let marker = Rc::new(());
        {
            let mut m: UHashMap<i32, Rc<()>> = UHashMap::new();
            for i in 0..10 {
                m.insert(i, marker.clone()).unwrap();
            }
            assert_eq!(Rc::strong_count(&marker), 11);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn insert_if_absent_and_replace() {
        let mut m: UHashMap<&str, i32> = UHashMap::new();
        assert!(m.insert_if_absent("a", 1).unwrap());
        assert!(!m.insert_if_absent("a", 2).unwrap());
        assert_eq!(m.get(&"a"), Some(&1));
        assert_eq!(m.replace(&"a", 9), Some(1));
        assert_eq!(m.replace(&"missing", 9), None);
    }

    #[test]
    fn shrink_preserves_entries_and_frees_capacity() {
        let mut m: UHashMap<u64, u64> = UHashMap::new();
        for i in 0..200u64 {
            m.insert(i, i * 2).unwrap();
        }
        for i in (0..200u64).step_by(2) {
            m.remove(&i);
        }
        let before = m.capacity();
        m.shrink().unwrap();
        assert!(m.capacity() <= before);
        for i in (1..200u64).step_by(2) {
            assert_eq!(m.get(&i), Some(&(i * 2)));
        }
        assert_eq!(m.len(), 100);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut m: UHashMap<i32, Vec<i32>> = UHashMap::new();
        m.insert(1, vec![1, 2, 3]).unwrap();
        let mut cloned = m.clone();
        cloned.get_mut(&1).unwrap().push(4);
        assert_eq!(m.get(&1), Some(&vec![1, 2, 3]));
        assert_eq!(cloned.get(&1), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn set_clone_is_independent() {
        let mut a: UHashSet<i32> = UHashSet::new();
        a.insert(1).unwrap();
        let mut b = a.clone();
        b.insert(2).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }
}
