//! Non-cryptographic hash functions, grounded on `uhash_func.h`.
//!
//! Integer hashing is width-dependent: in the default and `huge` builds
//! the low-width mixers are identity functions (the bits are already
//! scrambled enough once Fibonacci hashing runs on them), while `tiny`
//! builds fold a 64-bit key down into 16 bits with an xor-shift cascade
//! since a plain truncation would throw away most of the key's entropy.
//! Buffer hashing is the classic K&R-2nd-edition rolling hash.

use crate::numeric::UInt;

/// Hash function for 8-bit keys. Matches `ulib_hash_int8`, which is an
/// identity at every width.
#[inline]
pub fn hash_int8(key: u8) -> UInt {
    key as UInt
}

/// Hash function for 16-bit keys. Matches `ulib_hash_int16`, an identity
/// at every width.
#[inline]
pub fn hash_int16(key: u16) -> UInt {
    key as UInt
}

/// Hash function for 32-bit keys. Matches `ulib_hash_int32`: an identity
/// under the default and `huge` widths, an xor-shift mix under `tiny`
/// (where it must fold 32 bits down into 16).
#[inline]
pub fn hash_int32(key: u32) -> UInt {
    #[cfg(all(feature = "tiny", not(feature = "huge")))]
    {
        (key >> 17 ^ key ^ key << 6) as UInt
    }
    #[cfg(not(all(feature = "tiny", not(feature = "huge"))))]
    {
        key as UInt
    }
}

/// Hash function for 64-bit keys. Matches `ulib_hash_int64`: identity
/// under `huge`, a single xor-shift fold under the default width, and a
/// wider xor-shift cascade under `tiny` to fold 64 bits down into 16.
#[inline]
pub fn hash_int64(key: u64) -> UInt {
    #[cfg(feature = "huge")]
    {
        key as UInt
    }
    #[cfg(all(feature = "tiny", not(feature = "huge")))]
    {
        (key >> 49 ^ key >> 33 ^ key >> 17 ^ key ^ key << 6 ^ key << 23 ^ key << 39) as UInt
    }
    #[cfg(not(any(feature = "tiny", feature = "huge")))]
    {
        (key >> 33 ^ key ^ key << 11) as UInt
    }
}

/// K&R 2nd-edition hash over a buffer, seeded by `init`. Matches
/// `ulib_hash_mem_kr2`; used both by [`crate::hash_table`]'s generic
/// byte-sequence hashing and by [`crate::string::UString::hash`].
#[inline]
pub fn hash_mem_kr2(init: UInt, bytes: &[u8]) -> UInt {
    let mut h = init;
    for &b in bytes {
        h = (h << 5).wrapping_sub(h).wrapping_add(b as UInt);
    }
    h
}

#[cfg(all(feature = "tiny", not(feature = "huge")))]
const COMBINE_MAGIC: UInt = 0x9e37;
#[cfg(all(feature = "tiny", not(feature = "huge")))]
const COMBINE_LS: u32 = 3;
#[cfg(all(feature = "tiny", not(feature = "huge")))]
const COMBINE_RS: u32 = 1;

#[cfg(feature = "huge")]
const COMBINE_MAGIC: UInt = 0x9e37_79b9_7f4a_7c15;
#[cfg(feature = "huge")]
const COMBINE_LS: u32 = 12;
#[cfg(feature = "huge")]
const COMBINE_RS: u32 = 4;

#[cfg(not(any(feature = "tiny", feature = "huge")))]
const COMBINE_MAGIC: UInt = 0x9e37_79b9;
#[cfg(not(any(feature = "tiny", feature = "huge")))]
const COMBINE_LS: u32 = 6;
#[cfg(not(any(feature = "tiny", feature = "huge")))]
const COMBINE_RS: u32 = 2;

/// Combines two hashes into one. Matches `ulib_hash_combine`; used by
/// [`crate::hash_table`]'s generic [`std::hash::Hasher`] to fold together
/// the hashes of a key's successive fields.
#[inline]
pub fn hash_combine(h1: UInt, h2: UInt) -> UInt {
    (h1 ^ h2)
        .wrapping_add(COMBINE_MAGIC)
        .wrapping_add(h1 << COMBINE_LS)
        .wrapping_add(h2 >> COMBINE_RS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_kr2_matches_manual_accumulation() {
        let mut h: UInt = 0;
        for b in b"hello" {
            h = (h << 5).wrapping_sub(h).wrapping_add(*b as UInt);
        }
        assert_eq!(hash_mem_kr2(0, b"hello"), h);
    }

    #[test]
    fn empty_buffer_hashes_to_seed() {
        assert_eq!(hash_mem_kr2(0, b""), 0);
        assert_eq!(hash_mem_kr2(7, b""), 7);
    }

    #[test]
    fn int8_and_int16_are_identity() {
        assert_eq!(hash_int8(42), 42);
        assert_eq!(hash_int16(4242), 4242);
    }

    #[test]
    fn int32_is_deterministic_and_distinguishes_distinct_keys() {
        assert_ne!(hash_int32(1), hash_int32(2));
        assert_eq!(hash_int32(7), hash_int32(7));
    }

    #[test]
    fn int64_is_deterministic_and_distinguishes_distinct_keys() {
        assert_ne!(hash_int64(1), hash_int64(2));
        assert_eq!(hash_int64(7), hash_int64(7));
    }

    #[test]
    fn combine_is_order_sensitive() {
        assert_ne!(hash_combine(1, 2), hash_combine(2, 1));
    }
}
