//! Configurable-width numeric aliases and their bit-twiddling API.
//!
//! The width of [`UInt`]/[`Int`]/[`Float`] is chosen at build time via the
//! `tiny` / `huge` Cargo features (mirrors `ULIB_TINY`/`ULIB_HUGE` in
//! `unumber.h`): 16-bit by default under `tiny`, 64-bit under `huge`,
//! 32-bit otherwise. Exactly one of `tiny`/`huge` should be enabled; if
//! both are, `huge` wins.

#[cfg(all(feature = "tiny", not(feature = "huge")))]
mod width {
    pub type UInt = u16;
    pub type Int = i16;
    pub type Float = f32;
}

#[cfg(feature = "huge")]
mod width {
    pub type UInt = u64;
    pub type Int = i64;
    pub type Float = f64;
}

#[cfg(not(any(feature = "tiny", feature = "huge")))]
mod width {
    pub type UInt = u32;
    pub type Int = i32;
    pub type Float = f64;
}

pub use width::{Float, Int, UInt};

/// Maximum representable [`UInt`] value.
pub const UINT_MAX: UInt = UInt::MAX;
/// Minimum representable [`Int`] value.
pub const INT_MIN: Int = Int::MIN;
/// Maximum representable [`Int`] value.
pub const INT_MAX: Int = Int::MAX;

/// Rounds `x` down to the nearest power of two. Undefined (returns 0) for
/// `x == 0`. Matches `ulib_uint_floor2`.
#[inline]
pub fn floor2(x: UInt) -> UInt {
    if x == 0 {
        return 0;
    }
    1 << log2(x)
}

/// Rounds `x` up to the nearest power of two. Undefined (returns 0) for
/// `x == 0`. Matches `ulib_uint_ceil2`.
#[inline]
pub fn ceil2(x: UInt) -> UInt {
    if x == 0 {
        return 0;
    }
    if is_pow2(x) {
        return x;
    }
    1 << (log2(x) + 1)
}

/// Integer base-2 logarithm of `x` (i.e. the index of the highest set
/// bit). Undefined (returns 0) for `x == 0`. Matches `ulib_uint_log2`.
#[inline]
pub fn log2(x: UInt) -> u32 {
    if x == 0 {
        return 0;
    }
    UInt::BITS - 1 - x.leading_zeros()
}

/// Smallest `n` such that `1 << n >= x`; equivalently `ceil(log2(x))`.
/// Undefined (returns 0) for `x == 0`. Used by the hash table to derive a
/// bucket-count exponent from a requested capacity.
#[inline]
pub fn ceil_log2(x: UInt) -> u32 {
    if x <= 1 {
        return 0;
    }
    log2(x - 1) + 1
}

/// Whether `x` is a power of two. Zero is not.
#[inline]
pub fn is_pow2(x: UInt) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// Population count (number of set bits). Matches the builtin-backed
/// `ulib_uint_popcount` used throughout the hash table's flag words.
#[inline]
pub fn popcount(x: UInt) -> u32 {
    x.count_ones()
}

/// The next representable float value after `x`, towards positive
/// infinity. Matches `ulib_float_next`.
#[inline]
pub fn float_next(x: Float) -> Float {
    if x.is_nan() || x == Float::INFINITY {
        return x;
    }
    if x == 0.0 {
        return Float::from_bits(1);
    }
    let bits = x.to_bits();
    let next_bits = if x > 0.0 { bits + 1 } else { bits - 1 };
    Float::from_bits(next_bits)
}

/// The previous representable float value before `x`, towards negative
/// infinity. Matches `ulib_float_prev`.
#[inline]
pub fn float_prev(x: Float) -> Float {
    if x.is_nan() || x == Float::NEG_INFINITY {
        return x;
    }
    if x == 0.0 {
        return -Float::from_bits(1);
    }
    let bits = x.to_bits();
    let prev_bits = if x > 0.0 { bits - 1 } else { bits + 1 };
    Float::from_bits(prev_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_ceil_pow2() {
        assert_eq!(floor2(1), 1);
        assert_eq!(floor2(5), 4);
        assert_eq!(floor2(8), 8);
        assert_eq!(ceil2(1), 1);
        assert_eq!(ceil2(5), 8);
        assert_eq!(ceil2(8), 8);
    }

    #[test]
    fn log2_values() {
        assert_eq!(log2(1), 0);
        assert_eq!(log2(2), 1);
        assert_eq!(log2(1023), 9);
        assert_eq!(log2(1024), 10);
    }

    #[test]
    fn ceil_log2_values() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
    }

    #[test]
    fn pow2_check() {
        assert!(!is_pow2(0));
        assert!(is_pow2(1));
        assert!(is_pow2(64));
        assert!(!is_pow2(63));
    }

    #[test]
    fn popcount_basic() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(0b1011), 3);
    }

    #[test]
    fn float_next_prev_roundtrip() {
        let x: Float = 1.0;
        assert!(float_next(x) > x);
        assert!(float_prev(x) < x);
        assert_eq!(float_prev(float_next(x)), x);
    }
}
