//! Variable-length integer codec, grounded on `ustream_varint.c`.
//!
//! Unsigned values are encoded 7 bits at a time, least-significant group
//! first, with the high bit of each byte set on every group but the last
//! (base-128, "LEB128"-style). Signed values are zig-zag encoded first
//! (`(n << 1) ^ (n >> (W - 1))`) so small-magnitude negative numbers stay
//! small, then written with the unsigned encoding.

use crate::error::{UError, UResult};
use crate::numeric::{Int, UInt};
use crate::stream::{InputStream, OutputStream};

const HAS_MORE: u8 = 0x80;
const VALUE_MASK: u8 = 0x7F;
const DATA_BITS: u32 = 7;

/// Maximum number of bytes a [`UInt`] can expand to.
pub const MAX_BYTES: usize = (UInt::BITS as usize).div_ceil(DATA_BITS as usize) + 1;

/// Encodes `value` into `out`, appending each byte, and returns the
/// number of bytes written. Matches `uostream_write_varint`'s buffer
/// construction.
pub fn encode(mut value: UInt, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    while value >= HAS_MORE as UInt {
        out.push((value as u8 & VALUE_MASK) | HAS_MORE);
        value >>= DATA_BITS;
    }
    out.push(value as u8);
    out.len() - start
}

/// Decodes an unsigned varint from `bytes`, returning the value and the
/// number of bytes consumed. Fails with [`UError::Bounds`] if the
/// continuation run exceeds [`MAX_BYTES`] or `bytes` runs out first.
pub fn decode(bytes: &[u8]) -> UResult<(UInt, usize)> {
    let mut value: UInt = 0;
    let mut i = 0usize;
    loop {
        if i >= MAX_BYTES {
            return Err(UError::Bounds);
        }
        let byte = *bytes.get(i).ok_or(UError::Bounds)?;
        value |= ((byte & VALUE_MASK) as UInt) << (i as u32 * DATA_BITS);
        i += 1;
        if byte & HAS_MORE == 0 {
            break;
        }
    }
    Ok((value, i))
}

/// Zig-zag encodes a signed value into its unsigned envelope.
#[inline]
pub fn zigzag_encode(value: Int) -> UInt {
    ((value << 1) ^ (value >> (Int::BITS - 1))) as UInt
}

/// Reverses [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(value: UInt) -> Int {
    ((value >> 1) as Int) ^ -((value & 1) as Int)
}

/// Reads an unsigned varint from `stream`, returning the decoded value
/// and the number of bytes read.
pub fn read_varint(stream: &mut dyn InputStream) -> UResult<(UInt, usize)> {
    let mut value: UInt = 0;
    let mut i = 0usize;
    loop {
        if i >= MAX_BYTES {
            return Err(UError::Bounds);
        }
        let mut byte = [0u8; 1];
        stream.read_exact(&mut byte)?;
        value |= ((byte[0] & VALUE_MASK) as UInt) << (i as u32 * DATA_BITS);
        i += 1;
        if byte[0] & HAS_MORE == 0 {
            break;
        }
    }
    Ok((value, i))
}

/// Reads a zig-zag-encoded signed varint from `stream`.
pub fn read_svarint(stream: &mut dyn InputStream) -> UResult<(Int, usize)> {
    let (zigzagged, read) = read_varint(stream)?;
    Ok((zigzag_decode(zigzagged), read))
}

/// Writes an unsigned varint to `stream`, returning the number of bytes written.
pub fn write_varint(stream: &mut dyn OutputStream, value: UInt) -> UResult<usize> {
    let mut buf = Vec::with_capacity(MAX_BYTES);
    let n = encode(value, &mut buf);
    stream.write_all(&buf)?;
    Ok(n)
}

/// Writes a zig-zag-encoded signed varint to `stream`.
pub fn write_svarint(stream: &mut dyn OutputStream, value: Int) -> UResult<usize> {
    write_varint(stream, zigzag_encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{MemoryInputStream, StringBufferOutputStream};

    #[test]
    fn encode_300_matches_spec_example() {
        let mut buf = Vec::new();
        let n = encode(300, &mut buf);
        assert_eq!(n, 2);
        assert_eq!(buf, vec![0xAC, 0x02]);
    }

    #[test]
    fn decode_is_inverse_of_encode() {
        for value in [0u32, 1, 127, 128, 300, 16384, u32::MAX] {
            let mut buf = Vec::new();
            let written = encode(value as UInt, &mut buf);
            let (decoded, read) = decode(&buf).unwrap();
            assert_eq!(decoded, value as UInt);
            assert_eq!(read, written);
        }
    }

    #[test]
    fn zigzag_round_trip_preserves_sign() {
        for v in [0, 1, -1, 2, -2, Int::MAX, Int::MIN] {
            assert_eq!(zigzag_decode(zigzag_encode(v)), v);
        }
    }

    #[test]
    fn zigzag_keeps_small_magnitudes_small() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
    }

    #[test]
    fn stream_round_trip_unsigned() {
        let mut sink = StringBufferOutputStream::new();
        write_varint(&mut sink, 123456).unwrap();
        let bytes = sink.into_bytes();
        let mut src = MemoryInputStream::new(&bytes);
        let (value, read) = read_varint(&mut src).unwrap();
        assert_eq!(value, 123456);
        assert_eq!(read, bytes.len());
    }

    #[test]
    fn stream_round_trip_signed_negative() {
        let mut sink = StringBufferOutputStream::new();
        write_svarint(&mut sink, -12345).unwrap();
        let bytes = sink.into_bytes();
        let mut src = MemoryInputStream::new(&bytes);
        let (value, _) = read_svarint(&mut src).unwrap();
        assert_eq!(value, -12345);
    }

    #[test]
    fn truncated_input_is_bounds_error() {
        let buf = [0x80u8];
        assert_eq!(decode(&buf).unwrap_err(), UError::Bounds);
    }
}
