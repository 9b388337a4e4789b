//! Low-level bit read and write utilities for byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.
//! Callers are expected to have checked the range against the buffer already.

/// Widest value that can be read or written in a single access.
pub(crate) const MAX_BITS: usize = u32::BITS as usize;

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub(crate) fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Whether `value` fits in the low `width` bits.
#[inline]
pub(crate) fn fits(value: u64, width: u8) -> bool {
    width as u32 >= u64::BITS || value >> width == 0
}

/// Reads `n` bits starting at `bit_pos`, right-justified into a `u32`.
///
/// # Panics
///
/// Panics if `n > 32` or the range runs past the end of `data`.
pub(crate) fn get_bits(data: &[u8], bit_pos: usize, n: usize) -> u32 {
    assert!(n <= MAX_BITS, "cannot read {n} bits into a u32");

    let mut value = 0u32;

    for pos in bit_pos..bit_pos + n {
        let bit = (data[pos / 8] >> (7 - pos % 8)) & 1;
        value = (value << 1) | bit as u32;
    }

    value
}

/// Writes the low `n` bits of `value` starting at `bit_pos`.
///
/// Bits of `value` above `n` are ignored. Bits of `data` outside
/// `bit_pos..bit_pos + n` are not touched, so a byte shared with a
/// neighbouring field keeps its contents.
///
/// # Panics
///
/// Panics if `n > 32` or the range runs past the end of `data`.
pub(crate) fn put_bits(data: &mut [u8], bit_pos: usize, n: usize, value: u32) {
    assert!(n <= MAX_BITS, "cannot write {n} bits from a u32");

    for i in 0..n {
        let pos = bit_pos + i;
        let mask = 1u8 << (7 - pos % 8);

        if (value >> (n - 1 - i)) & 1 == 1 {
            data[pos / 8] |= mask;
        } else {
            data[pos / 8] &= !mask;
        }
    }
}
