use crate::{BitArrayError, Endian, Result};

/// Number of set bits in every byte value.
pub static BITCOUNT_TABLE: [u8; 256] = bitcount_table();

/// Every byte value with its bit order reversed.
pub static REVERSE_TABLE: [u8; 256] = reverse_table();

const fn bitcount_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value = 0;
    while value < 256 {
        table[value] = (value as u8).count_ones() as u8;
        value += 1;
    }
    table
}

const fn reverse_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value = 0;
    while value < 256 {
        table[value] = (value as u8).reverse_bits();
        value += 1;
    }
    table
}

/// Number of bytes needed to store `bit_length` bits.
#[inline]
#[must_use]
pub const fn bit_length_to_byte_length(bit_length: usize) -> usize {
    bit_length.div_ceil(8)
}

/// Signed front door for [`bit_length_to_byte_length`].
///
/// # Errors
///
/// Returns [`BitArrayError::InvalidArgument`] if `bit_length` is negative.
pub fn bits_to_bytes(bit_length: i64) -> Result<usize> {
    let bit_length = usize::try_from(bit_length)
        .map_err(|_| BitArrayError::InvalidArgument(format!("non-negative integer expected, got {bit_length}")))?;
    Ok(bit_length_to_byte_length(bit_length))
}

/// Byte index and in-byte offset of a bit index.
#[inline]
#[must_use]
pub const fn byte_and_bit_index(index: usize) -> (usize, usize) {
    (index / 8, index % 8)
}

/// Mask of the bit at `offset` (`0..8`) within a byte.
#[inline]
#[must_use]
pub const fn bit_mask(endian: Endian, offset: usize) -> u8 {
    match endian {
        Endian::Little => 1 << offset,
        Endian::Big => 0x80 >> offset,
    }
}

/// Mask of the first `count` (`0..=8`) bits of a byte.
#[inline]
#[must_use]
pub const fn leading_mask(endian: Endian, count: usize) -> u8 {
    match endian {
        Endian::Little => ((1u16 << count) - 1) as u8,
        Endian::Big => (0xff00u16 >> count) as u8,
    }
}
