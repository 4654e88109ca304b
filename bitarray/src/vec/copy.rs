use crate::bit::tables::{REVERSE_TABLE, bit_length_to_byte_length, bit_mask, leading_mask};
use crate::{BitArray, BitArrayError, Endian, Result};

/// Where a range copy reads from: the destination array itself or a distinct array.
#[derive(Clone, Copy)]
pub(crate) enum Source<'life> {
    Within,
    Other(&'life BitArray),
}

impl Source<'_> {
    fn is_within(self) -> bool {
        matches!(self, Source::Within)
    }

    fn endian(self, destination: &BitArray) -> Endian {
        match self {
            Source::Within => destination.endian,
            Source::Other(other) => other.endian,
        }
    }

    fn bit_length(self, destination: &BitArray) -> usize {
        match self {
            Source::Within => destination.bit_length,
            Source::Other(other) => other.bit_length,
        }
    }

    fn bit(self, destination: &BitArray, index: usize) -> bool {
        match self {
            Source::Within => destination.bit(index),
            Source::Other(other) => other.bit(index),
        }
    }

    fn byte(self, destination: &BitArray, index: usize) -> u8 {
        match self {
            Source::Within => destination.bytes[index],
            Source::Other(other) => other.bytes[index],
        }
    }
}

impl BitArray {
    /// Copies `count` bits starting at `source_start` to `destination_start` within this array.
    /// Overlapping ranges are handled like `memmove`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if either range ends past `len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::from_text("1100101000", Endian::Little).unwrap();
    /// bits.copy_within(3, 0, 6).unwrap();
    /// assert_eq!(bits.to01(), "1101100100");
    /// ```
    pub fn copy_within(&mut self, destination_start: usize, source_start: usize, count: usize) -> Result<()> {
        check_copy_range(destination_start, count, self.bit_length)?;
        check_copy_range(source_start, count, self.bit_length)?;
        self.copy_n(destination_start, Source::Within, source_start, count);
        Ok(())
    }

    /// Copies `count` bits of `other`, starting at `source_start`, to `destination_start`.
    /// The two arrays may differ in endianness.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if either range ends past its array's length.
    pub fn copy_from(
        &mut self,
        destination_start: usize,
        other: &BitArray,
        source_start: usize,
        count: usize,
    ) -> Result<()> {
        check_copy_range(destination_start, count, self.bit_length)?;
        check_copy_range(source_start, count, other.bit_length)?;
        self.copy_from_unchecked(destination_start, other, source_start, count);
        Ok(())
    }

    /// Repeats the contents `factor` times in place; `factor == 0` empties the array.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if the repeated length is not representable; the
    /// array is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::from_text("10110", Endian::Big).unwrap();
    /// bits.repeat(3).unwrap();
    /// assert_eq!(bits.to01(), "101101011010110");
    /// ```
    pub fn repeat(&mut self, factor: usize) -> Result<()> {
        let length = self.bit_length;
        if factor == 0 {
            self.resize(0);
            return Ok(());
        }
        if factor == 1 || length == 0 {
            return Ok(());
        }
        let total = length
            .checked_mul(factor)
            .filter(|total| *total <= crate::MAX_BIT_LENGTH)
            .ok_or_else(|| BitArrayError::Overflow(format!("cannot repeat {length} bits {factor} times")))?;
        tracing::trace!(length, factor, total, "repeating bit array");
        self.resize(total);
        let mut filled = length;
        while filled <= total / 2 {
            self.copy_n(filled, Source::Within, 0, filled);
            filled *= 2;
        }
        self.copy_n(filled, Source::Within, 0, total - filled);
        Ok(())
    }

    /// Non-mutating [`repeat`](BitArray::repeat).
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if the repeated length is not representable.
    pub fn repeated(&self, factor: usize) -> Result<BitArray> {
        let mut array = self.clone();
        array.repeat(factor)?;
        Ok(array)
    }
}

fn check_copy_range(start: usize, count: usize, length: usize) -> Result<()> {
    match start.checked_add(count) {
        Some(end) if end <= length => Ok(()),
        _ => Err(BitArrayError::IndexOutOfRange {
            index: start.saturating_add(count),
            length,
        }),
    }
}

// Engine
impl BitArray {
    pub(crate) fn copy_from_unchecked(&mut self, destination_start: usize, other: &BitArray, source_start: usize, count: usize) {
        self.copy_n(destination_start, Source::Other(other), source_start, count);
    }

    /// Opens a gap of `count` unspecified bits at `start`.
    pub(crate) fn insert_n(&mut self, start: usize, count: usize) {
        let length = self.bit_length;
        debug_assert!(start <= length);
        self.resize(length + count);
        self.copy_n(start + count, Source::Within, start, length - start);
    }

    /// Removes `count` bits at `start`.
    pub(crate) fn delete_n(&mut self, start: usize, count: usize) {
        let length = self.bit_length;
        debug_assert!(start <= length && count <= length - start);
        self.copy_n(start, Source::Within, start + count, length - start - count);
        self.resize(length - count);
    }

    pub(crate) fn copy_n(&mut self, destination_start: usize, source: Source<'_>, source_start: usize, count: usize) {
        if count == 0 || (source.is_within() && destination_start == source_start) {
            return;
        }
        debug_assert!(destination_start + count <= self.bit_length);
        debug_assert!(source_start + count <= source.bit_length(self));

        if destination_start % 8 == 0 && source_start % 8 == 0 {
            self.copy_aligned(destination_start, source, source_start, count);
        } else if count < 8 {
            self.copy_bits(destination_start, source, source_start, count);
        } else {
            self.copy_unaligned(destination_start, source, source_start, count);
        }
    }

    /// Bit at a time, walking away from the overlap.
    fn copy_bits(&mut self, destination_start: usize, source: Source<'_>, source_start: usize, count: usize) {
        if destination_start <= source_start {
            for offset in 0..count {
                let value = source.bit(self, source_start + offset);
                self.assign_bit(destination_start + offset, value);
            }
        } else {
            for offset in (0..count).rev() {
                let value = source.bit(self, source_start + offset);
                self.assign_bit(destination_start + offset, value);
            }
        }
    }

    fn copy_aligned(&mut self, destination_start: usize, source: Source<'_>, source_start: usize, count: usize) {
        let whole_bytes = count / 8;
        let tail = count % 8;
        let tail_offset = 8 * whole_bytes;

        // The tail lives past both byte ranges; it goes first when the move runs toward higher
        // indices so the move cannot clobber it.
        if destination_start > source_start {
            self.copy_bits(destination_start + tail_offset, source, source_start + tail_offset, tail);
        }
        self.move_bytes(destination_start / 8, source, source_start / 8, whole_bytes);
        if destination_start <= source_start {
            self.copy_bits(destination_start + tail_offset, source, source_start + tail_offset, tail);
        }
    }

    /// Reduces an unaligned copy to a byte move plus a sub-byte shift of the destination bytes.
    ///
    /// Requires `count >= 8`.
    fn copy_unaligned(&mut self, destination_start: usize, source: Source<'_>, source_start: usize, count: usize) {
        debug_assert!(count >= 8);
        let endian = self.endian;
        let source_endian = source.endian(self);
        let first_byte = destination_start / 8;
        let last_byte = (destination_start + count - 1) / 8;
        let destination_offset = destination_start % 8;
        let source_offset = source_start % 8;
        let source_byte = source_start / 8;

        let first_saved = self.bytes[first_byte];
        let last_saved = self.bytes[last_byte];
        let source_saved = source.byte(self, source_byte);

        // Moving whole bytes puts source bit `source_start + i` at `destination_start + i - shift`.
        // When the source offset is the larger one, start one byte later so the shift stays
        // positive; the first `head` source bits are then written from `source_saved`.
        let (move_from, shift, head) = if destination_offset >= source_offset {
            (source_byte, destination_offset - source_offset, 0)
        } else {
            (source_byte + 1, destination_offset + 8 - source_offset, 8 - source_offset)
        };
        let source_byte_length = bit_length_to_byte_length(source.bit_length(self));
        let moved = (last_byte - first_byte + 1).min(source_byte_length - move_from);

        self.move_bytes(first_byte, source, move_from, moved);
        if shift > 0 {
            self.shift_right_subbyte(first_byte, last_byte + 1, shift);
        }

        let head_mask = leading_mask(endian, destination_offset);
        self.bytes[first_byte] = (first_saved & head_mask) | (self.bytes[first_byte] & !head_mask);
        let end_offset = (destination_start + count) % 8;
        if end_offset != 0 {
            let tail_mask = leading_mask(endian, end_offset);
            self.bytes[last_byte] = (self.bytes[last_byte] & tail_mask) | (last_saved & !tail_mask);
        }

        for offset in 0..head {
            let value = source_saved & bit_mask(source_endian, source_offset + offset) != 0;
            self.assign_bit(destination_start + offset, value);
        }
    }

    /// Moves `count` whole bytes, converting bit order when the source endianness differs.
    fn move_bytes(&mut self, destination_byte: usize, source: Source<'_>, source_byte: usize, count: usize) {
        if count == 0 {
            return;
        }
        match source {
            Source::Within => {
                self.bytes
                    .copy_within(source_byte..source_byte + count, destination_byte);
            }
            Source::Other(other) => {
                let destination = &mut self.bytes[destination_byte..destination_byte + count];
                destination.copy_from_slice(&other.bytes[source_byte..source_byte + count]);
                if other.endian != self.endian {
                    for byte in destination {
                        *byte = REVERSE_TABLE[usize::from(*byte)];
                    }
                }
            }
        }
    }

    /// Shifts the bits of bytes `[start, stop)` by `shift` (`1..8`) positions toward higher bit
    /// indices. Bits shifted past `stop` are lost, the first `shift` bits become zero.
    pub(crate) fn shift_right_subbyte(&mut self, start: usize, stop: usize, shift: usize) {
        debug_assert!((1..8).contains(&shift));
        let endian = self.endian;
        let bytes = &mut self.bytes[start..stop];

        // Walk down from the top so every byte still reads its lower neighbour unshifted.
        let mut end = bytes.len();
        while end >= 8 {
            let carry = if end > 8 { bytes[end - 9] } else { 0 };
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[end - 8..end]);
            let shifted = match endian {
                Endian::Little => {
                    ((u64::from_le_bytes(word) << shift) | u64::from(carry >> (8 - shift))).to_le_bytes()
                }
                Endian::Big => {
                    ((u64::from_be_bytes(word) >> shift) | (u64::from(carry) << (64 - shift))).to_be_bytes()
                }
            };
            bytes[end - 8..end].copy_from_slice(&shifted);
            end -= 8;
        }
        for index in (0..end).rev() {
            let carry = if index > 0 { bytes[index - 1] } else { 0 };
            bytes[index] = match endian {
                Endian::Little => (bytes[index] << shift) | (carry >> (8 - shift)),
                Endian::Big => (bytes[index] >> shift) | (carry << (8 - shift)),
            };
        }
    }
}
