use std::ops::Range;

use crate::bit::tables::{BITCOUNT_TABLE, REVERSE_TABLE};
use crate::{BitArray, BitArrayError, Result};

impl BitArray {
    /// Sets every bit in `range` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn set_range(&mut self, range: Range<usize>, value: bool) -> Result<()> {
        self.check_range(&range)?;
        self.assign_range(range.start, range.end, value);
        Ok(())
    }

    /// Number of bits equal to `value`.
    #[must_use]
    pub fn count(&self, value: bool) -> usize {
        self.count_bits(value, 0, self.bit_length)
    }

    /// Number of bits equal to `value` within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn count_range(&self, value: bool, range: Range<usize>) -> Result<usize> {
        self.check_range(&range)?;
        Ok(self.count_bits(value, range.start, range.end))
    }

    /// `true` if any bit is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.find_bit(true, 0, self.bit_length).is_some()
    }

    /// `true` if every bit is set; vacuously true for an empty array.
    #[must_use]
    pub fn all(&self) -> bool {
        self.find_bit(false, 0, self.bit_length).is_none()
    }

    /// Flips every bit.
    pub fn invert(&mut self) {
        for byte in &mut self.bytes {
            *byte ^= 0xff;
        }
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn invert_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.assign_bit(index, !self.bit(index));
        Ok(())
    }

    /// Flips every bit in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn invert_range(&mut self, range: Range<usize>) -> Result<()> {
        self.check_range(&range)?;
        let (start, stop) = (range.start, range.end);
        if stop - start < 8 {
            for index in start..stop {
                self.assign_bit(index, !self.bit(index));
            }
            return Ok(());
        }
        let (first, last) = (start.div_ceil(8), stop / 8);
        for index in (start..8 * first).chain(8 * last..stop) {
            self.assign_bit(index, !self.bit(index));
        }
        for byte in &mut self.bytes[first..last] {
            *byte ^= 0xff;
        }
        Ok(())
    }

    /// Reverses the bit order inside each byte of the byte range `bytes`.
    ///
    /// This changes the logical bits: it is how data written with one endianness is
    /// reinterpreted as the other.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `bytes` is inverted or ends past the
    /// byte length.
    pub fn bytereverse(&mut self, bytes: Range<usize>) -> Result<()> {
        let byte_length = self.bytes.len();
        if bytes.start > bytes.end || bytes.end > byte_length {
            return Err(BitArrayError::IndexOutOfRange {
                index: bytes.end.max(bytes.start),
                length: byte_length,
            });
        }
        self.reverse_bytes(bytes.start, bytes.end);
        Ok(())
    }

    /// Reverses the order of the bits.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::from_text("1100010011", Endian::Little).unwrap();
    /// bits.reverse();
    /// assert_eq!(bits.to01(), "1100100011");
    /// ```
    pub fn reverse(&mut self) {
        let padding = self.padding();
        self.bytes.reverse();
        self.reverse_bytes(0, self.bytes.len());
        // The former pad bits now lead the sequence.
        self.bit_length = self.bytes.len() * 8;
        self.delete_n(0, padding);
    }

    /// Moves all bits equal to `reverse` to the front: zeros first by default, ones first
    /// when `reverse` is set.
    pub fn sort(&mut self, reverse: bool) {
        let length = self.bit_length;
        let run = self.count_bits(reverse, 0, length);
        self.assign_range(0, run, reverse);
        self.assign_range(run, length, !reverse);
    }
}

// Engine
impl BitArray {
    pub(crate) fn assign_range(&mut self, start: usize, stop: usize, value: bool) {
        debug_assert!(start <= stop && stop <= self.bit_length);
        if stop - start < 8 {
            for index in start..stop {
                self.assign_bit(index, value);
            }
            return;
        }
        let (first, last) = (start.div_ceil(8), stop / 8);
        for index in (start..8 * first).chain(8 * last..stop) {
            self.assign_bit(index, value);
        }
        self.bytes[first..last].fill(if value { 0xff } else { 0x00 });
    }

    pub(crate) fn count_bits(&self, value: bool, start: usize, stop: usize) -> usize {
        if start >= stop {
            return 0;
        }
        let ones = if stop - start < 8 {
            (start..stop).filter(|&index| self.bit(index)).count()
        } else {
            let (first, last) = (start.div_ceil(8), stop / 8);
            let edges = (start..8 * first)
                .chain(8 * last..stop)
                .filter(|&index| self.bit(index))
                .count();
            let interior: usize = self.bytes[first..last]
                .iter()
                .map(|&byte| usize::from(BITCOUNT_TABLE[usize::from(byte)]))
                .sum();
            edges + interior
        };
        if value { ones } else { stop - start - ones }
    }

    pub(crate) fn reverse_bytes(&mut self, start: usize, stop: usize) {
        for byte in &mut self.bytes[start..stop] {
            *byte = REVERSE_TABLE[usize::from(*byte)];
        }
    }
}
