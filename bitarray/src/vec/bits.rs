use std::iter::FusedIterator;

use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::tables::{BITCOUNT_TABLE, REVERSE_TABLE, leading_mask};
use crate::{
    BitArray, BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator,
    into_iterator_via_bit_iterator_body,
};

/// Iterator over the bits of a [`BitArray`], created by [`BitArray::iter`].
#[derive(Clone)]
pub struct Bits<'life> {
    array: &'life BitArray,
    front: usize,
    back: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let value = self.array.bit(self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.array.bit(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}
impl FusedIterator for Bits<'_> {}

/// Indices of the set bits in increasing order, created by [`BitArray::set_bits`].
#[derive(Clone)]
pub struct SetBits<'life> {
    array: &'life BitArray,
    position: usize,
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = self.array.find_bit(true, self.position, self.array.bit_length);
        self.position = found.map_or(self.array.bit_length, |index| index + 1);
        found
    }
}

impl FusedIterator for SetBits<'_> {}

impl BitArray {
    /// Returns an iterator over the bits as boolean values.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let bits = BitArray::from_text("0101", Endian::Little).unwrap();
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![false, true, false, true]);
    /// assert_eq!(bits.iter().rev().position(|bit| !bit), Some(1));
    /// ```
    pub fn iter(&self) -> Bits<'_> {
        <&Self as IntoBitIterator>::iter_bits(self)
    }

    pub fn set_bits(&self) -> SetBits<'_> {
        SetBits {
            array: self,
            position: 0,
        }
    }

    fn checked_bit(&self, index: usize) -> bool {
        assert!(
            index < self.bit_length,
            "bit index {index} out of range for length {}",
            self.bit_length
        );
        self.bit(index)
    }

    /// `other`'s storage byte `byte_index` in this array's bit order.
    #[inline]
    fn converted_byte(&self, other: &BitArray, byte_index: usize) -> u8 {
        let byte = other.bytes[byte_index];
        if self.endian == other.endian {
            byte
        } else {
            REVERSE_TABLE[usize::from(byte)]
        }
    }

    /// Weight of `combine` applied to the first `min(len)` bits of both arrays.
    fn prefix_weight(&self, other: &BitArray, combine: impl Fn(u8, u8) -> u8) -> usize {
        let length = self.bit_length.min(other.bit_length);
        let whole = length / 8;
        let mut weight: usize = (0..whole)
            .map(|byte_index| {
                let combined = combine(self.bytes[byte_index], self.converted_byte(other, byte_index));
                usize::from(BITCOUNT_TABLE[usize::from(combined)])
            })
            .sum();
        let tail = length % 8;
        if tail > 0 {
            let combined = combine(self.bytes[whole], self.converted_byte(other, whole));
            let masked = combined & leading_mask(self.endian, tail);
            weight += usize::from(BITCOUNT_TABLE[usize::from(masked)]);
        }
        weight
    }

    /// Replaces the first `other.len()` bits with `combine(self, other)`, a byte at a time.
    pub(crate) fn combine_prefix(&mut self, other: &BitArray, combine: impl Fn(u8, u8) -> u8) {
        debug_assert!(other.bit_length <= self.bit_length);
        let length = other.bit_length;
        let whole = length / 8;
        for byte_index in 0..whole {
            let converted = self.converted_byte(other, byte_index);
            self.bytes[byte_index] = combine(self.bytes[byte_index], converted);
        }
        let tail = length % 8;
        if tail > 0 {
            let current = self.bytes[whole];
            let combined = combine(current, self.converted_byte(other, whole));
            let mask = leading_mask(self.endian, tail);
            self.bytes[whole] = (combined & mask) | (current & !mask);
        }
    }
}

impl<'life> IntoBitIterator for &'life BitArray {
    type BitIterator = Bits<'life>;

    fn iter_bits(self) -> Self::BitIterator {
        Bits {
            array: self,
            front: 0,
            back: self.bit_length,
        }
    }
}

impl<'life> IntoIterator for &'life BitArray {
    into_iterator_via_bit_iterator_body!(&'life BitArray);
}

/// # Panics
///
/// Panics if `index >= len()`; use [`BitArray::get`] for a checked read.
impl std::ops::Index<usize> for BitArray {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if self.checked_bit(index) { &true } else { &false }
    }
}

impl BitLength for BitArray {
    #[inline]
    fn bit_len(&self) -> usize {
        self.bit_length
    }
}

impl Bitwise for BitArray {
    #[inline]
    fn index(&self, index: usize) -> bool {
        self.checked_bit(index)
    }

    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        self.set_bits().assume_sorted_by_item()
    }

    fn min_support(&self) -> Option<usize> {
        self.find(true)
    }

    fn max_support(&self) -> Option<usize> {
        self.rfind(true)
    }

    fn weight(&self) -> usize {
        self.count(true)
    }
}

impl BitwiseMut for BitArray {
    fn assign_index(&mut self, index: usize, to: bool) {
        self.checked_bit(index);
        self.assign_bit(index, to);
    }

    fn negate_index(&mut self, index: usize) {
        let value = self.checked_bit(index);
        self.assign_bit(index, !value);
    }

    fn clear_bits(&mut self) {
        self.setall(false);
    }
}

impl BitwisePair for BitArray {
    fn and_weight(&self, other: &BitArray) -> usize {
        self.prefix_weight(other, |left, right| left & right)
    }

    fn or_weight(&self, other: &BitArray) -> usize {
        self.prefix_weight(other, |left, right| left | right)
    }

    fn xor_weight(&self, other: &BitArray) -> usize {
        self.prefix_weight(other, |left, right| left ^ right)
    }
}

/// # Panics
///
/// Every method panics if `other` is longer than `self`.
impl BitwisePairMut for BitArray {
    fn assign(&mut self, other: &BitArray) {
        assert_prefix(self, other);
        self.copy_from_unchecked(0, other, 0, other.bit_length);
    }

    fn bitand_assign(&mut self, other: &BitArray) {
        assert_prefix(self, other);
        self.combine_prefix(other, |left, right| left & right);
    }

    fn bitor_assign(&mut self, other: &BitArray) {
        assert_prefix(self, other);
        self.combine_prefix(other, |left, right| left | right);
    }

    fn bitxor_assign(&mut self, other: &BitArray) {
        assert_prefix(self, other);
        self.combine_prefix(other, |left, right| left ^ right);
    }

    fn assign_with_offset(&mut self, other: &BitArray, start_bit: usize, num_bits: usize) {
        assert!(start_bit + num_bits <= self.bit_length && num_bits <= other.bit_length);
        self.copy_from_unchecked(start_bit, other, 0, num_bits);
    }

    fn assign_from_interval(&mut self, other: &BitArray, start_bit: usize, num_bits: usize) {
        assert!(num_bits <= self.bit_length && start_bit + num_bits <= other.bit_length);
        self.copy_from_unchecked(0, other, start_bit, num_bits);
    }
}

fn assert_prefix(target: &BitArray, other: &BitArray) {
    assert!(
        other.bit_length <= target.bit_length,
        "right-hand side has {} bits, target only {}",
        other.bit_length,
        target.bit_length
    );
}
