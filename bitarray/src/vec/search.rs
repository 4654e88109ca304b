use std::iter::FusedIterator;
use std::ops::Range;

use crate::{BitArray, BitArrayError, Result};

impl BitArray {
    /// Index of the first bit equal to `value`.
    #[must_use]
    pub fn find(&self, value: bool) -> Option<usize> {
        self.find_bit(value, 0, self.bit_length)
    }

    /// Index of the last bit equal to `value`.
    #[must_use]
    pub fn rfind(&self, value: bool) -> Option<usize> {
        self.rfind_bit(value, 0, self.bit_length)
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn find_in(&self, value: bool, range: Range<usize>) -> Result<Option<usize>> {
        self.check_range(&range)?;
        Ok(self.find_bit(value, range.start, range.end))
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn rfind_in(&self, value: bool, range: Range<usize>) -> Result<Option<usize>> {
        self.check_range(&range)?;
        Ok(self.rfind_bit(value, range.start, range.end))
    }

    /// Like [`find`](BitArray::find), but a missing value is an error.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if no bit equals `value`.
    pub fn index_of(&self, value: bool) -> Result<usize> {
        self.find(value)
            .ok_or_else(|| BitArrayError::InvalidArgument(format!("{} is not in bit array", u8::from(value))))
    }

    /// Start of the first occurrence of `needle` lying entirely within `range`. An empty
    /// needle matches at `range.start`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let haystack = BitArray::from_text("0010110110", Endian::Little).unwrap();
    /// let needle = BitArray::from_text("101", Endian::Big).unwrap();
    /// assert_eq!(haystack.find_sequence(&needle, 0..10).unwrap(), Some(2));
    /// assert_eq!(haystack.find_sequence(&needle, 3..10).unwrap(), Some(5));
    /// assert_eq!(haystack.find_sequence(&needle, 3..6).unwrap(), None);
    /// ```
    pub fn find_sequence(&self, needle: &BitArray, range: Range<usize>) -> Result<Option<usize>> {
        self.check_range(&range)?;
        Ok(self.find_subsequence(needle, range.start, range.end))
    }

    /// `true` if `needle` occurs anywhere in the array.
    #[must_use]
    pub fn contains(&self, needle: &BitArray) -> bool {
        self.find_subsequence(needle, 0, self.bit_length).is_some()
    }

    /// All start positions of `needle`, overlapping matches included.
    ///
    /// An empty needle matches at every position `0..=len()`.
    pub fn search<'life>(&'life self, needle: &'life BitArray) -> Search<'life> {
        Search {
            haystack: self,
            needle,
            position: 0,
        }
    }
}

/// Iterator over match positions, created by [`BitArray::search`].
#[derive(Clone)]
pub struct Search<'life> {
    haystack: &'life BitArray,
    needle: &'life BitArray,
    position: usize,
}

impl Iterator for Search<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let length = self.haystack.bit_length;
        if self.position > length {
            return None;
        }
        match self.haystack.find_subsequence(self.needle, self.position, length) {
            Some(found) => {
                self.position = found + 1;
                Some(found)
            }
            None => {
                self.position = length + 1;
                None
            }
        }
    }
}

impl FusedIterator for Search<'_> {}

// Engine
impl BitArray {
    pub(crate) fn find_bit(&self, value: bool, start: usize, stop: usize) -> Option<usize> {
        if start >= stop {
            return None;
        }
        let matches = |index: &usize| self.bit(*index) == value;
        if stop - start < 8 {
            return (start..stop).find(matches);
        }
        let (first, last) = (start.div_ceil(8), stop / 8);
        if let Some(index) = (start..8 * first).find(matches) {
            return Some(index);
        }
        let skip = if value { 0x00 } else { 0xff };
        if let Some(offset) = self.bytes[first..last].iter().position(|&byte| byte != skip) {
            let byte_start = 8 * (first + offset);
            return (byte_start..byte_start + 8).find(matches);
        }
        (8 * last..stop).find(matches)
    }

    pub(crate) fn rfind_bit(&self, value: bool, start: usize, stop: usize) -> Option<usize> {
        if start >= stop {
            return None;
        }
        let matches = |index: &usize| self.bit(*index) == value;
        if stop - start < 8 {
            return (start..stop).rev().find(matches);
        }
        let (first, last) = (start.div_ceil(8), stop / 8);
        if let Some(index) = (8 * last..stop).rev().find(matches) {
            return Some(index);
        }
        let skip = if value { 0x00 } else { 0xff };
        if let Some(offset) = self.bytes[first..last].iter().rposition(|&byte| byte != skip) {
            let byte_start = 8 * (first + offset);
            return (byte_start..byte_start + 8).rev().find(matches);
        }
        (start..8 * first).rev().find(matches)
    }

    /// Sliding-window search, using [`find_bit`](BitArray::find_bit) to jump to candidate
    /// starts.
    pub(crate) fn find_subsequence(&self, needle: &BitArray, start: usize, stop: usize) -> Option<usize> {
        let needle_length = needle.bit_length;
        match needle_length {
            0 => return (start <= stop).then_some(start),
            1 => return self.find_bit(needle.bit(0), start, stop),
            _ => {}
        }
        let last_start = stop.checked_sub(needle_length)?;
        let leading = needle.bit(0);
        let mut position = start;
        while position <= last_start {
            position = self.find_bit(leading, position, last_start + 1)?;
            if (1..needle_length).all(|offset| self.bit(position + offset) == needle.bit(offset)) {
                return Some(position);
            }
            position += 1;
        }
        None
    }
}
