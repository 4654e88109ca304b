use std::ops::Range;

use crate::{BitArray, BitArrayError, Result};

impl BitArray {
    /// New array holding every `step`-th bit of `range`, in the same endianness.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `step == 0` and
    /// [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let bits = BitArray::from_text("0110100111", Endian::Big).unwrap();
    /// assert_eq!(bits.slice(2..9, 1).unwrap().to01(), "1010011");
    /// assert_eq!(bits.slice(0..10, 3).unwrap().to01(), "0001");
    /// ```
    pub fn slice(&self, range: Range<usize>, step: usize) -> Result<BitArray> {
        self.check_slice(&range, step)?;
        if step == 1 {
            let mut array = BitArray::zeros(range.len(), self.endian);
            array.copy_from_unchecked(0, self, range.start, range.len());
            return Ok(array);
        }
        let mut array = BitArray::with_endian(self.endian);
        array.extend(range.step_by(step).map(|index| self.bit(index)));
        Ok(array)
    }

    /// Replaces every `step`-th bit of `range` with the bits of `value`.
    ///
    /// With `step == 1` the range is replaced as a whole and `value` may have any length, so
    /// the array grows or shrinks. Otherwise `value` must have exactly one bit per selected
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `step == 0` or the lengths disagree, and
    /// [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::from_text("000000", Endian::Little).unwrap();
    /// let ones = BitArray::ones(4, Endian::Big);
    /// bits.set_slice(1..3, 1, &ones).unwrap();
    /// assert_eq!(bits.to01(), "01111000");
    /// bits.set_slice(0..8, 4, &BitArray::ones(2, Endian::Big)).unwrap();
    /// assert_eq!(bits.to01(), "11111000");
    /// ```
    pub fn set_slice(&mut self, range: Range<usize>, step: usize, value: &BitArray) -> Result<()> {
        self.check_slice(&range, step)?;
        if step == 1 {
            let (start, replaced, inserted) = (range.start, range.len(), value.bit_length);
            if inserted > replaced {
                self.grown_length(inserted - replaced)?;
                self.insert_n(range.end, inserted - replaced);
            } else {
                self.delete_n(start + inserted, replaced - inserted);
            }
            self.copy_from_unchecked(start, value, 0, inserted);
            return Ok(());
        }
        let selected = range.len().div_ceil(step);
        if selected != value.bit_length {
            return Err(BitArrayError::InvalidArgument(format!(
                "attempt to assign sequence of size {} to extended slice of size {selected}",
                value.bit_length
            )));
        }
        for (offset, index) in range.step_by(step).enumerate() {
            self.assign_bit(index, value.bit(offset));
        }
        Ok(())
    }

    /// Sets every `step`-th bit of `range` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `step == 0` and
    /// [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn set_slice_value(&mut self, range: Range<usize>, step: usize, value: bool) -> Result<()> {
        self.check_slice(&range, step)?;
        if step == 1 {
            self.assign_range(range.start, range.end, value);
        } else {
            for index in range.step_by(step) {
                self.assign_bit(index, value);
            }
        }
        Ok(())
    }

    /// Removes every `step`-th bit of `range`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `step == 0` and
    /// [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn delete_slice(&mut self, range: Range<usize>, step: usize) -> Result<()> {
        self.check_slice(&range, step)?;
        if step == 1 {
            self.delete_n(range.start, range.len());
            return Ok(());
        }
        let mut write = range.start;
        for read in range.start..self.bit_length {
            if range.contains(&read) && (read - range.start) % step == 0 {
                continue;
            }
            let value = self.bit(read);
            self.assign_bit(write, value);
            write += 1;
        }
        self.resize(write);
        Ok(())
    }

    fn check_slice(&self, range: &Range<usize>, step: usize) -> Result<()> {
        if step == 0 {
            return Err(BitArrayError::InvalidArgument("slice step cannot be zero".to_owned()));
        }
        self.check_range(range)
    }
}
