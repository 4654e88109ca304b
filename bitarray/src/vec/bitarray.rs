use crate::bit::tables::{bit_length_to_byte_length, bit_mask, byte_and_bit_index, leading_mask};
use crate::{BitArrayError, Endian, FromBits, MAX_BIT_LENGTH, Result, default_endian};

/// Initial contents accepted by [`BitArray::new`].
#[derive(Clone, Copy, Debug)]
pub enum Initial<'life> {
    Empty,
    /// Pre-sized, all bits zero.
    Length(usize),
    Bits(&'life BitArray),
    /// `0`/`1` characters, see [`BitArray::extend_text`].
    Text(&'life str),
    /// One value per bit, each `0` or `1`.
    Values(&'life [u8]),
}

/// Input kinds [`BitArray::extend_from`] dispatches on.
#[derive(Clone, Copy, Debug)]
pub enum ExtendSource<'life> {
    Bits(&'life BitArray),
    Text(&'life str),
    Values(&'life [u8]),
}

/// Layout of the backing buffer, as reported by [`BitArray::buffer_info`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferInfo {
    pub byte_length: usize,
    /// Unused bits at the end of the last byte.
    pub padding: usize,
    pub endian: Endian,
    /// Allocated bytes.
    pub capacity: usize,
}

/// A growable sequence of bits packed eight to a byte.
///
/// The order of bits inside each storage byte is given by the array's [`Endian`]. It only
/// matters when bytes cross the API boundary ([`to_bytes`](BitArray::to_bytes),
/// [`from_bytes`](BitArray::from_bytes), [`as_bytes`](BitArray::as_bytes)); indexing,
/// comparison and hashing work on logical bit values, so arrays of different endianness
/// holding the same bits are equal.
///
/// # Construction
///
/// ```
/// use bitarray::{BitArray, Endian, Initial};
///
/// let zeros = BitArray::zeros(10, Endian::Little);
/// let parsed: BitArray = "1011_0010".parse().unwrap();
/// let from_values = BitArray::new(Initial::Values(&[1, 0, 1]), Some(Endian::Big)).unwrap();
/// let collected: BitArray = [true, false, true].into_iter().collect();
///
/// assert_eq!(zeros.len(), 10);
/// assert_eq!(parsed.to01(), "10110010");
/// assert_eq!(from_values, collected);
/// ```
///
/// # Sequence operations
///
/// ```
/// use bitarray::{BitArray, Endian};
///
/// let mut bits = BitArray::from_text("10110", Endian::Big).unwrap();
/// bits.insert(0, true).unwrap();
/// assert_eq!(bits.to01(), "110110");
/// bits.delete_range(1..3).unwrap();
/// assert_eq!(bits.to01(), "1110");
/// bits.repeat(2).unwrap();
/// assert_eq!(bits.to01(), "11101110");
/// assert_eq!(bits.count(false), 2);
/// assert_eq!(bits.find(false), Some(3));
/// ```
///
/// # Bytes
///
/// ```
/// use bitarray::{BitArray, Endian};
///
/// let little = BitArray::from_text("101", Endian::Little).unwrap();
/// let big = BitArray::from_text("101", Endian::Big).unwrap();
/// assert_eq!(little.to_bytes(), vec![0x05]);
/// assert_eq!(big.to_bytes(), vec![0xa0]);
/// assert_eq!(little, big);
/// ```
#[must_use]
#[derive(Clone)]
pub struct BitArray {
    pub(crate) bytes: Vec<u8>,
    pub(crate) bit_length: usize,
    pub(crate) endian: Endian,
}

impl BitArray {
    /// Creates an array from `initial`, using the process default endianness when `endian`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Fails like the matching `extend_*` method for text and value input, and with
    /// [`BitArrayError::Overflow`] if a requested length exceeds [`MAX_BIT_LENGTH`].
    pub fn new(initial: Initial<'_>, endian: Option<Endian>) -> Result<BitArray> {
        let mut array = BitArray::with_endian(endian.unwrap_or_else(default_endian));
        match initial {
            Initial::Empty => {}
            Initial::Length(length) => {
                array.grown_length(length)?;
                array.resize(length);
            }
            Initial::Bits(bits) => array.extend_bits(bits)?,
            Initial::Text(text) => array.extend_text(text)?,
            Initial::Values(values) => array.extend_values(values)?,
        }
        Ok(array)
    }

    /// Creates an empty array.
    pub fn with_endian(endian: Endian) -> BitArray {
        BitArray {
            bytes: Vec::new(),
            bit_length: 0,
            endian,
        }
    }

    /// Creates an array of `length` zero bits.
    pub fn zeros(length: usize, endian: Endian) -> BitArray {
        BitArray {
            bytes: vec![0; bit_length_to_byte_length(length)],
            bit_length: length,
            endian,
        }
    }

    /// Creates an array of `length` one bits.
    pub fn ones(length: usize, endian: Endian) -> BitArray {
        let mut array = BitArray {
            bytes: vec![0xff; bit_length_to_byte_length(length)],
            bit_length: length,
            endian,
        };
        array.normalize_padding();
        array
    }

    /// Returns a copy of this array stored with the given endianness.
    pub fn to_endian(&self, endian: Endian) -> BitArray {
        let mut array = BitArray::zeros(self.bit_length, endian);
        array.copy_from_unchecked(0, self, 0, self.bit_length);
        array
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    #[must_use]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    #[must_use]
    pub fn buffer_info(&self) -> BufferInfo {
        BufferInfo {
            byte_length: self.bytes.len(),
            padding: self.padding(),
            endian: self.endian,
            capacity: self.bytes.capacity(),
        }
    }

    /// Raw storage. Pad bits are unspecified unless [`normalize_padding`](BitArray::normalize_padding)
    /// was called after the last mutation; use [`to_bytes`](BitArray::to_bytes) for a normalized copy.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.assign_bit(index, value);
        Ok(())
    }

    /// Appends one bit.
    pub fn push(&mut self, value: bool) {
        let index = self.bit_length;
        self.resize(index + 1);
        self.assign_bit(index, value);
    }

    /// Removes and returns the bit at `index`, or the last bit when `index` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the array is empty or `index >= len()`.
    pub fn pop(&mut self, index: Option<usize>) -> Result<bool> {
        let index = match index {
            Some(index) => index,
            None => self.bit_length.checked_sub(1).ok_or(BitArrayError::IndexOutOfRange {
                index: 0,
                length: 0,
            })?,
        };
        self.check_index(index)?;
        let value = self.bit(index);
        self.delete_n(index, 1);
        Ok(value)
    }

    /// Inserts `value` before position `index`; `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: bool) -> Result<()> {
        if index > self.bit_length {
            return Err(self.out_of_range(index));
        }
        self.grown_length(1)?;
        self.insert_n(index, 1);
        self.assign_bit(index, value);
        Ok(())
    }

    /// Removes the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.delete_n(index, 1);
        Ok(())
    }

    /// Removes the bits in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfRange`] if the range is inverted or ends past `len()`.
    pub fn delete_range(&mut self, range: std::ops::Range<usize>) -> Result<()> {
        self.check_range(&range)?;
        self.delete_n(range.start, range.end - range.start);
        Ok(())
    }

    /// Removes the first occurrence of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `value` does not occur.
    pub fn remove_value(&mut self, value: bool) -> Result<()> {
        let index = self
            .find_bit(value, 0, self.bit_length)
            .ok_or_else(|| BitArrayError::InvalidArgument(format!("{} not in bit array", u8::from(value))))?;
        self.delete_n(index, 1);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.resize(0);
    }

    /// Shortens the array to `length` bits; does nothing if it is already shorter.
    pub fn truncate(&mut self, length: usize) {
        if length < self.bit_length {
            self.resize(length);
        }
    }

    /// Resizes the array, preserving existing bits. New bits are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::ones(3, Endian::Little);
    /// bits.resize(6);
    /// assert_eq!(bits.to01(), "111000");
    /// ```
    pub fn resize(&mut self, new_length: usize) {
        debug_assert!(new_length <= MAX_BIT_LENGTH);
        if new_length > self.bit_length {
            self.normalize_padding();
        }
        self.bytes.resize(bit_length_to_byte_length(new_length), 0);
        self.bit_length = new_length;
    }

    /// Sets every bit to `value`.
    pub fn setall(&mut self, value: bool) {
        let fill = if value { 0xff } else { 0x00 };
        self.bytes.fill(fill);
    }

    /// Extends the array with zero bits up to the next byte boundary and returns how many
    /// bits were added.
    pub fn fill(&mut self) -> usize {
        let padding = self.normalize_padding();
        self.bit_length += padding;
        padding
    }

    /// Clears the pad bits of the last byte and returns how many there are.
    pub fn normalize_padding(&mut self) -> usize {
        let padding = self.padding();
        if padding > 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] = self.zeroed_last_byte();
        }
        padding
    }

    /// Appends the bits of `other`, converting endianness if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if the result would exceed [`MAX_BIT_LENGTH`].
    pub fn extend_bits(&mut self, other: &BitArray) -> Result<()> {
        let start = self.bit_length;
        let new_length = self.grown_length(other.bit_length)?;
        self.resize(new_length);
        self.copy_from_unchecked(start, other, 0, other.bit_length);
        Ok(())
    }

    /// Appends one bit per value; every value must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] for any other value, leaving the array unchanged.
    pub fn extend_values(&mut self, values: &[u8]) -> Result<()> {
        let start = self.bit_length;
        let new_length = self.grown_length(values.len())?;
        self.resize(new_length);
        for (offset, &value) in values.iter().enumerate() {
            match value {
                0 | 1 => self.assign_bit(start + offset, value == 1),
                _ => {
                    self.resize(start);
                    tracing::debug!(value, offset, "rejected bit value, extension rolled back");
                    return Err(BitArrayError::InvalidArgument(format!(
                        "bit values must be 0 or 1, got {value} at offset {offset}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Extends from any supported input kind.
    ///
    /// # Errors
    ///
    /// See [`extend_bits`](BitArray::extend_bits), [`extend_text`](BitArray::extend_text) and
    /// [`extend_values`](BitArray::extend_values).
    pub fn extend_from(&mut self, source: ExtendSource<'_>) -> Result<()> {
        match source {
            ExtendSource::Bits(bits) => self.extend_bits(bits),
            ExtendSource::Text(text) => self.extend_text(text),
            ExtendSource::Values(values) => self.extend_values(values),
        }
    }

    #[must_use]
    pub fn tolist(&self) -> Vec<bool> {
        self.iter().collect()
    }
}

// Engine primitives. Indices are assumed valid here; the public methods above check them.
impl BitArray {
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.bit_length, "bit {index} of {}", self.bit_length);
        let (byte_index, bit_index) = byte_and_bit_index(index);
        self.bytes[byte_index] & bit_mask(self.endian, bit_index) != 0
    }

    #[inline]
    pub(crate) fn assign_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.bit_length, "bit {index} of {}", self.bit_length);
        let (byte_index, bit_index) = byte_and_bit_index(index);
        let mask = bit_mask(self.endian, bit_index);
        if value {
            self.bytes[byte_index] |= mask;
        } else {
            self.bytes[byte_index] &= !mask;
        }
    }

    #[inline]
    pub(crate) fn padding(&self) -> usize {
        self.bytes.len() * 8 - self.bit_length
    }

    /// Last storage byte with its pad bits cleared, without touching the array.
    pub(crate) fn zeroed_last_byte(&self) -> u8 {
        match self.bytes.last() {
            None => 0,
            Some(&last) => match self.bit_length % 8 {
                0 => last,
                used => last & leading_mask(self.endian, used),
            },
        }
    }

    pub(crate) fn grown_length(&self, additional: usize) -> Result<usize> {
        self.bit_length
            .checked_add(additional)
            .filter(|length| *length <= MAX_BIT_LENGTH)
            .ok_or_else(|| {
                BitArrayError::Overflow(format!(
                    "cannot grow {} bits by {additional} bits",
                    self.bit_length
                ))
            })
    }

    pub(crate) fn out_of_range(&self, index: usize) -> BitArrayError {
        BitArrayError::IndexOutOfRange {
            index,
            length: self.bit_length,
        }
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.bit_length {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    pub(crate) fn check_range(&self, range: &std::ops::Range<usize>) -> Result<()> {
        if range.end > self.bit_length {
            return Err(self.out_of_range(range.end));
        }
        if range.start > range.end {
            return Err(self.out_of_range(range.start));
        }
        Ok(())
    }
}

impl Default for BitArray {
    fn default() -> Self {
        BitArray::with_endian(default_endian())
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<Iterator: IntoIterator<Item = bool>>(iterator: Iterator) -> Self {
        let mut array = BitArray::default();
        array.extend(iterator);
        array
    }
}

impl Extend<bool> for BitArray {
    fn extend<Iterator: IntoIterator<Item = bool>>(&mut self, iterator: Iterator) {
        let iterator = iterator.into_iter();
        self.bytes.reserve(iterator.size_hint().0 / 8);
        for bit in iterator {
            self.push(bit);
        }
    }
}

impl FromBits<[bool]> for BitArray {
    fn from_bits(other: &[bool]) -> Self {
        other.iter().copied().collect()
    }
}

impl FromBits<BitArray> for Vec<bool> {
    fn from_bits(other: &BitArray) -> Self {
        other.tolist()
    }
}
