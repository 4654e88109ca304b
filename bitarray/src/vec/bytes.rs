use std::fmt;
use std::str::FromStr;

use crate::{BitArray, BitArrayError, Endian, Result, default_endian};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl BitArray {
    /// Storage bytes with pad bits cleared, `ceil(len() / 8)` of them.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.bytes.clone();
        if let Some(last) = bytes.last_mut() {
            *last = self.zeroed_last_byte();
        }
        bytes
    }

    /// Creates an array holding every bit of `data`, read in `endian` order.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if `data` holds more bits than a [`BitArray`] can.
    pub fn from_bytes(data: &[u8], endian: Endian) -> Result<BitArray> {
        let mut array = BitArray::with_endian(endian);
        array.extend_from_bytes(data)?;
        Ok(array)
    }

    /// Appends every bit of `data`, interpreting the bytes in this array's endianness.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if the result would exceed [`crate::MAX_BIT_LENGTH`].
    pub fn extend_from_bytes(&mut self, data: &[u8]) -> Result<()> {
        let additional = data
            .len()
            .checked_mul(8)
            .ok_or_else(|| BitArrayError::Overflow(format!("{} bytes do not fit a bit array", data.len())))?;
        let length = self.bit_length;
        self.grown_length(additional.saturating_add(self.padding()))?;
        let padding = self.fill();
        self.bytes.extend_from_slice(data);
        self.bit_length += additional;
        self.delete_n(length, padding);
        Ok(())
    }

    /// Appends one bit per byte of `data`: zero becomes 0, anything else 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Overflow`] if the result would exceed [`crate::MAX_BIT_LENGTH`].
    pub fn pack(&mut self, data: &[u8]) -> Result<()> {
        let start = self.bit_length;
        let new_length = self.grown_length(data.len())?;
        self.resize(new_length);
        for (offset, &byte) in data.iter().enumerate() {
            self.assign_bit(start + offset, byte != 0);
        }
        Ok(())
    }

    /// One byte per bit: `zero` for 0 bits and `one` for 1 bits.
    #[must_use]
    pub fn unpack(&self, zero: u8, one: u8) -> Vec<u8> {
        self.iter().map(|bit| if bit { one } else { zero }).collect()
    }

    /// Creates an array from `0`/`1` text, see [`extend_text`](BitArray::extend_text).
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidFormat`] on the first character that is neither a
    /// digit nor a separator.
    pub fn from_text(text: &str, endian: Endian) -> Result<BitArray> {
        let mut array = BitArray::with_endian(endian);
        array.extend_text(text)?;
        Ok(array)
    }

    /// Appends the bits spelled by `text`. `_` and ASCII whitespace are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidFormat`] on the first other character. The array is left
    /// as it was before the call.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, BitArrayError, Endian};
    ///
    /// let mut bits = BitArray::with_endian(Endian::Big);
    /// bits.extend_text("1010 0001_1").unwrap();
    /// assert_eq!(bits.len(), 9);
    ///
    /// let error = bits.extend_text("101X01").unwrap_err();
    /// assert_eq!(error, BitArrayError::InvalidFormat { character: 'X', code_point: 0x58 });
    /// assert_eq!(bits.len(), 9);
    /// ```
    pub fn extend_text(&mut self, text: &str) -> Result<()> {
        let start = self.bit_length;
        self.bytes.reserve(text.len() / 8);
        for character in text.chars() {
            match character {
                '0' => self.push(false),
                '1' => self.push(true),
                '_' | ' ' | '\n' | '\r' | '\t' | '\x0b' => {}
                _ => {
                    self.resize(start);
                    tracing::debug!(?character, "rejected text character, extension rolled back");
                    return Err(BitArrayError::invalid_character(character));
                }
            }
        }
        Ok(())
    }

    /// The bits as a string of `0` and `1`.
    #[must_use]
    pub fn to01(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    /// Hexadecimal rendering, four bits per digit.
    ///
    /// Within each byte the digit holding the first four bits comes first: the high nibble
    /// for [`Endian::Big`], the low nibble for [`Endian::Little`].
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if `len()` is not a multiple of 4.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let big = BitArray::from_text("0001 1010 1111", Endian::Big).unwrap();
    /// assert_eq!(big.to_hex().unwrap(), "1af");
    /// let little = BitArray::from_text("1000 0101 1111", Endian::Little).unwrap();
    /// assert_eq!(little.to_hex().unwrap(), "1af");
    /// ```
    pub fn to_hex(&self) -> Result<String> {
        if self.bit_length % 4 != 0 {
            return Err(BitArrayError::InvalidArgument(format!(
                "bit length {} is not a multiple of 4",
                self.bit_length
            )));
        }
        let mut text = String::with_capacity(self.bit_length / 4 + 1);
        for byte in self.to_bytes() {
            let (high, low) = (byte >> 4, byte & 0x0f);
            let (first, second) = match self.endian {
                Endian::Big => (high, low),
                Endian::Little => (low, high),
            };
            text.push(char::from(HEX_DIGITS[usize::from(first)]));
            text.push(char::from(HEX_DIGITS[usize::from(second)]));
        }
        text.truncate(self.bit_length / 4);
        Ok(text)
    }

    /// Parses hexadecimal digits (either case) as produced by [`to_hex`](BitArray::to_hex).
    /// ASCII whitespace is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] on a character that is not a hex digit.
    pub fn from_hex(text: &str, endian: Endian) -> Result<BitArray> {
        let mut nibbles = Vec::with_capacity(text.len());
        for character in text.chars().filter(|character| !character.is_ascii_whitespace()) {
            let nibble = character
                .to_digit(16)
                .ok_or_else(|| BitArrayError::InvalidArgument(format!("non-hexadecimal digit {character:?}")))?;
            nibbles.push(nibble as u8);
        }
        let bytes = nibbles
            .chunks(2)
            .map(|pair| {
                let first = pair[0];
                let second = pair.get(1).copied().unwrap_or(0);
                match endian {
                    Endian::Big => first << 4 | second,
                    Endian::Little => second << 4 | first,
                }
            })
            .collect();
        Ok(BitArray {
            bytes,
            bit_length: 4 * nibbles.len(),
            endian,
        })
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BitArray")
            .field("endian", &self.endian)
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}

/// Parses `0`/`1` text in the process default endianness.
impl FromStr for BitArray {
    type Err = BitArrayError;

    fn from_str(text: &str) -> Result<Self> {
        BitArray::from_text(text, default_endian())
    }
}
