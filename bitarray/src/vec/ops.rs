use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::vec::copy::Source;
use crate::{BitArray, BitArrayError, Result};

impl BitArray {
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if the lengths differ.
    pub fn try_bitand_assign(&mut self, other: &BitArray) -> Result<()> {
        self.check_same_length(other)?;
        self.combine_prefix(other, |left, right| left & right);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if the lengths differ.
    pub fn try_bitor_assign(&mut self, other: &BitArray) -> Result<()> {
        self.check_same_length(other)?;
        self.combine_prefix(other, |left, right| left | right);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidArgument`] if the lengths differ.
    pub fn try_bitxor_assign(&mut self, other: &BitArray) -> Result<()> {
        self.check_same_length(other)?;
        self.combine_prefix(other, |left, right| left ^ right);
        Ok(())
    }

    /// Moves every bit `count` positions toward index 0; the vacated end reads zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian};
    ///
    /// let mut bits = BitArray::from_text("1100111", Endian::Little).unwrap();
    /// bits.shift_toward_start(2);
    /// assert_eq!(bits.to01(), "0011100");
    /// bits.shift_toward_end(3);
    /// assert_eq!(bits.to01(), "0000011");
    /// ```
    pub fn shift_toward_start(&mut self, count: usize) {
        let length = self.bit_length;
        let count = count.min(length);
        self.copy_n(0, Source::Within, count, length - count);
        self.assign_range(length - count, length, false);
    }

    /// Moves every bit `count` positions toward the end; the vacated start reads zero.
    pub fn shift_toward_end(&mut self, count: usize) {
        let length = self.bit_length;
        let count = count.min(length);
        self.copy_n(count, Source::Within, 0, length - count);
        self.assign_range(0, count, false);
    }

    fn check_same_length(&self, other: &BitArray) -> Result<()> {
        if self.bit_length == other.bit_length {
            Ok(())
        } else {
            Err(BitArrayError::InvalidArgument(format!(
                "bit arrays of equal length expected, got {} and {}",
                self.bit_length, other.bit_length
            )))
        }
    }
}

macro_rules! bitwise_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        /// # Panics
        ///
        /// Panics if the lengths differ.
        impl $assign_trait<&BitArray> for BitArray {
            fn $assign_method(&mut self, other: &BitArray) {
                self.$checked(other).unwrap_or_else(|error| panic!("{error}"));
            }
        }

        impl $trait<&BitArray> for BitArray {
            type Output = BitArray;
            fn $method(mut self, other: &BitArray) -> BitArray {
                $assign_trait::$assign_method(&mut self, other);
                self
            }
        }

        impl $trait<&BitArray> for &BitArray {
            type Output = BitArray;
            fn $method(self, other: &BitArray) -> BitArray {
                $trait::$method(self.clone(), other)
            }
        }
    };
}

bitwise_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, try_bitand_assign);
bitwise_operator!(BitOr, bitor, BitOrAssign, bitor_assign, try_bitor_assign);
bitwise_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, try_bitxor_assign);

impl Not for BitArray {
    type Output = BitArray;
    fn not(mut self) -> BitArray {
        self.invert();
        self
    }
}

impl Not for &BitArray {
    type Output = BitArray;
    fn not(self) -> BitArray {
        !self.clone()
    }
}

/// Shift toward index 0.
impl ShlAssign<usize> for BitArray {
    fn shl_assign(&mut self, count: usize) {
        self.shift_toward_start(count);
    }
}

/// Shift toward the end.
impl ShrAssign<usize> for BitArray {
    fn shr_assign(&mut self, count: usize) {
        self.shift_toward_end(count);
    }
}

impl Shl<usize> for &BitArray {
    type Output = BitArray;
    fn shl(self, count: usize) -> BitArray {
        let mut array = self.clone();
        array <<= count;
        array
    }
}

impl Shr<usize> for &BitArray {
    type Output = BitArray;
    fn shr(self, count: usize) -> BitArray {
        let mut array = self.clone();
        array >>= count;
        array
    }
}

/// Concatenation.
///
/// # Panics
///
/// Panics if the combined length exceeds [`crate::MAX_BIT_LENGTH`].
impl AddAssign<&BitArray> for BitArray {
    fn add_assign(&mut self, other: &BitArray) {
        self.extend_bits(other).unwrap_or_else(|error| panic!("{error}"));
    }
}

impl Add<&BitArray> for &BitArray {
    type Output = BitArray;
    fn add(self, other: &BitArray) -> BitArray {
        let mut array = self.clone();
        array += other;
        array
    }
}

/// Repetition, see [`BitArray::repeated`].
///
/// # Panics
///
/// Panics if the repeated length exceeds [`crate::MAX_BIT_LENGTH`].
impl Mul<usize> for &BitArray {
    type Output = BitArray;
    fn mul(self, factor: usize) -> BitArray {
        self.repeated(factor).unwrap_or_else(|error| panic!("{error}"))
    }
}
