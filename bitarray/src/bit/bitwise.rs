/// Read-only bit access shared by [`BitArray`](crate::BitArray) and plain `bool` containers.
///
/// See also [`BitwiseMut`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait Bitwise {
    fn index(&self, index: usize) -> bool;
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize>;
    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.support().next()
    }
    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.support().last()
    }
    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }
    #[inline]
    fn parity(&self) -> bool {
        (self.weight() % 2) == 1
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
    #[inline]
    fn is_unit(&self, index: usize) -> bool {
        self.weight() == 1 && self.index(index)
    }
}

/// See also [`Bitwise`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool);
    fn negate_index(&mut self, index: usize);
    fn clear_bits(&mut self);

    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        for j in 0..bit_count {
            self.assign_index(j, random_number_generator.r#gen());
        }
    }
}

/// Weights of pairwise combinations, taken over the common prefix of both operands.
///
/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePairMut`].
pub trait BitwisePair<Other: ?Sized = Self> {
    fn dot(&self, other: &Other) -> bool {
        self.and_weight(other) % 2 == 1
    }
    fn and_weight(&self, other: &Other) -> usize;
    fn or_weight(&self, other: &Other) -> usize;
    fn xor_weight(&self, other: &Other) -> usize;
}

/// In-place combination with a right-hand side no longer than `self`.
///
/// Only the first `other.bit_len()` bits of `self` are touched.
///
/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePair`].
pub trait BitwisePairMut<Other: ?Sized + Bitwise = Self>: Bitwise + BitwiseMut + BitwisePair<Other> {
    fn assign(&mut self, other: &Other);
    fn bitand_assign(&mut self, other: &Other);
    fn bitor_assign(&mut self, other: &Other);
    fn bitxor_assign(&mut self, other: &Other);

    fn assign_with_offset(&mut self, other: &Other, start_bit: usize, num_bits: usize) {
        for bit_index in 0..num_bits {
            self.assign_index(bit_index + start_bit, other.index(bit_index));
        }
    }

    fn assign_from_interval(&mut self, other: &Other, start_bit: usize, num_bits: usize) {
        for bit_index in 0..num_bits {
            self.assign_index(bit_index, other.index(start_bit + bit_index));
        }
    }
}

pub trait FromBits<Other: ?Sized> {
    fn from_bits(other: &Other) -> Self;
}

pub trait IntoBitIterator {
    type BitIterator: Iterator<Item = bool>;
    fn iter_bits(self) -> Self::BitIterator;
}

#[macro_export]
macro_rules! into_iterator_via_bit_iterator_body {
    ($type:ty) => {
        type Item = bool;
        type IntoIter = <$type as IntoBitIterator>::BitIterator;
        fn into_iter(self) -> Self::IntoIter {
            self.iter_bits()
        }
    };
}
pub use into_iterator_via_bit_iterator_body;

pub trait BitLength {
    fn bit_len(&self) -> usize;
}
