use crate::bit::standard_types::support_iterator;
use crate::{BitLength, Bitwise, BitwiseMut, IntoBitIterator};
use std::iter::Copied;

// Bit traits for [bool] and Vec<bool>

impl<'life> IntoBitIterator for &'life [bool] {
    type BitIterator = Copied<<&'life [bool] as IntoIterator>::IntoIter>;
    fn iter_bits(self) -> Self::BitIterator {
        self.iter().copied()
    }
}

impl<'life> IntoBitIterator for &'life Vec<bool> {
    type BitIterator = Copied<<&'life [bool] as IntoIterator>::IntoIter>;
    fn iter_bits(self) -> Self::BitIterator {
        self.iter().copied()
    }
}

impl BitLength for Vec<bool> {
    #[inline]
    fn bit_len(&self) -> usize {
        self.len()
    }
}

impl BitLength for [bool] {
    #[inline]
    fn bit_len(&self) -> usize {
        self.len()
    }
}

impl Bitwise for [bool] {
    #[inline]
    fn index(&self, index: usize) -> bool {
        self[index]
    }

    #[inline]
    fn weight(&self) -> usize {
        self.iter().filter(|bit| **bit).count()
    }

    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        support_iterator(self.iter_bits())
    }
}

impl BitwiseMut for [bool] {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        self[index] = to;
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        self[index] = !self[index];
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.fill(false);
    }
}

impl Bitwise for Vec<bool> {
    #[inline]
    fn index(&self, index: usize) -> bool {
        self.as_slice().index(index)
    }

    #[inline]
    fn weight(&self) -> usize {
        self.as_slice().weight()
    }

    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        support_iterator(self.iter_bits())
    }
}

impl BitwiseMut for Vec<bool> {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        self.as_mut_slice().assign_index(index, to);
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        self.as_mut_slice().negate_index(index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.as_mut_slice().clear_bits();
    }
}
