use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};

// Helper functions for primitive type implementations

pub fn support_iterator(iter: impl Iterator<Item = bool>) -> impl SortedIterator<Item = usize> {
    iter.enumerate()
        .filter(|pair| pair.1)
        .map(|pair| pair.0)
        .assume_sorted_by_item()
}
