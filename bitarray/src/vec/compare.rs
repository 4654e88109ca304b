use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use derive_more::Display;

use crate::bit::tables::REVERSE_TABLE;
use crate::{BitArray, Endian};

/// The six comparison relations accepted by [`BitArray::compare`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Relation {
    #[display("<")]
    Lt,
    #[display("<=")]
    Le,
    #[display("==")]
    Eq,
    #[display("!=")]
    Ne,
    #[display(">")]
    Gt,
    #[display(">=")]
    Ge,
}

impl Relation {
    #[must_use]
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Lt => ordering.is_lt(),
            Relation::Le => ordering.is_le(),
            Relation::Eq => ordering.is_eq(),
            Relation::Ne => ordering.is_ne(),
            Relation::Gt => ordering.is_gt(),
            Relation::Ge => ordering.is_ge(),
        }
    }
}

impl BitArray {
    /// Evaluates `self <relation> other` on logical bit values.
    ///
    /// # Example
    ///
    /// ```
    /// use bitarray::{BitArray, Endian, Relation};
    ///
    /// let shorter = BitArray::from_text("101", Endian::Little).unwrap();
    /// let longer = BitArray::from_text("1010", Endian::Big).unwrap();
    /// assert!(shorter.compare(&longer, Relation::Lt));
    /// assert!(longer.compare(&shorter, Relation::Ne));
    /// assert!(!shorter.compare(&longer, Relation::Ge));
    /// ```
    #[must_use]
    pub fn compare(&self, other: &BitArray, relation: Relation) -> bool {
        match relation {
            Relation::Eq => self == other,
            Relation::Ne => self != other,
            _ => relation.holds(self.cmp(other)),
        }
    }

    /// Number of leading whole bytes both arrays store identically, when endianness matches.
    fn equal_leading_bytes(&self, other: &BitArray, whole: usize) -> usize {
        if self.endian != other.endian {
            return 0;
        }
        self.bytes[..whole]
            .iter()
            .zip(&other.bytes[..whole])
            .position(|(left, right)| left != right)
            .unwrap_or(whole)
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        if self.bit_length != other.bit_length {
            return false;
        }
        if self.endian == other.endian {
            let whole = self.bit_length / 8;
            self.bytes[..whole] == other.bytes[..whole] && self.zeroed_last_byte() == other.zeroed_last_byte()
        } else {
            self.iter().eq(other.iter())
        }
    }
}

impl Eq for BitArray {}

impl Ord for BitArray {
    fn cmp(&self, other: &Self) -> Ordering {
        let common = self.bit_length.min(other.bit_length);
        let start = 8 * self.equal_leading_bytes(other, common / 8);
        (start..common)
            .map(|index| self.bit(index).cmp(&other.bit(index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.bit_length.cmp(&other.bit_length))
    }
}

impl PartialOrd for BitArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hashes the length and the bytes as a big-endian array would store them, so arrays that
/// compare equal hash equally regardless of endianness.
impl Hash for BitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bit_length.hash(state);
        let Some((_, whole)) = self.bytes.split_last() else {
            return;
        };
        let canonical = |byte: u8| match self.endian {
            Endian::Big => byte,
            Endian::Little => REVERSE_TABLE[usize::from(byte)],
        };
        for &byte in whole {
            state.write_u8(canonical(byte));
        }
        state.write_u8(canonical(self.zeroed_last_byte()));
    }
}
