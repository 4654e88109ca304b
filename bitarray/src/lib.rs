pub mod bit;
pub use bit::{
    BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, Endian, FromBits, IntoBitIterator,
    bit_length_to_byte_length, bits_to_bytes, default_endian, set_default_endian,
};

pub mod error;
pub use error::{BitArrayError, Result};

pub mod vec;
pub use vec::{BitArray, Bits, BufferInfo, ExtendSource, Initial, Relation, Search, SetBits};

#[cfg(feature = "serde")]
mod serde;

/// Largest bit length a [`BitArray`] may reach.
///
/// Keeping lengths below `isize::MAX` leaves headroom for index arithmetic such as `start + count`.
pub const MAX_BIT_LENGTH: usize = isize::MAX as usize;
