#[macro_use]
pub mod bitwise;

pub use bitwise::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, FromBits, IntoBitIterator};
pub use endian::{Endian, default_endian, set_default_endian};
pub use tables::{bit_length_to_byte_length, bits_to_bytes};

pub mod bool_containers;
pub mod endian;
pub mod standard_types;
pub mod tables;
