mod bitarray;
mod bits;
mod bytes;
mod compare;
mod copy;
mod ops;
mod range;
mod search;
mod slice;

pub use bitarray::{BitArray, BufferInfo, ExtendSource, Initial};
pub use bits::{Bits, SetBits};
pub use compare::Relation;
pub use search::Search;
