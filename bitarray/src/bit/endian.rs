use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use derive_more::Display;

use crate::{BitArrayError, Result};

/// Bit ordering within a storage byte.
///
/// With [`Endian::Little`] bit index 0 of a byte is its least-significant bit,
/// with [`Endian::Big`] it is the most-significant bit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Endian {
    #[display("little")]
    Little = 0,
    #[display("big")]
    Big = 1,
}

impl Endian {
    #[must_use]
    pub fn opposite(self) -> Endian {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }

    fn from_repr(value: u8) -> Endian {
        if value == Endian::Little as u8 {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}

impl Default for Endian {
    fn default() -> Self {
        default_endian()
    }
}

impl FromStr for Endian {
    type Err = BitArrayError;

    fn from_str(text: &str) -> Result<Self> {
        match text {
            "little" => Ok(Endian::Little),
            "big" => Ok(Endian::Big),
            _ => Err(BitArrayError::InvalidArgument(format!(
                "bit endianness must be either 'little' or 'big', not '{text}'"
            ))),
        }
    }
}

static DEFAULT_ENDIAN: AtomicU8 = AtomicU8::new(Endian::Big as u8);

/// Endianness used by constructors that are not given one explicitly.
#[must_use]
pub fn default_endian() -> Endian {
    Endian::from_repr(DEFAULT_ENDIAN.load(Ordering::Relaxed))
}

/// Changes the process-wide default endianness.
///
/// Arrays that already exist keep their endianness. Concurrent constructors observe either
/// the previous or the new value.
pub fn set_default_endian(endian: Endian) {
    let previous = Endian::from_repr(DEFAULT_ENDIAN.swap(endian as u8, Ordering::Relaxed));
    tracing::debug!(%previous, current = %endian, "default bit endianness changed");
}
