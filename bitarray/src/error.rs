use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} out of range for bit array of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    #[error("expected '0', '1' or a separator, found {character:?} (code point {code_point:#x})")]
    InvalidFormat { character: char, code_point: u32 },
    #[error("bit length overflow: {0}")]
    Overflow(String),
}

impl BitArrayError {
    pub(crate) fn invalid_character(character: char) -> Self {
        BitArrayError::InvalidFormat {
            character,
            code_point: u32::from(character),
        }
    }
}

pub type Result<T> = std::result::Result<T, BitArrayError>;
