use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::bit::tables::bit_length_to_byte_length;
use crate::{BitArray, Endian, MAX_BIT_LENGTH};

#[derive(Serialize, Deserialize)]
struct BitArrayRepr {
    endian: Endian,
    length: usize,
    bytes: Vec<u8>,
}

impl Serialize for BitArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BitArrayRepr {
            endian: self.endian,
            length: self.bit_length,
            bytes: self.to_bytes(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BitArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = BitArrayRepr::deserialize(deserializer)?;
        if repr.length > MAX_BIT_LENGTH {
            return Err(de::Error::custom(format!("bit length {} is too large", repr.length)));
        }
        let expected = bit_length_to_byte_length(repr.length);
        if repr.bytes.len() != expected {
            return Err(de::Error::invalid_length(
                repr.bytes.len(),
                &format!("{expected} bytes for {} bits", repr.length).as_str(),
            ));
        }
        let mut array = BitArray {
            bytes: repr.bytes,
            bit_length: repr.length,
            endian: repr.endian,
        };
        array.normalize_padding();
        Ok(array)
    }
}
