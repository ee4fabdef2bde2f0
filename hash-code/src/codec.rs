//! SCALE and serde representations of [`HashCode`].
//!
//! SCALE stores the raw bytes as a length-prefixed vector, serde uses the
//! canonical hex string so configs and JSON stay readable.
use parity_scale_codec::{Decode, Encode, EncodeLike, Error as CodecError, Input, Output};

use crate::hash_code::HashCode;

impl Encode for HashCode {
    fn size_hint(&self) -> usize {
        // compact length prefix is at most 5 bytes for any practical digest
        self.len() + 5
    }

    fn encode_to<T: Output>(&self, dest: &mut T) {
        self.as_bytes().encode_to(dest)
    }
}

impl EncodeLike for HashCode {}

impl Decode for HashCode {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let bytes = Vec::<u8>::decode(input)?;
        HashCode::from_bytes_owned(bytes).map_err(|_| "empty hash code".into())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::{Serialize, Serializer};
    use std::fmt;

    use crate::hash_code::HashCode;

    impl Serialize for HashCode {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_hex_string())
        }
    }

    struct HashCodeVisitor;

    impl<'de> Visitor<'de> for HashCodeVisitor {
        type Value = HashCode;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a lower-case hex string with an even number of digits")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            HashCode::from_hex_str(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for HashCode {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(HashCodeVisitor)
        }
    }
}
