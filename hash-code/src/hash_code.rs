use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// An immutable hash code of arbitrary bit length.
///
/// Numeric views read the bytes little-endian (byte 0 is least significant),
/// while the hex rendering prints byte 0 first, like `sha256sum` does.
#[derive(Clone)]
pub struct HashCode {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Int(i32),
    Long(i64),
    Bytes(Box<[u8]>),
}

impl HashCode {
    /// Create a 32-bit hash code, bytes in little-endian order.
    pub fn from_int(hash: i32) -> Self {
        HashCode {
            repr: Repr::Int(hash),
        }
    }

    /// Create a 64-bit hash code, bytes in little-endian order.
    pub fn from_long(hash: i64) -> Self {
        HashCode {
            repr: Repr::Long(hash),
        }
    }

    /// Create a hash code from a copy of `bytes`, which must not be empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_owned(bytes.to_vec())
    }

    /// Take `bytes` over without copying.
    pub(crate) fn from_bytes_owned(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidArgument(
                "a hash code must contain at least 1 byte".to_owned(),
            ));
        }
        Ok(HashCode {
            repr: Repr::Bytes(bytes.into_boxed_slice()),
        })
    }

    /// Parse the exact format produced by [`to_hex_string`](Self::to_hex_string):
    /// an even number (at least 2) of lower-case hex digits, no prefix.
    pub fn from_hex_str(s: &str) -> Result<Self> {
        if s.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "input string ({}) must have at least 2 characters",
                s
            )));
        }
        if s.len() % 2 != 0 {
            return Err(Error::InvalidArgument(format!(
                "input string ({}) must have an even number of characters",
                s
            )));
        }
        if let Some(ch) = s.chars().find(|ch| !matches!(*ch, '0'..='9' | 'a'..='f')) {
            return Err(Error::InvalidArgument(format!(
                "illegal hexadecimal character: {}",
                ch
            )));
        }
        let bytes = hex::decode(s).map_err(|err| Error::InvalidArgument(err.to_string()))?;
        Self::from_bytes_owned(bytes)
    }

    /// Number of bits, a positive multiple of 8.
    pub fn bits(&self) -> usize {
        self.len() * 8
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Int(_) => 4,
            Repr::Long(_) => 8,
            Repr::Bytes(bytes) => bytes.len(),
        }
    }

    /// Always false, a hash code holds at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First four bytes as a little-endian `i32`.
    pub fn as_int(&self) -> Result<i32> {
        match &self.repr {
            Repr::Int(hash) => Ok(*hash),
            Repr::Long(hash) => Ok(*hash as i32),
            Repr::Bytes(bytes) => {
                if bytes.len() < 4 {
                    return Err(Error::IllegalState(format!(
                        "as_int requires >= 4 bytes (it only has {} bytes)",
                        bytes.len()
                    )));
                }
                let mut buf = [0u8; 4];
                buf.copy_from_slice(&bytes[..4]);
                Ok(i32::from_le_bytes(buf))
            }
        }
    }

    /// First eight bytes as a little-endian `i64`.
    pub fn as_long(&self) -> Result<i64> {
        match &self.repr {
            Repr::Int(_) => Err(Error::IllegalState(
                "this hash code only has 32 bits; cannot create a long".to_owned(),
            )),
            Repr::Long(hash) => Ok(*hash),
            Repr::Bytes(bytes) => {
                if bytes.len() < 8 {
                    return Err(Error::IllegalState(format!(
                        "as_long requires >= 8 bytes (it only has {} bytes)",
                        bytes.len()
                    )));
                }
                Ok(self.pad_to_long())
            }
        }
    }

    /// `as_long` when there are enough bits, otherwise the available bytes
    /// as the low bytes of an `i64` with the high bytes zeroed.
    pub fn pad_to_long(&self) -> i64 {
        match &self.repr {
            Repr::Int(hash) => i64::from(*hash as u32),
            Repr::Long(hash) => *hash,
            Repr::Bytes(bytes) => {
                let n = cmp::min(bytes.len(), 8);
                let mut buf = [0u8; 8];
                buf[..n].copy_from_slice(&bytes[..n]);
                i64::from_le_bytes(buf)
            }
        }
    }

    /// A fresh copy of the bytes, free for the caller to modify.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.with_bytes(|bytes| bytes.to_vec())
    }

    /// Copy `min(max_length, len())` bytes into `dest` starting at `offset`,
    /// returning the number of bytes written. `dest` is left untouched on error.
    pub fn write_bytes_to(
        &self,
        dest: &mut [u8],
        offset: usize,
        max_length: usize,
    ) -> Result<usize> {
        let length = cmp::min(max_length, self.len());
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= dest.len())
            .ok_or_else(|| {
                Error::IndexOutOfBounds(format!(
                    "cannot write {} bytes at offset {} into a buffer of {} bytes",
                    length,
                    offset,
                    dest.len()
                ))
            })?;
        self.with_bytes(|bytes| dest[offset..end].copy_from_slice(&bytes[..length]));
        Ok(length)
    }

    /// Lower-case hex, byte 0 first and high nibble first.
    pub fn to_hex_string(&self) -> String {
        self.with_bytes(|bytes| hex::encode(bytes))
    }

    /// Cheap summary for hash-indexed containers, not collision resistant.
    ///
    /// Codes with fewer than 4 bytes are OR-shifted little-endian into the
    /// low bits; the exact output is stable and must stay that way.
    pub fn secondary_hash(&self) -> i32 {
        if let Ok(hash) = self.as_int() {
            return hash;
        }
        self.with_bytes(|bytes| {
            bytes
                .iter()
                .enumerate()
                .fold(0i32, |acc, (i, b)| acc | (i32::from(*b) << (i * 8)))
        })
    }

    /// Borrow the byte representation without copying `Bytes` or allocating
    /// for the fixed-width variants.
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        match &self.repr {
            Repr::Int(hash) => f(&hash.to_le_bytes()[..]),
            Repr::Long(hash) => f(&hash.to_le_bytes()[..]),
            Repr::Bytes(bytes) => f(&bytes[..]),
        }
    }
}

/// Content-based equality, independent of the variant that produced the bytes.
/// Runs in time that depends only on the lengths.
impl PartialEq for HashCode {
    fn eq(&self, other: &Self) -> bool {
        self.with_bytes(|left| other.with_bytes(|right| bool::from(left.ct_eq(right))))
    }
}

impl Eq for HashCode {}

impl Hash for HashCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.secondary_hash());
    }
}

impl fmt::Display for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashCode({})", self)
    }
}

impl FromStr for HashCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_str(s)
    }
}

impl From<i32> for HashCode {
    fn from(hash: i32) -> Self {
        Self::from_int(hash)
    }
}

impl From<i64> for HashCode {
    fn from(hash: i64) -> Self {
        Self::from_long(hash)
    }
}

impl TryFrom<&[u8]> for HashCode {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
