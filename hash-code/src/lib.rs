//! Immutable hash codes of arbitrary bit length.
//!
//! A [`HashCode`] is the result type of a hash function: a non-empty byte
//! sequence with little-endian numeric views and a big-endian lower-case hex
//! rendering. Hash algorithms themselves live elsewhere; they hand their raw
//! output to [`HashCode::from_bytes`].
mod codec;
pub mod error;
pub mod hash_code;

pub use error::{Error, Result};
pub use hash_code::HashCode;
