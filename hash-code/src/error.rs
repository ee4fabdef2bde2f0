use thiserror::Error;

/// Errors raised by [`HashCode`](crate::HashCode) constructors and accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or empty constructor input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A numeric view needs more bits than the hash code holds
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// Destination window of `write_bytes_to` does not fit
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(String),
}

pub type Result<T> = std::result::Result<T, Error>;
