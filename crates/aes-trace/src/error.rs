//! Error type shared by the cipher entry points and the hex codec.

use std::fmt;

use thiserror::Error;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Names the argument an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// The 16-byte plaintext block.
    Plaintext,
    /// The 16-byte cipher key.
    Key,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Plaintext => f.write_str("plaintext"),
            Input::Key => f.write_str("key"),
        }
    }
}

/// Errors raised before any round is executed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Plaintext or key was not exactly 16 bytes.
    #[error("invalid {input} length: {len} bytes (expected 16)")]
    InvalidInputLength {
        /// Which argument was rejected.
        input: Input,
        /// Length that was supplied.
        len: usize,
    },

    /// A hex string could not be decoded into a 16-byte block.
    #[error("invalid {input} hex: {reason}")]
    InvalidHexEncoding {
        /// Which argument was rejected.
        input: Input,
        /// Human-readable cause.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = Error::InvalidInputLength {
            input: Input::Key,
            len: 15,
        };
        assert_eq!(err.to_string(), "invalid key length: 15 bytes (expected 16)");

        let err = Error::InvalidHexEncoding {
            input: Input::Plaintext,
            reason: "expected 32 hex characters, got 30".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid plaintext hex: expected 32 hex characters, got 30"
        );
    }
}
