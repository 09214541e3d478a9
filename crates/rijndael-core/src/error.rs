//! Precondition errors reported before any transform runs.

use thiserror::Error;

/// Errors returned by the slice-based entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The key was not exactly 16 bytes.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
    /// The plaintext or ciphertext block was not exactly 16 bytes.
    #[error("invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength {
        /// Required length in bytes.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
