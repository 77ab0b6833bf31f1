//! Error types for the feistelcrypt library.

use thiserror::Error;

/// Errors produced by the feistelcrypt library.
///
/// Padding that does not look valid after decryption is not an error: see
/// [`Unpadded`](crate::padding::Unpadded).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeistelError {
    /// The master key is empty.
    #[error("Key must be at least 1 byte long")]
    InvalidKey,
    /// The round count is zero.
    #[error("Number of rounds must be at least 1")]
    InvalidRounds,
    /// Ciphertext length is not a multiple of the block size.
    #[error("Input length {len} is not a multiple of the 8-byte block size")]
    InvalidInputLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
}
