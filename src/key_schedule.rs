//! Round key derivation from a variable-length master key.
//!
//! Each round key is the first 4 bytes of the master key rotated left by
//! `round mod key_len` bytes. Keys shorter than 8 bytes are zero-padded to 8
//! before rotation.

use crate::block::HALF_SIZE;
use crate::error::FeistelError;

/// Minimum normalized key length in bytes.
const MIN_KEY_LEN: usize = 8;

/// A 32-bit subkey used by a single Feistel round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundKey([u8; HALF_SIZE]);

impl RoundKey {
    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; HALF_SIZE] {
        &self.0
    }

    /// Returns the key as a big-endian 32-bit word.
    pub fn word(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<[u8; HALF_SIZE]> for RoundKey {
    fn from(bytes: [u8; HALF_SIZE]) -> Self {
        RoundKey(bytes)
    }
}

/// Expands `key` into `rounds` round keys.
///
/// # Errors
/// Returns [`FeistelError::InvalidKey`] if `key` is empty.
pub(crate) fn derive_round_keys(key: &[u8], rounds: usize) -> Result<Vec<RoundKey>, FeistelError> {
    if key.is_empty() {
        return Err(FeistelError::InvalidKey);
    }

    let mut normalized = key.to_vec();
    if normalized.len() < MIN_KEY_LEN {
        normalized.resize(MIN_KEY_LEN, 0);
    }
    let key_len = normalized.len();

    let keys = (0..rounds)
        .map(|i| {
            let shift = i % key_len;
            // rotated[j] == normalized[(shift + j) % key_len]
            let mut sub = [0u8; HALF_SIZE];
            for (j, b) in sub.iter_mut().enumerate() {
                *b = normalized[(shift + j) % key_len];
            }
            RoundKey(sub)
        })
        .collect();

    normalized.fill(0);
    Ok(keys)
}
