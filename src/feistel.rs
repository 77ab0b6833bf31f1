//! FeistelCipher: 64-bit Feistel block cipher engine.
//!
//! Drives the round loop over 8-byte blocks split into two 32-bit halves,
//! and applies block padding for messages of arbitrary length. Every block
//! is processed independently (no chaining), so a message is encrypted as a
//! simple sequence of single-block transforms.
//!
//! The round function and key schedule are deliberately weak. This cipher
//! exists for teaching the Feistel construction and offers no security.

use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::block::{self, Block, BLOCK_SIZE};
use crate::error::FeistelError;
use crate::key_schedule::{self, RoundKey};
use crate::padding::{self, Unpadded};
use crate::round;

/// Default number of Feistel rounds.
pub const DEFAULT_ROUNDS: usize = 12;

/// Feistel block cipher with a fixed, precomputed round key schedule.
///
/// # Architecture
///
/// Encryption runs rounds `0..rounds`, each replacing `(L, R)` with
/// `(R, L ^ F(R, k[i]))`. Decryption runs the same rounds in reverse order,
/// replacing `(L, R)` with `(R ^ F(L, k[i]), L)`. There is no final half
/// swap on either side.
///
/// The round keys are derived once at construction and never change, so a
/// single instance can be shared between threads.
#[derive(Clone)]
pub struct FeistelCipher {
    round_keys: Vec<RoundKey>,
}

impl std::fmt::Debug for FeistelCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeistelCipher")
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}

impl FeistelCipher {
    /// Creates a cipher for `key` with the default 12 rounds.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use feistelcrypt::FeistelCipher;
    ///
    /// let cipher = FeistelCipher::with_key(b"secret").unwrap();
    /// assert_eq!(cipher.rounds(), 12);
    /// ```
    pub fn with_key(key: &[u8]) -> Result<Self, FeistelError> {
        Self::new(key, DEFAULT_ROUNDS)
    }

    /// Creates a cipher for `key` running `rounds` Feistel rounds.
    ///
    /// # Parameters
    /// - `key`: Master key (at least 1 byte; keys shorter than 8 bytes are
    ///   zero-padded).
    /// - `rounds`: Number of rounds (at least 1).
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidKey`] if `key` is empty, or
    /// [`FeistelError::InvalidRounds`] if `rounds == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feistelcrypt::{FeistelCipher, FeistelError};
    ///
    /// assert!(FeistelCipher::new(b"secret", 16).is_ok());
    /// assert_eq!(FeistelCipher::new(b"", 16).unwrap_err(), FeistelError::InvalidKey);
    /// assert_eq!(FeistelCipher::new(b"secret", 0).unwrap_err(), FeistelError::InvalidRounds);
    /// ```
    pub fn new(key: &[u8], rounds: usize) -> Result<Self, FeistelError> {
        if rounds == 0 {
            return Err(FeistelError::InvalidRounds);
        }
        let round_keys = key_schedule::derive_round_keys(key, rounds)?;
        debug!(rounds, key_len = key.len(), "feistel cipher initialized");
        Ok(FeistelCipher { round_keys })
    }

    /// Returns the number of rounds.
    pub fn rounds(&self) -> usize {
        self.round_keys.len()
    }

    /// Returns the round key schedule, indexed by round number.
    pub fn round_keys(&self) -> &[RoundKey] {
        &self.round_keys
    }

    /// Encrypts a single block.
    ///
    /// `block` is coerced to 8 bytes: shorter input is zero-padded on the
    /// right, longer input is truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use feistelcrypt::FeistelCipher;
    ///
    /// let cipher = FeistelCipher::with_key(b"MySecretKey123456").unwrap();
    /// let ct = cipher.encrypt_block(b"ABCDEFGH");
    /// assert_eq!(&cipher.decrypt_block(&ct), b"ABCDEFGH");
    /// ```
    pub fn encrypt_block(&self, block: &[u8]) -> [u8; BLOCK_SIZE] {
        self.encrypt_words(Block::coerce(block)).merge()
    }

    /// Decrypts a single block.
    ///
    /// `block` is coerced to 8 bytes exactly as in
    /// [`encrypt_block`](Self::encrypt_block).
    pub fn decrypt_block(&self, block: &[u8]) -> [u8; BLOCK_SIZE] {
        self.decrypt_words(Block::coerce(block)).merge()
    }

    /// Pads and encrypts `plaintext`.
    ///
    /// The output length is `plaintext.len()` rounded up to a multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use feistelcrypt::FeistelCipher;
    ///
    /// let cipher = FeistelCipher::with_key(b"secret").unwrap();
    /// let ct = cipher.encrypt(b"hello");
    /// assert_eq!(ct.len(), 8);
    /// assert_eq!(cipher.decrypt(&ct).unwrap(), b"hello");
    /// ```
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = padding::pad(plaintext);
        trace!(blocks = data.len() / BLOCK_SIZE, "encrypting message");
        self.apply_blocks(&mut data, Self::encrypt_words);
        data
    }

    /// Decrypts `ciphertext` and strips padding when it looks valid.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidInputLength`] if the length is not a
    /// multiple of 8.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, FeistelError> {
        self.decrypt_detailed(ciphertext).map(Unpadded::into_inner)
    }

    /// Decrypts `ciphertext` and reports whether padding was removed.
    ///
    /// A tail that does not match the padding pattern is not an error; the
    /// full decrypted data comes back as [`Unpadded::Unpadded`].
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidInputLength`] if the length is not a
    /// multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use feistelcrypt::{FeistelCipher, Unpadded};
    ///
    /// let cipher = FeistelCipher::with_key(b"secret").unwrap();
    /// let ct = cipher.encrypt(b"ABCDEFGH");
    /// assert_eq!(
    ///     cipher.decrypt_detailed(&ct).unwrap(),
    ///     Unpadded::Unpadded(b"ABCDEFGH".to_vec())
    /// );
    /// ```
    pub fn decrypt_detailed(&self, ciphertext: &[u8]) -> Result<Unpadded, FeistelError> {
        block::ensure_whole_blocks(ciphertext)?;
        let mut data = ciphertext.to_vec();
        trace!(blocks = data.len() / BLOCK_SIZE, "decrypting message");
        self.apply_blocks(&mut data, Self::decrypt_words);
        Ok(padding::unpad(data))
    }

    // ──────── Round loop ────────

    fn encrypt_words(&self, block: Block) -> Block {
        let Block {
            mut left,
            mut right,
        } = block;
        for &key in &self.round_keys {
            let f = round::mix(right, key);
            (left, right) = (right, left ^ f);
        }
        Block { left, right }
    }

    fn decrypt_words(&self, block: Block) -> Block {
        let Block {
            mut left,
            mut right,
        } = block;
        for &key in self.round_keys.iter().rev() {
            let f = round::mix(left, key);
            (left, right) = (right ^ f, left);
        }
        Block { left, right }
    }

    // ──────── Block iteration ────────

    /// Applies `op` in place to every 8-byte chunk of `data`.
    ///
    /// `data.len()` must be a multiple of 8.
    fn apply_blocks(&self, data: &mut [u8], op: fn(&Self, Block) -> Block) {
        let step = |chunk: &mut [u8]| {
            let mut bytes = [0u8; BLOCK_SIZE];
            bytes.copy_from_slice(chunk);
            chunk.copy_from_slice(&op(self, Block::split(&bytes)).merge());
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_exact_mut(BLOCK_SIZE).for_each(step);

        #[cfg(not(feature = "parallel"))]
        data.chunks_exact_mut(BLOCK_SIZE).for_each(step);
    }
}

impl Drop for FeistelCipher {
    /// Clears the round key schedule on drop.
    fn drop(&mut self) {
        for key in self.round_keys.iter_mut() {
            *key = RoundKey::from([0u8; 4]);
        }
    }
}
