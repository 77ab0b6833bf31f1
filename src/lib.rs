//! feistelcrypt: an educational 64-bit Feistel block cipher.
//!
//! The cipher operates on 8-byte blocks split into two 32-bit big-endian
//! halves. Each round mixes one half with a round key (3-bit right rotation
//! followed by XOR) and folds the result into the other half. Messages of
//! arbitrary length are padded PKCS#7-style and encrypted block by block with
//! no chaining.
//!
//! This is a teaching cipher: the round function and key schedule are weak
//! on purpose. Do not use it to protect real data.
//!
//! # Architecture
//!
//! ```text
//! key_schedule  (master key → one 32-bit RoundKey per round)
//!     ↓
//! round         (F(half, key) = rotr(half, 3) ^ key)
//!     ↓
//! FeistelCipher (block split/merge + forward/reverse round loop)
//!     ↕
//! padding       (pad before encrypt, best-effort strip after decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use feistelcrypt::FeistelCipher;
//!
//! let cipher = FeistelCipher::new(b"MySecretKey123456", 12).unwrap();
//!
//! let plaintext = b"Hello, World!";
//! let ciphertext = cipher.encrypt(plaintext);
//! assert_eq!(ciphertext.len(), 16);
//!
//! let decrypted = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! Work with a single 8-byte block:
//!
//! ```
//! use feistelcrypt::FeistelCipher;
//!
//! let cipher = FeistelCipher::with_key(b"MySecretKey123456").unwrap();
//! let block = cipher.encrypt_block(b"ABCDEFGH");
//! assert_eq!(&cipher.decrypt_block(&block), b"ABCDEFGH");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod padding;

mod block;
mod feistel;
mod key_schedule;
mod round;

pub use block::{BLOCK_SIZE, HALF_SIZE};
pub use error::FeistelError;
pub use feistel::{FeistelCipher, DEFAULT_ROUNDS};
pub use key_schedule::RoundKey;
pub use padding::Unpadded;
pub use round::mix_bytes;
