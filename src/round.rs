//! Feistel round function.
//!
//! `F(half, key) = rotr(half, 3) ^ key` over 32-bit big-endian words. The
//! rotation distance is fixed: changing it changes every ciphertext.

use crate::block::HALF_SIZE;
use crate::key_schedule::RoundKey;

/// Right-rotation distance applied to the half-block, in bits.
pub(crate) const ROUND_ROTATION: u32 = 3;

/// Mixes a 32-bit half-block with a round key.
pub(crate) fn mix(half: u32, key: RoundKey) -> u32 {
    half.rotate_right(ROUND_ROTATION) ^ key.word()
}

/// Byte-level form of [`mix`] operating on 4-byte big-endian halves.
pub fn mix_bytes(half: [u8; HALF_SIZE], key: [u8; HALF_SIZE]) -> [u8; HALF_SIZE] {
    mix(u32::from_be_bytes(half), RoundKey::from(key)).to_be_bytes()
}
