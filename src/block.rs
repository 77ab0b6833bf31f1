//! 64-bit block representation and byte/word conversion.
//!
//! A block is handled as two 32-bit halves read in big-endian order: bytes
//! 0..4 form `left`, bytes 4..8 form `right`.

use crate::error::FeistelError;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Half-block size in bytes.
pub const HALF_SIZE: usize = BLOCK_SIZE / 2;

/// A 64-bit block split into its two 32-bit halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub(crate) left: u32,
    pub(crate) right: u32,
}

impl Block {
    /// Builds a block from raw caller bytes.
    ///
    /// Input shorter than [`BLOCK_SIZE`] is zero-padded on the right; longer
    /// input is truncated to the first [`BLOCK_SIZE`] bytes.
    pub(crate) fn coerce(input: &[u8]) -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        let n = input.len().min(BLOCK_SIZE);
        bytes[..n].copy_from_slice(&input[..n]);
        Self::split(&bytes)
    }

    /// Splits 8 bytes into big-endian `left` and `right` words.
    pub(crate) fn split(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let (l, r) = bytes.split_at(HALF_SIZE);
        Block {
            left: word_from_bytes(l),
            right: word_from_bytes(r),
        }
    }

    /// Merges the two halves back into 8 bytes, `left` first.
    pub(crate) fn merge(self) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        out[..HALF_SIZE].copy_from_slice(&self.left.to_be_bytes());
        out[HALF_SIZE..].copy_from_slice(&self.right.to_be_bytes());
        out
    }
}

/// Reads a big-endian `u32` from the first 4 bytes of `input`.
///
/// Callers always pass exactly [`HALF_SIZE`] bytes.
fn word_from_bytes(input: &[u8]) -> u32 {
    let mut word = [0u8; HALF_SIZE];
    word.copy_from_slice(&input[..HALF_SIZE]);
    u32::from_be_bytes(word)
}

/// Verifies that `input` holds a whole number of blocks.
///
/// # Errors
/// Returns [`FeistelError::InvalidInputLength`] if `input.len() % 8 != 0`.
pub(crate) fn ensure_whole_blocks(input: &[u8]) -> Result<(), FeistelError> {
    if !input.len().is_multiple_of(BLOCK_SIZE) {
        return Err(FeistelError::InvalidInputLength { len: input.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_big_endian() {
        let block = Block::split(b"ABCDEFGH");
        assert_eq!(block.left, 0x4142_4344);
        assert_eq!(block.right, 0x4546_4748);
    }

    #[test]
    fn test_split_merge_identity() {
        let bytes: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        assert_eq!(Block::split(&bytes).merge(), bytes);
    }

    #[test]
    fn test_coerce_short_input_zero_pads() {
        let block = Block::coerce(b"ABC");
        assert_eq!(block.merge(), [b'A', b'B', b'C', 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_coerce_long_input_truncates() {
        let block = Block::coerce(b"ABCDEFGHIJ");
        assert_eq!(&block.merge(), b"ABCDEFGH");
    }

    #[test]
    fn test_coerce_empty_input() {
        assert_eq!(Block::coerce(&[]).merge(), [0u8; 8]);
    }

    #[test]
    fn test_ensure_whole_blocks() {
        assert!(ensure_whole_blocks(&[]).is_ok());
        assert!(ensure_whole_blocks(&[0u8; 16]).is_ok());
        assert_eq!(
            ensure_whole_blocks(&[0u8; 5]),
            Err(FeistelError::InvalidInputLength { len: 5 })
        );
        assert_eq!(
            ensure_whole_blocks(&[0u8; 9]),
            Err(FeistelError::InvalidInputLength { len: 9 })
        );
    }
}
