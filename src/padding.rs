//! PKCS#7-style block padding.
//!
//! Padding appends `n` bytes of value `n` to reach a multiple of
//! [`BLOCK_SIZE`]. Input that is already block-aligned receives no padding at
//! all, so [`unpad`] cannot tell a padded message from an aligned one whose
//! trailing bytes happen to look like padding. It strips whenever the tail is
//! well-formed and reports which branch it took through [`Unpadded`].

use tracing::trace;

use crate::block::BLOCK_SIZE;

/// Result of removing padding from decrypted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unpadded {
    /// A well-formed padding tail was found and removed.
    Stripped(Vec<u8>),
    /// The tail did not look like padding; the data is returned untouched.
    Unpadded(Vec<u8>),
}

impl Unpadded {
    /// Returns `true` if padding bytes were removed.
    pub fn was_stripped(&self) -> bool {
        matches!(self, Unpadded::Stripped(_))
    }

    /// Borrows the resulting bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Unpadded::Stripped(data) | Unpadded::Unpadded(data) => data,
        }
    }

    /// Consumes the outcome and returns the resulting bytes.
    pub fn into_inner(self) -> Vec<u8> {
        match self {
            Unpadded::Stripped(data) | Unpadded::Unpadded(data) => data,
        }
    }
}

/// Number of padding bytes [`pad`] appends to data of length `len`.
///
/// Returns `0` when `len` is already a multiple of [`BLOCK_SIZE`].
pub fn padding_length(len: usize) -> usize {
    match len % BLOCK_SIZE {
        0 => 0,
        rem => BLOCK_SIZE - rem,
    }
}

/// Pads `data` up to a multiple of [`BLOCK_SIZE`].
///
/// # Examples
///
/// ```
/// use feistelcrypt::padding::pad;
///
/// assert_eq!(pad(b"abc"), b"abc\x05\x05\x05\x05\x05");
/// assert_eq!(pad(b"ABCDEFGH"), b"ABCDEFGH");
/// ```
pub fn pad(data: &[u8]) -> Vec<u8> {
    let n = padding_length(data.len());
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    // n < BLOCK_SIZE, so the cast is lossless
    out.resize(data.len() + n, n as u8);
    out
}

/// Removes a trailing padding run from `data`, if one is present.
///
/// The final byte `p` is taken as the pad length. The tail is stripped when
/// `1 <= p <= 8`, `p <= data.len()` and the last `p` bytes all equal `p`.
/// Anything else is returned as [`Unpadded::Unpadded`].
///
/// # Examples
///
/// ```
/// use feistelcrypt::padding::{unpad, Unpadded};
///
/// assert_eq!(unpad(b"abc\x05\x05\x05\x05\x05".to_vec()), Unpadded::Stripped(b"abc".to_vec()));
/// assert_eq!(unpad(b"ABCDEFGH".to_vec()), Unpadded::Unpadded(b"ABCDEFGH".to_vec()));
/// ```
pub fn unpad(mut data: Vec<u8>) -> Unpadded {
    let Some(&last) = data.last() else {
        return Unpadded::Unpadded(data);
    };
    let p = last as usize;

    if (1..=BLOCK_SIZE).contains(&p) && p <= data.len() {
        let tail_start = data.len() - p;
        if data[tail_start..].iter().all(|&b| b == last) {
            data.truncate(tail_start);
            return Unpadded::Stripped(data);
        }
    }

    trace!(pad_byte = last, "padding tail not recognized; returning data unstripped");
    Unpadded::Unpadded(data)
}
