//! Key types for AES-128.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::Error;

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Size of the expanded schedule in bytes (11 round keys).
pub const SCHEDULE_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

/// AES-128 key wrapper. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    /// Borrows the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl PartialEq for Aes128Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Aes128Key {}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(<redacted>)")
    }
}

/// Expanded round keys for AES-128: index 0 is the initial whitening key,
/// index 10 the final round key. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys([Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Number of round keys; always 11.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }

    /// Borrows the schedule as an array of round keys.
    pub fn as_blocks(&self) -> &[Block; ROUNDS + 1] {
        &self.0
    }

    /// Concatenates the round keys into the 176-byte expanded key.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_SIZE] {
        let mut out = [0u8; SCHEDULE_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

impl From<[Block; ROUNDS + 1]> for RoundKeys {
    fn from(value: [Block; ROUNDS + 1]) -> Self {
        Self(value)
    }
}

impl PartialEq for RoundKeys {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
            .into()
    }
}

impl Eq for RoundKeys {}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(<redacted>)")
    }
}
