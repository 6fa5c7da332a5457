//! Key sizes, directions and expanded key schedules.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::{LeaError, Result};

/// Round key consumed by one LEA round.
pub type RoundKey = [u32; 6];

/// Largest round count (256-bit keys).
pub(crate) const MAX_ROUNDS: usize = 32;

/// Supported LEA key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 24 rounds.
    Lea128,
    /// 192-bit key, 28 rounds.
    Lea192,
    /// 256-bit key, 32 rounds.
    Lea256,
}

impl KeySize {
    /// Maps a key length in bytes to its key size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Lea128),
            24 => Ok(Self::Lea192),
            32 => Ok(Self::Lea256),
            other => Err(LeaError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        self.key_words() * 4
    }

    /// Number of 32-bit words in the key.
    pub fn key_words(self) -> usize {
        match self {
            Self::Lea128 => 4,
            Self::Lea192 => 6,
            Self::Lea256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(self) -> usize {
        match self {
            Self::Lea128 => 24,
            Self::Lea192 => 28,
            Self::Lea256 => 32,
        }
    }
}

/// Which way a schedule transforms blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// Numeric code: 0 for encryption, 1 for decryption.
    pub fn code(self) -> u8 {
        match self {
            Self::Encrypt => 0,
            Self::Decrypt => 1,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = LeaError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Encrypt),
            1 => Ok(Self::Decrypt),
            other => Err(LeaError::InvalidDirection(other)),
        }
    }
}

/// Expanded round keys for one key and one direction.
///
/// The schedule is immutable once built and wiped on drop.
#[derive(Clone, Zeroize)]
pub struct KeySchedule {
    round_keys: [RoundKey; MAX_ROUNDS],
    #[zeroize(skip)]
    key_size: KeySize,
    #[zeroize(skip)]
    direction: Direction,
}

impl KeySchedule {
    /// Expands `key` for `direction`. Same as [`expand_key`].
    pub fn new(key: &[u8], direction: Direction) -> Result<Self> {
        expand_key(key, direction)
    }

    pub(crate) fn from_parts(
        round_keys: [RoundKey; MAX_ROUNDS],
        key_size: KeySize,
        direction: Direction,
    ) -> Self {
        Self {
            round_keys,
            key_size,
            direction,
        }
    }

    /// Returns the round key at `round` (`0..len()`).
    ///
    /// # Panics
    ///
    /// Panics if `round >= self.len()`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &RoundKey {
        &self.as_slice()[round]
    }

    /// Round keys in application order.
    #[inline]
    pub fn as_slice(&self) -> &[RoundKey] {
        &self.round_keys[..self.key_size.rounds()]
    }

    /// Iterates over the round keys in application order.
    pub fn iter(&self) -> core::slice::Iter<'_, RoundKey> {
        self.as_slice().iter()
    }

    /// Number of rounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.key_size.rounds()
    }

    /// Always false; every schedule has at least 24 rounds.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key size the schedule was expanded from.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Direction the schedule was built for.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Transforms one block in the schedule's own direction.
    pub fn apply(&self, block: &Block) -> Block {
        match self.direction {
            Direction::Encrypt => encrypt_block(block, self),
            Direction::Decrypt => decrypt_block(block, self),
        }
    }
}

impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl ZeroizeOnDrop for KeySchedule {}

impl<'a> IntoIterator for &'a KeySchedule {
    type Item = &'a RoundKey;
    type IntoIter = core::slice::Iter<'a, RoundKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("key_size", &self.key_size)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Formats a round key as six space-separated `%08x` words.
pub struct RoundKeyHex<'a>(pub &'a RoundKey);

impl fmt::Display for RoundKeyHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}
