//! Cipher handle holding both schedules for one key.

use core::fmt;

use crate::block::Block;
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::Result;
use crate::key::{Direction, KeySchedule, KeySize};

/// LEA cipher keyed for both encryption and decryption.
#[derive(Clone)]
pub struct Lea {
    enc: KeySchedule,
    dec: KeySchedule,
}

impl Lea {
    /// Expands `key` (16, 24 or 32 bytes) in both directions.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            enc: expand_key(key, Direction::Encrypt)?,
            dec: expand_key(key, Direction::Decrypt)?,
        })
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.enc)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.dec)
    }

    /// Schedule for `direction`.
    pub fn schedule(&self, direction: Direction) -> &KeySchedule {
        match direction {
            Direction::Encrypt => &self.enc,
            Direction::Decrypt => &self.dec,
        }
    }

    /// Key size this cipher was built from.
    pub fn key_size(&self) -> KeySize {
        self.enc.key_size()
    }

    /// Number of rounds per block.
    pub fn rounds(&self) -> usize {
        self.enc.len()
    }
}

impl fmt::Debug for Lea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lea")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}
