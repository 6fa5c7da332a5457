//! LEA (Lightweight Encryption Algorithm) block cipher.
//!
//! This crate follows the KISA LEA specification and provides:
//! - Key schedules for 128-, 192- and 256-bit keys, in either direction.
//! - Single-block encryption and decryption.
//! - The round functions and word helpers they are built from.
//!
//! Modes of operation and padding are left to callers. Every operation is
//! built from wrapping addition, rotation and XOR with no data-dependent
//! branches.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod lea;
mod round;
mod word;

pub use crate::block::{load_block, store_block, Block};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{LeaError, Result};
pub use crate::key::{Direction, KeySchedule, KeySize, RoundKey, RoundKeyHex};
pub use crate::lea::Lea;
pub use crate::round::{decrypt_round, encrypt_round};
pub use crate::word::{bytes_to_word, rotate_left, rotate_right, word_to_bytes};
