//! Block representation helpers.

use crate::word::{bytes_to_word, word_to_bytes};

/// LEA block of 16 bytes.
pub type Block = [u8; 16];

/// Splits a block into its four little-endian words.
#[inline]
pub fn load_block(block: &Block) -> [u32; 4] {
    let mut state = [0u32; 4];
    for (word, chunk) in state.iter_mut().zip(block.chunks_exact(4)) {
        *word = bytes_to_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    state
}

/// Reassembles four words into a block.
#[inline]
pub fn store_block(state: &[u32; 4]) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word_to_bytes(*word));
    }
    block
}
