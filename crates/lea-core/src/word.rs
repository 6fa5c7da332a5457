//! 32-bit word packing and rotation.

/// Packs four bytes into a word, `bytes[0]` being the least-significant byte.
#[inline]
pub fn bytes_to_word(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Unpacks a word into four bytes, least-significant byte first.
#[inline]
pub fn word_to_bytes(word: u32) -> [u8; 4] {
    word.to_le_bytes()
}

/// Circular left rotation by `r mod 32` bits.
#[inline]
pub fn rotate_left(word: u32, r: u32) -> u32 {
    word.rotate_left(r % 32)
}

/// Circular right rotation by `r mod 32` bits.
#[inline]
pub fn rotate_right(word: u32, r: u32) -> u32 {
    word.rotate_right(r % 32)
}
