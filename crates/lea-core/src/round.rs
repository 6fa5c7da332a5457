//! LEA round transformations.
//!
//! Both rounds use only XOR, rotation and wrapping addition/subtraction, so
//! their timing does not depend on the data.

use crate::key::RoundKey;
use crate::word::{rotate_left, rotate_right};

/// Applies one encryption round to the 4-word state.
#[inline]
pub fn encrypt_round(x: &[u32; 4], rk: &RoundKey) -> [u32; 4] {
    [
        rotate_left((x[0] ^ rk[0]).wrapping_add(x[1] ^ rk[1]), 9),
        rotate_right((x[1] ^ rk[2]).wrapping_add(x[2] ^ rk[3]), 5),
        rotate_right((x[2] ^ rk[4]).wrapping_add(x[3] ^ rk[5]), 3),
        x[0],
    ]
}

/// Undoes [`encrypt_round`] for the same round key.
#[inline]
pub fn decrypt_round(x: &[u32; 4], rk: &RoundKey) -> [u32; 4] {
    let t0 = x[3];
    let t1 = rotate_right(x[0], 9).wrapping_sub(t0 ^ rk[0]) ^ rk[1];
    let t2 = rotate_left(x[1], 5).wrapping_sub(t1 ^ rk[2]) ^ rk[3];
    let t3 = rotate_left(x[2], 3).wrapping_sub(t2 ^ rk[4]) ^ rk[5];
    [t0, t1, t2, t3]
}
