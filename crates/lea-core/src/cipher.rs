//! LEA key schedule and block encryption/decryption.

use zeroize::Zeroize;

use crate::block::{load_block, store_block, Block};
use crate::error::Result;
use crate::key::{Direction, KeySchedule, KeySize, RoundKey, MAX_ROUNDS};
use crate::round::{decrypt_round, encrypt_round};
use crate::word::{bytes_to_word, rotate_left};

const DELTA: [u32; 8] = [
    0xc3ef_e9db,
    0x4462_6b02,
    0x79e2_7c8a,
    0x78df_30ec,
    0x715e_a49e,
    0xc785_da0a,
    0xe04e_f22a,
    0xe5c4_0957,
];

const SHIFTS: [u32; 6] = [1, 3, 6, 11, 13, 17];

#[inline]
fn update(word: u32, delta: u32, round: usize, position: usize) -> u32 {
    let rotated = rotate_left(delta, (round + position) as u32);
    rotate_left(word.wrapping_add(rotated), SHIFTS[position])
}

/// Expands a 128-, 192- or 256-bit key into the round keys for `direction`.
///
/// The recurrence always runs forward; a decryption schedule stores the same
/// round keys in reverse order.
pub fn expand_key(key: &[u8], direction: Direction) -> Result<KeySchedule> {
    let key_size = KeySize::from_len(key.len())?;
    let rounds = key_size.rounds();

    let mut t = [0u32; 8];
    for (word, chunk) in t.iter_mut().zip(key.chunks_exact(4)) {
        *word = bytes_to_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut round_keys = [[0u32; 6]; MAX_ROUNDS];
    for i in 0..rounds {
        // Delta modulus equals the key's word count.
        let delta = DELTA[i % key_size.key_words()];
        let rk: RoundKey = match key_size {
            KeySize::Lea128 => {
                for k in 0..4 {
                    t[k] = update(t[k], delta, i, k);
                }
                [t[0], t[1], t[2], t[1], t[3], t[1]]
            }
            KeySize::Lea192 => {
                for k in 0..6 {
                    t[k] = update(t[k], delta, i, k);
                }
                [t[0], t[1], t[2], t[3], t[4], t[5]]
            }
            KeySize::Lea256 => {
                let mut rk = [0u32; 6];
                for (k, slot) in rk.iter_mut().enumerate() {
                    let j = (6 * i + k) % 8;
                    t[j] = update(t[j], delta, i, k);
                    *slot = t[j];
                }
                rk
            }
        };

        let index = match direction {
            Direction::Encrypt => i,
            Direction::Decrypt => rounds - 1 - i,
        };
        round_keys[index] = rk;
    }
    t.zeroize();

    Ok(KeySchedule::from_parts(round_keys, key_size, direction))
}

/// Encrypts a single 16-byte block with an encryption schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    debug_assert_eq!(schedule.direction(), Direction::Encrypt);
    let state = schedule
        .iter()
        .fold(load_block(block), |x, rk| encrypt_round(&x, rk));
    store_block(&state)
}

/// Decrypts a single 16-byte block with a decryption schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    debug_assert_eq!(schedule.direction(), Direction::Decrypt);
    let state = schedule
        .iter()
        .fold(load_block(block), |x, rk| decrypt_round(&x, rk));
    store_block(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeaError;
    use rand::RngCore;

    fn block(hex_str: &str) -> Block {
        let bytes = hex::decode(hex_str).expect("valid hex");
        bytes.try_into().expect("16-byte block")
    }

    // KISA reference vectors, one per key size.
    const VECTORS: [(&str, &str, &str); 3] = [
        (
            "0f1e2d3c4b5a69788796a5b4c3d2e1f0",
            "101112131415161718191a1b1c1d1e1f",
            "9fc84e3528c6c6185532c7a704648bfd",
        ),
        (
            "0f1e2d3c4b5a69788796a5b4c3d2e1f0f0e1d2c3b4a59687",
            "202122232425262728292a2b2c2d2e2f",
            "6fb95e325aad1b878cdcf5357674c6f2",
        ),
        (
            "0f1e2d3c4b5a69788796a5b4c3d2e1f0f0e1d2c3b4a5968778695a4b3c2d1e0f",
            "303132333435363738393a3b3c3d3e3f",
            "d651aff647b189c13a8900ca27f9e197",
        ),
    ];

    #[test]
    fn encrypt_matches_reference_vectors() {
        for (key_hex, pt_hex, ct_hex) in VECTORS {
            let key = hex::decode(key_hex).expect("valid hex");
            let schedule = expand_key(&key, Direction::Encrypt).expect("valid key");
            assert_eq!(encrypt_block(&block(pt_hex), &schedule), block(ct_hex));
        }
    }

    #[test]
    fn decrypt_matches_reference_vectors() {
        for (key_hex, pt_hex, ct_hex) in VECTORS {
            let key = hex::decode(key_hex).expect("valid hex");
            let schedule = expand_key(&key, Direction::Decrypt).expect("valid key");
            assert_eq!(decrypt_block(&block(ct_hex), &schedule), block(pt_hex));
        }
    }

    #[test]
    fn sequential_key_vector() {
        let key = hex::decode("000102030405060708090a0b0c0d0e0f").expect("valid hex");
        let plain = block("101112131415161718191a1b1c1d1e1f");
        let cipher = block("44ab24c48c1eb0f6e28b2ddd66525d50");

        let enc = expand_key(&key, Direction::Encrypt).expect("valid key");
        let dec = expand_key(&key, Direction::Decrypt).expect("valid key");
        assert_eq!(encrypt_block(&plain, &enc), cipher);
        assert_eq!(decrypt_block(&cipher, &dec), plain);
    }

    #[test]
    fn first_round_key_matches_reference() {
        let key = hex::decode(VECTORS[0].0).expect("valid hex");
        let schedule = expand_key(&key, Direction::Encrypt).expect("valid key");
        assert_eq!(
            *schedule.round_key(0),
            [0x003a_0fd4, 0x0249_7010, 0x194f_7db1, 0x0249_7010, 0x090d_0883, 0x0249_7010]
        );
    }

    #[test]
    fn schedule_length_follows_key_size() {
        for (len, rounds) in [(16, 24), (24, 28), (32, 32)] {
            for direction in [Direction::Encrypt, Direction::Decrypt] {
                let schedule = expand_key(&vec![0x5a; len], direction).expect("valid key");
                assert_eq!(schedule.len(), rounds);
                assert_eq!(schedule.iter().count(), rounds);
                assert_eq!(schedule.direction(), direction);
            }
        }
    }

    #[test]
    fn lea128_round_keys_repeat_second_word() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let mut key = [0u8; 16];
            rng.fill_bytes(&mut key);
            let schedule = expand_key(&key, Direction::Encrypt).expect("valid key");
            for rk in &schedule {
                assert_eq!(rk[1], rk[3]);
                assert_eq!(rk[1], rk[5]);
            }
        }
    }

    #[test]
    fn decrypt_schedule_is_reversed_encrypt_schedule() {
        for len in [16, 24, 32] {
            let key: Vec<u8> = (0..len as u8).collect();
            let enc = expand_key(&key, Direction::Encrypt).expect("valid key");
            let dec = expand_key(&key, Direction::Decrypt).expect("valid key");
            let n = enc.len();
            for i in 0..n {
                assert_eq!(dec.round_key(i), enc.round_key(n - 1 - i));
            }
        }
    }

    #[test]
    fn rejects_invalid_key_lengths() {
        for len in [0, 10, 15, 17, 20, 31, 33] {
            let err = expand_key(&vec![0u8; len], Direction::Encrypt).unwrap_err();
            assert_eq!(err, LeaError::InvalidKeyLength(len));
        }
    }

    #[test]
    fn expansion_and_blocks_are_deterministic() {
        let key = [0x42u8; 32];
        let a = expand_key(&key, Direction::Encrypt).expect("valid key");
        let b = expand_key(&key, Direction::Encrypt).expect("valid key");
        assert_eq!(a.as_slice(), b.as_slice());

        let plain = [0x24u8; 16];
        assert_eq!(encrypt_block(&plain, &a), encrypt_block(&plain, &b));
        assert_eq!(encrypt_block(&plain, &a), encrypt_block(&plain, &a));
    }

    #[test]
    fn apply_uses_schedule_direction() {
        let key = hex::decode(VECTORS[2].0).expect("valid hex");
        let enc = expand_key(&key, Direction::Encrypt).expect("valid key");
        let dec = expand_key(&key, Direction::Decrypt).expect("valid key");
        let ct = enc.apply(&block(VECTORS[2].1));
        assert_eq!(ct, block(VECTORS[2].2));
        assert_eq!(dec.apply(&ct), block(VECTORS[2].1));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for len in [16, 24, 32] {
            for _ in 0..50 {
                let mut key = vec![0u8; len];
                let mut plain = [0u8; 16];
                rng.fill_bytes(&mut key);
                rng.fill_bytes(&mut plain);
                let enc = expand_key(&key, Direction::Encrypt).expect("valid key");
                let dec = expand_key(&key, Direction::Decrypt).expect("valid key");
                let ct = encrypt_block(&plain, &enc);
                assert_eq!(decrypt_block(&ct, &dec), plain);
            }
        }
    }

    #[test]
    fn schedule_shared_across_threads() {
        let key = hex::decode(VECTORS[1].0).expect("valid hex");
        let schedule = expand_key(&key, Direction::Encrypt).expect("valid key");
        let expected = block(VECTORS[1].2);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(encrypt_block(&block(VECTORS[1].1), &schedule), expected);
                    }
                });
            }
        });
    }
}
