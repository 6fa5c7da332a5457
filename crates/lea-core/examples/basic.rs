//! Encrypts and decrypts one block with a 128-bit key and prints the schedule head.

use anyhow::{ensure, Context, Result};
use lea_core::{expand_key, Direction, Lea, RoundKeyHex};

fn main() -> Result<()> {
    let key = hex::decode("0f1e2d3c4b5a69788796a5b4c3d2e1f0").context("decode key hex")?;
    let plaintext: [u8; 16] = *b"first block here";

    let schedule = expand_key(&key, Direction::Encrypt)?;
    for (round, rk) in schedule.iter().take(3).enumerate() {
        println!("rk[{round:02}]: {}", RoundKeyHex(rk));
    }

    let lea = Lea::new(&key)?;
    let ciphertext = lea.encrypt_block(&plaintext);
    let decrypted = lea.decrypt_block(&ciphertext);

    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));
    ensure!(decrypted == plaintext, "round trip failed");
    Ok(())
}
