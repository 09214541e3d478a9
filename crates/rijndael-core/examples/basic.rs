//! Encrypts one block, decrypts it back and prints both as hex.

use rijndael_core::{decrypt_block, encrypt_block, Aes128};

fn main() -> Result<(), rijndael_core::Error> {
    let key = *b"YELLOW SUBMARINE";
    let plaintext = *b"first block here";

    let ciphertext = encrypt_block(&plaintext, &key)?;
    let recovered = decrypt_block(&ciphertext, &key)?;
    assert_eq!(recovered, plaintext);

    // Same result through a schedule expanded once.
    let cipher = Aes128::new(&key)?;
    let mut block = plaintext;
    cipher.encrypt_block(&mut block);
    assert_eq!(block, ciphertext);

    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("recovered:  {}", hex::encode(recovered));
    Ok(())
}
