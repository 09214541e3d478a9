//! AES-128 key schedule and block encryption/decryption.

use log::trace;
use zeroize::Zeroize;

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

/// Words in the expanded AES-128 schedule.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// Words in the cipher key.
const KEY_WORDS: usize = KEY_SIZE / 4;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub(crate) fn expand(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
    let schedule = RoundKeys::from(round_keys);
    w.zeroize();
    round_keys.zeroize();

    trace!("expanded AES-128 key schedule");
    schedule
}

fn encrypt_state(state: &mut Block, round_keys: &RoundKeys) {
    add_round_key(state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys.get(ROUNDS));
}

fn decrypt_state(state: &mut Block, round_keys: &RoundKeys) {
    add_round_key(state, round_keys.get(ROUNDS));

    for round in (1..ROUNDS).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_keys.get(round));
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0));
}

/// AES-128 bound to one expanded key schedule.
///
/// Expanding once and reusing the cipher avoids re-running the key schedule
/// for every block. The schedule is read-only after construction, so a shared
/// reference can be used from several threads at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Validates and expands `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::from_key(&key))
    }

    /// Expands an already validated key.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand(key),
        }
    }

    /// Wraps a previously expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block in place.
    pub fn encrypt_block(&self, block: &mut Block) {
        encrypt_state(block, &self.round_keys);
    }

    /// Decrypts one block in place.
    pub fn decrypt_block(&self, block: &mut Block) {
        decrypt_state(block, &self.round_keys);
    }
}

/// Expands a caller-supplied key into its 11 round keys.
///
/// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
/// unless `key` is exactly 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand(&key))
}

/// Encrypts a single 16-byte block under a 16-byte key.
///
/// The key is checked before the block, so a call with both lengths wrong
/// reports the key.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let cipher = Aes128::new(key)?;
    let mut state = block_from_slice(plaintext)?;
    cipher.encrypt_block(&mut state);
    Ok(state)
}

/// Decrypts a single 16-byte block under a 16-byte key.
///
/// Length checks follow the same order as [`encrypt_block`].
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let cipher = Aes128::new(key)?;
    let mut state = block_from_slice(ciphertext)?;
    cipher.decrypt_block(&mut state);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    // FIPS-197 Appendix A.1 cipher key.
    const APPENDIX_A_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let ct = encrypt_block(&NIST_PLAIN, &NIST_KEY).expect("valid lengths");
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let pt = decrypt_block(&NIST_CIPHER, &NIST_KEY).expect("valid lengths");
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn expansion_matches_appendix_a1() {
        let rks = expand(&Aes128Key::from(APPENDIX_A_KEY));
        assert_eq!(rks.get(0), &APPENDIX_A_KEY);
        // w4..w7
        assert_eq!(
            rks.get(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ]
        );
        // w40..w43
        assert_eq!(
            rks.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6
            ]
        );
    }

    #[test]
    fn expand_key_is_deterministic() {
        let a = expand_key(&NIST_KEY).expect("valid key");
        let b = expand_key(&NIST_KEY).expect("valid key");
        assert_eq!(a, b);
        assert_eq!(a.len(), 11);
    }

    #[test]
    fn wrong_key_length_is_reported_first() {
        assert_eq!(
            encrypt_block(&[0u8; 15], &[0u8; 17]),
            Err(Error::InvalidKeyLength {
                expected: 16,
                actual: 17
            })
        );
        assert_eq!(
            decrypt_block(&[0u8; 16], &[0u8; 15]),
            Err(Error::InvalidKeyLength {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn wrong_block_length_is_rejected() {
        assert_eq!(
            encrypt_block(&[0u8; 17], &NIST_KEY),
            Err(Error::InvalidBlockLength {
                expected: 16,
                actual: 17
            })
        );
        assert_eq!(
            decrypt_block(&[], &NIST_KEY),
            Err(Error::InvalidBlockLength {
                expected: 16,
                actual: 0
            })
        );
    }

    #[test]
    fn cipher_reuses_schedule() {
        let cipher = Aes128::new(&NIST_KEY).expect("valid key");
        let mut block = NIST_PLAIN;
        cipher.encrypt_block(&mut block);
        assert_eq!(block, NIST_CIPHER);
        cipher.decrypt_block(&mut block);
        assert_eq!(block, NIST_PLAIN);

        let restored = Aes128::from_round_keys(RoundKeys::from(*cipher.round_keys().as_blocks()));
        assert_eq!(restored, cipher);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let cipher = Aes128::from_key(&Aes128Key::from(key_bytes));
            let mut state = block;
            cipher.encrypt_block(&mut state);
            cipher.decrypt_block(&mut state);
            assert_eq!(state, block);
        }
    }
}
