//! Single-block AES-128 (Rijndael) engine.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - The AES-128 key schedule (11 round keys from a 16-byte key).
//! - Single-block encryption and decryption, either through the slice entry
//!   points [`encrypt_block`] / [`decrypt_block`] or through [`Aes128`] when
//!   one schedule is reused for many blocks.
//! - The published known-answer vectors in [`vectors`].
//!
//! The S-box, inverse S-box and round constants are computed at compile time.
//! Table reads scan the whole table and field multiplication is branch-free,
//! so neither leaks the secret byte through timing or cache access. Modes of
//! operation, padding and other key sizes are left to callers.
//!
//! ```
//! let key = [0u8; 16];
//! let ct = rijndael_core::encrypt_block(&[0u8; 16], &key)?;
//! assert_eq!(rijndael_core::decrypt_block(&ct, &key)?, [0u8; 16]);
//! # Ok::<(), rijndael_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
pub mod vectors;

pub use crate::block::{block_from_slice, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUNDS, SCHEDULE_SIZE};
