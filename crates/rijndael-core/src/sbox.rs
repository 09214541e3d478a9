//! Substitution tables and round constants.
//!
//! The tables are derived from field arithmetic at compile time rather than
//! pasted in; the assertions at the bottom of the table section fail the build
//! if the derivation ever drifts from FIPS-197.

use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::gf::{inverse, xtime};

/// Forward S-box.
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box.
pub(crate) const INV_SBOX: [u8; 256] = invert_table(&SBOX);

/// Round constants for the ten AES-128 key expansion steps.
pub(crate) const RCON: [u8; 10] = build_rcon();

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(inverse(i as u8));
        i += 1;
    }
    table
}

const fn invert_table(table: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn build_rcon() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut value = 1u8;
    let mut i = 0;
    while i < 10 {
        rcon[i] = value;
        value = xtime(value);
        i += 1;
    }
    rcon
}

const fn is_inverse_pair(forward: &[u8; 256], backward: &[u8; 256]) -> bool {
    let mut i = 0;
    while i < 256 {
        if backward[forward[i] as usize] as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(SBOX[0x00] == 0x63);
const _: () = assert!(SBOX[0x01] == 0x7c);
const _: () = assert!(SBOX[0x53] == 0xed);
const _: () = assert!(SBOX[0xff] == 0x16);
const _: () = assert!(INV_SBOX[0x00] == 0x52);
const _: () = assert!(is_inverse_pair(&SBOX, &INV_SBOX));
const _: () = assert!(RCON[8] == 0x1b && RCON[9] == 0x36);

/// Reads `table[index]` while touching every entry, so the memory access
/// pattern does not depend on `index`.
#[inline]
fn ct_lookup(table: &[u8; 256], index: u8) -> u8 {
    let mut out = 0u8;
    for (i, entry) in table.iter().enumerate() {
        out.conditional_assign(entry, (i as u8).ct_eq(&index));
    }
    out
}

/// Forward S-box substitution.
#[inline]
pub(crate) fn sbox(byte: u8) -> u8 {
    ct_lookup(&SBOX, byte)
}

/// Inverse S-box substitution.
#[inline]
pub(crate) fn inv_sbox(byte: u8) -> u8 {
    ct_lookup(&INV_SBOX, byte)
}
