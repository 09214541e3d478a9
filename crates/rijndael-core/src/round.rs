//! AES round transformations over the column-major state.

use crate::block::{xor_in_place, Block};
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let s = *state;
    *state = [
        s[0], s[5], s[10], s[15], //
        s[4], s[9], s[14], s[3], //
        s[8], s[13], s[2], s[7], //
        s[12], s[1], s[6], s[11],
    ];
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let s = *state;
    *state = [
        s[0], s[13], s[10], s[7], //
        s[4], s[1], s[14], s[11], //
        s[8], s[5], s[2], s[15], //
        s[12], s[9], s[6], s[3],
    ];
}

fn mix_single_column(col: &mut [u8]) {
    let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

/// MixColumns over all four columns.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_block() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_rotates_each_row() {
        let mut state = counting_block();
        shift_rows(&mut state);
        // Row 0 unchanged, row 1 by one column, row 2 by two, row 3 by three.
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn mix_columns_known_column() {
        // Standard test column db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [0u8; 16];
        for c in 0..4 {
            state[c * 4..c * 4 + 4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        }
        mix_columns(&mut state);
        for c in 0..4 {
            assert_eq!(&state[c * 4..c * 4 + 4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        }
        inv_mix_columns(&mut state);
        assert_eq!(&state[..4], &[0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn mix_columns_fixes_uniform_columns() {
        // 2 ^ 3 ^ 1 ^ 1 == 1, so a column of equal bytes is unchanged.
        let mut state = [0xc6u8; 16];
        mix_columns(&mut state);
        assert_eq!(state, [0xc6u8; 16]);
    }

    #[test]
    fn inverse_layers_undo_forward_layers() {
        let original: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0x5c);
        let mut state = original;
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }
}
