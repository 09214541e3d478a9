//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, column-major: byte `4 * c + r` is row `r`, column `c`.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a caller-supplied slice into a block, rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    Block::try_from(bytes).map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub(crate) fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_from_slice_checks_length() {
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength {
                expected: 16,
                actual: 15
            })
        );
        assert!(block_from_slice(&[]).is_err());
        assert!(block_from_slice(&[0u8; 32]).is_err());
    }

    #[test]
    fn xor_is_self_inverse() {
        let mut state = [0x5au8; 16];
        let key: Block = core::array::from_fn(|i| i as u8);
        xor_in_place(&mut state, &key);
        assert_eq!(state[1], 0x5b);
        xor_in_place(&mut state, &key);
        assert_eq!(state, [0x5au8; 16]);
    }
}
