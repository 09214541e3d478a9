//! Published AES-128 single-block known-answer vectors.

use crate::block::Block;
use crate::key::KEY_SIZE;

/// One key / plaintext / ciphertext triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Where the vector was published.
    pub source: &'static str,
    /// Cipher key.
    pub key: [u8; KEY_SIZE],
    /// Input block.
    pub plaintext: Block,
    /// Expected output block.
    pub ciphertext: Block,
}

const SP800_38A_KEY: [u8; KEY_SIZE] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

/// Every vector the engine is expected to reproduce.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        source: "FIPS-197 Appendix C.1",
        key: [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ],
        plaintext: [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ],
        ciphertext: [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
            0xc5, 0x5a,
        ],
    },
    KnownAnswer {
        source: "FIPS-197 Appendix B",
        key: SP800_38A_KEY,
        plaintext: [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ],
        ciphertext: [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ],
    },
    KnownAnswer {
        source: "SP 800-38A F.1.1 block 1",
        key: SP800_38A_KEY,
        plaintext: [
            0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93,
            0x17, 0x2a,
        ],
        ciphertext: [
            0x3a, 0xd7, 0x7b, 0xb4, 0x0d, 0x7a, 0x36, 0x60, 0xa8, 0x9e, 0xca, 0xf3, 0x24, 0x66,
            0xef, 0x97,
        ],
    },
    KnownAnswer {
        source: "SP 800-38A F.1.1 block 2",
        key: SP800_38A_KEY,
        plaintext: [
            0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c, 0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf,
            0x8e, 0x51,
        ],
        ciphertext: [
            0xf5, 0xd3, 0xd5, 0x85, 0x03, 0xb9, 0x69, 0x9d, 0xe7, 0x85, 0x89, 0x5a, 0x96, 0xfd,
            0xba, 0xaf,
        ],
    },
    KnownAnswer {
        source: "SP 800-38A F.1.1 block 3",
        key: SP800_38A_KEY,
        plaintext: [
            0x30, 0xc8, 0x1c, 0x46, 0xa3, 0x5c, 0xe4, 0x11, 0xe5, 0xfb, 0xc1, 0x19, 0x1a, 0x0a,
            0x52, 0xef,
        ],
        ciphertext: [
            0x43, 0xb1, 0xcd, 0x7f, 0x59, 0x8e, 0xce, 0x23, 0x88, 0x1b, 0x00, 0xe3, 0xed, 0x03,
            0x06, 0x88,
        ],
    },
    KnownAnswer {
        source: "SP 800-38A F.1.1 block 4",
        key: SP800_38A_KEY,
        plaintext: [
            0xf6, 0x9f, 0x24, 0x45, 0xdf, 0x4f, 0x9b, 0x17, 0xad, 0x2b, 0x41, 0x7b, 0xe6, 0x6c,
            0x37, 0x10,
        ],
        ciphertext: [
            0x7b, 0x0c, 0x78, 0x5e, 0x27, 0xe8, 0xad, 0x3f, 0x82, 0x23, 0x20, 0x71, 0x04, 0x72,
            0x5d, 0xd4,
        ],
    },
    KnownAnswer {
        source: "all-zero key and block",
        key: [0u8; KEY_SIZE],
        plaintext: [0u8; 16],
        ciphertext: [
            0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34,
            0x2b, 0x2e,
        ],
    },
    KnownAnswer {
        source: "native/interpreted cross-check pair",
        key: [50, 20, 46, 86, 67, 9, 70, 27, 75, 17, 51, 17, 4, 8, 6, 99],
        plaintext: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
        ciphertext: [
            0x4b, 0x95, 0x86, 0x93, 0xb4, 0xe9, 0xc4, 0xeb, 0x92, 0xb3, 0xe8, 0x69, 0xaf, 0x40,
            0xe0, 0xce,
        ],
    },
];
