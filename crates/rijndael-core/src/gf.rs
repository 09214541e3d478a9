//! GF(2^8) arithmetic under the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Every function here is a `const fn` so the substitution tables can be
//! derived at compile time, and none of them branch on their operands.

/// Low byte of the reduction polynomial 0x11B.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `x`, reducing any overflow past bit 7.
#[inline]
pub(crate) const fn xtime(byte: u8) -> u8 {
    let carry = (byte >> 7).wrapping_neg();
    (byte << 1) ^ (REDUCTION & carry)
}

/// Shift-and-add multiplication. Runs all eight steps regardless of `b`.
#[inline]
pub(crate) const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        product ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Maps 0 to 0.
pub(crate) const fn inverse(a: u8) -> u8 {
    // 254 = 0b1111_1110: square-and-multiply over the seven high bits.
    let mut result = 1u8;
    let mut power = gmul(a, a);
    let mut i = 0;
    while i < 7 {
        result = gmul(result, power);
        power = gmul(power, power);
        i += 1;
    }
    result
}
