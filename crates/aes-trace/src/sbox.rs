//! The AES substitution box.

use crate::gf::inverse;

/// Forward S-box, evaluated at compile time from the field inverse and the
/// FIPS-197 affine transform.
pub const SBOX: [u8; 256] = build_sbox();

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

/// Looks up `byte` in the S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}
