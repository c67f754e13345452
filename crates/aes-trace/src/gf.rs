//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Every function is a `const fn` so that the S-box and round constants can be
//! evaluated at compile time.

/// Multiplies by `x` (i.e. `{02}`), reducing by 0x1b when the high bit falls off.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two field elements using shift-and-add.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Maps 0 to 0.
pub const fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp > 0 {
        if exp & 1 != 0 {
            result = gmul(result, base);
        }
        base = gmul(base, base);
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_matches_fips_examples() {
        // FIPS-197 section 4.2.1
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn gmul_matches_fips_examples() {
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn gmul_identities() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 1), a);
            assert_eq!(gmul(a, 0), 0);
            assert_eq!(gmul(a, 2), xtime(a));
        }
        for a in 0..=255u8 {
            for b in [0x03u8, 0x09, 0x0b, 0x0d, 0x0e, 0xff] {
                assert_eq!(gmul(a, b), gmul(b, a));
            }
        }
    }

    #[test]
    fn inverse_round_trips() {
        assert_eq!(inverse(0), 0);
        assert_eq!(inverse(0x53), 0xca);
        for a in 1..=255u8 {
            assert_eq!(gmul(a, inverse(a)), 1, "inverse of {a:#04x}");
        }
    }
}
