//! Finite field arithmetic for SNOW 3G and UIA2
//!
//! GF(2^8) helpers drive the LFSR feedback (multiplication and division by
//! the LFSR root α) and the S-box diffusion layer. GF(2^64) helpers drive the
//! UIA2 universal hash.
//!
//! Reference: ETSI/SAGE SNOW 3G specification §3.1 and UEA2/UIA2
//! specification §4.3.

/// Reduction constant for the GF(2^8) representation of α (x^8 + x^7 + x^5 + x^3 + 1).
pub const ALPHA_POLY: u8 = 0xA9;

/// Reduction constant for GF(2^64) used by f9 (x^64 + x^4 + x^3 + x + 1).
pub const F9_POLY: u64 = 0x1B;

/// `MULx`: multiply `v` by x in GF(2^8), reducing with `c` on overflow.
#[inline]
pub const fn mul_x(v: u8, c: u8) -> u8 {
    if v & 0x80 != 0 {
        (v << 1) ^ c
    } else {
        v << 1
    }
}

/// `MULxPOW`: apply [`mul_x`] `i` times.
pub const fn mul_x_pow(v: u8, i: u8, c: u8) -> u8 {
    let mut result = v;
    let mut n = 0;
    while n < i {
        result = mul_x(result, c);
        n += 1;
    }
    result
}

/// `MULα`: multiply a byte by α, giving the 32-bit feedback term for S0.
#[inline]
pub fn mul_alpha(c: u8) -> u32 {
    MUL_ALPHA[c as usize]
}

/// `DIVα`: divide a byte by α, giving the 32-bit feedback term for S11.
#[inline]
pub fn div_alpha(c: u8) -> u32 {
    DIV_ALPHA[c as usize]
}

const fn alpha_word(c: u8, exponents: [u8; 4]) -> u32 {
    ((mul_x_pow(c, exponents[0], ALPHA_POLY) as u32) << 24)
        | ((mul_x_pow(c, exponents[1], ALPHA_POLY) as u32) << 16)
        | ((mul_x_pow(c, exponents[2], ALPHA_POLY) as u32) << 8)
        | (mul_x_pow(c, exponents[3], ALPHA_POLY) as u32)
}

const fn alpha_table(exponents: [u8; 4]) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut c = 0;
    while c < 256 {
        table[c] = alpha_word(c as u8, exponents);
        c += 1;
    }
    table
}

const MUL_ALPHA_EXPONENTS: [u8; 4] = [23, 245, 48, 239];
const DIV_ALPHA_EXPONENTS: [u8; 4] = [16, 39, 6, 64];

// Built at compile time from the iterative definition; one lookup per LFSR clock.
static MUL_ALPHA: [u32; 256] = alpha_table(MUL_ALPHA_EXPONENTS);
static DIV_ALPHA: [u32; 256] = alpha_table(DIV_ALPHA_EXPONENTS);

/// `MUL64x`: multiply `v` by x in GF(2^64), reducing with `c` on overflow.
#[inline]
pub fn mul64x(v: u64, c: u64) -> u64 {
    if v & 0x8000_0000_0000_0000 != 0 {
        (v << 1) ^ c
    } else {
        v << 1
    }
}

/// `MUL64xPOW`: apply [`mul64x`] `i` times.
pub fn mul64x_pow(v: u64, i: u8, c: u64) -> u64 {
    (0..i).fold(v, |acc, _| mul64x(acc, c))
}

/// `MUL64`: the product `v * p` in GF(2^64).
///
/// Sums `MUL64xPOW(v, i, c)` over every set bit `i` of `p`. The powers are
/// produced incrementally, one doubling per bit position.
pub fn mul64(v: u64, p: u64, c: u64) -> u64 {
    let mut result = 0u64;
    let mut power = v;
    for i in 0..64 {
        if (p >> i) & 0x1 != 0 {
            result ^= power;
        }
        power = mul64x(power, c);
    }
    result
}

/// A byte with the top `n` bits set, `n` in `0..=8`.
#[inline]
pub fn mask8bit(n: u32) -> u8 {
    debug_assert!(n <= 8, "mask8bit width out of range: {n}");
    (0xFF00u16 >> n) as u8
}
