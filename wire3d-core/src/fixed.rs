//! Fixed-point helpers
//!
//! Values are plain integers scaled by `2^frac_bits`. Products are formed at
//! 64-bit width and descaled with an arithmetic right shift, which rounds
//! toward negative infinity.

/// `1.0` in a format with `frac_bits` fractional bits.
#[inline]
pub const fn unit(frac_bits: u32) -> i32 {
    1 << frac_bits
}

/// `(a * b) >> frac_bits`, multiplied at full width.
#[inline]
pub fn mul(a: i32, b: i32, frac_bits: u32) -> i32 {
    ((a as i64 * b as i64) >> frac_bits) as i32
}

/// `(a * b - c * d) >> frac_bits`, the first half of a 2D rotation.
#[inline]
pub fn mul_sub(a: i32, b: i32, c: i32, d: i32, frac_bits: u32) -> i32 {
    ((a as i64 * b as i64 - c as i64 * d as i64) >> frac_bits) as i32
}

/// `(a * b + c * d) >> frac_bits`, the second half of a 2D rotation.
#[inline]
pub fn mul_add(a: i32, b: i32, c: i32, d: i32, frac_bits: u32) -> i32 {
    ((a as i64 * b as i64 + c as i64 * d as i64) >> frac_bits) as i32
}
