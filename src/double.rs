// IEEE-754 binary64 bit-pattern decomposition shared by the conversion routines.

pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub(crate) const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// Bit position of the exponent field, which is also the number of stored
/// significand bits.
pub(crate) const EXPONENT_SHIFT: u32 = 52;
pub(crate) const EXPONENT_BIAS: i32 = 1023;

/// Unbiased exponent of a bit pattern. Not a meaningful exponent for NaN,
/// infinities (both read as 1024) or subnormals (which read as -1023 instead
/// of their effective -1022), but the conversion routines only range-check it
/// and those values land on the correct side of every check.
pub(crate) const fn unbiased_exponent(bits: u64) -> i32 {
    ((bits & EXPONENT_MASK) >> EXPONENT_SHIFT) as i32 - EXPONENT_BIAS
}

pub(crate) const fn is_sign_negative(bits: u64) -> bool {
    bits & SIGN_MASK != 0
}
