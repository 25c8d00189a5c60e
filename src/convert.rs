// ECMAScript-style double to integer conversions, computed from the raw bit
// pattern so they stay exact at magnitudes where a 64-bit integer
// intermediate would overflow or lose precision.

use crate::double;

/// Low `width` bits set, for `width` in 1..=64.
const fn width_mask(width: u32) -> u64 {
    if width == 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Convert a double to an unsigned `WIDTH`-bit integer, carried in a `u64`.
///
/// If `d` is NaN or infinite the result is 0. Otherwise the result is the
/// unique value in `[0, 2^WIDTH)` congruent to `sign(d) * floor(|d|)` modulo
/// `2^WIDTH`. This is how `ToUint32` treats Number inputs, generalized to
/// any supported width.
pub const fn to_uint_width<const WIDTH: u32>(d: f64) -> u64 {
    const {
        assert!(WIDTH == 8 || WIDTH == 16 || WIDTH == 32 || WIDTH == 64, "unsupported conversion width");
    }

    let bits = d.to_bits();

    // Exponent below zero means |d| < 1, so floor(|d|) is 0. Zeros and
    // subnormals take this exit through their all-zero exponent field.
    let exp = double::unbiased_exponent(bits);
    if exp < 0 {
        return 0;
    }
    let exponent = exp as u32;

    // At exponent >= 52 + WIDTH every bit of floor(|d|) below position WIDTH
    // is zero (2^84 and the next representable double 2^84 + 2^32 are both
    // 0 mod 2^32, say). The maximal exponent field lands here as well, so
    // this exit also covers NaN and the infinities.
    if exponent >= double::EXPONENT_SHIFT + WIDTH {
        return 0;
    }

    // Move the stored significand bits to their positions in the binary
    // representation of floor(|d|).
    let mut result = if exponent > double::EXPONENT_SHIFT {
        bits << (exponent - double::EXPONENT_SHIFT)
    } else {
        bits >> (double::EXPONENT_SHIFT - exponent)
    };

    // When the exponent falls inside the result window, the shifted word
    // still holds exponent/sign bits at and above position `exponent`, and
    // the significand's implicit leading 1 belongs at exactly that position.
    if exponent < WIDTH {
        let implicit_one = 1u64 << exponent;
        result &= implicit_one - 1;
        result |= implicit_one;
    }

    // Two's-complement negation realizes -floor(|d|) mod 2^WIDTH. Negating
    // before masking is fine: the low WIDTH bits of -x depend only on the
    // low WIDTH bits of x.
    if double::is_sign_negative(bits) {
        result = result.wrapping_neg();
    }
    result & width_mask(WIDTH)
}

/// Convert a double to a signed `WIDTH`-bit integer, carried in an `i64`.
///
/// Takes the congruence class computed by [`to_uint_width`] and maps it into
/// `[-2^(WIDTH-1), 2^(WIDTH-1) - 1]`, which is exactly `ToInt32` behavior at
/// `WIDTH` = 32.
pub const fn to_int_width<const WIDTH: u32>(d: f64) -> i64 {
    let max = (width_mask(WIDTH) >> 1) as i64; // 2^(WIDTH-1) - 1
    let min = -max - 1;

    let u = to_uint_width::<WIDTH>(d);
    if u <= max as u64 {
        u as i64
    } else {
        // min + (u - max) - 1, grouped as min + (u - (max + 1)) so the
        // unsigned difference fits in the signed container even at width 64.
        min + (u - (max as u64 + 1)) as i64
    }
}

/// ES5 9.5 ToInt32, specialized for doubles.
pub const fn to_int32(d: f64) -> i32 {
    to_int_width::<32>(d) as i32
}

/// ES5 9.6 ToUint32, specialized for doubles.
pub const fn to_uint32(d: f64) -> u32 {
    to_uint_width::<32>(d) as u32
}

/// WebIDL long long conversion, specialized for doubles.
pub const fn to_int64(d: f64) -> i64 {
    to_int_width::<64>(d)
}

/// WebIDL unsigned long long conversion, specialized for doubles.
pub const fn to_uint64(d: f64) -> u64 {
    to_uint_width::<64>(d)
}

/// WebIDL short conversion, specialized for doubles.
pub const fn to_int16(d: f64) -> i16 {
    to_int_width::<16>(d) as i16
}

/// WebIDL unsigned short conversion, specialized for doubles.
pub const fn to_uint16(d: f64) -> u16 {
    to_uint_width::<16>(d) as u16
}

/// WebIDL byte conversion, specialized for doubles.
pub const fn to_int8(d: f64) -> i8 {
    to_int_width::<8>(d) as i8
}

/// WebIDL octet conversion, specialized for doubles.
pub const fn to_uint8(d: f64) -> u8 {
    to_uint_width::<8>(d) as u8
}

/// ES5 9.4 ToInteger, specialized for doubles: truncation toward zero in the
/// floating-point domain, without binding to an integer width.
///
/// NaN becomes +0, both zeros and both infinities come back unchanged.
pub fn to_integer(d: f64) -> f64 {
    if d == 0.0 {
        // Covers -0.0 as well; returning d keeps its sign bit.
        return d;
    }

    if !d.is_finite() {
        if d.is_nan() {
            return 0.0;
        }
        return d;
    }

    if d < 0.0 { d.ceil() } else { d.floor() }
}
