//! Half-precision (16-bit) floating point utilities.

/// 2^-24, the value of the smallest half-precision subnormal.
const F16_SUBNORMAL_STEP: f32 = 5.960_464_5e-8;

/// Decodes a half-precision (16-bit) floating point value.
///
/// The input is the raw binary representation (u16) of an IEEE 754
/// half-precision float. Every half-precision value is exactly
/// representable as `f32`, so the widening is lossless. NaN keeps its
/// sign and payload bits.
///
/// # Example
///
/// ```
/// use binary_reader::decode_f16;
///
/// // Positive zero
/// assert_eq!(decode_f16(0x0000), 0.0);
///
/// // Negative zero
/// assert!(decode_f16(0x8000).is_sign_negative());
///
/// // One
/// assert_eq!(decode_f16(0x3C00), 1.0);
///
/// // Largest finite value
/// assert_eq!(decode_f16(0x7BFF), 65504.0);
///
/// // Infinities and NaN
/// assert_eq!(decode_f16(0x7C00), f32::INFINITY);
/// assert_eq!(decode_f16(0xFC00), f32::NEG_INFINITY);
/// assert!(decode_f16(0x7C01).is_nan());
/// ```
pub fn decode_f16(binary: u16) -> f32 {
    let sign = ((binary & 0x8000) as u32) << 16;
    let exponent = ((binary & 0x7C00) >> 10) as u32;
    let fraction = (binary & 0x03FF) as u32;

    match exponent {
        0 => {
            // Subnormal or zero
            let magnitude = fraction as f32 * F16_SUBNORMAL_STEP;
            if sign != 0 {
                -magnitude
            } else {
                magnitude
            }
        }
        // Infinity or NaN
        0x1F => f32::from_bits(sign | 0x7F80_0000 | (fraction << 13)),
        // Normalized: rebias 15 -> 127
        _ => f32::from_bits(sign | ((exponent + 112) << 23) | (fraction << 13)),
    }
}
