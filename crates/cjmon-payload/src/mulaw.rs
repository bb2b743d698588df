//! Expansion of the 8-bit logarithmic light code.
//!
//! The high nibble selects a segment (each segment doubles the range), the low
//! nibble is linear detail inside it. Segment 0 starts at zero lux, segment 15
//! tops out a little above two million.

/// Offset added to the segment nibble to get the leading bit position
const EXPONENT_BIAS: u32 = 5;

/// Removed after reconstruction so that code 0x00 maps to 0
const ZERO_OFFSET: u32 = 33;

/// Expand a mu-law style light code into lux
pub fn mulaw_to_value(code: u8) -> u32 {
    let exponent = (u32::from(code & 0xF0) >> 4) + EXPONENT_BIAS;
    let mantissa = u32::from(code & 0x0F);

    ((1 << exponent) | (mantissa << (exponent - 4)) | (1 << (exponent - 5))) - ZERO_OFFSET
}
