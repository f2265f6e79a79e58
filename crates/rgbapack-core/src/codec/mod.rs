// crates/rgbapack-core/src/codec/mod.rs
//
// Float <-> RGBA codec.
// A scalar in [0,1) is written as its first four base-256 digits, r first.

pub mod params;
pub mod rgba;

use crate::codec::params::CodecParams;
use crate::codec::rgba::Rgba;
use crate::error::Result;

const RADIX: f64 = 256.0;

/// Clamp into `[0, 1 - epsilon]`. NaN maps to 0.
#[inline]
pub fn clamp_unit(v: f64, params: &CodecParams) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, params.upper_bound())
}

/// Encode with the default clamping margin.
#[inline]
pub fn encode(v: f64) -> Rgba {
    encode_with(v, &CodecParams::default())
}

/// Saturating encode: out-of-domain input is clamped, never rejected.
pub fn encode_with(v: f64, params: &CodecParams) -> Rgba {
    let mut v = clamp_unit(v, params);
    let mut digits = [0u8; 4];
    for d in digits.iter_mut() {
        v *= RADIX;
        let whole = v.floor();
        // CodecParams keeps epsilon in (0, 1/256), so v < 256 and whole fits a digit.
        *d = whole as u8;
        v -= whole;
    }
    Rgba::from_bytes(digits)
}

/// Inverse of the positional expansion. Total over every quadruple and
/// exact in f64; the result is always in `[0, 1)`.
#[inline]
pub fn decode(px: Rgba) -> f64 {
    let r = px.r as f64;
    let g = px.g as f64;
    let b = px.b as f64;
    let a = px.a as f64;
    (r + g / RADIX + b / (RADIX * RADIX) + a / (RADIX * RADIX * RADIX)) / RADIX
}

/// Decode integer-typed channels, rejecting anything outside 0..=255.
pub fn decode_channels(r: i64, g: i64, b: i64, a: i64) -> Result<f64> {
    let px = Rgba::try_from([r, g, b, a])?;
    Ok(decode(px))
}

/// Size of one step in the least significant digit (256^-4).
pub fn quantum() -> f64 {
    1.0 / (RADIX * RADIX * RADIX * RADIX)
}
