// crates/rgbapack-core/src/codec/params.rs

use crate::error::Result;
use crate::validate::validate_params;

/// Clamping margin below 1.0. The largest encodable scalar is `1 - epsilon`.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Codec knobs. Only the clamping margin is tunable; the radix and digit
/// count are fixed by the pixel layout (base 256, four channels).
///
/// Always valid: the only way to pick a margin is `new`, which rejects
/// anything outside (0, 1/256).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CodecParams {
    epsilon: f64,
}

impl CodecParams {
    pub fn new(epsilon: f64) -> Result<Self> {
        let p = Self { epsilon };
        validate_params(&p)?;
        Ok(p)
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn upper_bound(&self) -> f64 {
        1.0 - self.epsilon
    }
}

impl Default for CodecParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_a_valid_margin() {
        let p = CodecParams::new(1e-9).unwrap();
        assert_eq!(p.epsilon(), 1e-9);
        assert_eq!(p.upper_bound(), 1.0 - 1e-9);
        assert_eq!(CodecParams::new(DEFAULT_EPSILON).unwrap(), CodecParams::default());
    }
}
