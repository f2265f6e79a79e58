// crates/rgbapack-core/src/stats.rs

use crate::codec::params::CodecParams;
use crate::codec::{clamp_unit, decode, encode_with};

/// Round-trip error summary over a batch of scalars.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RoundTripStats {
    pub count: usize,
    pub mean_abs_error: f64,
    pub max_abs_error: f64,
    pub min_decoded: f64,
    pub max_decoded: f64,
}

impl RoundTripStats {
    pub fn measure(values: &[f64]) -> Self {
        Self::measure_with(values, &CodecParams::default())
    }

    /// Error is taken against the *clamped* input, so saturation at the
    /// edges is not counted as quantization error.
    pub fn measure_with(values: &[f64], params: &CodecParams) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sum = 0.0;
        let mut max_err = 0.0f64;
        let mut min_dec = f64::INFINITY;
        let mut max_dec = f64::NEG_INFINITY;

        for &v in values {
            let clamped = clamp_unit(v, params);
            let d = decode(encode_with(v, params));
            let err = (d - clamped).abs();
            sum += err;
            max_err = max_err.max(err);
            min_dec = min_dec.min(d);
            max_dec = max_dec.max(d);
        }

        Self {
            count: values.len(),
            mean_abs_error: sum / values.len() as f64,
            max_abs_error: max_err,
            min_decoded: min_dec,
            max_decoded: max_dec,
        }
    }
}

/// Fixed-width bin counts over [0,1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Values outside [0,1) (and NaN) land in the edge bins.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = if v.is_nan() || v <= 0.0 {
                0
            } else {
                ((v * bins as f64).floor() as usize).min(bins - 1)
            };
            counts[idx] += 1;
        }
        Self {
            counts,
            total: values.len() as u64,
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn bin_width(&self) -> f64 {
        1.0 / self.counts.len() as f64
    }

    pub fn mean_count(&self) -> f64 {
        self.total as f64 / self.counts.len() as f64
    }

    /// Largest |count - mean| / mean across bins. 0.0 for an empty histogram.
    pub fn max_deviation(&self) -> f64 {
        let mean = self.mean_count();
        if mean == 0.0 {
            return 0.0;
        }
        self.counts
            .iter()
            .map(|&c| ((c as f64) - mean).abs() / mean)
            .fold(0.0, f64::max)
    }
}
