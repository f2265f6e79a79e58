// crates/rgbapack-core/src/plane.rs
//
// Flat pixel planes: one encoded scalar per 4-byte pixel, r,g,b,a order.

use crate::codec::rgba::Rgba;
use crate::codec::{decode, encode};
use crate::error::{PackError, Result};

pub const BYTES_PER_PIXEL: usize = 4;

pub fn encode_plane(values: &[f64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * BYTES_PER_PIXEL);
    for &v in values {
        out.extend_from_slice(&encode(v).to_bytes());
    }
    out
}

/// Encode into a caller-owned buffer (e.g. a mapped texture row).
pub fn encode_into(values: &[f64], out: &mut [u8]) -> Result<()> {
    let need = values.len() * BYTES_PER_PIXEL;
    if out.len() != need {
        return Err(PackError::Layout(format!(
            "encode_into: need {} bytes for {} values, got {}",
            need,
            values.len(),
            out.len()
        )));
    }
    for (px, &v) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(values) {
        px.copy_from_slice(&encode(v).to_bytes());
    }
    Ok(())
}

pub fn decode_plane(bytes: &[u8]) -> Result<Vec<f64>> {
    if bytes.len() % BYTES_PER_PIXEL != 0 {
        return Err(PackError::Layout(format!(
            "decode_plane: {} bytes is not a whole number of pixels",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| decode(Rgba::new(px[0], px[1], px[2], px[3])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_order_is_most_significant_first() {
        let bytes = encode_plane(&[0.5, 0.0]);
        assert_eq!(bytes, vec![128, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn encode_into_checks_length() {
        let mut buf = [0u8; 7];
        assert!(encode_into(&[0.1, 0.2], &mut buf).is_err());

        let mut buf = [0u8; 8];
        encode_into(&[0.1, 0.2], &mut buf).unwrap();
        assert_eq!(&buf[..], &encode_plane(&[0.1, 0.2])[..]);
    }

    #[test]
    fn decode_plane_rejects_partial_pixel() {
        let err = decode_plane(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(format!("{err}").contains("whole number of pixels"));
    }
}
