// crates/rgbapack-core/src/container.rs

use crate::error::{PackError, Result};
use crate::seeds::{SeedLayout, SeedPlane};
use crate::validate::validate_layout;

const MAGIC: &[u8; 4] = b"RGP1";
const HEADER_LEN: usize = 4 + 4 + 4 + 8;
const CRC_LEN: usize = 4;

/// RGP1 layout (little-endian):
/// MAGIC[4]
/// width:u32
/// height:u32
/// data_len:u64
/// data_bytes[data_len]   (width*height RGBA pixels, row-major)
/// crc32:u32              (over everything before crc32)
pub fn encode_container(plane: &SeedPlane) -> Vec<u8> {
    let layout = plane.layout();
    let data = plane.as_bytes();

    let mut out = Vec::with_capacity(HEADER_LEN + data.len() + CRC_LEN);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&layout.width.to_le_bytes());
    out.extend_from_slice(&layout.height.to_le_bytes());
    out.extend_from_slice(&(data.len() as u64).to_le_bytes());
    out.extend_from_slice(data);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

/// Validates magic, crc32, and that data_len matches the declared dimensions.
pub fn decode_container(bytes: &[u8]) -> Result<SeedPlane> {
    if bytes.len() < HEADER_LEN + CRC_LEN {
        return Err(PackError::Format("container too small".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(PackError::Format("bad container magic".into()));
    }

    let crc_off = bytes.len() - CRC_LEN;
    let mut i = crc_off;
    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        return Err(PackError::Format(format!(
            "crc32 mismatch: stored {crc_expected:08x}, computed {crc_actual:08x}"
        )));
    }

    let mut i = 4usize;
    let width = read_u32(bytes, &mut i)?;
    let height = read_u32(bytes, &mut i)?;
    let data_len = read_u64(bytes, &mut i)?;

    let layout = SeedLayout { width, height };
    validate_layout(&layout)?;
    if data_len != layout.byte_len() as u64 {
        return Err(PackError::Format(format!(
            "data_len {} does not match {}x{} plane",
            data_len, width, height
        )));
    }
    if i + layout.byte_len() != crc_off {
        return Err(PackError::Format("data_len mismatch".into()));
    }

    tracing::debug!(width, height, data_len, "decoded RGP1 container");
    SeedPlane::from_bytes(layout, bytes[i..crc_off].to_vec())
}

pub fn write_container(path: &std::path::Path, plane: &SeedPlane) -> Result<()> {
    std::fs::write(path, encode_container(plane))?;
    Ok(())
}

pub fn read_container(path: &std::path::Path) -> Result<SeedPlane> {
    let bytes = std::fs::read(path)?;
    decode_container(&bytes)
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(take(bytes, i, 4)?);
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(take(bytes, i, 8)?);
    Ok(u64::from_le_bytes(buf))
}

fn take<'a>(bytes: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8]> {
    if bytes.len() < *i + n {
        return Err(PackError::Format("unexpected eof".into()));
    }
    let s = &bytes[*i..*i + n];
    *i += n;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::WalkerSeed;

    fn plane() -> SeedPlane {
        let mut p = SeedPlane::new(SeedLayout {
            width: 4,
            height: 2,
        })
        .unwrap();
        p.set(1, WalkerSeed::new(0.5, 0.75)).unwrap();
        p
    }

    #[test]
    fn header_fields_are_little_endian() {
        let bytes = encode_container(&plane());
        assert_eq!(&bytes[0..4], b"RGP1");
        assert_eq!(&bytes[4..8], &[4, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[2, 0, 0, 0]);
        assert_eq!(&bytes[12..20], &[32, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bytes.len(), HEADER_LEN + 32 + CRC_LEN);
    }

    #[test]
    fn flipped_bit_fails_crc() {
        let mut bytes = encode_container(&plane());
        bytes[HEADER_LEN + 3] ^= 0x01;
        let err = decode_container(&bytes).unwrap_err();
        assert!(format!("{err}").contains("crc32 mismatch"));
    }

    #[test]
    fn rejects_truncated_and_bad_magic() {
        assert!(decode_container(b"RGP1").is_err());
        let mut bytes = encode_container(&plane());
        bytes[0] = b'X';
        assert!(decode_container(&bytes).is_err());
    }

    #[test]
    fn decoded_plane_matches() {
        let p = plane();
        let back = decode_container(&encode_container(&p)).unwrap();
        assert_eq!(back, p);
    }
}
