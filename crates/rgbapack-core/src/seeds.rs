// crates/rgbapack-core/src/seeds.rs
//
// Walker seed plane.
//
// Layout (row-major, 4 bytes per pixel):
//   top-left quadrant  : X seeds
//   top-right quadrant : Y seeds (same row/col offset as the matching X seed)
//   bottom half        : unused, opaque black
//
// Slot `i` addresses quadrant pixel (i % qw, i / qw).

use crate::codec::rgba::Rgba;
use crate::codec::{decode, encode};
use crate::error::{PackError, Result};
use crate::plane::BYTES_PER_PIXEL;
use crate::sample::SplitMix64;
use crate::validate::validate_layout;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeedLayout {
    pub width: u32,
    pub height: u32,
}

impl SeedLayout {
    /// (width, height) of one seed quadrant.
    #[inline]
    pub fn quadrant(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        let (qw, qh) = self.quadrant();
        qw as usize * qh as usize
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

impl Default for SeedLayout {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

/// Normalized walker start position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WalkerSeed {
    pub x: f64,
    pub y: f64,
}

impl WalkerSeed {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPlane {
    layout: SeedLayout,
    bytes: Vec<u8>,
}

impl SeedPlane {
    pub fn new(layout: SeedLayout) -> Result<Self> {
        validate_layout(&layout)?;
        let bytes = Rgba::OPAQUE_BLACK
            .to_bytes()
            .iter()
            .copied()
            .cycle()
            .take(layout.byte_len())
            .collect();
        Ok(Self { layout, bytes })
    }

    pub fn from_bytes(layout: SeedLayout, bytes: Vec<u8>) -> Result<Self> {
        validate_layout(&layout)?;
        if bytes.len() != layout.byte_len() {
            return Err(PackError::Layout(format!(
                "seed plane {}x{} needs {} bytes, got {}",
                layout.width,
                layout.height,
                layout.byte_len(),
                bytes.len()
            )));
        }
        Ok(Self { layout, bytes })
    }

    /// Fill every slot from `sampler`, X then Y per slot.
    pub fn fill_with(&mut self, sampler: &mut SplitMix64) {
        for i in 0..self.layout.capacity() {
            let x = sampler.next_unit();
            let y = sampler.next_unit();
            // i < capacity, so the offsets are in bounds.
            let (xo, yo) = self.slot_offsets(i);
            self.write_px(xo, encode(x));
            self.write_px(yo, encode(y));
        }
        tracing::debug!(
            width = self.layout.width,
            height = self.layout.height,
            seeds = self.layout.capacity(),
            "seed plane filled"
        );
    }

    pub fn set(&mut self, i: usize, seed: WalkerSeed) -> Result<()> {
        let (xo, yo) = self.checked_slot(i)?;
        self.write_px(xo, encode(seed.x));
        self.write_px(yo, encode(seed.y));
        Ok(())
    }

    pub fn get(&self, i: usize) -> Result<WalkerSeed> {
        let (xo, yo) = self.checked_slot(i)?;
        Ok(WalkerSeed::new(
            decode(self.read_px(xo)),
            decode(self.read_px(yo)),
        ))
    }

    pub fn seeds(&self) -> Vec<WalkerSeed> {
        (0..self.layout.capacity())
            .map(|i| {
                let (xo, yo) = self.slot_offsets(i);
                WalkerSeed::new(decode(self.read_px(xo)), decode(self.read_px(yo)))
            })
            .collect()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        if x >= self.layout.width || y >= self.layout.height {
            return Err(PackError::Layout(format!(
                "pixel ({x},{y}) outside {}x{} plane",
                self.layout.width, self.layout.height
            )));
        }
        Ok(self.read_px(self.offset(x, y)))
    }

    #[inline]
    pub fn layout(&self) -> SeedLayout {
        self.layout
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn checked_slot(&self, i: usize) -> Result<(usize, usize)> {
        let cap = self.layout.capacity();
        if i >= cap {
            return Err(PackError::Layout(format!(
                "seed index {i} out of range (capacity {cap})"
            )));
        }
        Ok(self.slot_offsets(i))
    }

    /// Byte offsets of the X and Y pixels for slot `i`.
    fn slot_offsets(&self, i: usize) -> (usize, usize) {
        let (qw, _) = self.layout.quadrant();
        let col = (i % qw as usize) as u32;
        let row = (i / qw as usize) as u32;
        (self.offset(col, row), self.offset(col + qw, row))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.layout.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    #[inline]
    fn read_px(&self, off: usize) -> Rgba {
        let b = &self.bytes[off..off + BYTES_PER_PIXEL];
        Rgba::new(b[0], b[1], b[2], b[3])
    }

    #[inline]
    fn write_px(&mut self, off: usize, px: Rgba) {
        self.bytes[off..off + BYTES_PER_PIXEL].copy_from_slice(&px.to_bytes());
    }
}
