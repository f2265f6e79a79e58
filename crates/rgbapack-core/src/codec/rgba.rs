// crates/rgbapack-core/src/codec/rgba.rs

use std::fmt;

use crate::error::{PackError, Result};

/// Channel names, most significant digit first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::A => "a",
        };
        f.write_str(s)
    }
}

/// One encoded scalar: four base-256 digits, `r` most significant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const ZERO: Rgba = Rgba::new(0, 0, 0, 0);
    pub const MAX: Rgba = Rgba::new(255, 255, 255, 255);
    /// Fill value for pixels that carry no scalar.
    pub const OPAQUE_BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Big-endian word view: `r` lands in the top byte.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn from_u32(word: u32) -> Self {
        let [r, g, b, a] = word.to_be_bytes();
        Self { r, g, b, a }
    }

    /// 4 bytes in pixel order: r, g, b, a
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        Self { r, g, b, a }
    }

    #[inline]
    pub fn channel(self, ch: Channel) -> u8 {
        match ch {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
            Channel::A => self.a,
        }
    }

    #[inline]
    pub fn with_channel(mut self, ch: Channel, value: u8) -> Self {
        match ch {
            Channel::R => self.r = value,
            Channel::G => self.g = value,
            Channel::B => self.b = value,
            Channel::A => self.a = value,
        }
        self
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Rgba::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        px.to_bytes()
    }
}

/// Integer-typed channels coming from outside the codec (CLI args, other
/// pixel stores). Anything outside 0..=255 is a caller bug and is rejected.
impl TryFrom<[i64; 4]> for Rgba {
    type Error = PackError;

    fn try_from(raw: [i64; 4]) -> Result<Self> {
        let mut out = [0u8; 4];
        for ((slot, value), channel) in out.iter_mut().zip(raw).zip(Channel::ALL) {
            *slot = u8::try_from(value)
                .map_err(|_| PackError::InvalidChannelValue { channel, value })?;
        }
        Ok(Rgba::from_bytes(out))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.r, self.g, self.b, self.a)
    }
}
