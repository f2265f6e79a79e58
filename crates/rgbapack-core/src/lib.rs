pub mod error;
pub mod validate;

pub mod codec;
pub mod container;
pub mod plane;
pub mod sample;
pub mod seeds;
pub mod stats;

pub use crate::codec::params::{CodecParams, DEFAULT_EPSILON};
pub use crate::codec::rgba::{Channel, Rgba};
pub use crate::codec::{decode, decode_channels, encode, encode_with};
pub use crate::error::{PackError, Result};
pub use crate::seeds::{SeedLayout, SeedPlane, WalkerSeed};
