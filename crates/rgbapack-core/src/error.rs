use thiserror::Error;

use crate::codec::rgba::Channel;

pub type Result<T> = std::result::Result<T, PackError>;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid {channel} channel value: {value} (expected 0..=255)")]
    InvalidChannelValue { channel: Channel, value: i64 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("container format error: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
