//! Error types for iio-sense

use thiserror::Error;

/// Errors that can occur while decoding channel samples
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported sample storage size: {0} bits")]
    UnsupportedStorageBits(u16),

    #[error("Sample buffer too short: need {needed} bytes, got {got}")]
    ShortSample { needed: usize, got: usize },

    #[error("Channel count mismatch: sensor has {expected} channels, got {got} buffers")]
    ChannelCountMismatch { expected: usize, got: usize },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
