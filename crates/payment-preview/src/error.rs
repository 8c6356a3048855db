//! Preview error types.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Error codes for rejected preview inputs.
///
/// These are only raised while constructing value types. Once a
/// [`Transfer`](crate::Transfer) or [`FeeParameters`](crate::FeeParameters)
/// exists, every calculation and formatting step on it is infallible.
#[repr(u32)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, thiserror::Error,
)]
pub enum PreviewError {
    /// Gas price was negative
    #[error("gas price must not be negative")]
    NegativeGasPrice = 0,

    /// Gas limit was negative
    #[error("gas limit must not be negative")]
    NegativeGasLimit = 1,

    /// Transferred value was negative
    #[error("transfer value must not be negative")]
    NegativeTransferValue = 2,
}

impl PreviewError {
    /// Convert to error code
    pub fn to_u32(self) -> u32 {
        self.into()
    }

    /// Create from error code
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

/// Errors raised while loading a [`DisplayConfig`](crate::DisplayConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read display config: {0}")]
    Io(#[from] std::io::Error),

    /// Config was not valid JSON for the expected shape
    #[error("invalid display config: {0}")]
    Json(#[from] serde_json::Error),

    /// Fraction digit bounds are inverted
    #[error("minimum fraction digits ({minimum}) exceed maximum ({maximum})")]
    InvalidFractionDigits {
        /// Configured minimum
        minimum: usize,
        /// Configured maximum
        maximum: usize,
    },
}
