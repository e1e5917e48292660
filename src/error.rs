//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and, with the `linux` feature, for opening a bus device ([`OpenError`]).
//!
//! Individual bus writes never produce an error value: a failed write is logged
//! and counted in a [`WriteStatus`](crate::WriteStatus) while the remaining
//! commands of the sequence are still sent. The controller has no read-back
//! path, so the driver cannot tell whether a dropped command mattered.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Builder, BuilderError};
//!
//! // 8-bit addresses are rejected
//! let result = Builder::new().address(0x78).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0x78))));
//! ```

/// Largest valid 7-bit I2C slave address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Largest multiplex ratio operand (64 MUX)
pub const MAX_MULTIPLEX_RATIO: u8 = 63;

/// Smallest multiplex ratio operand (16 MUX)
pub const MIN_MULTIPLEX_RATIO: u8 = 15;

/// Largest display offset / start line (one less than the COM count)
pub const MAX_ROW_SHIFT: u8 = 63;

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuilderError {
    /// Slave address does not fit in 7 bits
    InvalidAddress(u8),
    /// Multiplex ratio outside 15..=63
    InvalidMultiplexRatio(u8),
    /// Display offset outside 0..=63
    InvalidDisplayOffset(u8),
    /// Start line outside 0..=63
    InvalidStartLine(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(addr) => write!(
                f,
                "Invalid I2C address {addr:#04x} (max {MAX_ADDRESS:#04x})"
            ),
            Self::InvalidMultiplexRatio(ratio) => write!(
                f,
                "Invalid multiplex ratio {ratio} (expected {MIN_MULTIPLEX_RATIO}..={MAX_MULTIPLEX_RATIO})"
            ),
            Self::InvalidDisplayOffset(offset) => {
                write!(f, "Invalid display offset {offset} (max {MAX_ROW_SHIFT})")
            }
            Self::InvalidStartLine(line) => {
                write!(f, "Invalid start line {line} (max {MAX_ROW_SHIFT})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when opening a display on a Linux I2C bus
///
/// Returned before any byte is written to the bus.
#[cfg(feature = "linux")]
#[derive(Debug)]
pub enum OpenError {
    /// The bus device could not be opened
    Open {
        /// Device path that failed to open
        path: std::path::PathBuf,
        /// Underlying I/O error
        source: linux_embedded_hal::i2cdev::linux::LinuxI2CError,
    },
    /// The slave address cannot be bound to the bus
    Bind(u8),
}

#[cfg(feature = "linux")]
impl core::fmt::Display for OpenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Failed to open I2C device {}: {source}", path.display())
            }
            Self::Bind(addr) => write!(f, "Failed to acquire bus access for {addr:#04x}"),
        }
    }
}

#[cfg(feature = "linux")]
impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Bind(_) => None,
        }
    }
}
