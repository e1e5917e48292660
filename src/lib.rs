//! SSD1306 OLED Display Driver
//!
//! A minimal driver for 128x64 SSD1306 OLED panels attached over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Built-in 5x8 ASCII font with text cursor
//! - Hardware horizontal scrolling
//! - Page framebuffer with `embedded-graphics` integration (with `graphics` feature)
//! - Opening `/dev/i2c-*` devices on Linux (with `linux` feature)
//!
//! ## Usage
//!
//! ```rust
//! use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use ssd1306_i2c::{Builder, Display, I2cInterface};
//!
//! // Two glyphs at page 0, column 0
//! let expectations = [
//!     Transaction::write(0x3C, vec![0x00, 0xB0]),
//!     Transaction::write(0x3C, vec![0x00, 0x00]),
//!     Transaction::write(0x3C, vec![0x00, 0x10]),
//!     Transaction::write(0x3C, vec![0x40, 0x7F, 0x08, 0x08, 0x08, 0x7F]),
//!     Transaction::write(0x3C, vec![0x40, 0x00, 0x00, 0x5F, 0x00, 0x00]),
//! ];
//! let mut i2c = I2cMock::new(&expectations);
//!
//! let config = match Builder::new().address(0x3C).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(I2cInterface::new(i2c.clone(), config.address), config);
//!
//! display.set_cursor(0, 0);
//! let status = display.draw_string("H!");
//! assert!(status.is_ok());
//!
//! i2c.done();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 font
pub mod font;
/// Off-screen page buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Opening displays on Linux I2C character devices (requires `linux` feature)
#[cfg(feature = "linux")]
pub mod linux;

pub use config::{
    Builder, COLUMNS, Config, DEFAULT_ADDRESS, INIT_SEQUENCE_LEN, MAX_ADDRESS, PAGES, Rotation,
};
pub use display::{Display, ScrollDirection, WriteStatus};
pub use error::BuilderError;
pub use font::{FONT_5X8, GLYPH_WIDTH, glyph};
pub use framebuffer::FrameBuffer;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, I2cInterface, MAX_DATA_CHUNK};

#[cfg(feature = "linux")]
pub use error::OpenError;
#[cfg(feature = "linux")]
pub use linux::{close, open, open_with_config};
