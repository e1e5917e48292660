//! SSD1306 command definitions
//!
//! This module defines the control bytes and command opcodes used to drive the
//! SSD1306 OLED controller over I2C.
//!
//! ## Transaction Structure
//!
//! Every I2C write to the controller starts with a control byte:
//! 1. [`CONTROL_COMMAND`] (`0x00`): the following byte is a command opcode or operand
//! 2. [`CONTROL_DATA`] (`0x40`): the following bytes are written to display RAM
//!    starting at the current page/column cursor
//!
//! Commands are sent one per transaction, so a command with operands takes
//! one write for the opcode and one write per operand.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{command, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let mut interface = Bus;
//! // Set contrast to maximum
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0xFF);
//! ```

// Control bytes

/// Control byte selecting command mode (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte selecting data mode (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Display off command (0xAE)
///
/// Puts the panel into sleep mode. RAM content is preserved.
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Set contrast control command (0x81)
///
/// Requires 1 operand: contrast 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display follows RAM content (0xA4)
pub const DISPLAY_RAM: u8 = 0xA4;

/// Normal display polarity (0xA6)
///
/// RAM bit 1 = pixel on.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display polarity (0xA7)
///
/// RAM bit 0 = pixel on.
pub const INVERT_DISPLAY: u8 = 0xA7;

// Scrolling commands

/// Right horizontal scroll setup (0x26)
///
/// Requires 6 operands: [0x00, start page, interval, end page, 0x00, 0xFF]
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Left horizontal scroll setup (0x27)
///
/// Same operands as [`RIGHT_HORIZONTAL_SCROLL`].
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Deactivate scroll (0x2E)
///
/// RAM must be rewritten after deactivating, scrolled content is not restored.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Starts scrolling with the most recent scroll setup.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Dummy operand byte sent as 0x00 in scroll setup
pub const SCROLL_DUMMY_LOW: u8 = 0x00;

/// Dummy operand byte sent as 0xFF in scroll setup
pub const SCROLL_DUMMY_HIGH: u8 = 0xFF;

// Addressing commands

/// Set lower column start address, page addressing (0x00-0x0F)
///
/// OR the low nibble of the column into this base.
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address, page addressing (0x10-0x1F)
///
/// OR the high nibble of the column into this base.
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Requires 1 operand: [`ADDRESSING_HORIZONTAL`], 0x01 vertical, 0x02 page.
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing mode operand
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;

/// Set page start address, page addressing (0xB0-0xB7)
///
/// OR the page number (0-7) into this base.
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40-0x7F)
///
/// OR the start line (0-63) into this base.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment remap: column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_MIRRORED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 operand: ratio - 1 (15-63). 0x3F for a 64-row panel.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction: COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan direction: COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_REMAPPED: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 operand: vertical shift 0-63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 operand. 0x12 (alternative, no remap) for 128x64 panels.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 operand: high nibble = frequency, low nibble = divide ratio - 1.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 operand: high nibble = phase 2, low nibble = phase 1.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 operand.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Requires 1 operand: [`CHARGE_PUMP_ENABLE`] or 0x10 to disable.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable operand
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
