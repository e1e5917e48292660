//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SSD1306 controller over I2C.
//!
//! ## Framing
//!
//! The SSD1306 has no D/C pin on I2C. Instead, each write transaction starts
//! with a control byte:
//! - `0x00` followed by one command byte
//! - `0x40` followed by display RAM bytes
//!
//! ## Example
//!
//! ```
//! use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use ssd1306_i2c::{DisplayInterface, I2cInterface};
//!
//! let expectations = [
//!     Transaction::write(0x3C, vec![0x00, 0xAF]),
//!     Transaction::write(0x3C, vec![0x40, 0xFF, 0x81]),
//! ];
//! let mut i2c = I2cMock::new(&expectations);
//! let mut interface = I2cInterface::new(i2c.clone(), 0x3C);
//!
//! // Display on
//! let _ = interface.send_command(0xAF);
//!
//! // Two columns of pixel data
//! let _ = interface.send_data(&[0xFF, 0x81]);
//!
//! i2c.done();
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Largest number of RAM bytes sent in one data transaction
///
/// One full page row. Longer payloads are split.
pub const MAX_DATA_CHUNK: usize = 128;

/// Trait for hardware interface to SSD1306 controller
///
/// This trait abstracts over the bus, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// frame command and data writes, and letting tests record exactly what the
/// driver emits.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself to capture traffic or to wrap an unusual bus.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] so failed writes can be logged.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The byte goes out as its own transaction in command mode. Operands of
    /// multi-byte commands are sent with further calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM bytes to the controller
    ///
    /// Bytes are written at the current page/column cursor, which the
    /// controller advances by one column per byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error (NACK, arbitration loss, short write)
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus and a
/// fixed 7-bit slave address.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit slave address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface bound to `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Slave address this interface writes to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        let mut buf = [0u8; MAX_DATA_CHUNK + 1];
        buf[0] = CONTROL_DATA;
        for chunk in data.chunks(MAX_DATA_CHUNK) {
            let len = chunk.len() + 1;
            buf[1..len].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &buf[..len])
                .map_err(InterfaceError::I2c)?;
        }
        Ok(())
    }
}
