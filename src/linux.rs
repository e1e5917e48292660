//! Opening displays on Linux I2C character devices
//!
//! [`open`] turns a `/dev/i2c-N` path and slave address into an initialized
//! [`Display`]. The bus device is closed when the display is dropped or
//! passed to [`close`].
//!
//! ```no_run
//! use ssd1306_i2c::linux;
//!
//! let mut display = match linux::open("/dev/i2c-1", 0x3C) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! display.clear();
//! display.set_cursor(0, 0);
//! display.draw_string("Hello World");
//! linux::close(display);
//! ```

use std::path::Path;

use linux_embedded_hal::I2cdev;

use crate::config::{Builder, Config, MAX_ADDRESS};
use crate::display::Display;
use crate::error::OpenError;
use crate::interface::{DisplayInterface, I2cInterface};

/// Display on a Linux I2C bus
pub type LinuxDisplay = Display<I2cInterface<I2cdev>>;

/// Open `path`, bind `address` and run the power-on sequence
///
/// Every other setting uses the [`Config`] defaults. Init command failures
/// are logged and do not fail the open.
///
/// # Errors
///
/// [`OpenError::Bind`] if `address` is not a 7-bit address,
/// [`OpenError::Open`] if the device cannot be opened. Nothing is written to
/// the bus in either case.
pub fn open(path: impl AsRef<Path>, address: u8) -> Result<LinuxDisplay, OpenError> {
    let config = Builder::new()
        .address(address)
        .build()
        .map_err(|_| OpenError::Bind(address))?;
    open_with_config(path, config)
}

/// Open `path` with a custom configuration
///
/// # Errors
///
/// Same as [`open`], with the address taken from `config`.
pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> Result<LinuxDisplay, OpenError> {
    let path = path.as_ref();
    if config.address > MAX_ADDRESS {
        return Err(OpenError::Bind(config.address));
    }
    let i2c = I2cdev::new(path).map_err(|source| OpenError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut display = Display::from_i2c(i2c, config);
    let status = display.init();
    log::info!(
        "ssd1306: opened {} at {:#04x} ({}/{} init commands ok)",
        path.display(),
        display.config().address,
        status.attempted() - status.failed(),
        status.attempted()
    );
    Ok(display)
}

/// Close a display and release its bus
///
/// The panel keeps showing its last RAM content.
pub fn close<I: DisplayInterface>(display: Display<I>) {
    log::debug!("ssd1306: closing display at {:#04x}", display.config().address);
    drop(display.release());
}
