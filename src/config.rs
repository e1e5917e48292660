//! Display configuration types and builder

use crate::command::{
    ADDRESSING_HORIZONTAL, COM_SCAN_NORMAL, COM_SCAN_REMAPPED, CHARGE_PUMP, DISPLAY_OFF,
    DISPLAY_ON, DISPLAY_RAM, NORMAL_DISPLAY, SEGMENT_REMAP_MIRRORED, SEGMENT_REMAP_NORMAL,
    SET_ADDRESSING_MODE, SET_CLOCK_DIVIDE, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_MULTIPLEX_RATIO, SET_PRECHARGE, SET_START_LINE, SET_VCOMH_DESELECT,
};
pub use crate::error::{
    BuilderError, MAX_ADDRESS, MAX_MULTIPLEX_RATIO, MAX_ROW_SHIFT, MIN_MULTIPLEX_RATIO,
};

/// Default I2C slave address of most SSD1306 modules
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Number of 8-pixel pages in display RAM
pub const PAGES: u8 = 8;

/// Number of columns in display RAM
pub const COLUMNS: u8 = 128;

/// Number of command writes in the initialization sequence
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Panel orientation
///
/// The SSD1306 can only mirror segments and COM scan direction in hardware,
/// so the two supported orientations are 180 degrees apart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// Column 0 on SEG0, COM scan from COM0
    Rotate0,
    /// Segments and COM scan both remapped
    ///
    /// Upright on the common 128x64 breakout modules.
    #[default]
    Rotate180,
}

impl Rotation {
    /// Segment remap command for this orientation
    pub fn segment_remap(self) -> u8 {
        match self {
            Self::Rotate0 => SEGMENT_REMAP_NORMAL,
            Self::Rotate180 => SEGMENT_REMAP_MIRRORED,
        }
    }

    /// COM output scan direction command for this orientation
    pub fn com_scan(self) -> u8 {
        match self {
            Self::Rotate0 => COM_SCAN_NORMAL,
            Self::Rotate180 => COM_SCAN_REMAPPED,
        }
    }
}

/// Display configuration
///
/// Holds the slave address and every operand of the power-on sequence.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C slave address
    pub address: u8,
    /// Panel orientation
    pub rotation: Rotation,
    /// Clock divide ratio / oscillator frequency operand
    pub clock_divide: u8,
    /// Multiplex ratio operand (rows - 1)
    pub multiplex_ratio: u8,
    /// Display offset operand
    pub display_offset: u8,
    /// Display start line
    pub start_line: u8,
    /// Charge pump operand
    pub charge_pump: u8,
    /// COM pins hardware configuration operand
    pub com_pins: u8,
    /// Contrast operand
    pub contrast: u8,
    /// Pre-charge period operand
    pub precharge: u8,
    /// VCOMH deselect level operand
    pub vcomh: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            rotation: Rotation::Rotate180,
            // Suggested ratio from the datasheet
            clock_divide: 0x80,
            // 64 MUX for a 128x64 panel
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            start_line: 0,
            charge_pump: crate::command::CHARGE_PUMP_ENABLE,
            // Alternative COM pin config, required for 64 rows
            com_pins: 0x12,
            contrast: 0xCF,
            precharge: 0xF1,
            vcomh: 0x40,
        }
    }
}

impl Config {
    /// Command bytes of the power-on sequence, in send order
    ///
    /// Each byte is sent as its own command transaction.
    ///
    /// ```
    /// use ssd1306_i2c::Config;
    ///
    /// let seq = Config::default().init_sequence();
    /// assert_eq!(seq[0], 0xAE); // display off
    /// assert_eq!(seq[24], 0xAF); // display on
    /// ```
    pub fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        [
            DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            self.clock_divide,
            SET_MULTIPLEX_RATIO,
            self.multiplex_ratio,
            SET_DISPLAY_OFFSET,
            self.display_offset,
            SET_START_LINE | (self.start_line & MAX_ROW_SHIFT),
            CHARGE_PUMP,
            self.charge_pump,
            SET_ADDRESSING_MODE,
            ADDRESSING_HORIZONTAL,
            self.rotation.segment_remap(),
            self.rotation.com_scan(),
            SET_COM_PINS,
            self.com_pins,
            SET_CONTRAST,
            self.contrast,
            SET_PRECHARGE,
            self.precharge,
            SET_VCOMH_DESELECT,
            self.vcomh,
            DISPLAY_RAM,
            NORMAL_DISPLAY,
            DISPLAY_ON,
        ]
    }
}

/// Builder for constructing display configuration
///
/// All values default to a 128x64 panel at address 0x3C.
///
/// # Example
///
/// ```
/// use ssd1306_i2c::{Builder, Rotation};
///
/// let config = match Builder::new().address(0x3D).rotation(Rotation::Rotate0).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x3D);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C slave address
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set panel orientation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.config.clock_divide = value;
        self
    }

    /// Set multiplex ratio (rows - 1)
    ///
    /// 0x1F for 128x32 panels.
    pub fn multiplex_ratio(mut self, value: u8) -> Self {
        self.config.multiplex_ratio = value;
        self
    }

    /// Set display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.config.display_offset = value;
        self
    }

    /// Set display start line
    pub fn start_line(mut self, value: u8) -> Self {
        self.config.start_line = value;
        self
    }

    /// Set charge pump operand
    ///
    /// Use 0x10 for panels powered from an external VCC.
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.config.charge_pump = value;
        self
    }

    /// Set COM pins hardware configuration
    ///
    /// 0x02 for 128x32 panels.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.config.com_pins = value;
        self
    }

    /// Set initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.config.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcomh(mut self, value: u8) -> Self {
        self.config.vcomh = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if the address does not fit in 7 bits, or a
    /// row-related operand is outside what the controller accepts.
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if config.address > MAX_ADDRESS {
            return Err(BuilderError::InvalidAddress(config.address));
        }
        if !(MIN_MULTIPLEX_RATIO..=MAX_MULTIPLEX_RATIO).contains(&config.multiplex_ratio) {
            return Err(BuilderError::InvalidMultiplexRatio(config.multiplex_ratio));
        }
        if config.display_offset > MAX_ROW_SHIFT {
            return Err(BuilderError::InvalidDisplayOffset(config.display_offset));
        }
        if config.start_line > MAX_ROW_SHIFT {
            return Err(BuilderError::InvalidStartLine(config.start_line));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_init_sequence_matches_datasheet_bring_up() {
        let seq = Config::default().init_sequence();
        assert_eq!(
            seq,
            [
                0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1,
                0xC8, 0xDA, 0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
            ]
        );
    }

    #[test]
    fn test_builder_defaults_equal_config_default() {
        assert_eq!(Builder::new().build(), Ok(Config::default()));
    }

    #[test]
    fn test_rotate0_uses_normal_remap() {
        let config = Builder::new().rotation(Rotation::Rotate0).build().unwrap();
        let seq = config.init_sequence();
        assert_eq!(seq[12], 0xA0);
        assert_eq!(seq[13], 0xC0);
    }

    #[test]
    fn test_start_line_is_or_ed_into_command() {
        let config = Builder::new().start_line(5).build().unwrap();
        assert_eq!(config.init_sequence()[7], 0x45);
    }

    #[test]
    fn test_128x32_panel_config() {
        let config = Builder::new()
            .multiplex_ratio(0x1F)
            .com_pins(0x02)
            .build()
            .unwrap();
        let seq = config.init_sequence();
        assert_eq!(seq[4], 0x1F);
        assert_eq!(seq[15], 0x02);
    }

    #[test]
    fn test_invalid_address_returns_error() {
        let result = Builder::new().address(0x80).build();
        assert_eq!(result, Err(BuilderError::InvalidAddress(0x80)));
    }

    #[test]
    fn test_invalid_multiplex_ratio_returns_error() {
        assert_eq!(
            Builder::new().multiplex_ratio(14).build(),
            Err(BuilderError::InvalidMultiplexRatio(14))
        );
        assert_eq!(
            Builder::new().multiplex_ratio(64).build(),
            Err(BuilderError::InvalidMultiplexRatio(64))
        );
    }

    #[test]
    fn test_invalid_offset_and_start_line_return_error() {
        assert_eq!(
            Builder::new().display_offset(64).build(),
            Err(BuilderError::InvalidDisplayOffset(64))
        );
        assert_eq!(
            Builder::new().start_line(64).build(),
            Err(BuilderError::InvalidStartLine(64))
        );
    }
}
