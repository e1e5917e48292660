//! Core display operations
//!
//! [`Display`] owns one [`DisplayInterface`] and turns text, bar and scroll
//! requests into SSD1306 command and data writes.
//!
//! ## Write policy
//!
//! Every bus write is best-effort. A failed write is logged at `warn` level and
//! the rest of the sequence is still sent; nothing is retried. Each operation
//! returns a [`WriteStatus`] counting attempted and failed writes, which callers
//! are free to ignore. The controller cannot be read back over I2C, so there is
//! no way to verify what a dropped command left behind.
//!
//! ## Cursor
//!
//! The driver never caches the page/column cursor. The controller's address
//! counter is the only copy, so [`Display::set_cursor`] must be called before
//! drawing whenever the position matters.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Config, Display, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! # }
//! let mut display = Display::new(Bus, Config::default());
//!
//! display.init();
//! display.clear();
//! display.set_cursor(0, 0);
//! let status = display.draw_string("Hello World");
//! assert_eq!(status.attempted(), 11);
//! assert!(status.is_ok());
//! ```

use core::ops::{Add, AddAssign};

use embedded_hal::i2c::I2c;

use crate::command::{
    ACTIVATE_SCROLL, DEACTIVATE_SCROLL, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY,
    LEFT_HORIZONTAL_SCROLL, NORMAL_DISPLAY, RIGHT_HORIZONTAL_SCROLL, SCROLL_DUMMY_HIGH,
    SCROLL_DUMMY_LOW, SET_CONTRAST, SET_HIGH_COLUMN, SET_LOW_COLUMN, SET_PAGE_START,
};
use crate::config::{COLUMNS, Config, PAGES};
use crate::font::glyph;
use crate::interface::{DisplayInterface, I2cInterface, MAX_DATA_CHUNK};

/// Outcome of a best-effort write sequence
///
/// Counts bus transactions handed to the interface and how many of them
/// failed. A failed write never stops the sequence it belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WriteStatus {
    attempted: usize,
    failed: usize,
}

impl WriteStatus {
    const fn single(ok: bool) -> Self {
        Self {
            attempted: 1,
            failed: if ok { 0 } else { 1 },
        }
    }

    /// Number of writes issued
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of writes the interface reported as failed
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// True if no write failed
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

impl Add for WriteStatus {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            attempted: self.attempted + rhs.attempted,
            failed: self.failed + rhs.failed,
        }
    }
}

impl AddAssign for WriteStatus {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Horizontal scroll direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDirection {
    /// Content moves towards column 0
    Left,
    /// Content moves towards column 127
    Right,
}

impl ScrollDirection {
    /// Scroll setup opcode for this direction
    pub fn opcode(self) -> u8 {
        match self {
            Self::Left => LEFT_HORIZONTAL_SCROLL,
            Self::Right => RIGHT_HORIZONTAL_SCROLL,
        }
    }
}

/// Core display driver for SSD1306
///
/// Created with [`Display::new`] (no bus traffic) and brought up with
/// [`Display::init`]. On Linux, [`crate::linux::open`] does both.
///
/// All methods take `&mut self`: interleaving writes from two callers would
/// corrupt the controller's addressing state, so sharing a display across
/// threads requires the caller's own lock.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I2C> Display<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create a display on an I2C bus, addressed by `config.address`
    pub fn from_i2c(i2c: I2C, config: Config) -> Self {
        let interface = I2cInterface::new(i2c, config.address);
        Self::new(interface, config)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Send the power-on sequence
    ///
    /// Display off, clock, multiplex, offset, start line, charge pump,
    /// horizontal addressing, orientation, COM pins, contrast, pre-charge,
    /// VCOMH, follow RAM, normal polarity, display on. One write per byte of
    /// [`Config::init_sequence`]. Failed writes are logged and skipped.
    pub fn init(&mut self) -> WriteStatus {
        let sequence = self.config.init_sequence();
        let status = self.send_commands(&sequence);
        if !status.is_ok() {
            log::warn!(
                "ssd1306: {} of {} init commands failed, panel may be partially configured",
                status.failed(),
                status.attempted()
            );
        }
        status
    }

    /// Zero all of display RAM
    ///
    /// Each page is addressed from column 0 and overwritten with 128 zero
    /// bytes. The hardware cursor is left at page 7, column 0.
    pub fn clear(&mut self) -> WriteStatus {
        let zeros = [0u8; COLUMNS as usize];
        let mut status = WriteStatus::default();
        for page in 0..PAGES {
            status += self.set_cursor(page, 0);
            status += self.send_data(&zeros);
        }
        status
    }

    /// Move the RAM cursor to `page` (0-7) and `column` (0-127)
    ///
    /// Values are not range checked: the page is masked to 3 bits and the
    /// column is split into two nibbles, so out-of-range values address
    /// whatever the masked bits select.
    pub fn set_cursor(&mut self, page: u8, column: u8) -> WriteStatus {
        self.send_commands(&[
            SET_PAGE_START | (page & 0x07),
            SET_LOW_COLUMN | (column & 0x0F),
            SET_HIGH_COLUMN | ((column >> 4) & 0x0F),
        ])
    }

    /// Draw one character at the cursor
    ///
    /// Sends the 5 glyph columns as one data write, advancing the column by 5.
    /// Characters outside printable ASCII are drawn as a space.
    pub fn draw_char(&mut self, c: char) -> WriteStatus {
        self.send_data(glyph(c))
    }

    /// Draw a string at the cursor
    ///
    /// One [`draw_char`](Self::draw_char) per byte of the UTF-8 encoding,
    /// stopping early at a NUL. Every byte of a multi-byte character draws a
    /// space, so `"é"` takes two glyph cells. Text is not wrapped; move the
    /// cursor to start a new line.
    pub fn draw_string(&mut self, text: &str) -> WriteStatus {
        let mut status = WriteStatus::default();
        for byte in text.bytes().take_while(|&b| b != 0) {
            status += self.draw_char(char::from(byte));
        }
        status
    }

    /// Write raw column bytes at the cursor
    ///
    /// Each byte is one 8-pixel column of the current page, LSB at the top.
    /// Payloads longer than one page row go out as several writes, each
    /// counted in the returned status. An empty slice writes nothing.
    pub fn write_data(&mut self, data: &[u8]) -> WriteStatus {
        if data.is_empty() {
            return WriteStatus::default();
        }
        self.send_data(data)
    }

    /// Draw a solid bar on `page` starting at `start_column`
    ///
    /// `length` columns are set to 0xFF, capped at one page row (128).
    pub fn draw_bar(&mut self, page: u8, start_column: u8, length: u8) -> WriteStatus {
        let bar = [0xFFu8; COLUMNS as usize];
        let length = usize::from(length.min(COLUMNS));
        self.set_cursor(page, start_column) + self.write_data(&bar[..length])
    }

    /// Start continuous horizontal scrolling
    ///
    /// Scrolling is deactivated first, then the setup command for `direction`
    /// is sent with its operands, then scrolling is activated.
    ///
    /// # Arguments
    ///
    /// * `start_page` - First page to scroll (0-7)
    /// * `end_page` - Last page to scroll, must not be below `start_page`
    /// * `speed` - Frame interval code (0b000 = 5 frames ... 0b111 = 2 frames)
    ///
    /// Arguments are passed to the controller unchecked.
    pub fn start_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        speed: u8,
    ) -> WriteStatus {
        log::debug!(
            "ssd1306: scroll {direction:?} pages {start_page}..={end_page} speed {speed:#04x}"
        );
        self.send_commands(&[
            DEACTIVATE_SCROLL,
            direction.opcode(),
            SCROLL_DUMMY_LOW,
            start_page,
            speed,
            end_page,
            SCROLL_DUMMY_LOW,
            SCROLL_DUMMY_HIGH,
            ACTIVATE_SCROLL,
        ])
    }

    /// Start scrolling left, see [`start_scroll`](Self::start_scroll)
    pub fn start_scroll_left(&mut self, start_page: u8, end_page: u8, speed: u8) -> WriteStatus {
        self.start_scroll(ScrollDirection::Left, start_page, end_page, speed)
    }

    /// Start scrolling right, see [`start_scroll`](Self::start_scroll)
    pub fn start_scroll_right(&mut self, start_page: u8, end_page: u8, speed: u8) -> WriteStatus {
        self.start_scroll(ScrollDirection::Right, start_page, end_page, speed)
    }

    /// Stop scrolling
    ///
    /// RAM keeps whatever the scroll left in it; redraw to restore content.
    pub fn stop_scroll(&mut self) -> WriteStatus {
        log::debug!("ssd1306: scroll stopped");
        self.send_command(DEACTIVATE_SCROLL)
    }

    /// Set contrast (0x00-0xFF)
    pub fn set_contrast(&mut self, contrast: u8) -> WriteStatus {
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Turn the panel on or put it to sleep
    ///
    /// RAM content survives while the panel is off.
    pub fn set_display_on(&mut self, on: bool) -> WriteStatus {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Invert pixel polarity
    pub fn set_inverted(&mut self, inverted: bool) -> WriteStatus {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface, consuming the display
    pub fn release(self) -> I {
        self.interface
    }

    /// Send a single command to the display controller
    fn send_command(&mut self, cmd: u8) -> WriteStatus {
        let result = self.interface.send_command(cmd);
        if let Err(e) = &result {
            log::warn!("ssd1306: failed to write command {cmd:#04x}: {e:?}");
        }
        WriteStatus::single(result.is_ok())
    }

    /// Send each byte as its own command, continuing past failures
    fn send_commands(&mut self, cmds: &[u8]) -> WriteStatus {
        cmds.iter()
            .fold(WriteStatus::default(), |status, &cmd| {
                status + self.send_command(cmd)
            })
    }

    /// Send data to the display controller, one write per page-sized chunk
    ///
    /// A failed chunk is logged and the following chunks are still sent.
    fn send_data(&mut self, data: &[u8]) -> WriteStatus {
        let mut status = WriteStatus::default();
        for chunk in data.chunks(MAX_DATA_CHUNK) {
            let result = self.interface.send_data(chunk);
            if let Err(e) = &result {
                log::warn!("ssd1306: failed to write {} data bytes: {e:?}", chunk.len());
            }
            status += WriteStatus::single(result.is_ok());
        }
        status
    }
}

impl<I> core::fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    /// Draws `s` at the cursor. Bus failures are logged, never reported.
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.draw_string(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::FONT_5X8;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt::Write as _;

    #[derive(Clone, Debug, PartialEq)]
    enum Write {
        Command(u8),
        Data(Vec<u8>),
    }

    #[derive(Debug)]
    struct MockInterface {
        writes: Vec<Write>,
        /// Indices (in `writes`) of writes that should report failure
        failing: Vec<usize>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                failing: Vec::new(),
            }
        }

        fn failing_at(failing: &[usize]) -> Self {
            Self {
                writes: Vec::new(),
                failing: failing.to_vec(),
            }
        }

        fn record(&mut self, write: Write) -> Result<(), ()> {
            let index = self.writes.len();
            self.writes.push(write);
            if self.failing.contains(&index) {
                Err(())
            } else {
                Ok(())
            }
        }

        fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter_map(|w| match w {
                    Write::Command(c) => Some(*c),
                    Write::Data(_) => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = ();

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.record(Write::Command(command))
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.record(Write::Data(data.to_vec()))
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(), Config::default())
    }

    #[test]
    fn test_new_sends_nothing() {
        let display = test_display();
        assert!(display.interface.writes.is_empty());
    }

    #[test]
    fn test_init_sends_sequence_one_command_per_write() {
        let mut display = test_display();
        let status = display.init();

        assert_eq!(status.attempted(), 25);
        assert!(status.is_ok());
        assert_eq!(
            display.interface.writes,
            Config::default()
                .init_sequence()
                .iter()
                .map(|&c| Write::Command(c))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_init_continues_after_failed_command() {
        // Fail display off, the contrast opcode, and display on
        let mut display = Display::new(MockInterface::failing_at(&[0, 16, 24]), Config::default());
        let status = display.init();

        assert_eq!(status.attempted(), 25);
        assert_eq!(status.failed(), 3);
        assert_eq!(display.interface.commands(), Config::default().init_sequence());
    }

    #[test]
    fn test_init_uses_configured_operands() {
        let config = Builder::new().contrast(0x7F).build().unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        display.init();

        let cmds = display.interface.commands();
        assert_eq!(&cmds[16..18], &[0x81, 0x7F]);
    }

    #[test]
    fn test_set_cursor_emits_page_and_column_nibbles() {
        let mut display = test_display();
        display.set_cursor(3, 0x5A);
        assert_eq!(display.interface.commands(), vec![0xB3, 0x0A, 0x15]);
    }

    #[test]
    fn test_set_cursor_masks_out_of_range_values() {
        let mut display = test_display();
        display.set_cursor(9, 0xFF);
        assert_eq!(display.interface.commands(), vec![0xB1, 0x0F, 0x1F]);
    }

    #[test]
    fn test_set_cursor_is_idempotent() {
        let mut display = test_display();
        display.set_cursor(7, 127);
        display.set_cursor(7, 127);
        let cmds = display.interface.commands();
        assert_eq!(cmds[..3], cmds[3..]);
    }

    #[test]
    fn test_clear_writes_eight_zeroed_pages() {
        let mut display = test_display();
        let status = display.clear();

        assert_eq!(status.attempted(), 8 * 4);
        let writes = &display.interface.writes;
        assert_eq!(writes.len(), 32);
        for page in 0..8u8 {
            let chunk = &writes[usize::from(page) * 4..usize::from(page) * 4 + 4];
            assert_eq!(chunk[0], Write::Command(0xB0 + page));
            assert_eq!(chunk[1], Write::Command(0x00));
            assert_eq!(chunk[2], Write::Command(0x10));
            assert_eq!(chunk[3], Write::Data(vec![0u8; 128]));
        }
    }

    #[test]
    fn test_clear_continues_after_failed_page() {
        let mut display = Display::new(MockInterface::failing_at(&[3]), Config::default());
        let status = display.clear();
        assert_eq!(status.failed(), 1);
        assert_eq!(display.interface.writes.len(), 32);
    }

    #[test]
    fn test_draw_char_sends_five_glyph_columns() {
        let mut display = test_display();
        display.draw_char('A');
        assert_eq!(
            display.interface.writes,
            vec![Write::Data(vec![0x7E, 0x11, 0x11, 0x11, 0x7E])]
        );
    }

    #[test]
    fn test_draw_char_every_printable_code() {
        for code in 32u8..=126 {
            let mut display = test_display();
            display.draw_char(char::from(code));
            assert_eq!(
                display.interface.writes,
                vec![Write::Data(FONT_5X8[usize::from(code - 32)].to_vec())]
            );
        }
    }

    #[test]
    fn test_draw_char_unsupported_is_space() {
        let mut display = test_display();
        display.draw_char('\u{7F}');
        display.draw_char('°');
        assert_eq!(
            display.interface.writes,
            vec![Write::Data(vec![0; 5]), Write::Data(vec![0; 5])]
        );
    }

    #[test]
    fn test_draw_string_concatenates_chars() {
        let mut display = test_display();
        display.draw_string("Hi!");

        let mut expected = test_display();
        expected.draw_char('H');
        expected.draw_char('i');
        expected.draw_char('!');
        assert_eq!(display.interface.writes, expected.interface.writes);
    }

    #[test]
    fn test_draw_string_empty_writes_nothing() {
        let mut display = test_display();
        let status = display.draw_string("");
        assert_eq!(status, WriteStatus::default());
        assert!(display.interface.writes.is_empty());
    }

    #[test]
    fn test_draw_string_stops_at_nul() {
        let mut display = test_display();
        display.draw_string("ab\0cd");
        assert_eq!(display.interface.writes.len(), 2);
    }

    #[test]
    fn test_draw_string_multibyte_char_takes_a_cell_per_byte() {
        let mut display = test_display();
        let status = display.draw_string("éA");

        assert_eq!(status.attempted(), 3);
        assert_eq!(
            display.interface.writes,
            vec![
                Write::Data(vec![0; 5]),
                Write::Data(vec![0; 5]),
                Write::Data(vec![0x7E, 0x11, 0x11, 0x11, 0x7E]),
            ]
        );
    }

    #[test]
    fn test_write_data_splits_long_payload() {
        let mut display = test_display();
        let status = display.write_data(&[0xAA; 200]);

        assert_eq!(status.attempted(), 2);
        assert_eq!(
            display.interface.writes,
            vec![Write::Data(vec![0xAA; 128]), Write::Data(vec![0xAA; 72])]
        );
    }

    #[test]
    fn test_write_data_continues_after_failed_chunk() {
        let mut display = Display::new(MockInterface::failing_at(&[0]), Config::default());
        let status = display.write_data(&[0xAA; 200]);

        assert_eq!(status.attempted(), 2);
        assert_eq!(status.failed(), 1);
        assert_eq!(display.interface.writes.len(), 2);
    }

    #[test]
    fn test_fmt_write_draws_formatted_text() {
        let mut display = test_display();
        write!(display, "C{}:{:3}%", 2, 7).unwrap();

        let mut expected = test_display();
        expected.draw_string("C2:  7%");
        assert_eq!(display.interface.writes, expected.interface.writes);
    }

    #[test]
    fn test_draw_bar_sets_cursor_then_fills() {
        let mut display = test_display();
        display.draw_bar(2, 40, 3);
        assert_eq!(
            display.interface.writes,
            vec![
                Write::Command(0xB2),
                Write::Command(0x08),
                Write::Command(0x12),
                Write::Data(vec![0xFF; 3]),
            ]
        );
    }

    #[test]
    fn test_draw_bar_zero_length_only_moves_cursor() {
        let mut display = test_display();
        let status = display.draw_bar(0, 40, 0);
        assert_eq!(status.attempted(), 3);
        assert_eq!(display.interface.writes.len(), 3);
    }

    #[test]
    fn test_draw_bar_caps_at_page_width() {
        let mut display = test_display();
        display.draw_bar(0, 0, 200);
        assert_eq!(display.interface.writes[3], Write::Data(vec![0xFF; 128]));
    }

    #[test]
    fn test_scroll_left_then_stop() {
        let mut display = test_display();
        display.start_scroll_left(0, 7, 0);
        display.stop_scroll();
        assert_eq!(
            display.interface.commands(),
            vec![0x2E, 0x27, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2F, 0x2E]
        );
    }

    #[test]
    fn test_scroll_right_differs_only_in_opcode() {
        let mut left = test_display();
        left.start_scroll_left(1, 3, 4);
        let mut right = test_display();
        right.start_scroll_right(1, 3, 4);

        let (l, r) = (left.interface.commands(), right.interface.commands());
        assert_eq!(r[1], 0x26);
        assert_eq!(l[..1], r[..1]);
        assert_eq!(l[2..], r[2..]);
    }

    #[test]
    fn test_scroll_passes_inverted_range_through() {
        let mut display = test_display();
        display.start_scroll(ScrollDirection::Right, 6, 2, 7);
        assert_eq!(
            display.interface.commands(),
            vec![0x2E, 0x26, 0x00, 0x06, 0x07, 0x02, 0x00, 0xFF, 0x2F]
        );
    }

    #[test]
    fn test_panel_controls() {
        let mut display = test_display();
        display.set_contrast(0x10);
        display.set_display_on(false);
        display.set_display_on(true);
        display.set_inverted(true);
        display.set_inverted(false);
        assert_eq!(
            display.interface.commands(),
            vec![0x81, 0x10, 0xAE, 0xAF, 0xA7, 0xA6]
        );
    }

    #[test]
    fn test_write_status_sums() {
        let mut status = WriteStatus::single(true);
        status += WriteStatus::single(false);
        assert_eq!(status.attempted(), 2);
        assert_eq!(status.failed(), 1);
        assert!(!status.is_ok());
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = test_display();
        display.stop_scroll();
        let interface = display.release();
        assert_eq!(interface.writes, vec![Write::Command(0x2E)]);
    }

    mod i2c {
        use super::*;
        use embedded_hal::i2c::ErrorKind;
        use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

        fn commands(address: u8, cmds: &[u8]) -> Vec<Transaction> {
            cmds.iter()
                .map(|&c| Transaction::write(address, vec![0x00, c]))
                .collect()
        }

        #[test]
        fn test_init_survives_bus_errors() {
            let seq = Config::default().init_sequence();
            let mut expectations = commands(0x3C, &seq);
            expectations[0] = Transaction::write(0x3C, vec![0x00, 0xAE])
                .with_error(ErrorKind::ArbitrationLoss);
            expectations[24] =
                Transaction::write(0x3C, vec![0x00, 0xAF]).with_error(ErrorKind::Bus);
            let mut i2c = I2cMock::new(&expectations);

            let mut display = Display::from_i2c(i2c.clone(), Config::default());
            let status = display.init();

            assert_eq!(status.attempted(), 25);
            assert_eq!(status.failed(), 2);
            i2c.done();
        }

        #[test]
        fn test_draw_char_is_one_data_transaction() {
            let expectations = [Transaction::write(
                0x3D,
                vec![0x40, 0x7E, 0x11, 0x11, 0x11, 0x7E],
            )];
            let mut i2c = I2cMock::new(&expectations);
            let config = Builder::new().address(0x3D).build().unwrap();

            let mut display = Display::from_i2c(i2c.clone(), config);
            assert!(display.draw_char('A').is_ok());
            i2c.done();
        }

        #[test]
        fn test_clear_sends_129_byte_pages() {
            let mut expectations = Vec::new();
            for page in 0..8u8 {
                expectations.extend(commands(0x3C, &[0xB0 | page, 0x00, 0x10]));
                let mut data = vec![0x40];
                data.extend_from_slice(&[0u8; 128]);
                expectations.push(Transaction::write(0x3C, data));
            }
            let mut i2c = I2cMock::new(&expectations);

            let mut display = Display::from_i2c(i2c.clone(), Config::default());
            assert!(display.clear().is_ok());
            i2c.done();
        }

        #[test]
        fn test_failed_data_chunk_does_not_drop_the_rest() {
            let mut first = vec![0x40];
            first.extend_from_slice(&[0xAA; 128]);
            let mut second = vec![0x40];
            second.extend_from_slice(&[0xAA; 72]);
            let expectations = [
                Transaction::write(0x3C, first).with_error(ErrorKind::Bus),
                Transaction::write(0x3C, second),
            ];
            let mut i2c = I2cMock::new(&expectations);

            let mut display = Display::from_i2c(i2c.clone(), Config::default());
            let status = display.write_data(&[0xAA; 200]);

            assert_eq!(status.attempted(), 2);
            assert_eq!(status.failed(), 1);
            i2c.done();
        }

        #[test]
        fn test_scroll_left_then_stop_on_the_wire() {
            let expectations = commands(
                0x3C,
                &[0x2E, 0x27, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2F, 0x2E],
            );
            let mut i2c = I2cMock::new(&expectations);

            let mut display = Display::from_i2c(i2c.clone(), Config::default());
            display.start_scroll_left(0, 7, 0);
            display.stop_scroll();
            i2c.done();
        }
    }
}
