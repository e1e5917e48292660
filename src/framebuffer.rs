//! Off-screen page buffer
//!
//! [`FrameBuffer`] mirrors display RAM: 8 pages of 128 column bytes, LSB at
//! the top of each page. Drawing happens in memory and [`FrameBuffer::flush`]
//! sends every page as a cursor move plus one 128-byte data write.
//!
//! With the `graphics` feature it implements
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) for
//! [`BinaryColor`](embedded_graphics_core::pixelcolor::BinaryColor).
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::FrameBuffer;
//!
//! let mut fb = FrameBuffer::new();
//! fb.fill_rect(0, 0, 4, 4, true);
//! assert_eq!(fb.page(0)[..5], [0x0F, 0x0F, 0x0F, 0x0F, 0x00]);
//! ```

use crate::config::{COLUMNS, PAGES};
use crate::display::{Display, WriteStatus};
use crate::interface::DisplayInterface;

/// Width of display RAM in pixels
pub const WIDTH: u32 = COLUMNS as u32;

/// Height of display RAM in pixels
pub const HEIGHT: u32 = PAGES as u32 * 8;

/// In-memory copy of display RAM
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pages: [[u8; COLUMNS as usize]; PAGES as usize],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a pixel to its page, column and bit mask
///
/// Returns `None` outside the 128x64 area.
fn locate(x: u32, y: u32) -> Option<(usize, usize, u8)> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }
    Some(((y / 8) as usize, x as usize, 1 << (y % 8)))
}

impl FrameBuffer {
    /// Create an all-off buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; COLUMNS as usize]; PAGES as usize],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in &mut self.pages {
            page.fill(0);
        }
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if let Some((page, column, mask)) = locate(x, y) {
            if on {
                self.pages[page][column] |= mask;
            } else {
                self.pages[page][column] &= !mask;
            }
        }
    }

    /// Read one pixel; outside the panel reads as off
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        locate(x, y).is_some_and(|(page, column, mask)| self.pages[page][column] & mask != 0)
    }

    /// Fill a rectangle, clipped to the panel
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, on: bool) {
        let x_end = x.saturating_add(width).min(WIDTH);
        let y_end = y.saturating_add(height).min(HEIGHT);
        for py in y..y_end {
            for px in x..x_end {
                self.set_pixel(px, py, on);
            }
        }
    }

    /// Column bytes of one page
    ///
    /// The page is masked to 3 bits, as in
    /// [`Display::set_cursor`](crate::Display::set_cursor).
    pub fn page(&self, page: u8) -> &[u8; COLUMNS as usize] {
        &self.pages[usize::from(page & 0x07)]
    }

    /// Send the whole buffer to the display
    ///
    /// Pages are written top to bottom, each from column 0.
    pub fn flush<I: DisplayInterface>(&self, display: &mut Display<I>) -> WriteStatus {
        let mut status = WriteStatus::default();
        for (page, bytes) in (0..PAGES).zip(self.pages.iter()) {
            status += display.set_cursor(page, 0);
            status += display.write_data(bytes);
        }
        status
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use core::convert::Infallible;

    use embedded_graphics_core::{
        draw_target::DrawTarget,
        geometry::{Dimensions, OriginDimensions, Point, Size},
        pixelcolor::BinaryColor,
        prelude::Pixel,
        primitives::Rectangle,
    };

    use super::{FrameBuffer, HEIGHT, WIDTH};

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                if x < 0 || y < 0 {
                    continue;
                }
                self.set_pixel(x as u32, y as u32, color.is_on());
            }
            Ok(())
        }

        fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
            let area = area.intersection(&self.bounding_box());
            if let Some(bottom_right) = area.bottom_right() {
                let Point { x, y } = area.top_left;
                let w = (bottom_right.x - x + 1) as u32;
                let h = (bottom_right.y - y + 1) as u32;
                self.fill_rect(x as u32, y as u32, w, h, color.is_on());
            }
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            let fill = if color.is_on() { 0xFF } else { 0x00 };
            for page in &mut self.pages {
                page.fill(fill);
            }
            Ok(())
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }
}
