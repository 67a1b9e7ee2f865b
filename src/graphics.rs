//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] directly on [`Display`] (requires the
//! `graphics` feature, enabled by default), so the whole
//! `embedded-graphics` toolbox of primitives, text and images renders into
//! the panel buffer. Nothing is transmitted until
//! [`refresh`](Display::refresh) is called.
//!
//! Color mapping: [`BinaryColor::On`] is drawn as black ink,
//! [`BinaryColor::Off`] as the panel's reflective white.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use sharpmem::{Dimensions, Display, PixelBuffer, Rotation};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # use sharpmem::Interface;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let interface = Interface::new(MockSpi, MockPin);
//! # let dims = match Dimensions::new(144, 168) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let buffer = match PixelBuffer::new([0u8; 18 * 168], dims) {
//! #     Ok(buffer) => buffer,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, buffer, Rotation::Rotate0);
//!
//! // White background, black drawing
//! display.fill(true);
//!
//! let _ = Circle::new(Point::new(40, 40), 60)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, memory LCD!",
//!     Point::new(8, 120),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Push the frame to the panel
//! let _ = display.refresh();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            // On = ink = black; bounds were checked against the logical size
            let _ = self.set_pixel(x as u16, y as u16, !color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(!color.is_on());
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let (width, height) = self.rotation().adjust(self.dimensions());
        Size::new(u32::from(width), u32::from(height))
    }
}
