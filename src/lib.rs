//! Sharp Memory-in-Pixel LCD Driver
//!
//! A driver for Sharp memory displays (LS013B7DH03, LS027B7DH01 and
//! compatible panels): monochrome, always-on LCDs whose internal memory
//! retains the image between updates. The panel speaks a line-addressed
//! write protocol over SPI with LSB-first framing, which this driver
//! bit-reverses for the MSB-first buses `embedded-hal` provides.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable panel dimensions and rotation
//! - Full off-device frame buffer with raster import
//! - VCOM polarity management (per-frame toggle plus maintenance frames)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use sharpmem::{Dimensions, Display, Interface, PixelBuffer, Rotation};
//!
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
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! // 1.3" 144x168 panel; CS is active high and owned by the driver.
//! let interface = Interface::new(spi, cs);
//! let dims = match Dimensions::new(144, 168) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let buffer = match PixelBuffer::new([0u8; 18 * 168], dims) {
//!     Ok(buffer) => buffer,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, buffer, Rotation::Rotate0);
//! display.fill(true); // white background
//! let _ = display.set_pixel(10, 10, false); // one black pixel
//! let _ = display.refresh();
//! ```
//!
//! The buffer is the source of truth: the panel's own memory is write-only.
//! Keep the VCOM polarity alternating: every refresh does it implicitly,
//! and [`Display::toggle_vcom`] covers idle periods.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel buffer backing store
pub mod buffer;
/// Wire protocol mode bits and bit-order helpers
pub mod command;
/// Panel dimension and rotation types
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Raster import types
pub mod image;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::PixelBuffer;
pub use config::{Dimensions, Rotation};
pub use display::Display;
pub use error::{BufferError, ConfigError, Error, MAX_LINES};
pub use image::{Raster, RasterFormat};
pub use interface::{
    DisplayInterface, Interface, InterfaceError, MAX_SCLK_HZ, RECOMMENDED_MODE,
};
