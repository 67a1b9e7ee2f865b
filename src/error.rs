//! Error types for the driver
//!
//! This module defines error types for dimension validation ([`ConfigError`]),
//! buffer-local operations ([`BufferError`]) and display operations
//! ([`Error`]).
//!
//! ## Error Types
//!
//! - [`ConfigError`] - Errors constructing [`Dimensions`](crate::config::Dimensions)
//! - [`BufferError`] - Errors from [`PixelBuffer`](crate::buffer::PixelBuffer) operations
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use sharpmem::{ConfigError, Dimensions};
//!
//! // Width must be a multiple of 8 (lines are byte-packed)
//! let result = Dimensions::new(100, 64);
//! assert!(matches!(result, Err(ConfigError::InvalidDimensions { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of lines a panel may have
///
/// Line addresses are a single 1-based byte on the wire, which bounds the
/// addressable height at 255 lines. Real panels stop well short of this
/// (240 lines for the 2.7" LS027B7DH01).
pub const MAX_LINES: u16 = 255;

/// Errors that can occur when validating panel dimensions
///
/// These errors occur at construction time, before any hardware is touched.
/// Dimension constraints are never re-checked per refresh.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid panel dimensions
    ///
    /// Width must be a multiple of 8 (rows are byte-packed on the wire) and
    /// height must not exceed [`MAX_LINES`].
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (width must be a multiple of 8, height at most {MAX_LINES})"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors from operations on the pixel buffer itself
///
/// The buffer is a leaf component with no hardware attached, so its errors
/// carry no interface type. [`Error`] lifts them via `From` when they
/// surface from a display operation.
#[derive(Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Pixel coordinate outside the buffer bounds
    ///
    /// The buffer is left untouched.
    OutOfRange {
        /// X coordinate requested
        x: u16,
        /// Y coordinate requested
        y: u16,
    },
    /// Byte length does not match the panel's buffer size
    ///
    /// Raised by construction and bulk replacement. Existing contents are
    /// left untouched.
    SizeMismatch {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { x, y } => write!(f, "Pixel ({x}, {y}) out of range"),
            Self::SizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Buffer size mismatch: expected {expected} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. The frame in flight is abandoned; the chip select is
    /// still released.
    Interface(I::Error),
    /// Pixel coordinate outside the (rotation-adjusted) panel bounds
    OutOfRange {
        /// X coordinate requested
        x: u16,
        /// Y coordinate requested
        y: u16,
    },
    /// Buffer or raster dimensions do not match the panel
    ///
    /// Counts are bytes for buffer operations and pixels for raster
    /// dimension checks.
    SizeMismatch {
        /// Required size
        expected: usize,
        /// Provided size
        provided: usize,
    },
    /// Raster data is inconsistent with its declared pixel format
    ///
    /// The data slice must hold exactly `width * height` bytes for
    /// [`RasterFormat::Mono`](crate::image::RasterFormat::Mono) and
    /// `width * height * 3` for
    /// [`RasterFormat::Rgb`](crate::image::RasterFormat::Rgb).
    InvalidFormat {
        /// Length implied by the declared format and dimensions
        expected: usize,
        /// Length of the provided data slice
        provided: usize,
    },
}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::OutOfRange { x, y } => Self::OutOfRange { x, y },
            BufferError::SizeMismatch { expected, provided } => {
                Self::SizeMismatch { expected, provided }
            }
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::OutOfRange { x, y } => write!(f, "Pixel ({x}, {y}) out of range"),
            Self::SizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Size mismatch: expected {expected} bytes, provided {provided}"
                )
            }
            Self::InvalidFormat { expected, provided } => {
                write!(
                    f,
                    "Invalid raster format: expected {expected} bytes for declared format, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_error_lifts_into_display_error() {
        #[derive(Debug)]
        struct NullInterface;

        impl DisplayInterface for NullInterface {
            type Error = core::convert::Infallible;

            fn begin_frame(&mut self) -> Result<(), Self::Error> {
                Ok(())
            }

            fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
                Ok(())
            }

            fn end_frame(&mut self) -> Result<(), Self::Error> {
                Ok(())
            }
        }

        let lifted: Error<NullInterface> = BufferError::OutOfRange { x: 9, y: 3 }.into();
        assert!(matches!(lifted, Error::OutOfRange { x: 9, y: 3 }));

        let lifted: Error<NullInterface> = BufferError::SizeMismatch {
            expected: 16,
            provided: 4,
        }
        .into();
        assert!(matches!(
            lifted,
            Error::SizeMismatch {
                expected: 16,
                provided: 4
            }
        ));
    }
}
