//! Core display operations
//!
//! [`Display`] is the protocol engine: it owns the transport session, the
//! [`PixelBuffer`] and the VCOM polarity bit, and turns the buffer into the
//! panel's line-addressed wire format on every [`refresh`](Display::refresh).

use crate::buffer::PixelBuffer;
use crate::command::{PAD, clear_command, reverse_bits, vcom_command, write_command};
use crate::config::{Dimensions, Rotation};
use crate::error::{BufferError, Error};
use crate::image::{Raster, RasterFormat, pack_row};
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for a Sharp memory panel
///
/// The panel's own memory is write-only; this buffer is the single source
/// of truth between refreshes. Mutate it through the pixel accessors,
/// [`load_image`](Self::load_image) or the `embedded-graphics` integration,
/// then push the whole frame with [`refresh`](Self::refresh).
///
/// Not thread-safe by design: callers serialize buffer writes against
/// refreshes themselves (the exclusive `&mut` borrow enforces this within
/// safe Rust).
///
/// ## Type Parameters
///
/// * `I` - Transport implementing [`DisplayInterface`]
/// * `B` - Buffer storage implementing `AsRef<[u8]> + AsMut<[u8]>`
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Transport session handle
    interface: I,
    /// Off-device bitmap, one bit per pixel
    buffer: PixelBuffer<B>,
    /// Logical rotation applied to coordinate-facing operations
    rotation: Rotation,
    /// VCOM polarity; alternates on every transmission
    vcom: bool,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display over an interface and a sized buffer
    ///
    /// The VCOM polarity starts high, matching a freshly powered panel.
    pub fn new(interface: I, buffer: PixelBuffer<B>, rotation: Rotation) -> Self {
        Self {
            interface,
            buffer,
            rotation,
            vcom: true,
        }
    }

    /// Transmit the whole buffer to the panel
    ///
    /// Opens one chip-select session for the entire frame: the mode byte
    /// (write command + current VCOM), then per line a bit-reversed 1-based
    /// address, the packed pixel bytes as stored, and a zero terminator,
    /// closed by one further zero byte. A zero-height panel produces just
    /// the mode byte and the frame terminator.
    ///
    /// The VCOM bit advances once per refresh that reaches transmission and
    /// is *not* rolled back if a later write fails: the polarity contract
    /// counts transmission attempts, and the panel may have latched part of
    /// the frame. A failed refresh therefore still alternates polarity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on any transport failure. The rest of
    /// the frame is abandoned but the session is still released.
    pub fn refresh(&mut self) -> DisplayResult<I> {
        self.interface.begin_frame().map_err(Error::Interface)?;
        let result = self.write_frame();
        let released = self.interface.end_frame();
        result?;
        released.map_err(Error::Interface)
    }

    fn write_frame(&mut self) -> DisplayResult<I> {
        let mode = write_command(self.vcom);
        self.vcom = !self.vcom;

        let dims = self.buffer.dimensions();
        log::trace!(
            "writing frame: {}x{}, vcom={}",
            dims.width(),
            dims.height(),
            (mode & crate::command::BIT_VCOM) != 0
        );

        self.send(&[mode])?;
        for r in 0..dims.height() as usize {
            self.send(&[reverse_bits((r + 1) as u8)])?;
            self.interface
                .write(self.buffer.row(r))
                .map_err(Error::Interface)?;
            self.send(&[PAD])?;
        }
        self.send(&[PAD])
    }

    /// Send the hardware clear-memory command
    ///
    /// Blanks the panel memory to white in a single two-byte transmission,
    /// without streaming pixel data, and whitens the local buffer to match.
    /// Alternates VCOM like any other transmission.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on transport failure; the local buffer
    /// is only whitened after the command went out.
    pub fn clear_panel(&mut self) -> DisplayResult<I> {
        let mode = clear_command(self.vcom);
        self.vcom = !self.vcom;
        self.transmit(&[mode, PAD])?;
        self.buffer.fill(true);
        Ok(())
    }

    /// Transmit a VCOM-only maintenance frame
    ///
    /// The panel needs its polarity to keep alternating (at least ~1 Hz)
    /// even when nothing is being drawn; call this periodically between
    /// refreshes to prevent charge build-up on the electrodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on transport failure.
    pub fn toggle_vcom(&mut self) -> DisplayResult<I> {
        let mode = vcom_command(self.vcom);
        self.vcom = !self.vcom;
        self.transmit(&[mode, PAD])
    }

    /// Read one pixel at logical (rotation-adjusted) coordinates
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] outside the logical bounds.
    pub fn get_pixel(&self, x: u16, y: u16) -> Result<bool, BufferError> {
        let (index, mask) = self.locate(x, y)?;
        Ok((self.buffer.as_bytes()[index] & mask) != 0)
    }

    /// Write one pixel at logical (rotation-adjusted) coordinates
    ///
    /// `true` is white on the panel. Takes effect on the next refresh.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] outside the logical bounds; the
    /// buffer is not mutated on failure.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), BufferError> {
        let (index, mask) = self.locate(x, y)?;
        let byte = &mut self.buffer.as_bytes_mut()[index];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        Ok(())
    }

    /// Zero the buffer (all pixels black); transmitted on the next refresh
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Solid-fill the buffer: `true` all-white, `false` all-black
    pub fn fill(&mut self, on: bool) {
        self.buffer.fill(on);
    }

    /// Load an external raster into the buffer
    ///
    /// The raster's dimensions must equal the panel's logical dimensions;
    /// under [`Rotation::Rotate90`]/[`Rotation::Rotate270`] that is the
    /// swapped width/height. Lit source pixels become white.
    ///
    /// One-byte-per-pixel rasters at native rotation take a bulk path that
    /// packs eight source pixels per buffer byte; everything else goes
    /// through the per-pixel reference path. Both produce identical
    /// buffers for the same input.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFormat`] if the data length does not match the
    ///   declared format and dimensions
    /// - [`Error::SizeMismatch`] if the dimensions differ from the logical
    ///   panel dimensions
    ///
    /// The buffer is untouched on either failure.
    pub fn load_image(&mut self, raster: &Raster<'_>) -> DisplayResult<I> {
        let expected = raster.expected_len();
        if raster.data().len() != expected {
            return Err(Error::InvalidFormat {
                expected,
                provided: raster.data().len(),
            });
        }

        let dims = self.buffer.dimensions();
        let (width, height) = self.rotation.adjust(dims);
        if raster.width() != width || raster.height() != height {
            return Err(Error::SizeMismatch {
                expected: width as usize * height as usize,
                provided: raster.width() as usize * raster.height() as usize,
            });
        }

        if raster.format() == RasterFormat::Mono && self.rotation == Rotation::Rotate0 {
            let row_bytes = dims.row_bytes();
            let bytes = self.buffer.as_bytes_mut();
            for y in 0..height {
                let dst = y as usize * row_bytes;
                pack_row(raster.mono_row(y), &mut bytes[dst..dst + row_bytes]);
            }
        } else {
            self.buffer.clear();
            for y in 0..height {
                for x in 0..width {
                    if raster.lit(x, y) {
                        self.set_pixel(x, y, true)?;
                    }
                }
            }
        }

        log::debug!("loaded {}x{} raster", raster.width(), raster.height());
        Ok(())
    }

    /// Native panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.buffer.dimensions()
    }

    /// Configured rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The underlying pixel buffer
    pub fn buffer(&self) -> &PixelBuffer<B> {
        &self.buffer
    }

    /// Mutable access to the underlying pixel buffer (native orientation)
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<B> {
        &mut self.buffer
    }

    /// Tear the display apart into its interface and buffer
    pub fn release(self) -> (I, PixelBuffer<B>) {
        (self.interface, self.buffer)
    }

    /// Short out-of-band transmission (clear / VCOM maintenance)
    fn transmit(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.interface.begin_frame().map_err(Error::Interface)?;
        let result = self.interface.write(bytes).map_err(Error::Interface);
        let released = self.interface.end_frame();
        result?;
        released.map_err(Error::Interface)
    }

    fn send(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.interface.write(bytes).map_err(Error::Interface)
    }

    fn locate(&self, x: u16, y: u16) -> Result<(usize, u8), BufferError> {
        let dims = self.buffer.dimensions();
        let (width, height) = self.rotation.adjust(dims);
        if x >= width || y >= height {
            return Err(BufferError::OutOfRange { x, y });
        }
        Ok(apply_rotation(
            u32::from(x),
            u32::from(y),
            u32::from(dims.width()),
            u32::from(dims.height()),
            self.rotation,
        ))
    }
}
