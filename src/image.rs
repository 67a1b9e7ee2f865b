//! Raster import types
//!
//! [`Raster`] describes an externally produced, row-major image so it can be
//! loaded into the panel buffer with
//! [`Display::load_image`](crate::display::Display::load_image). Two source
//! layouts are understood:
//!
//! - [`RasterFormat::Mono`] - one byte per pixel, nonzero meaning lit. This
//!   is the required 1-bit-depth input.
//! - [`RasterFormat::Rgb`] - three bytes per pixel, any nonzero channel
//!   meaning lit. A weaker guarantee kept for compatibility with callers
//!   that hand over thresholded color images.
//!
//! "Lit" pixels become white (set bits) in the buffer; everything else
//! black. Conversion itself lives on the display, which knows the panel's
//! rotation; the helpers here are the pure sampling and packing pieces.

/// Source pixel layout of a [`Raster`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    /// One byte per pixel, nonzero = lit
    Mono,
    /// Three bytes per pixel (R, G, B), any nonzero channel = lit
    Rgb,
}

impl RasterFormat {
    /// Bytes each source pixel occupies
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Rgb => 3,
        }
    }
}

/// A borrowed row-major raster to load into the panel buffer
///
/// Plain data carrier: dimensions, format and the pixel bytes. Validation
/// happens inside `load_image`, which checks the data length against the
/// declared format and the dimensions against the (rotation-adjusted)
/// panel before touching the buffer.
#[derive(Clone, Copy, Debug)]
pub struct Raster<'a> {
    width: u16,
    height: u16,
    format: RasterFormat,
    data: &'a [u8],
}

impl<'a> Raster<'a> {
    /// Describe a raster
    pub const fn new(width: u16, height: u16, format: RasterFormat, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    /// Shorthand for a one-byte-per-pixel raster
    pub const fn mono(width: u16, height: u16, data: &'a [u8]) -> Self {
        Self::new(width, height, RasterFormat::Mono, data)
    }

    /// Shorthand for a three-bytes-per-pixel raster
    pub const fn rgb(width: u16, height: u16, data: &'a [u8]) -> Self {
        Self::new(width, height, RasterFormat::Rgb, data)
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Declared pixel layout
    pub const fn format(&self) -> RasterFormat {
        self.format
    }

    /// The raw pixel bytes
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Data length implied by format and dimensions
    pub(crate) const fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel()
    }

    /// Sample one pixel; coordinates must be in range
    pub(crate) fn lit(&self, x: u16, y: u16) -> bool {
        let pixel = (y as usize * self.width as usize + x as usize) * self.format.bytes_per_pixel();
        match self.format {
            RasterFormat::Mono => self.data[pixel] != 0,
            RasterFormat::Rgb => self.data[pixel..pixel + 3].iter().any(|ch| *ch != 0),
        }
    }

    /// One row of mono source pixels; format must be [`RasterFormat::Mono`]
    pub(crate) fn mono_row(&self, y: u16) -> &'a [u8] {
        let w = self.width as usize;
        &self.data[y as usize * w..(y as usize + 1) * w]
    }
}

/// Pack 8 one-byte source pixels per output byte, MSB leftmost
///
/// `src` holds one byte per pixel, `dst` one bit per pixel;
/// `src.len() == dst.len() * 8`. This is the bulk path of image loading and
/// must stay bit-identical to setting each lit pixel individually.
pub(crate) fn pack_row(src: &[u8], dst: &mut [u8]) {
    for (out, pixels) in dst.iter_mut().zip(src.chunks_exact(8)) {
        let mut packed = 0u8;
        for pixel in pixels {
            packed <<= 1;
            if *pixel != 0 {
                packed |= 1;
            }
        }
        *out = packed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_msb_is_leftmost() {
        let src = [1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0];
        let mut dst = [0u8; 2];
        pack_row(&src, &mut dst);
        assert_eq!(dst, [0b1000_0001, 0b0000_0010]);
    }

    #[test]
    fn test_pack_row_any_nonzero_byte_is_lit() {
        let src = [0, 255, 0, 7, 0, 1, 0, 128];
        let mut dst = [0u8; 1];
        pack_row(&src, &mut dst);
        assert_eq!(dst, [0b0101_0101]);
    }

    #[test]
    fn test_mono_sampling() {
        let data = [0u8, 1, 0, 1];
        let raster = Raster::mono(2, 2, &data);
        assert!(!raster.lit(0, 0));
        assert!(raster.lit(1, 0));
        assert!(!raster.lit(0, 1));
        assert!(raster.lit(1, 1));
        assert_eq!(raster.expected_len(), 4);
    }

    #[test]
    fn test_rgb_sampling_any_channel() {
        // (0,0) dark, (1,0) blue-only, (0,1) mid gray, (1,1) dark again
        let data = [0, 0, 0, 0, 0, 9, 80, 80, 80, 0, 0, 0];
        let raster = Raster::rgb(2, 2, &data);
        assert!(!raster.lit(0, 0));
        assert!(raster.lit(1, 0));
        assert!(raster.lit(0, 1));
        assert!(!raster.lit(1, 1));
        assert_eq!(raster.expected_len(), 12);
    }

    #[test]
    fn test_mono_rows() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let raster = Raster::mono(8, 2, &data);
        assert_eq!(raster.mono_row(0), &data[..8]);
        assert_eq!(raster.mono_row(1), &data[8..]);
    }
}
