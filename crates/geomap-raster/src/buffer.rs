//! Owned RGB pixel storage and the dimension limits every raster must respect.

use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// Longest accepted side of a raster, twice the longest possible map side.
pub const MAX_RASTER_SIDE: u32 = 2 * (1 << 16);

/// Largest accepted pixel count (about 256 million).
pub const MAX_RASTER_PIXELS: u64 = 256 << 20;

// Decoding a 24 bpp image may take 4 bytes per pixel and more in scratch
// space; keep the limit addressable on 32-bit targets.
static_assertions::const_assert!(MAX_RASTER_PIXELS < u32::MAX as u64 / 8);

/// Whether a raster of `width × height` pixels may be loaded.
///
/// Both sides must lie in `1..=MAX_RASTER_SIDE` and the pixel count must not
/// exceed [`MAX_RASTER_PIXELS`].
pub fn is_valid_dimension(width: u32, height: u32) -> bool {
    (width as u64) * (height as u64) <= MAX_RASTER_PIXELS
        && width > 0
        && width <= MAX_RASTER_SIDE
        && height > 0
        && height <= MAX_RASTER_SIDE
}

/// One sampled pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Row-major RGB pixels, three bytes per pixel.
///
/// Construction validates both the dimensions and the byte count, so a
/// `PixelBuffer` always holds exactly `width * height * 3` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps existing RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if the size is out of range
    /// and [`RasterError::BufferSize`] if `data` has the wrong length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        if !is_valid_dimension(width, height) {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, RasterError> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Builds a buffer by calling `f(row, col)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, RasterError> {
        if !is_valid_dimension(width, height) {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for row in 0..height {
            for col in 0..width {
                let px = f(row, col);
                data.extend_from_slice(&[px.r, px.g, px.b]);
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Takes ownership of a decoded RGB image.
    pub fn from_rgb_image(image: image::RgbImage) -> Result<Self, RasterError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the buffer.
    pub fn pixel(&self, row: u32, col: u32) -> Rgb {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} raster",
            self.width,
            self.height
        );
        let idx = (row as usize * self.width as usize + col as usize) * 3;
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}
