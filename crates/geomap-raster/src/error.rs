//! Raster loading error types.

use std::path::PathBuf;

/// Errors that can occur while locating, decoding or validating a raster.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// No file matching the locator exists in any search path.
    #[error("raster '{locator}' not found")]
    NotFound {
        /// The locator as given by the caller.
        locator: String,
    },

    /// The file exists but could not be opened.
    #[error("failed to open raster {}: {source}", path.display())]
    Io {
        /// Resolved path of the file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image container could not be decoded.
    #[error("failed to decode raster: {0}")]
    Decode(#[from] image::ImageError),

    /// Width or height is zero, a side is too long, or there are too many pixels.
    #[error("raster of {width}x{height} pixels is outside the supported limits")]
    InvalidDimensions {
        /// Width reported by the image header.
        width: u32,
        /// Height reported by the image header.
        height: u32,
    },

    /// A pixel buffer was built from a byte vector of the wrong length.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// `width * height * 3`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },
}
