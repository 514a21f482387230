//! Raster sources: validated RGB pixel buffers read from PNG and BMP files or memory.
//!
//! Every source yields the same layout: row-major RGB triples, three bytes per
//! pixel, with dimensions checked against [`MAX_RASTER_SIDE`] and
//! [`MAX_RASTER_PIXELS`] before any pixel memory is allocated.

mod buffer;
mod error;
mod file;
mod memory;
mod source;

pub use buffer::{MAX_RASTER_PIXELS, MAX_RASTER_SIDE, PixelBuffer, Rgb, is_valid_dimension};
pub use error::RasterError;
pub use file::FileRasterSource;
pub use memory::MemoryRasterSource;
pub use source::{RasterFormat, RasterImage, RasterSource, ReadMode, Subdirectory};
