//! The raster source abstraction shared by file-backed and in-memory sources.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::RasterError;

/// Container format of a raster file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RasterFormat {
    Png,
    Bmp,
}

impl RasterFormat {
    /// Guesses the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            RasterFormat::Png => image::ImageFormat::Png,
            RasterFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RasterFormat::Png => "png",
            RasterFormat::Bmp => "bmp",
        })
    }
}

impl FromStr for RasterFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RasterFormat::Png),
            "bmp" => Ok(RasterFormat::Bmp),
            other => Err(format!("unsupported raster format '{other}' (expected png or bmp)")),
        }
    }
}

/// How much of a raster to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    /// Read and validate the header only.
    SizeOnly,
    /// Read and decode all pixels.
    Full,
}

/// Directory below each search path that a locator is resolved against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subdirectory {
    /// The search path itself.
    Base,
    /// Rasters describing terrain, water and vegetation layers.
    #[default]
    Geomap,
    Heightmap,
    Scenario,
}

impl Subdirectory {
    pub fn dir_name(self) -> &'static str {
        match self {
            Subdirectory::Base => "",
            Subdirectory::Geomap => "geomap",
            Subdirectory::Heightmap => "heightmap",
            Subdirectory::Scenario => "scenario",
        }
    }
}

/// Result of reading a raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// `None` when read with [`ReadMode::SizeOnly`].
    pub pixels: Option<PixelBuffer>,
}

/// Anything that can produce validated RGB rasters.
pub trait RasterSource {
    /// Reads the raster named by `locator`.
    ///
    /// Implementations must reject rasters failing
    /// [`is_valid_dimension`](crate::is_valid_dimension) with
    /// [`RasterError::InvalidDimensions`] before decoding pixel data.
    fn read(
        &self,
        format: RasterFormat,
        locator: &str,
        subdir: Subdirectory,
        mode: ReadMode,
    ) -> Result<RasterImage, RasterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(RasterFormat::from_path(Path::new("a/b.PNG")), Some(RasterFormat::Png));
        assert_eq!(RasterFormat::from_path(Path::new("map.bmp")), Some(RasterFormat::Bmp));
        assert_eq!(RasterFormat::from_path(Path::new("map.tga")), None);
        assert_eq!(RasterFormat::from_path(Path::new("map")), None);
    }

    #[test]
    fn test_subdirectory_names() {
        assert_eq!(Subdirectory::default().dir_name(), "geomap");
        assert_eq!(Subdirectory::Base.dir_name(), "");
    }
}
