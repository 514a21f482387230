//! PNG and BMP rasters read from disk through the `image` crate.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::{debug, warn};

use crate::buffer::{PixelBuffer, is_valid_dimension};
use crate::error::RasterError;
use crate::source::{RasterFormat, RasterImage, RasterSource, ReadMode, Subdirectory};

/// Reads rasters from a list of search paths.
///
/// A locator is resolved as `<search path>/<subdirectory>/<locator>` for
/// each search path in order; absolute locators and locators that name an
/// existing file relative to the working directory are used directly.
///
/// Palette and greyscale images are expanded to RGB, alpha channels are
/// dropped and 16-bit samples are reduced to 8 bits.
#[derive(Clone, Debug, Default)]
pub struct FileRasterSource {
    search_paths: Vec<PathBuf>,
}

impl FileRasterSource {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Finds the file a locator refers to.
    pub fn resolve(&self, locator: &str, subdir: Subdirectory) -> Option<PathBuf> {
        let direct = Path::new(locator);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }

        self.search_paths
            .iter()
            .map(|root| root.join(subdir.dir_name()).join(locator))
            .find(|candidate| candidate.is_file())
            .or_else(|| direct.is_file().then(|| direct.to_path_buf()))
    }

    fn open(path: &Path, format: RasterFormat) -> Result<ImageReader<BufReader<File>>, RasterError> {
        let mut reader = ImageReader::open(path).map_err(|source| RasterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        reader.set_format(format.image_format());
        Ok(reader)
    }
}

impl RasterSource for FileRasterSource {
    fn read(
        &self,
        format: RasterFormat,
        locator: &str,
        subdir: Subdirectory,
        mode: ReadMode,
    ) -> Result<RasterImage, RasterError> {
        let path = self.resolve(locator, subdir).ok_or_else(|| {
            warn!("Raster '{locator}' not found in {} search paths", self.search_paths.len());
            RasterError::NotFound {
                locator: locator.to_string(),
            }
        })?;

        let (width, height) = Self::open(&path, format)?.into_dimensions()?;
        if !is_valid_dimension(width, height) {
            warn!("Rejecting {}: {width}x{height} raster is out of range", path.display());
            return Err(RasterError::InvalidDimensions { width, height });
        }

        if mode == ReadMode::SizeOnly {
            return Ok(RasterImage {
                width,
                height,
                pixels: None,
            });
        }

        let mut reader = Self::open(&path, format)?;
        // The dimension check above already bounds the allocation.
        reader.no_limits();
        let decoded = reader.decode()?.to_rgb8();
        let pixels = PixelBuffer::from_rgb_image(decoded)?;
        debug!("Read {format} raster {} ({width}x{height})", path.display());

        Ok(RasterImage {
            width,
            height,
            pixels: Some(pixels),
        })
    }
}
