//! In-memory raster source for embedding and tests.

use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::source::{RasterFormat, RasterImage, RasterSource, ReadMode, Subdirectory};

/// Serves pre-decoded pixel buffers by locator.
///
/// The container format and subdirectory are ignored; a locator names
/// exactly one buffer.
#[derive(Clone, Debug, Default)]
pub struct MemoryRasterSource {
    rasters: HashMap<String, PixelBuffer>,
}

impl MemoryRasterSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pixels` under `locator`, replacing any previous entry.
    pub fn insert(&mut self, locator: impl Into<String>, pixels: PixelBuffer) {
        self.rasters.insert(locator.into(), pixels);
    }

    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }
}

impl RasterSource for MemoryRasterSource {
    fn read(
        &self,
        _format: RasterFormat,
        locator: &str,
        _subdir: Subdirectory,
        mode: ReadMode,
    ) -> Result<RasterImage, RasterError> {
        let pixels = self
            .rasters
            .get(locator)
            .ok_or_else(|| RasterError::NotFound {
                locator: locator.to_string(),
            })?;

        Ok(RasterImage {
            width: pixels.width(),
            height: pixels.height(),
            pixels: (mode == ReadMode::Full).then(|| pixels.clone()),
        })
    }
}
