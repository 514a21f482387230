//! Entry points: read a raster, project it with a classifier, repaint.

use geomap_raster::{RasterError, RasterFormat, RasterSource, ReadMode, Subdirectory};
use thiserror::Error;
use tracing::{info, warn};

use crate::classify::RasterDataType;
use crate::context::RasterContext;
use crate::projector::{ProjectionStats, apply_raster_to_map};

/// Display collaborator notified once a pass has changed the map.
pub trait ScreenInvalidator {
    fn mark_whole_screen_dirty(&mut self);
}

/// A [`ScreenInvalidator`] that only remembers it was called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlag {
    dirty: bool,
}

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the flag was set and clears it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl ScreenInvalidator for DirtyFlag {
    fn mark_whole_screen_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Errors that abort an import before the map is touched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("raster source returned no pixels for '{locator}'")]
    MissingPixels { locator: String },
}

/// Summary of one completed import pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportReport {
    pub kind: RasterDataType,
    pub width: u32,
    pub height: u32,
    pub stats: ProjectionStats,
}

/// Reads `locator` and applies it to the map as a layer of `kind`.
///
/// The map is only modified once the whole raster has been read and
/// validated; on error it is left exactly as it was and `screen` is not
/// notified.
pub fn load_raster(
    source: &dyn RasterSource,
    format: RasterFormat,
    kind: RasterDataType,
    locator: &str,
    subdir: Subdirectory,
    cx: &mut RasterContext<'_>,
    screen: &mut dyn ScreenInvalidator,
) -> Result<ImportReport, ImportError> {
    let image = source
        .read(format, locator, subdir, ReadMode::Full)
        .inspect_err(|e| warn!("Rejected {kind} raster '{locator}': {e}"))?;
    let pixels = image.pixels.ok_or_else(|| ImportError::MissingPixels {
        locator: locator.to_string(),
    })?;

    info!(
        "Applying {}x{} {format} raster '{locator}' as {kind} layer",
        pixels.width(),
        pixels.height()
    );
    let stats = apply_raster_to_map(cx, &pixels, kind.classifier());
    info!(
        "{kind} layer done: {} tiles visited, {} border tiles skipped",
        stats.visited, stats.border
    );

    screen.mark_whole_screen_dirty();

    Ok(ImportReport {
        kind,
        width: pixels.width(),
        height: pixels.height(),
        stats,
    })
}

/// Reads only the header of `locator` and returns its `(width, height)`.
///
/// Fails the same way a full import would for oversized or unreadable
/// rasters, without decoding any pixels.
pub fn probe_raster(
    source: &dyn RasterSource,
    format: RasterFormat,
    locator: &str,
    subdir: Subdirectory,
) -> Result<(u32, u32), ImportError> {
    let image = source
        .read(format, locator, subdir, ReadMode::SizeOnly)
        .inspect_err(|e| warn!("Cannot probe raster '{locator}': {e}"))?;
    Ok((image.width, image.height))
}

#[cfg(test)]
mod tests {
    use geomap_raster::{MemoryRasterSource, PixelBuffer, RasterImage, Rgb};
    use geomap_world::{Climate, Rotation, TileGrid, TileMap, TropicZone};

    use super::*;
    use crate::context::ImportSettings;
    use crate::random::FixedRandom;

    /// A broken source that reports a size but never delivers pixels.
    struct HeaderOnly;

    impl RasterSource for HeaderOnly {
        fn read(
            &self,
            _format: RasterFormat,
            _locator: &str,
            _subdir: Subdirectory,
            _mode: ReadMode,
        ) -> Result<RasterImage, RasterError> {
            Ok(RasterImage {
                width: 4,
                height: 4,
                pixels: None,
            })
        }
    }

    fn import(
        source: &dyn RasterSource,
        map: &mut TileMap,
        kind: RasterDataType,
        screen: &mut DirtyFlag,
    ) -> Result<ImportReport, ImportError> {
        let settings = ImportSettings::new(Climate::Tropic, Rotation::CounterClockwise);
        let mut rng = FixedRandom::lowest();
        let mut cx = RasterContext::new(map, &mut rng, &settings);
        load_raster(source, RasterFormat::Png, kind, "layer", Subdirectory::Geomap, &mut cx, screen)
    }

    #[test]
    fn test_load_marks_screen_dirty() {
        let mut source = MemoryRasterSource::new();
        source.insert("layer", PixelBuffer::filled(4, 4, Rgb::new(255, 0, 0)).unwrap());
        let mut map = TileMap::new(8, 8, Climate::Tropic);
        let mut screen = DirtyFlag::new();

        let report = import(&source, &mut map, RasterDataType::Tropics, &mut screen).unwrap();

        assert!(screen.take());
        assert!(!screen.is_dirty());
        assert_eq!((report.width, report.height), (4, 4));
        assert_eq!(report.stats.visited, 36);
        assert_eq!(map.census().desert_zone, 36);
        assert!(
            map.iter()
                .filter(|(_, t)| t.zone == TropicZone::Desert)
                .all(|(idx, _)| map.is_inner_tile(idx))
        );
    }

    #[test]
    fn test_missing_raster_leaves_map_alone() {
        let source = MemoryRasterSource::new();
        let mut map = TileMap::new(8, 8, Climate::Tropic);
        let before = map.clone();
        let mut screen = DirtyFlag::new();

        let err = import(&source, &mut map, RasterDataType::Water, &mut screen).unwrap_err();

        assert!(matches!(err, ImportError::Raster(RasterError::NotFound { .. })));
        assert_eq!(map, before);
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_source_without_pixels_is_an_error() {
        let mut map = TileMap::new(8, 8, Climate::Tropic);
        let mut screen = DirtyFlag::new();
        let err = import(&HeaderOnly, &mut map, RasterDataType::Snow, &mut screen).unwrap_err();
        assert!(matches!(err, ImportError::MissingPixels { locator } if locator == "layer"));
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_probe_reports_size() {
        let mut source = MemoryRasterSource::new();
        source.insert("big", PixelBuffer::filled(640, 480, Rgb::BLACK).unwrap());
        let size = probe_raster(&source, RasterFormat::Bmp, "big", Subdirectory::Heightmap).unwrap();
        assert_eq!(size, (640, 480));
        assert!(probe_raster(&source, RasterFormat::Bmp, "small", Subdirectory::Heightmap).is_err());
    }
}
