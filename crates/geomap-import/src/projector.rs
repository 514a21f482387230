//! Nearest-neighbour projection of a raster onto the map.
//!
//! The raster is scaled uniformly to fit the map along its relatively longer
//! axis and centred along the other; tiles outside the scaled footprint are
//! left untouched. All scale math is fixed-point with [`NUM_DIV`]
//! subdivisions so results do not depend on floating-point rounding.

use std::ops::Range;

use geomap_raster::{PixelBuffer, Rgb};
use geomap_world::{Rotation, TileIndex};
use tracing::debug;

use crate::context::RasterContext;

/// Fixed-point subdivisions per unit of scale.
pub const NUM_DIV: u64 = 16384;

/// Scale and padding that place a raster on a map.
///
/// `map_width`/`map_height` are measured along the raster's axes, so for
/// [`Rotation::Clockwise`] they are the map's Y and X sizes respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    pub rotation: Rotation,
    pub raster_width: u32,
    pub raster_height: u32,
    pub map_width: u32,
    pub map_height: u32,
    /// Map tiles per raster pixel, times [`NUM_DIV`].
    pub scale: u64,
    /// Untouched rows above and below the footprint.
    pub row_pad: u32,
    /// Untouched columns left and right of the footprint.
    pub col_pad: u32,
}

impl Projection {
    pub fn new(
        raster_width: u32,
        raster_height: u32,
        size_x: u32,
        size_y: u32,
        rotation: Rotation,
    ) -> Self {
        let (map_width, map_height) = match rotation {
            Rotation::CounterClockwise => (size_x, size_y),
            Rotation::Clockwise => (size_y, size_x),
        };
        let (rw, rh) = (raster_width as u64, raster_height as u64);
        let (mw, mh) = (map_width as u64, map_height as u64);

        let mut row_pad = 0;
        let mut col_pad = 0;
        let scale;
        if rw * NUM_DIV / rh > mw * NUM_DIV / mh {
            // Raster is wider than the map: centre vertically.
            scale = mw * NUM_DIV / rw;
            row_pad = ((1 + mh).saturating_sub(rh * scale / NUM_DIV) / 2) as u32;
        } else {
            // Raster is taller than the map: centre horizontally.
            scale = mh * NUM_DIV / rh;
            col_pad = ((1 + mw).saturating_sub(rw * scale / NUM_DIV) / 2) as u32;
        }

        Self {
            rotation,
            raster_width,
            raster_height,
            map_width,
            map_height,
            scale,
            row_pad,
            col_pad,
        }
    }

    /// Map rows covered by the raster.
    pub fn rows(&self) -> Range<u32> {
        self.row_pad..self.map_height.saturating_sub(self.row_pad)
    }

    /// Map columns covered by the raster.
    pub fn cols(&self) -> Range<u32> {
        self.col_pad..self.map_width.saturating_sub(self.col_pad)
    }

    /// Map `(x, y)` of the tile at `(row, col)` in raster orientation.
    pub fn tile_xy(&self, row: u32, col: u32) -> (u32, u32) {
        match self.rotation {
            Rotation::CounterClockwise => (col, row),
            Rotation::Clockwise => (row, col),
        }
    }

    /// Raster `(row, col)` sampled for map position `(row, col)`.
    ///
    /// Counter-clockwise projection mirrors the column axis so the image
    /// keeps its left-right orientation in the rotated map frame.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside [`rows`](Self::rows) ×
    /// [`cols`](Self::cols) or the scale math produced an index outside the
    /// raster.
    pub fn source_pixel(&self, row: u32, col: u32) -> (u32, u32) {
        let raster_row = (row - self.row_pad) as u64 * NUM_DIV / self.scale;
        let raster_col = match self.rotation {
            Rotation::CounterClockwise => {
                (self.map_width - 1 - col - self.col_pad) as u64 * NUM_DIV / self.scale
            }
            Rotation::Clockwise => (col - self.col_pad) as u64 * NUM_DIV / self.scale,
        };

        assert!(
            raster_row < self.raster_height as u64,
            "projected row {raster_row} outside raster of height {}",
            self.raster_height
        );
        assert!(
            raster_col < self.raster_width as u64,
            "projected column {raster_col} outside raster of width {}",
            self.raster_width
        );
        (raster_row as u32, raster_col as u32)
    }
}

/// Tile counts of one projection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    /// Tiles handed to the classifier.
    pub visited: u64,
    /// Footprint tiles skipped because they lie on the map border.
    pub border: u64,
}

/// Calls `proc` for every inner map tile covered by `raster`.
///
/// Each tile receives the nearest raster pixel. Tiles outside the
/// footprint or on the map border are never passed to `proc`.
pub fn apply_raster_to_map<F>(
    cx: &mut RasterContext<'_>,
    raster: &PixelBuffer,
    mut proc: F,
) -> ProjectionStats
where
    F: FnMut(&mut RasterContext<'_>, Rgb, TileIndex),
{
    let projection = Projection::new(
        raster.width(),
        raster.height(),
        cx.grid.size_x(),
        cx.grid.size_y(),
        cx.settings.rotation,
    );
    debug!(
        "Projecting {}x{} raster onto {}x{} map ({}): scale {}/{}, padding rows {} cols {}",
        raster.width(),
        raster.height(),
        projection.map_width,
        projection.map_height,
        projection.rotation,
        projection.scale,
        NUM_DIV,
        projection.row_pad,
        projection.col_pad,
    );

    let mut stats = ProjectionStats::default();
    for row in projection.rows() {
        for col in projection.cols() {
            let (x, y) = projection.tile_xy(row, col);
            let tile = cx.grid.tile_xy(x, y);
            let (raster_row, raster_col) = projection.source_pixel(row, col);
            let pixel = raster.pixel(raster_row, raster_col);

            if cx.grid.is_inner_tile(tile) {
                proc(cx, pixel, tile);
                stats.visited += 1;
            } else {
                stats.border += 1;
            }
        }
    }
    stats
}
