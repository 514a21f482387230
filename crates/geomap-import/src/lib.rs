//! Raster import: projects RGB images onto the world grid and converts each
//! sampled pixel into terrain, water, vegetation and climate-zone changes.
//!
//! The pipeline is
//! [`RasterSource`](geomap_raster::RasterSource) → [`apply_raster_to_map`] →
//! one classifier per [`RasterDataType`] → [`TileGrid`](geomap_world::TileGrid)
//! mutations. Classifiers quantize channel values with
//! [`Gradient::sample`], which dithers level boundaries to hide banding in
//! low-precision images.

pub mod classify;
mod context;
mod dispatch;
mod gradient;
mod projector;
mod random;

pub use classify::{RasterDataType, TileRasterFn};
pub use context::{ImportSettings, RasterContext, SpeciesRange, TreeSpeciesTable};
pub use dispatch::{DirtyFlag, ImportError, ImportReport, ScreenInvalidator, load_raster, probe_raster};
pub use gradient::{Gradient, LOWER_CUTOFF, MID_CUTOFF, UPPER_CUTOFF, sample_quantized_gradient};
pub use projector::{NUM_DIV, Projection, ProjectionStats, apply_raster_to_map};
pub use random::{FixedRandom, RandomSource, derive_import_seed, import_rng};
