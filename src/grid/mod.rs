mod config;
mod lattice;
mod region;

pub use config::{Bounds, GridConfig};
pub use lattice::Lattice;
pub use region::{BoundaryRegion, BoundsRegion, WaterRegion};

/// Rough meters per degree in the operating latitude band. The planar
/// degree-space metric leans on this scale being nearly uniform; it is not
/// valid near the poles or over large extents.
pub(crate) const DEG_TO_METERS: f64 = 111_000.0;
