#![doc = "Bathygrid public API"]
mod assign;
mod common;
mod grid;
mod output;
mod source;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use grid::{BoundaryRegion, Bounds, BoundsRegion, GridConfig, Lattice, WaterRegion};

#[doc(inline)]
pub use source::{
    extract_contour_vertices, extract_soundings, read_boundary_polygons,
    read_feature_collection, SourceSample, FEET_TO_METERS, MIN_NAVIGABLE_DEPTH_M,
};

#[doc(inline)]
pub use assign::{
    assign_grid, Assignment, SampleIndex, CONTOUR_MAX_DIST_DEG, POINT_MAX_DIST_DEG,
};

#[doc(inline)]
pub use output::{
    DepthGridDocument, DepthStatistics, EmptyResultError, GridCell, GridFormat, Metadata,
};
