mod contours;
mod geojson;
mod points;

pub use contours::extract_contour_vertices;
pub use geojson::{read_boundary_polygons, read_feature_collection};
pub use points::{extract_soundings, MIN_NAVIGABLE_DEPTH_M};

/// Survey depths arrive in feet; the published grid is in meters.
pub const FEET_TO_METERS: f64 = 0.3048;

/// A normalized depth observation. Constructed once per input feature or
/// contour vertex during ingestion and discarded after assignment; there is
/// no persistent identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSample {
    pub lat: f64,
    pub lng: f64,
    pub depth_m: f64,
}
