use anyhow::{anyhow, Result};
use geo::{BoundingRect, Contains, Coord, MultiPolygon, Point, Rect};

use super::Bounds;

/// Water-region membership test for lattice points.
///
/// Pluggable so the membership policy can be swapped without touching the
/// rest of the pipeline.
pub trait WaterRegion {
    fn contains(&self, lat: f64, lng: f64) -> bool;
}

/// True point-in-polygon membership against the water-boundary geometry,
/// with a bounding-rect fast path derived from the same polygons.
#[derive(Debug, Clone)]
pub struct BoundaryRegion {
    polygons: Vec<MultiPolygon<f64>>,
    bbox: Rect<f64>,
}

impl BoundaryRegion {
    /// Build a region from the boundary document's polygons. Errors when no
    /// polygon geometry is present.
    pub fn new(polygons: Vec<MultiPolygon<f64>>) -> Result<Self> {
        let bbox = polygons
            .iter()
            .filter_map(|mp| mp.bounding_rect())
            .reduce(|a, b| {
                Rect::new(
                    Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                    Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
                )
            })
            .ok_or_else(|| anyhow!("water boundary contains no polygon geometry"))?;
        Ok(Self { polygons, bbox })
    }
}

impl WaterRegion for BoundaryRegion {
    fn contains(&self, lat: f64, lng: f64) -> bool {
        // Fast path: outside the combined extent, skip the polygon tests.
        if lng < self.bbox.min().x
            || lng > self.bbox.max().x
            || lat < self.bbox.min().y
            || lat > self.bbox.max().y
        {
            return false;
        }
        let point = Point::new(lng, lat);
        self.polygons.iter().any(|mp| mp.contains(&point))
    }
}

/// Bounding-box membership approximation. Retained as an explicit opt-in
/// for compatibility with grids published before polygon containment.
#[derive(Debug, Clone, Copy)]
pub struct BoundsRegion {
    bounds: Bounds,
}

impl BoundsRegion {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl WaterRegion for BoundsRegion {
    #[inline]
    fn contains(&self, lat: f64, lng: f64) -> bool {
        self.bounds.contains(lat, lng)
    }
}
