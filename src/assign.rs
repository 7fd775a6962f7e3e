use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::grid::{GridConfig, WaterRegion};
use crate::source::SourceSample;

/// Default acceptance radius for point-cloud assignment (~1 km).
pub const POINT_MAX_DIST_DEG: f64 = 0.01;
/// Default acceptance radius for contour assignment (~500 m). Contours are
/// denser and more linear than soundings, so the gate is tighter.
pub const CONTOUR_MAX_DIST_DEG: f64 = 0.005;

/// A sample plus its position in the ingestion order, for deterministic
/// tie-breaking.
#[derive(Debug, Clone, Copy)]
struct IndexedSample {
    lat: f64,
    lng: f64,
    depth_m: f64,
    index: usize,
}

impl RTreeObject for IndexedSample {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lng])
    }
}

impl PointDistance for IndexedSample {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.lat - point[0];
        let dlng = self.lng - point[1];
        dlat * dlat + dlng * dlng
    }
}

/// Static spatial index over an immutable sample set, queried once per
/// lattice point. Distances are planar Euclidean in degree-space, valid for
/// the narrow operating latitude band.
pub struct SampleIndex {
    tree: RTree<IndexedSample>,
    len: usize,
}

impl SampleIndex {
    /// Bulk-load the index from samples in ingestion order.
    pub fn build(samples: &[SourceSample]) -> Self {
        let items = samples
            .iter()
            .enumerate()
            .map(|(index, s)| IndexedSample { lat: s.lat, lng: s.lng, depth_m: s.depth_m, index })
            .collect();
        Self { tree: RTree::bulk_load(items), len: samples.len() }
    }

    #[inline] pub fn len(&self) -> usize { self.len }

    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Nearest sample to the query point as `(distance_deg, depth_m)`.
    /// Equidistant samples resolve to the lowest ingestion index.
    fn nearest(&self, lat: f64, lng: f64) -> Option<(f64, f64)> {
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(&[lat, lng]);
        let (first, dist2) = candidates.next()?;
        let mut best = first;
        for (candidate, d2) in candidates {
            if d2 > dist2 {
                break;
            }
            if candidate.index < best.index {
                best = candidate;
            }
        }
        Some((dist2.sqrt(), best.depth_m))
    }
}

/// One accepted lattice point, in row-major acceptance order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub lat: f64,
    pub lng: f64,
    pub depth_m: f64,
    pub dist_deg: f64,
}

/// Walk the lattice row-major and attribute each in-water point to its
/// nearest sample, gated by `max_dist_deg` (strict inequality; a point
/// whose nearest sample sits exactly on the radius is excluded). Points
/// with no qualifying match are omitted, so the result is sparse.
pub fn assign_grid(
    config: &GridConfig,
    region: &dyn WaterRegion,
    samples: &SampleIndex,
    max_dist_deg: f64,
    verbose: u8,
) -> Vec<Assignment> {
    let mut accepted = Vec::new();
    let mut checked = 0usize;

    for (lat, lng) in config.lattice() {
        checked += 1;
        if verbose > 0 && checked % 10_000 == 0 {
            eprintln!("[assign] processed {} lattice points, {} with depth", checked, accepted.len());
        }
        if !region.contains(lat, lng) {
            continue;
        }
        if let Some((dist_deg, depth_m)) = samples.nearest(lat, lng) {
            if dist_deg < max_dist_deg {
                accepted.push(Assignment { lat, lng, depth_m, dist_deg });
            }
        }
    }

    if verbose > 0 {
        eprintln!("[assign] {} of {} lattice points accepted", accepted.len(), checked);
    }
    accepted
}
