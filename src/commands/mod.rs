pub mod contours;
pub mod points;

use anyhow::Result;

use crate::cli::{BuildArgs, GridArgs};
use crate::grid::{BoundaryRegion, Bounds, BoundsRegion, GridConfig, WaterRegion};
use crate::source::read_boundary_polygons;

pub(crate) fn grid_config(args: &GridArgs) -> Result<GridConfig> {
    let bounds = Bounds::new(args.south, args.north, args.west, args.east)?;
    GridConfig::new(args.lat_step, args.lng_step, bounds)
}

/// Membership predicate for the run: polygon containment against the
/// boundary document by default, the grid bounding box with `--bbox-only`.
pub(crate) fn water_region(args: &BuildArgs, config: &GridConfig) -> Result<Box<dyn WaterRegion>> {
    if args.bbox_only {
        Ok(Box::new(BoundsRegion::new(config.bounds)))
    } else {
        let polygons = read_boundary_polygons(&args.boundary)?;
        Ok(Box::new(BoundaryRegion::new(polygons)?))
    }
}
