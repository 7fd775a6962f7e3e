use anyhow::Result;

use crate::assign::{assign_grid, SampleIndex, CONTOUR_MAX_DIST_DEG};
use crate::cli::BuildArgs;
use crate::commands::{grid_config, water_region};
use crate::output::{DepthGridDocument, EmptyResultError, GridFormat};
use crate::source::{extract_contour_vertices, read_feature_collection};

pub fn run(cli: &crate::cli::Cli, args: &BuildArgs) -> Result<()> {
    let config = grid_config(&args.grid)?;
    let max_dist = args.max_dist.unwrap_or(CONTOUR_MAX_DIST_DEG);

    let features = read_feature_collection(&args.bathymetry)?;
    if cli.verbose > 0 {
        eprintln!("[contours] loaded {} features from {}", features.len(), args.bathymetry.display());
    }

    let samples = extract_contour_vertices(&features);
    if cli.verbose > 0 {
        eprintln!("[contours] flattened {} features into {} contour vertices", features.len(), samples.len());
    }
    if samples.is_empty() {
        return Err(EmptyResultError::NoSamples { loaded: features.len() }.into());
    }

    let region = water_region(args, &config)?;
    let index = SampleIndex::build(&samples);
    let assignments = assign_grid(&config, region.as_ref(), &index, max_dist, cli.verbose);

    let document = DepthGridDocument::assemble(
        &args.bathymetry,
        GridFormat::ContourLines,
        &config,
        &assignments,
        samples.len(),
        max_dist,
    )?;
    document.write(&args.output, args.force)?;

    let stats = &document.depth_statistics;
    println!(
        "Depth grid: {} points, {}m - {}m (mean {}m) -> {}",
        stats.count, stats.min, stats.max, stats.mean, args.output.display()
    );
    Ok(())
}
