use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Depth-grid builder CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "bathygrid", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pipeline selection is an explicit operator decision, not inferred from
/// the data's geometry type.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a depth grid from point-cloud soundings
    Points(BuildArgs),

    /// Build a depth grid from depth-contour (isobath) lines
    Contours(BuildArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Input bathymetry GeoJSON file
    #[arg(value_hint = ValueHint::FilePath)]
    pub bathymetry: PathBuf,

    /// Water-boundary GeoJSON file
    #[arg(value_hint = ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Output depth-grid JSON file ("-" is rejected)
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,

    /// Test lattice points against the grid bounding box instead of the
    /// boundary polygons (legacy approximation)
    #[arg(long)]
    pub bbox_only: bool,

    /// Maximum sample distance in degrees (default: 0.01 for points,
    /// 0.005 for contours)
    #[arg(long)]
    pub max_dist: Option<f64>,

    #[command(flatten)]
    pub grid: GridArgs,
}

/// Lattice definition. Defaults are the published Lake Champlain grid and
/// must match the downstream route planner's addressing.
#[derive(Args, Debug, Clone, Copy)]
pub struct GridArgs {
    /// Latitude step in degrees (~200 m)
    #[arg(long, default_value_t = 0.0018, allow_hyphen_values = true)]
    pub lat_step: f64,

    /// Longitude step in degrees (~200 m)
    #[arg(long, default_value_t = 0.0024, allow_hyphen_values = true)]
    pub lng_step: f64,

    /// Southern grid bound in degrees
    #[arg(long, default_value_t = 43.53, allow_hyphen_values = true)]
    pub south: f64,

    /// Northern grid bound in degrees
    #[arg(long, default_value_t = 45.09, allow_hyphen_values = true)]
    pub north: f64,

    /// Western grid bound in degrees
    #[arg(long, default_value_t = -73.52, allow_hyphen_values = true)]
    pub west: f64,

    /// Eastern grid bound in degrees
    #[arg(long, default_value_t = -73.07, allow_hyphen_values = true)]
    pub east: f64,
}
