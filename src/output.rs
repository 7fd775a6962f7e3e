use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::assign::Assignment;
use crate::common::{assert_not_stdout, finalize_write, open_for_write};
use crate::grid::{Bounds, GridConfig, DEG_TO_METERS};

/// Terminal empty-result failure: no artifact is written and the process
/// exits non-zero. The two variants let an operator tell
/// filtering-too-aggressive from threshold-too-tight.
#[derive(Debug, Error, PartialEq)]
pub enum EmptyResultError {
    #[error("no qualifying depth samples after filtering ({loaded} features loaded)")]
    NoSamples { loaded: usize },
    #[error("no lattice cell within {max_dist_deg}° of any of the {samples} samples")]
    NoCells { samples: usize, max_dist_deg: f64 },
}

/// Which ingestion pipeline produced the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    PointCloud,
    ContourLines,
}

impl GridFormat {
    fn as_str(self) -> &'static str {
        match self {
            GridFormat::PointCloud => "point_cloud",
            GridFormat::ContourLines => "contour_lines",
        }
    }
}

/// One accepted lattice cell, as persisted. Field names and rounding are
/// part of the downstream compatibility contract: lat/lng to 6 decimals,
/// depth to 2, nearest distance to whole meters. Contour grids omit
/// `nearest_dist`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub lat: f64,
    pub lng: f64,
    pub depth: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_dist: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub source: String,
    pub format: &'static str,
    pub resolution_m: u32,
    pub grid_points: usize,
    pub bounds: Bounds,
    pub units: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_note: Option<&'static str>,
}

/// The persisted depth-grid artifact. Built once, in memory, and written
/// atomically; consumers treat it as immutable and key lookups by the
/// `depth_grid` cell coordinates rather than by id.
#[derive(Debug, Clone, Serialize)]
pub struct DepthGridDocument {
    pub metadata: Metadata,
    pub depth_grid: Map<String, Value>,
    pub depth_statistics: DepthStatistics,
}

impl DepthGridDocument {
    /// Aggregate accepted assignments into the output document. Ids are
    /// assigned sequentially in the given (row-major) order, so reruns on
    /// identical input produce identical documents.
    pub fn assemble(
        source: &Path,
        format: GridFormat,
        config: &GridConfig,
        assignments: &[Assignment],
        sample_count: usize,
        max_dist_deg: f64,
    ) -> Result<Self> {
        if assignments.is_empty() {
            return Err(EmptyResultError::NoCells { samples: sample_count, max_dist_deg }.into());
        }

        let mut depth_grid = Map::new();
        let mut depths = Vec::with_capacity(assignments.len());

        for (id, assignment) in assignments.iter().enumerate() {
            let depth = round_to(assignment.depth_m, 2);
            let cell = GridCell {
                lat: round_to(assignment.lat, 6),
                lng: round_to(assignment.lng, 6),
                depth,
                nearest_dist: match format {
                    GridFormat::PointCloud => {
                        Some((assignment.dist_deg * DEG_TO_METERS).round())
                    }
                    GridFormat::ContourLines => None,
                },
            };
            depth_grid.insert(format!("g{id}"), serde_json::to_value(cell)?);
            depths.push(depth);
        }

        let min = depths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = depths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = depths.iter().sum::<f64>() / depths.len() as f64;

        Ok(Self {
            metadata: Metadata {
                source: source.display().to_string(),
                format: format.as_str(),
                resolution_m: config.resolution_m() as u32,
                grid_points: assignments.len(),
                bounds: config.bounds,
                units: "meters",
                coverage_note: match format {
                    GridFormat::PointCloud => Some("Only areas with nearby bathymetric data"),
                    GridFormat::ContourLines => None,
                },
            },
            depth_grid,
            depth_statistics: DepthStatistics {
                min: round_to(min, 2),
                max: round_to(max, 2),
                mean: round_to(mean, 2),
                count: depths.len(),
            },
        })
    }

    /// Serialize the whole document and write it atomically (temp file +
    /// rename); no partial artifact is ever visible at `path`.
    pub fn write(&self, path: &Path, force: bool) -> Result<()> {
        assert_not_stdout(path)?;
        let mut sink = open_for_write(path, force)?;
        serde_json::to_writer_pretty(&mut sink, self)
            .with_context(|| format!("Failed to serialize depth grid to {}", path.display()))?;
        finalize_write(sink)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
