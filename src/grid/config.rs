use anyhow::{bail, Result};
use serde::Serialize;

/// Geographic extent of the grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    /// Construct validated bounds (`south < north`, `west < east`).
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Result<Self> {
        if !(south < north) {
            bail!("invalid bounds: south ({south}) must be less than north ({north})");
        }
        if !(west < east) {
            bail!("invalid bounds: west ({west}) must be less than east ({east})");
        }
        Ok(Self { south, north, west, east })
    }

    /// Inclusive containment test against the rectangular extent.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.south <= lat && lat <= self.north && self.west <= lng && lng <= self.east
    }
}

/// Lattice definition over a bounding box. Cell `(i, j)` is centered at
/// `(south + i * lat_step, west + j * lng_step)`.
///
/// This value is threaded explicitly through every component call; the step
/// sizes are a cross-component contract with the downstream route planner,
/// so changing them invalidates previously published grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub lat_step: f64,
    pub lng_step: f64,
    pub bounds: Bounds,
}

impl GridConfig {
    /// Construct a validated grid configuration (steps must be positive).
    pub fn new(lat_step: f64, lng_step: f64, bounds: Bounds) -> Result<Self> {
        if !(lat_step > 0.0) || !(lng_step > 0.0) {
            bail!("invalid grid steps: lat_step={lat_step}, lng_step={lng_step} (must be > 0)");
        }
        Ok(Self { lat_step, lng_step, bounds })
    }

    /// Nominal cell resolution in meters, derived from the latitude step.
    #[inline]
    pub fn resolution_m(&self) -> f64 {
        (self.lat_step * super::DEG_TO_METERS).round()
    }

    /// Row-major enumeration of lattice point centers.
    #[inline]
    pub fn lattice(&self) -> super::Lattice {
        super::Lattice::new(*self)
    }
}
