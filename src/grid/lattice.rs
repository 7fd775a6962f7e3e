use super::GridConfig;

/// Lazy row-major (latitude-major) walk over the lattice point centers.
///
/// Positions are computed from integer indices rather than accumulated, so
/// the walk is drift-free and restartable: two iterators over the same
/// config yield identical sequences. Both endpoints are inclusive when a
/// step lands exactly on the boundary. Sequential id assignment downstream
/// depends on this ordering.
#[derive(Debug, Clone)]
pub struct Lattice {
    config: GridConfig,
    i: usize,
    j: usize,
}

impl Lattice {
    pub(super) fn new(config: GridConfig) -> Self {
        Self { config, i: 0, j: 0 }
    }
}

impl Iterator for Lattice {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        loop {
            let lat = self.config.bounds.south + self.i as f64 * self.config.lat_step;
            if lat > self.config.bounds.north {
                return None;
            }
            let lng = self.config.bounds.west + self.j as f64 * self.config.lng_step;
            if lng > self.config.bounds.east {
                self.i += 1;
                self.j = 0;
                continue;
            }
            self.j += 1;
            return Some((lat, lng));
        }
    }
}
