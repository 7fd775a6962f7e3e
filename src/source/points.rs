use serde_json::Value;

use super::geojson::{coord_pair, depth_feet};
use super::{SourceSample, FEET_TO_METERS};

/// Minimum navigable depth in meters (~3 ft). Shallower soundings are
/// shoreline/elevation artifacts, not navigable water; admitting them would
/// bias nearest-neighbor assignment toward false shallow readings near shore.
pub const MIN_NAVIGABLE_DEPTH_M: f64 = 0.9;

/// Accepted depth property names, tried in order. Aliasing papers over
/// inconsistent upstream survey schemas.
const DEPTH_ALIASES: [&str; 3] = ["DEPTH_FT", "depth_ft", "DEPTH"];

/// Normalize point-cloud sounding features into samples, dropping
/// non-navigable ones. Features without a usable depth property or point
/// coordinates are silently excluded; only the aggregate count surfaces.
pub fn extract_soundings(features: &[Value]) -> Vec<SourceSample> {
    features.iter().filter_map(sounding_sample).collect()
}

fn sounding_sample(feature: &Value) -> Option<SourceSample> {
    let props = feature.get("properties")?;
    let raw = DEPTH_ALIASES.iter().find_map(|key| depth_feet(props.get(*key)?))?;

    let geometry = feature.get("geometry")?;
    if let Some(ty) = geometry.get("type").and_then(Value::as_str) {
        if ty != "Point" {
            return None;
        }
    }
    let (lng, lat) = coord_pair(geometry.get("coordinates")?)?;

    // Negative feet (below datum) to positive meters
    let depth_m = raw.abs() * FEET_TO_METERS;
    if depth_m < MIN_NAVIGABLE_DEPTH_M {
        return None;
    }
    Some(SourceSample { lat, lng, depth_m })
}
