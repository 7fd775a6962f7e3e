use serde_json::Value;

use super::geojson::{coord_pair, depth_feet};
use super::{SourceSample, FEET_TO_METERS};

/// Depth label carried by an isobath feature.
const CONTOUR_PROPERTY: &str = "CONTOUR";

/// Flatten depth-contour line features into vertex-level samples. A contour
/// line is an isobath, so its single depth label applies to every vertex.
/// Lines missing the label, or whose geometry is not a simple LineString,
/// are skipped entirely. No navigability filter here: contour surveys are
/// already cut at the safe-depth threshold.
pub fn extract_contour_vertices(features: &[Value]) -> Vec<SourceSample> {
    let mut samples = Vec::new();

    for feature in features {
        let Some(raw) = feature
            .get("properties")
            .and_then(|props| props.get(CONTOUR_PROPERTY))
            .and_then(depth_feet)
        else {
            continue;
        };

        let Some(geometry) = feature.get("geometry") else { continue };
        if geometry.get("type").and_then(Value::as_str) != Some("LineString") {
            continue;
        }
        let Some(coords) = geometry.get("coordinates").and_then(Value::as_array) else {
            continue;
        };

        let depth_m = raw.abs() * FEET_TO_METERS;
        for position in coords {
            if let Some((lng, lat)) = coord_pair(position) {
                samples.push(SourceSample { lat, lng, depth_m });
            }
        }
    }

    samples
}
