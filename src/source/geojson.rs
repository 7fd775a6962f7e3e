use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

/// Read a GeoJSON FeatureCollection, returning its features.
pub fn read_feature_collection(path: &Path) -> Result<Vec<Value>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    let mut value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON: {}", path.display()))?;

    match value.get_mut("features").map(Value::take) {
        Some(Value::Array(features)) => Ok(features),
        _ => bail!("Not a GeoJSON FeatureCollection: {}", path.display()),
    }
}

/// Read the polygon geometries out of a water-boundary GeoJSON document.
/// Non-polygon features are skipped; the caller decides whether an empty
/// result is acceptable.
pub fn read_boundary_polygons(path: &Path) -> Result<Vec<MultiPolygon<f64>>> {
    let features = read_feature_collection(path)?;
    let mut polygons = Vec::new();

    for feature in &features {
        let Some(geometry) = feature.get("geometry") else { continue };
        let Some(coords) = geometry.get("coordinates").and_then(Value::as_array) else {
            continue;
        };
        match geometry.get("type").and_then(Value::as_str) {
            Some("Polygon") => polygons.push(MultiPolygon(vec![parse_polygon_coords(coords)?])),
            Some("MultiPolygon") => polygons.push(parse_multipolygon_coords(coords)?),
            _ => {}
        }
    }

    Ok(polygons)
}

/// Parse GeoJSON Polygon coordinates (array of rings) into a geo::Polygon.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let exterior = rings
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow::anyhow!("Invalid Polygon: missing exterior ring"))?;
    let exterior = parse_ring_coords(exterior)?;

    let mut interiors = Vec::new();
    for ring in rings.iter().skip(1) {
        if let Some(ring) = ring.as_array() {
            interiors.push(parse_ring_coords(ring)?);
        }
    }
    Ok(Polygon::new(exterior, interiors))
}

/// Parse GeoJSON MultiPolygon coordinates into a geo::MultiPolygon.
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    let mut polygons = Vec::new();
    for polygon_coords in coords {
        if let Some(rings) = polygon_coords.as_array() {
            polygons.push(parse_polygon_coords(rings)?);
        }
    }
    Ok(MultiPolygon(polygons))
}

/// Parse a ring from GeoJSON `[[lng, lat], ...]` coordinates.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());
    for pair in coords {
        if let Some((lng, lat)) = coord_pair(pair) {
            points.push(Coord { x: lng, y: lat });
        }
    }
    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }
    Ok(LineString(points))
}

/// Extract a `(lng, lat)` pair from a GeoJSON coordinate position.
pub(crate) fn coord_pair(value: &Value) -> Option<(f64, f64)> {
    let arr = value.as_array()?;
    if arr.len() < 2 {
        return None;
    }
    Some((arr[0].as_f64()?, arr[1].as_f64()?))
}

/// Read a depth value in feet from a property. Upstream schemas carry these
/// as numbers or numeric strings.
pub(crate) fn depth_feet(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
