use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use bathygrid::cli::{BuildArgs, Cli, Commands, GridArgs};
use bathygrid::commands::points;
use bathygrid::{
    assign_grid, extract_soundings, BoundaryRegion, Bounds, BoundsRegion, DepthGridDocument,
    EmptyResultError, GridConfig, GridFormat, SampleIndex, POINT_MAX_DIST_DEG,
};

fn champlain_corner() -> GridConfig {
    let bounds = Bounds::new(43.53, 43.55, -73.30, -73.28).unwrap();
    GridConfig::new(0.0018, 0.0024, bounds).unwrap()
}

fn sounding(lng: f64, lat: f64, depth_ft: f64) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [lng, lat] },
        "properties": { "DEPTH_FT": depth_ft },
    })
}

/// Rectangle boundary covering the whole corner grid, as a GeoJSON value.
fn boundary_value() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-73.31, 43.52], [-73.27, 43.52], [-73.27, 43.56],
                    [-73.31, 43.56], [-73.31, 43.52]
                ]]
            },
            "properties": {}
        }]
    })
}

fn boundary_region() -> BoundaryRegion {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.geojson");
    fs::write(&path, serde_json::to_vec(&boundary_value()).unwrap()).unwrap();
    let polygons = bathygrid::read_boundary_polygons(&path).unwrap();
    BoundaryRegion::new(polygons).unwrap()
}

#[test]
fn single_sounding_end_to_end() {
    let config = champlain_corner();
    let features = vec![sounding(-73.29, 43.54, -10.0)];

    let samples = extract_soundings(&features);
    assert_eq!(samples.len(), 1);
    assert!((samples[0].depth_m - 3.048).abs() < 1e-9);

    let region = boundary_region();
    let index = SampleIndex::build(&samples);
    let assignments = assign_grid(&config, &region, &index, POINT_MAX_DIST_DEG, 0);
    assert!(!assignments.is_empty());

    // independent acceptance count from the row-major lattice definition
    let mut expected = 0;
    let mut i = 0;
    loop {
        let lat = 43.53 + i as f64 * 0.0018;
        if lat > 43.55 {
            break;
        }
        let mut j = 0;
        loop {
            let lng = -73.30 + j as f64 * 0.0024;
            if lng > -73.28 {
                break;
            }
            let dlat: f64 = lat - 43.54;
            let dlng: f64 = lng - (-73.29);
            if (dlat * dlat + dlng * dlng).sqrt() < POINT_MAX_DIST_DEG {
                expected += 1;
            }
            j += 1;
        }
        i += 1;
    }
    assert_eq!(assignments.len(), expected);

    let doc = DepthGridDocument::assemble(
        Path::new("champlain.geojson"),
        GridFormat::PointCloud,
        &config,
        &assignments,
        samples.len(),
        POINT_MAX_DIST_DEG,
    )
    .unwrap();

    // one sounding: every accepted cell carries its depth
    let stats = doc.depth_statistics;
    assert_eq!(stats.min, 3.05);
    assert_eq!(stats.max, 3.05);
    assert_eq!(stats.mean, 3.05);
    assert_eq!(stats.count, doc.depth_grid.len());
    assert_eq!(stats.count, assignments.len());

    // the lattice point nearest the sounding
    let nearest = doc
        .depth_grid
        .values()
        .find(|cell| {
            (cell["lat"].as_f64().unwrap() - 43.5408).abs() < 1e-9
                && (cell["lng"].as_f64().unwrap() + 73.2904).abs() < 1e-9
        })
        .expect("nearest lattice point missing from grid");
    assert_eq!(nearest["depth"], 3.05);
    assert_eq!(nearest["nearest_dist"], 99.0); // sqrt(0.0008² + 0.0004²) ≈ 99 m

    // metadata contract
    assert_eq!(doc.metadata.format, "point_cloud");
    assert_eq!(doc.metadata.units, "meters");
    assert_eq!(doc.metadata.resolution_m, 200);
    assert_eq!(doc.metadata.grid_points, doc.depth_grid.len());
}

#[test]
fn reruns_serialize_byte_identically() {
    let config = champlain_corner();
    let features = vec![
        sounding(-73.29, 43.54, -10.0),
        sounding(-73.285, 43.545, -25.0),
        sounding(-73.295, 43.535, -18.0),
    ];

    let build = || {
        let samples = extract_soundings(&features);
        let index = SampleIndex::build(&samples);
        let region = BoundsRegion::new(config.bounds);
        let assignments = assign_grid(&config, &region, &index, POINT_MAX_DIST_DEG, 0);
        let doc = DepthGridDocument::assemble(
            Path::new("champlain.geojson"),
            GridFormat::PointCloud,
            &config,
            &assignments,
            samples.len(),
            POINT_MAX_DIST_DEG,
        )
        .unwrap();
        serde_json::to_vec_pretty(&doc).unwrap()
    };

    assert_eq!(build(), build());
}

#[test]
fn bbox_and_covering_polygon_agree() {
    let config = champlain_corner();
    let samples = extract_soundings(&[sounding(-73.29, 43.54, -10.0)]);
    let index = SampleIndex::build(&samples);

    let from_polygon = assign_grid(&config, &boundary_region(), &index, POINT_MAX_DIST_DEG, 0);
    let from_bbox = assign_grid(
        &config,
        &BoundsRegion::new(config.bounds),
        &index,
        POINT_MAX_DIST_DEG,
        0,
    );
    assert_eq!(from_polygon, from_bbox);
}

#[test]
fn polygon_region_is_the_membership_default() {
    // region that excludes the grid's eastern half
    let config = champlain_corner();
    let west_half = json!([[
        [-73.31, 43.52], [-73.29, 43.52], [-73.29, 43.56],
        [-73.31, 43.56], [-73.31, 43.52]
    ]]);
    let polygons = vec![geo_polygon(&west_half)];
    let region = BoundaryRegion::new(polygons).unwrap();

    let samples = extract_soundings(&[sounding(-73.29, 43.54, -10.0)]);
    let index = SampleIndex::build(&samples);
    let assignments = assign_grid(&config, &region, &index, POINT_MAX_DIST_DEG, 0);

    assert!(!assignments.is_empty());
    assert!(assignments.iter().all(|a| a.lng < -73.29));
}

fn geo_polygon(rings: &Value) -> geo::MultiPolygon<f64> {
    let exterior: Vec<geo::Coord<f64>> = rings[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| geo::Coord { x: pair[0].as_f64().unwrap(), y: pair[1].as_f64().unwrap() })
        .collect();
    geo::MultiPolygon(vec![geo::Polygon::new(geo::LineString(exterior), vec![])])
}

#[test]
fn zero_feature_input_fails_without_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let bathymetry = dir.path().join("empty.geojson");
    let boundary = dir.path().join("boundary.geojson");
    let output = dir.path().join("grid.json");
    fs::write(&bathymetry, br#"{ "type": "FeatureCollection", "features": [] }"#).unwrap();
    fs::write(&boundary, serde_json::to_vec(&boundary_value()).unwrap()).unwrap();

    let args = BuildArgs {
        bathymetry,
        boundary,
        output: output.clone(),
        force: false,
        bbox_only: false,
        max_dist: None,
        grid: GridArgs {
            lat_step: 0.0018,
            lng_step: 0.0024,
            south: 43.53,
            north: 43.55,
            west: -73.30,
            east: -73.28,
        },
    };
    let cli = Cli { verbose: 0, command: Commands::Points(args.clone()) };

    let err = points::run(&cli, &args).unwrap_err();
    assert_eq!(
        err.downcast_ref::<EmptyResultError>(),
        Some(&EmptyResultError::NoSamples { loaded: 0 })
    );
    assert!(!output.exists());
}

#[test]
fn points_command_writes_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let bathymetry = dir.path().join("champlain.geojson");
    let boundary = dir.path().join("boundary.geojson");
    let output = dir.path().join("grid.json");

    let collection = json!({
        "type": "FeatureCollection",
        "features": [sounding(-73.29, 43.54, -10.0), sounding(-73.285, 43.545, -40.0)],
    });
    fs::write(&bathymetry, serde_json::to_vec(&collection).unwrap()).unwrap();
    fs::write(&boundary, serde_json::to_vec(&boundary_value()).unwrap()).unwrap();

    let args = BuildArgs {
        bathymetry,
        boundary,
        output: output.clone(),
        force: false,
        bbox_only: false,
        max_dist: None,
        grid: GridArgs {
            lat_step: 0.0018,
            lng_step: 0.0024,
            south: 43.53,
            north: 43.55,
            west: -73.30,
            east: -73.28,
        },
    };
    let cli = Cli { verbose: 0, command: Commands::Points(args.clone()) };
    points::run(&cli, &args).unwrap();

    let artifact: Value = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    assert_eq!(artifact["metadata"]["format"], "point_cloud");
    assert_eq!(artifact["metadata"]["units"], "meters");
    let grid = artifact["depth_grid"].as_object().unwrap();
    assert!(!grid.is_empty());
    assert_eq!(
        artifact["depth_statistics"]["count"].as_u64().unwrap() as usize,
        grid.len()
    );
    assert!(grid.contains_key("g0"));
}
