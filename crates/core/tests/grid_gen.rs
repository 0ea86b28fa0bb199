use assert_approx_eq::assert_approx_eq;
use graticule::{
    parse_extra_fields, Feature, FeatureCollection, Geometry, Graticule,
    GraticuleConfig, GridType, Position,
};
use serde_json::Value;

fn generate(
    grid_interval: f64,
    step_interval: f64,
    grid_type: GridType,
) -> Graticule {
    Graticule::generate(GraticuleConfig {
        grid_interval,
        step_interval,
        grid_type,
        ..Default::default()
    })
    .unwrap()
}

fn line_coordinates(feature: &Feature) -> &[Position] {
    match feature.geometry() {
        Geometry::LineString(coordinates) => coordinates,
        other => panic!("expected a LineString, got {:?}", other),
    }
}

fn polygon_ring(feature: &Feature) -> &[Position] {
    match feature.geometry() {
        Geometry::Polygon(rings) => {
            assert_eq!(rings.len(), 1, "expected a single ring");
            &rings[0]
        }
        other => panic!("expected a Polygon, got {:?}", other),
    }
}

#[test]
fn test_line_counts() {
    // ceil(181/10) parallels + ceil(361/10) meridians
    let graticule = generate(10.0, 5.0, GridType::Line);
    assert_eq!(graticule.lines().features().len(), 19 + 37);
    assert!(graticule.polygons().is_none());

    let graticule = generate(7.0, 5.0, GridType::Line);
    assert_eq!(graticule.lines().features().len(), 26 + 52);
}

#[test]
fn test_line_order_and_extent() {
    let graticule = generate(10.0, 5.0, GridType::Line);
    let features = graticule.lines().features();

    // Parallels come first, south to north
    let first = line_coordinates(&features[0]);
    assert_approx_eq!(first[0].lat(), -90.0);
    assert_approx_eq!(first[0].lon(), -180.0);
    let last_parallel = line_coordinates(&features[18]);
    assert_approx_eq!(last_parallel[0].lat(), 90.0);

    // Then meridians, west to east
    let first_meridian = line_coordinates(&features[19]);
    assert_approx_eq!(first_meridian[0].lon(), -180.0);
    let last_meridian = line_coordinates(&features[55]);
    assert_approx_eq!(last_meridian[0].lon(), 180.0);

    // Every line is densified into at least two points
    for feature in features {
        assert!(line_coordinates(feature).len() >= 2);
    }
}

#[test]
fn test_equator_line() {
    let graticule = generate(10.0, 5.0, GridType::Line);
    // Parallels run south to north, so the equator is the 10th
    let equator = &graticule.lines().features()[9];

    let coordinates = line_coordinates(equator);
    assert_eq!(coordinates.len(), 73); // -180 to 180 in steps of 5
    assert_approx_eq!(coordinates[0].lon(), -180.0);
    assert_approx_eq!(coordinates[72].lon(), 180.0);
    for (i, position) in coordinates.iter().enumerate() {
        assert_approx_eq!(position.lon(), -180.0 + i as f64 * 5.0);
        assert_approx_eq!(position.lat(), 0.0);
    }

    let properties = equator.properties();
    assert_eq!(properties["degrees"], Value::from(0));
    assert_eq!(properties["direction"], Value::from("N"));
    assert_eq!(properties["display"], Value::from("0 N"));
    assert_eq!(properties["dd"], Value::from(0));
}

#[test]
fn test_direction_labels_sign_consistent() {
    let graticule = generate(10.0, 5.0, GridType::Line);
    let features = graticule.lines().features();

    for feature in &features[..19] {
        let dd = feature.properties()["dd"].as_f64().unwrap();
        let expected = if dd >= 0.0 { "N" } else { "S" };
        assert_eq!(feature.properties()["direction"], Value::from(expected));
    }
    // Meridian labels follow the reference datasets' (inverted) convention
    for feature in &features[19..] {
        let dd = feature.properties()["dd"].as_f64().unwrap();
        let expected = if dd >= 0.0 { "W" } else { "E" };
        assert_eq!(feature.properties()["direction"], Value::from(expected));
    }
}

#[test]
fn test_rectangle_cells() {
    let graticule = generate(90.0, 5.0, GridType::Rectangle);
    let cells = graticule.polygons().unwrap().features();

    // (180/90) x (360/90) cells covering the globe
    assert_eq!(cells.len(), 8);

    // Every ring is a closed 5-point ring
    for cell in cells {
        let ring = polygon_ring(cell);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
    }

    // South-west cell
    let ring = polygon_ring(&cells[0]);
    assert_eq!(ring[0], Position::new(-180.0, -90.0));
    assert_eq!(ring[1], Position::new(-90.0, -90.0));
    assert_eq!(ring[2], Position::new(-90.0, 0.0));
    assert_eq!(ring[3], Position::new(-180.0, 0.0));

    let properties = cells[0].properties();
    assert_eq!(properties["degree_x"], Value::from(90));
    assert_eq!(properties["direction_x"], Value::from("S"));
    assert_eq!(properties["display_x"], Value::from("90 S"));
    assert_eq!(properties["dd_x"], Value::from(-90));
    assert_eq!(properties["degree_y"], Value::from(180));
    assert_eq!(properties["direction_y"], Value::from("W"));
    assert_eq!(properties["display_y"], Value::from("180 W"));
    assert_eq!(properties["dd_y"], Value::from(-180));
    assert_eq!(properties["display"], Value::from("90 S 180 W"));
}

#[test]
fn test_rectangle_shared_edges() {
    let graticule = generate(45.0, 5.0, GridType::Rectangle);
    let cells = graticule.polygons().unwrap().features();
    assert_eq!(cells.len(), 4 * 8);

    // Cells iterate longitude fastest, so a cell's eastward neighbor is the
    // next feature (within a row). They must share an edge exactly.
    let columns = 8;
    for row in 0..4 {
        for col in 0..columns - 1 {
            let cell = polygon_ring(&cells[row * columns + col]);
            let neighbor = polygon_ring(&cells[row * columns + col + 1]);
            assert_eq!(cell[1], neighbor[0]);
            assert_eq!(cell[2], neighbor[3]);
        }
    }
}

#[test]
fn test_hex_tiling() {
    let spacing = 90.0;
    let xvertex_hi = 0.577350269189626 * spacing;
    let graticule = generate(spacing, 5.0, GridType::Hex);
    let cells = graticule.polygons().unwrap().features();

    // 3 columns of 5/4/5 hexagons over the padded extent
    assert_eq!(cells.len(), 14);

    // Every ring is closed, 7 points, and carries no properties
    for cell in cells {
        let ring = polygon_ring(cell);
        assert_eq!(ring.len(), 7);
        assert_eq!(ring[0], ring[6]);
        assert!(cell.properties().is_empty());
    }

    // Recover each hexagon's center from its right vertex (ring[0] is at
    // (center_lon, center_lat + xvertex_hi))
    let centers: Vec<(f64, f64)> = cells
        .iter()
        .map(|cell| {
            let right = polygon_ring(cell)[0];
            (right.lon(), right.lat() - xvertex_hi)
        })
        .collect();

    // Within a column, adjacent centers are exactly one spacing apart
    for pair in centers[..5].windows(2) {
        assert_approx_eq!(pair[1].0 - pair[0].0, spacing);
        assert_approx_eq!(pair[1].1, pair[0].1);
    }

    // Adjacent columns are offset by exactly half a spacing
    let col0_first = centers[0];
    let col1_first = centers[5];
    assert_approx_eq!(col1_first.0 - col0_first.0, spacing / 2.0);
}

#[test]
fn test_hex_geometry() {
    let spacing = 90.0;
    let lo = 0.288675134594813 * spacing;
    let hi = 0.577350269189626 * spacing;
    let graticule = generate(spacing, 5.0, GridType::Hex);
    let cells = graticule.polygons().unwrap().features();

    // First hexagon: column 0 starts half a spacing into the padded extent
    let center_lat = (-90.0 - spacing / 2.0) + hi;
    let center_lon = -180.0;
    let ring = polygon_ring(&cells[0]);
    assert_eq!(ring[0], Position::new(center_lon, center_lat + hi));
    assert_eq!(ring[1], Position::new(center_lon + spacing / 2.0, center_lat + lo));
    assert_eq!(ring[2], Position::new(center_lon + spacing / 2.0, center_lat - lo));
    assert_eq!(ring[3], Position::new(center_lon, center_lat - hi));
    assert_eq!(ring[4], Position::new(center_lon - spacing / 2.0, center_lat - lo));
    assert_eq!(ring[5], Position::new(center_lon - spacing / 2.0, center_lat + lo));
}

#[test]
fn test_extra_fields_appended() {
    let config = GraticuleConfig {
        grid_interval: 45.0,
        step_interval: 15.0,
        grid_type: GridType::Rectangle,
        extra_fields: parse_extra_fields(r#""source": "test", "scalerank": 2"#)
            .unwrap(),
    };
    let graticule = Graticule::generate(config).unwrap();

    // Derived attributes come first, extra fields after, in order
    for feature in graticule.lines().features() {
        let keys: Vec<&str> =
            feature.properties().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["degrees", "direction", "display", "dd", "source", "scalerank"]
        );
        assert_eq!(feature.properties()["source"], Value::from("test"));
    }
    for feature in graticule.polygons().unwrap().features() {
        assert_eq!(feature.properties()["scalerank"], Value::from(2));
    }
}

#[test]
fn test_json_round_trip() {
    let config = GraticuleConfig {
        grid_interval: 45.0,
        step_interval: 15.0,
        grid_type: GridType::Rectangle,
        extra_fields: parse_extra_fields(r#""source": "test""#).unwrap(),
    };
    let graticule = Graticule::generate(config).unwrap();

    for collection in [
        graticule.lines(),
        graticule.polygons().unwrap(),
    ] {
        let json = collection.to_json();
        let parsed = FeatureCollection::from_json(&json).unwrap();
        assert_eq!(&parsed, collection);

        // Pretty output is the same document, just formatted
        let pretty = collection.to_json_pretty();
        assert_eq!(&FeatureCollection::from_json(&pretty).unwrap(), collection);
    }
}

#[test]
fn test_json_shape() {
    let graticule = generate(90.0, 45.0, GridType::Rectangle);
    let lines: Value = serde_json::from_str(&graticule.lines().to_json()).unwrap();
    assert_eq!(lines["type"], Value::from("FeatureCollection"));
    let feature = &lines["features"][0];
    assert_eq!(feature["type"], Value::from("Feature"));
    assert_eq!(feature["geometry"]["type"], Value::from("LineString"));
    assert_eq!(feature["geometry"]["coordinates"][0][0], Value::from(-180.0));
    assert_eq!(feature["geometry"]["coordinates"][0][1], Value::from(-90.0));

    let polygons: Value =
        serde_json::from_str(&graticule.polygons().unwrap().to_json()).unwrap();
    let feature = &polygons["features"][0];
    assert_eq!(feature["geometry"]["type"], Value::from("Polygon"));
}
