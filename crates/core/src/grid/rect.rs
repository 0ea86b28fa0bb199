//! The rectangle builder: the globe tiled in `grid_interval`-sized lat/long
//! cells, each a closed quadrilateral ring.

use crate::{
    geojson::{Feature, FeatureCollection, Geometry, Position},
    grid::{
        degree_number, display_label, extend_extra_fields, latitude_direction,
        longitude_direction, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
    },
    util::range::DegreeRange,
    GraticuleConfig,
};
use indexmap::IndexMap;
use serde_json::Value;

/// Build the rectangle grid. Cell origins range over `[-90, 90) x [-180,
/// 180)` with no slack: each cell extends one interval north and east of its
/// origin, so the final row/column already reach the grid limits.
pub(super) fn build(config: &GraticuleConfig) -> FeatureCollection {
    let grid = config.grid_interval;
    let mut features = Vec::new();

    for lat in DegreeRange::new(MIN_LAT, MAX_LAT, grid) {
        for lon in DegreeRange::new(MIN_LON, MAX_LON, grid) {
            // Closed 5-point ring: origin, east, north-east, north, origin
            let ring = vec![
                Position::new(lon, lat),
                Position::new(lon + grid, lat),
                Position::new(lon + grid, lat + grid),
                Position::new(lon, lat + grid),
                Position::new(lon, lat),
            ];
            features.push(cell_feature(ring, lat, lon, config));
        }
    }

    FeatureCollection::new(features)
}

fn cell_feature(
    ring: Vec<Position>,
    lat: f64,
    lon: f64,
    config: &GraticuleConfig,
) -> Feature {
    let direction_x = latitude_direction(lat);
    let direction_y = longitude_direction(lon);
    let display_x = display_label(lat, direction_x);
    let display_y = display_label(lon, direction_y);

    let mut properties = IndexMap::new();
    properties.insert("degree_x".to_owned(), degree_number(lat.abs()));
    properties.insert("direction_x".to_owned(), Value::from(direction_x));
    properties.insert("display_x".to_owned(), Value::from(display_x.clone()));
    properties.insert("dd_x".to_owned(), degree_number(lat));
    properties.insert("degree_y".to_owned(), degree_number(lon.abs()));
    properties.insert("direction_y".to_owned(), Value::from(direction_y));
    properties.insert("display_y".to_owned(), Value::from(display_y.clone()));
    properties.insert("dd_y".to_owned(), degree_number(lon));
    properties.insert(
        "display".to_owned(),
        Value::from(format!("{} {}", display_x, display_y)),
    );
    extend_extra_fields(&mut properties, config);
    Feature::new(Geometry::Polygon(vec![ring]), properties)
}
