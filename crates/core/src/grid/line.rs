//! The line builder: one densified LineString per parallel and per meridian.

use crate::{
    geojson::{Feature, FeatureCollection, Geometry, Position},
    grid::{
        degree_number, display_label, extend_extra_fields, latitude_direction,
        meridian_direction, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, RANGE_SLACK,
    },
    util::range::DegreeRange,
    GraticuleConfig,
};
use indexmap::IndexMap;
use serde_json::Value;

/// Build the line graticule: parallels south to north, then meridians west to
/// east. Each line is sampled every `step_interval` degrees so that
/// reprojection renders it as a smooth curve.
pub(super) fn build(config: &GraticuleConfig) -> FeatureCollection {
    let grid = config.grid_interval;
    let step = config.step_interval;
    let mut features = Vec::new();

    // Parallels: constant latitude, sampled across longitude
    for lat in DegreeRange::new(MIN_LAT, MAX_LAT + RANGE_SLACK, grid) {
        let coordinates = DegreeRange::new(MIN_LON, MAX_LON + RANGE_SLACK, step)
            .into_iter()
            .map(|lon| Position::new(lon, lat))
            .collect();
        features.push(line_feature(
            coordinates,
            lat,
            latitude_direction(lat),
            config,
        ));
    }

    // Meridians: constant longitude, sampled across latitude
    for lon in DegreeRange::new(MIN_LON, MAX_LON + RANGE_SLACK, grid) {
        let coordinates = DegreeRange::new(MIN_LAT, MAX_LAT + RANGE_SLACK, step)
            .into_iter()
            .map(|lat| Position::new(lon, lat))
            .collect();
        features.push(line_feature(
            coordinates,
            lon,
            meridian_direction(lon),
            config,
        ));
    }

    FeatureCollection::new(features)
}

fn line_feature(
    coordinates: Vec<Position>,
    dd: f64,
    direction: &'static str,
    config: &GraticuleConfig,
) -> Feature {
    let mut properties = IndexMap::new();
    properties.insert("degrees".to_owned(), degree_number(dd.abs()));
    properties.insert("direction".to_owned(), Value::from(direction));
    properties.insert("display".to_owned(), Value::from(display_label(dd, direction)));
    properties.insert("dd".to_owned(), degree_number(dd));
    extend_extra_fields(&mut properties, config);
    Feature::new(Geometry::LineString(coordinates), properties)
}
