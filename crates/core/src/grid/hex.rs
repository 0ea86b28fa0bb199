//! The hex builder: a brick-offset tiling of pointy-top regular hexagons
//! covering the grid extent, padded by half an interval on each side so no
//! gaps appear at the poles or the antimeridian.

use crate::{
    geojson::{Feature, FeatureCollection, Geometry, Position},
    grid::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON},
    util::range::DegreeRange,
    GraticuleConfig,
};
use indexmap::IndexMap;

/// Short horizontal half-width of a pointy-top unit hexagon: `1 / (2 * √3)`
const XVERTEX_LO: f64 = 0.288675134594813;
/// Long horizontal half-width of a pointy-top unit hexagon: `1 / √3`
const XVERTEX_HI: f64 = 0.577350269189626;

/// Build the hex grid. Hexagons have vertical spacing equal to
/// `grid_interval`; the horizontal column spacing is fixed relative to that
/// by unit-hexagon trigonometry to preserve regularity. Columns alternate
/// vertical phase by half a spacing, producing the standard brick-offset
/// tiling. Hex cells carry an empty properties object, not even extra
/// fields: cell identity is positional, not attributed.
pub(super) fn build(config: &GraticuleConfig) -> FeatureCollection {
    let spacing = config.grid_interval;

    // Pad the extent by half an interval on every side
    let origin_lat = MIN_LAT - spacing / 2.0;
    let origin_lon = MIN_LON - spacing / 2.0;
    let lat_extent = (MAX_LAT - MIN_LAT) + spacing;
    let lon_extent = (MAX_LON - MIN_LON) + spacing;

    let xvertex_lo = XVERTEX_LO * spacing;
    let xvertex_hi = XVERTEX_HI * spacing;
    let hspacing = xvertex_lo + xvertex_hi;

    let mut features = Vec::new();
    let columns = DegreeRange::new(
        origin_lat + xvertex_hi,
        origin_lat + lat_extent,
        hspacing,
    );
    for (column, lat) in columns.into_iter().enumerate() {
        // Even columns start half a spacing up the column, odd columns a full
        // spacing: the brick offset
        let phase = if column % 2 == 0 {
            spacing / 2.0
        } else {
            spacing
        };
        let rows =
            DegreeRange::new(origin_lon + phase, origin_lon + lon_extent, spacing);
        for lon in rows {
            features.push(Feature::new(
                Geometry::Polygon(vec![hex_ring(lon, lat, spacing)]),
                IndexMap::new(),
            ));
        }
    }

    FeatureCollection::new(features)
}

/// The closed 7-point ring of the hexagon centered at `(lon, lat)`, visiting
/// (in grid axes): right vertex, upper-right, upper-left, left vertex,
/// lower-left, lower-right, and back to the right vertex.
fn hex_ring(lon: f64, lat: f64, spacing: f64) -> Vec<Position> {
    let lo = XVERTEX_LO * spacing;
    let hi = XVERTEX_HI * spacing;
    let half = spacing / 2.0;
    vec![
        Position::new(lon, lat + hi),
        Position::new(lon + half, lat + lo),
        Position::new(lon + half, lat - lo),
        Position::new(lon, lat - hi),
        Position::new(lon - half, lat - lo),
        Position::new(lon - half, lat + lo),
        Position::new(lon, lat + hi),
    ]
}
