//! Graticule is a generator for global geographic reference grids. Given a
//! grid spacing it produces the lat/long grid as a GeoJSON
//! [FeatureCollection], in one of three geometric variants: densified
//! meridian/parallel polylines, rectangular lat/long cells, or a hexagonal
//! tiling of the same extent. Writing the output to disk is handled
//! elsewhere (e.g. by the CLI crate).
//!
//! ```
//! use graticule::{Graticule, GraticuleConfig};
//!
//! let config = GraticuleConfig::default();
//! let graticule = Graticule::generate(config).unwrap();
//! println!("{}", graticule.lines().to_json());
//! // From here you can write/convert the collection however you like.
//! ```
//!
//! See [GraticuleConfig] for details on how the grid can be customized.

mod config;
mod geojson;
mod grid;
mod util;

pub use crate::{
    config::{parse_extra_fields, GraticuleConfig, GridType},
    geojson::{Feature, FeatureCollection, Geometry, Position},
    grid::Graticule,
    util::{fmt_degree, range::DegreeRange},
};
