//! Grid generation. Each builder sub-module covers one geometric variant;
//! this module holds the entry point ([Graticule::generate]) and the
//! labeling helpers shared across builders.

mod hex;
mod line;
mod rect;

use crate::{
    geojson::FeatureCollection, timed, util::fmt_degree, GraticuleConfig, GridType,
};
use anyhow::Context;
use indexmap::IndexMap;
use log::info;
use serde_json::Value;
use validator::Validate;

/// Southern/northern latitude limits of the grid, in degrees
const MIN_LAT: f64 = -90.0;
const MAX_LAT: f64 = 90.0;
/// Western/eastern longitude limits of the grid, in degrees
const MIN_LON: f64 = -180.0;
const MAX_LON: f64 = 180.0;
/// Slack added above a sampled range's limit so stepping lands on the final
/// parallel/meridian instead of truncating it (see
/// [DegreeRange](crate::DegreeRange) for the endpoint policy)
const RANGE_SLACK: f64 = 1.0;

/// A fully generated graticule: the line grid, plus a polygon grid for the
/// `rectangle` and `hex` variants, along with the configuration that produced
/// them. Generation is a pure function of the config; nothing here mutates
/// after construction.
#[derive(Clone, Debug)]
pub struct Graticule {
    config: GraticuleConfig,
    lines: FeatureCollection,
    polygons: Option<FeatureCollection>,
}

impl Graticule {
    /// Generate a graticule with the given config. Returns an error if the
    /// config is invalid; generation itself cannot fail.
    ///
    /// The line grid is always generated, as scaffolding context for the
    /// polygon variants. Feature order is deterministic: parallels south to
    /// north, then meridians west to east; polygon cells in generation-loop
    /// order.
    pub fn generate(config: GraticuleConfig) -> anyhow::Result<Self> {
        info!("Generating graticule with config {:#?}", config);

        config.validate().context("invalid config")?;

        let lines = timed!(
            "Line graticule generation",
            log::Level::Info,
            line::build(&config)
        );
        let polygons = match config.grid_type {
            GridType::Line => None,
            GridType::Rectangle => Some(timed!(
                "Rectangle graticule generation",
                log::Level::Info,
                rect::build(&config)
            )),
            GridType::Hex => Some(timed!(
                "Hex graticule generation",
                log::Level::Info,
                hex::build(&config)
            )),
        };

        Ok(Self {
            config,
            lines,
            polygons,
        })
    }

    /// Get a reference to the config that defines this graticule.
    pub fn config(&self) -> &GraticuleConfig {
        &self.config
    }

    /// The line grid (always present).
    pub fn lines(&self) -> &FeatureCollection {
        &self.lines
    }

    /// The polygon grid, present for the `rectangle` and `hex` variants.
    pub fn polygons(&self) -> Option<&FeatureCollection> {
        self.polygons.as_ref()
    }
}

/// Compass letter for a latitude value. The equator counts as northern.
fn latitude_direction(dd: f64) -> &'static str {
    if dd >= 0.0 {
        "N"
    } else {
        "S"
    }
}

/// Compass letter for a meridian label. Note this is intentionally the
/// reverse of the usual cartographic convention (positive longitude is
/// normally East): it reproduces the labeling of the reference graticule
/// datasets this generator is validated against. Cell labels use
/// [longitude_direction] instead.
fn meridian_direction(dd: f64) -> &'static str {
    if dd >= 0.0 {
        "W"
    } else {
        "E"
    }
}

/// Compass letter for a longitude value in cell labels. The prime meridian
/// counts as eastern.
fn longitude_direction(dd: f64) -> &'static str {
    if dd >= 0.0 {
        "E"
    } else {
        "W"
    }
}

/// A degree value as a JSON number. Integral values are emitted as integers
/// (`0`, not `0.0`) to match the labels derived from them.
fn degree_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < (i64::MAX as f64) {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// `"<|dd|> <direction>"`, e.g. `"45 N"`
fn display_label(dd: f64, direction: &str) -> String {
    format!("{} {}", fmt_degree(dd.abs()), direction)
}

/// Append the config's extra fields (in order) to a feature's properties.
fn extend_extra_fields(
    properties: &mut IndexMap<String, Value>,
    config: &GraticuleConfig,
) {
    properties.extend(config.extra_fields.clone());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_labels() {
        assert_eq!(latitude_direction(45.0), "N");
        assert_eq!(latitude_direction(0.0), "N");
        assert_eq!(latitude_direction(-45.0), "S");
        // Meridian labels reproduce the reference datasets' convention
        assert_eq!(meridian_direction(90.0), "W");
        assert_eq!(meridian_direction(0.0), "W");
        assert_eq!(meridian_direction(-90.0), "E");
        // Cell labels use the standard convention
        assert_eq!(longitude_direction(90.0), "E");
        assert_eq!(longitude_direction(-90.0), "W");
    }

    #[test]
    fn test_degree_number() {
        assert_eq!(degree_number(0.0), Value::from(0));
        assert_eq!(degree_number(-90.0), Value::from(-90));
        assert_eq!(degree_number(22.5), Value::from(22.5));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(0.0, "N"), "0 N");
        assert_eq!(display_label(-67.5, "S"), "67.5 S");
    }
}
