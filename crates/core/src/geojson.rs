//! A minimal GeoJSON document model covering exactly what a graticule needs:
//! LineString and Polygon features with ordered properties. Features are
//! built as structured values and serialized through serde, so the output is
//! always syntactically valid JSON.

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single coordinate pair, in GeoJSON axis order: `(longitude, latitude)`.
/// Serializes as a two-element array `[lon, lat]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self(lon, lat)
    }

    pub fn lon(self) -> f64 {
        self.0
    }

    pub fn lat(self) -> f64 {
        self.1
    }
}

/// The geometry of a single feature. Serializes per RFC 7946, e.g.
/// `{"type": "LineString", "coordinates": [...]}`. Polygon coordinates are a
/// list of rings; every ring is closed (first position repeated as the last).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
}

/// One output record: a geometry plus its properties. Property order is
/// preserved, so derived attributes always precede any user-supplied extra
/// fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    geometry: Geometry,
    properties: IndexMap<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: IndexMap<String, Value>) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }
}

/// An ordered sequence of features, serialized as
/// `{"type": "FeatureCollection", "features": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    /// Serialize this collection to GeoJSON text. Failure here would mean a
    /// bug in the document model, not bad user input.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("error serializing feature collection")
    }

    /// Like [FeatureCollection::to_json], but pretty-printed. Compact output
    /// is the default since grids at small intervals get large; this variant
    /// is for eyeballing the output.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self)
            .expect("error serializing feature collection")
    }

    /// Deserialize a collection from GeoJSON text, as produced by
    /// [FeatureCollection::to_json]. Will fail if the input is malformed.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing feature collection")
    }
}
