use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

/// Configuration that defines a graticule. Generation is fully deterministic,
/// so two grids generated with the same config will always be identical.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GraticuleConfig {
    /// Spacing between primary grid lines, in decimal degrees. Must be
    /// strictly positive.
    pub grid_interval: f64,

    /// Sampling density along each grid line, in decimal degrees. Must be
    /// strictly positive and smaller than the 181 degree latitude span, so
    /// every line holds at least two points. Each parallel/meridian is
    /// densified at this step so that reprojection renders it as a smooth
    /// curve rather than a straight chord.
    pub step_interval: f64,

    /// The geometric variant of the grid. The line graticule is always
    /// generated; `rectangle` and `hex` additionally produce a polygon
    /// collection covering the same extent.
    pub grid_type: GridType,

    /// Extra properties appended, in order, to every feature in the output.
    pub extra_fields: IndexMap<String, Value>,
}

/// The supported grid variants. This is a closed set: unrecognized names fail
/// at parse/deserialize time instead of falling back to any default behavior.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GridType {
    /// Parallels and meridians as densified LineStrings
    Line,
    /// Lat/long quadrilateral cells as closed Polygons
    Rectangle,
    /// Pointy-top hexagon tiling as closed Polygons
    Hex,
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            grid_interval: 1.0,
            step_interval: 0.5,
            grid_type: GridType::Line,
            extra_fields: IndexMap::new(),
        }
    }
}

impl Validate for GraticuleConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(error) = validate_interval(self.grid_interval) {
            errors.add("grid_interval", error);
        }
        if let Err(error) = validate_step_interval(self.step_interval) {
            errors.add("step_interval", error);
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The latitude traversal span sampled by every meridian: 180 degrees plus
/// the slack degree that keeps the final sample from truncating. This is the
/// smaller of the two sampled spans, so a step interval at or above it would
/// leave single-point lines.
const MAX_STEP_INTERVAL: f64 = 181.0;

/// A non-positive interval would make the sampling ranges empty (or, with a
/// naive accumulating loop, non-terminating), so reject it before any
/// generation work begins. NaN/infinity are rejected for the same reason.
fn validate_interval(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        let mut error = ValidationError::new("interval");
        error.message = Some(
            format!("interval must be a positive number of degrees, got {}", value)
                .into(),
        );
        Err(error)
    }
}

/// The step interval must additionally fit inside the sampled spans: every
/// line is required to hold at least two coordinate pairs, so a step that
/// would sample a lone point on a meridian is rejected up front.
fn validate_step_interval(value: f64) -> Result<(), ValidationError> {
    validate_interval(value)?;
    if value < MAX_STEP_INTERVAL {
        Ok(())
    } else {
        let mut error = ValidationError::new("interval");
        error.message = Some(
            format!(
                "step interval must be smaller than the {} degree latitude \
                 span, got {}",
                MAX_STEP_INTERVAL, value
            )
            .into(),
        );
        Err(error)
    }
}

/// Parse raw extra-field content into structured properties. The input is the
/// body of a JSON object, e.g. `"source": "natural_earth", "rank": 4`. An
/// empty or whitespace-only string means "no extra fields". Key order is
/// preserved in the output.
pub fn parse_extra_fields(raw: &str) -> anyhow::Result<IndexMap<String, Value>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(IndexMap::new());
    }
    serde_json::from_str(&format!("{{{}}}", raw))
        .with_context(|| format!("invalid extra field content {:?}", raw))
}
