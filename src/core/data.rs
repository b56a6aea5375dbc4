use serde::{Deserialize, Serialize};

use crate::core::types::{DataSet, ScatterPoint};
use crate::error::{ScatterError, ScatterResult};
use crate::render::Color;

/// Darkening factor applied when deriving a stroke from an explicit fill.
const STROKE_DARKEN: f64 = 0.75;

/// Axis title as accepted on the wire: a plain string or a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisTitle {
    Text(String),
    List(Vec<String>),
}

impl AxisTitle {
    /// The effective title text: the string itself, or the first list entry.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::List(items) => items.first().map(String::as_str),
        }
    }
}

/// Raw input shape before attribute binding.
///
/// `points` holds (x, y) pairs; `color`, `size`, and `alpha` are optional
/// parallel arrays. A one-element array broadcasts its value to every point;
/// longer arrays are indexed per point and must match `points` in length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDataSet {
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default)]
    pub size: Vec<f64>,
    #[serde(default)]
    pub alpha: Vec<f64>,
    #[serde(default)]
    pub xaxis: Option<AxisTitle>,
    #[serde(default)]
    pub yaxis: Option<AxisTitle>,
}

impl RawDataSet {
    /// Builds a raw dataset from bare (x, y) pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            points: pairs.into_iter().map(|(x, y)| [x, y]).collect(),
            ..Self::default()
        }
    }

    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::InvalidData(format!("failed to parse dataset: {e}")))
    }
}

/// Default appearance for points without explicit attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDefaults {
    pub fill: Color,
    pub stroke: Color,
    pub radius: f64,
    pub alpha: f64,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            fill: Color::rgb(222.0 / 255.0, 235.0 / 255.0, 250.0 / 255.0), // #deebfa
            stroke: Color::rgb(104.0 / 255.0, 161.0 / 255.0, 229.0 / 255.0), // #68a1e5
            radius: 8.0,
            alpha: 0.9,
        }
    }
}

/// Normalizes raw records into render attributes with stable indices.
///
/// Indices are assigned densely starting at `start_index`, so appending
/// continues the existing sequence without renumbering. When a per-point
/// color is given, the stroke is that color darkened; otherwise both fall
/// back to the defaults.
pub fn bind_points(
    raw: &RawDataSet,
    defaults: StyleDefaults,
    start_index: usize,
) -> ScatterResult<Vec<ScatterPoint>> {
    validate_parallel_len("color", raw.color.len(), raw.points.len())?;
    validate_parallel_len("size", raw.size.len(), raw.points.len())?;
    validate_parallel_len("alpha", raw.alpha.len(), raw.points.len())?;

    let mut points = Vec::with_capacity(raw.points.len());

    for (offset, pair) in raw.points.iter().enumerate() {
        let [x, y] = *pair;
        if !x.is_finite() || !y.is_finite() {
            return Err(ScatterError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }

        let explicit_fill = match broadcast(&raw.color, offset) {
            Some(hex) => Some(Color::from_hex(hex)?),
            None => None,
        };
        let fill = explicit_fill.unwrap_or(defaults.fill);
        let stroke = explicit_fill.map_or(defaults.stroke, |color| color.darker(STROKE_DARKEN));

        let radius = broadcast(&raw.size, offset)
            .copied()
            .unwrap_or(defaults.radius);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ScatterError::InvalidData(
                "point size must be finite and > 0".to_owned(),
            ));
        }

        let alpha = broadcast(&raw.alpha, offset)
            .copied()
            .unwrap_or(defaults.alpha);
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ScatterError::InvalidData(
                "point alpha must be finite and in [0, 1]".to_owned(),
            ));
        }

        points.push(ScatterPoint {
            x,
            y,
            index: start_index + offset,
            fill,
            stroke,
            radius,
            alpha,
        });
    }

    Ok(points)
}

/// Binds a full dataset: points plus axis titles.
pub fn bind_dataset(raw: &RawDataSet, defaults: StyleDefaults) -> ScatterResult<DataSet> {
    Ok(DataSet {
        points: bind_points(raw, defaults, 0)?,
        x_title: raw.xaxis.as_ref().and_then(AxisTitle::text).map(str::to_owned),
        y_title: raw.yaxis.as_ref().and_then(AxisTitle::text).map(str::to_owned),
    })
}

fn broadcast<T>(values: &[T], index: usize) -> Option<&T> {
    match values.len() {
        0 => None,
        1 => values.first(),
        _ => values.get(index),
    }
}

fn validate_parallel_len(name: &str, len: usize, point_count: usize) -> ScatterResult<()> {
    if len > 1 && len != point_count {
        return Err(ScatterError::InvalidData(format!(
            "`{name}` array has {len} entries but the dataset has {point_count} points"
        )));
    }
    Ok(())
}
