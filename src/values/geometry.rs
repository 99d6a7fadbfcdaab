//! GeoJSON geometries used by `navPlace` features.
//!
//! Coordinates are `[x, y]` pairs; how deeply they nest depends on the
//! geometry type:
//!
//! ```text
//! Point            [x, y]
//! MultiPoint       [[x, y], ...]
//! LineString       [[x, y], ...]
//! MultiLineString  [[[x, y], ...], ...]
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::base::constants::keys;
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_array, expect_object, number, snippet};

/// Geometry type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
}

impl GeometryType {
    pub const ALL: [GeometryType; 4] = [
        Self::Point,
        Self::MultiPoint,
        Self::LineString,
        Self::MultiLineString,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn from_pair(node: &Value) -> Result<Self> {
        let shape_error = || CodecError::wrong_shape(keys::COORDINATES, "an [x, y] pair", snippet(node));
        match node.as_array().map(Vec::as_slice) {
            Some([x, y]) => {
                let x = x.as_f64().ok_or_else(shape_error)?;
                let y = y.as_f64().ok_or_else(shape_error)?;
                Ok(Self { x, y })
            }
            _ => Err(shape_error()),
        }
    }

    fn to_pair(self) -> Value {
        Value::Array(vec![number(self.x), number(self.y)])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Point>);

impl LineString {
    fn from_pairs(node: &Value) -> Result<Self> {
        expect_array(node, keys::COORDINATES)?
            .iter()
            .map(Point::from_pair)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    fn to_pairs(&self) -> Value {
        Value::Array(self.0.iter().map(|point| point.to_pair()).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(Vec<Point>),
    LineString(LineString),
    MultiLineString(Vec<LineString>),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
        }
    }

    fn coordinates(&self) -> Value {
        match self {
            Self::Point(point) => point.to_pair(),
            Self::MultiPoint(points) => {
                Value::Array(points.iter().map(|point| point.to_pair()).collect())
            }
            Self::LineString(line) => line.to_pairs(),
            Self::MultiLineString(lines) => {
                Value::Array(lines.iter().map(LineString::to_pairs).collect())
            }
        }
    }
}

impl JsonCodec for Geometry {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, "geometry")?;
        let label = match obj.get(keys::TYPE) {
            Some(Value::String(label)) => label,
            Some(_) => return Err(CodecError::wrong_shape(keys::TYPE, "a string", snippet(node))),
            None => return Err(CodecError::missing_field(keys::TYPE, snippet(node))),
        };
        let kind = GeometryType::from_label(label)
            .ok_or_else(|| CodecError::unknown("geometry type", label.as_str()))?;
        let coordinates = obj
            .get(keys::COORDINATES)
            .ok_or_else(|| CodecError::missing_field(keys::COORDINATES, snippet(node)))?;

        Ok(match kind {
            GeometryType::Point => Self::Point(Point::from_pair(coordinates)?),
            GeometryType::MultiPoint => Self::MultiPoint(LineString::from_pairs(coordinates)?.0),
            GeometryType::LineString => Self::LineString(LineString::from_pairs(coordinates)?),
            GeometryType::MultiLineString => Self::MultiLineString(
                expect_array(coordinates, keys::COORDINATES)?
                    .iter()
                    .map(LineString::from_pairs)
                    .collect::<Result<_>>()?,
            ),
        })
    }

    fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        obj.insert(keys::TYPE.into(), self.geometry_type().label().into());
        obj.insert(keys::COORDINATES.into(), self.coordinates());
        Ok(Value::Object(obj))
    }
}
