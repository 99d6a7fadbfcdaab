//! Selectors narrowing a specific resource to part of its source.

use std::fmt;

use serde_json::{Map, Value};

use crate::base::constants::{context, keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{expect_object, number, optional_f64, optional_str, resolve_type, snippet};

/// An IIIF Image API request expressed as a selector.
///
/// Only the parts present in the document are stored; the accessors fill in
/// the Image API defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageApiSelector {
    pub region: Option<String>,
    pub size: Option<String>,
    pub rotation: Option<Rotation>,
    pub quality: Option<String>,
    pub format: Option<String>,
}

impl ImageApiSelector {
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("full")
    }

    pub fn size(&self) -> &str {
        self.size.as_deref().unwrap_or("max")
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation.clone().unwrap_or(Rotation::Degrees(0.0))
    }

    pub fn quality(&self) -> &str {
        self.quality.as_deref().unwrap_or("default")
    }

    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("jpg")
    }

    /// The request path: `/{region}/{size}/{rotation}/{quality}.{format}`.
    pub fn path(&self) -> String {
        format!(
            "/{}/{}/{}/{}.{}",
            self.region(),
            self.size(),
            self.rotation(),
            self.quality(),
            self.format()
        )
    }
}

/// The rotation part, written either as a number or as text such as `"!90"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    Degrees(f64),
    Text(String),
}

impl Rotation {
    fn from_json(node: &Value) -> Result<Self> {
        match node {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Degrees)
                .ok_or_else(|| CodecError::wrong_shape(keys::ROTATION, "a number", snippet(node))),
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(CodecError::wrong_shape(
                keys::ROTATION,
                "a number or string",
                snippet(other),
            )),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Degrees(degrees) => number(*degrees),
            Self::Text(text) => text.clone().into(),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees(degrees) => write!(f, "{}", number(*degrees)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointSelector {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub t: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// A `FragmentSelector` conforming to W3C media fragments.
    MediaFragment(String),
    ImageApi(ImageApiSelector),
    Point(PointSelector),
    Svg(String),
    AudioContent,
    VisualContent,
    /// Any other selector, kept verbatim.
    Other(Value),
}

impl Selector {
    /// `xywh=` style fragment for media fragment selectors.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::MediaFragment(value) => Some(value),
            _ => None,
        }
    }
}

fn required_value(obj: &Map<String, Value>, node: &Value) -> Result<String> {
    obj.get(keys::VALUE)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CodecError::missing_field(keys::VALUE, snippet(node)))
}

fn image_api_selector(obj: &Map<String, Value>) -> Result<ImageApiSelector> {
    let rotation = match obj.get(keys::ROTATION) {
        None | Some(Value::Null) => None,
        Some(node) => Some(Rotation::from_json(node)?),
    };
    Ok(ImageApiSelector {
        region: optional_str(obj, keys::REGION)?,
        size: optional_str(obj, keys::SIZE)?,
        rotation,
        quality: optional_str(obj, keys::QUALITY)?,
        format: optional_str(obj, keys::FORMAT)?,
    })
}

impl JsonCodec for Selector {
    fn from_json(node: &Value) -> Result<Self> {
        let obj = expect_object(node, keys::SELECTOR)?;
        let (kind, _) = resolve_type(obj, node)?;
        let selector = match kind.as_str() {
            types::FRAGMENT_SELECTOR => {
                if let Some(conforms_to) = obj.get(keys::CONFORMS_TO).and_then(Value::as_str) {
                    if conforms_to != context::MEDIA_FRAGMENTS {
                        return Err(CodecError::invalid_value(
                            "conformsTo",
                            types::FRAGMENT_SELECTOR,
                            conforms_to,
                        ));
                    }
                }
                Self::MediaFragment(required_value(obj, node)?)
            }
            types::IMAGE_API_SELECTOR => Self::ImageApi(image_api_selector(obj)?),
            types::POINT_SELECTOR => Self::Point(PointSelector {
                x: optional_f64(obj, keys::X)?,
                y: optional_f64(obj, keys::Y)?,
                t: optional_f64(obj, keys::T)?,
            }),
            types::SVG_SELECTOR => Self::Svg(required_value(obj, node)?),
            types::AUDIO_CONTENT_SELECTOR => Self::AudioContent,
            types::VISUAL_CONTENT_SELECTOR => Self::VisualContent,
            _ => Self::Other(node.clone()),
        };
        Ok(selector)
    }

    fn to_json(&self) -> Result<Value> {
        let mut obj = Map::new();
        let mut put = |key: &str, value: Value| {
            obj.insert(key.to_string(), value);
        };
        match self {
            Self::MediaFragment(value) => {
                put(keys::TYPE, types::FRAGMENT_SELECTOR.into());
                put(keys::CONFORMS_TO, context::MEDIA_FRAGMENTS.into());
                put(keys::VALUE, value.clone().into());
            }
            Self::ImageApi(selector) => {
                put(keys::TYPE, types::IMAGE_API_SELECTOR.into());
                let text_parts = [(keys::REGION, &selector.region), (keys::SIZE, &selector.size)];
                for (key, part) in text_parts {
                    if let Some(part) = part {
                        put(key, part.clone().into());
                    }
                }
                if let Some(rotation) = &selector.rotation {
                    put(keys::ROTATION, rotation.to_json());
                }
                for (key, part) in [(keys::QUALITY, &selector.quality), (keys::FORMAT, &selector.format)] {
                    if let Some(part) = part {
                        put(key, part.clone().into());
                    }
                }
            }
            Self::Point(point) => {
                put(keys::TYPE, types::POINT_SELECTOR.into());
                for (key, value) in [(keys::X, point.x), (keys::Y, point.y), (keys::T, point.t)] {
                    if let Some(value) = value {
                        put(key, number(value));
                    }
                }
            }
            Self::Svg(value) => {
                put(keys::TYPE, types::SVG_SELECTOR.into());
                put(keys::VALUE, value.clone().into());
            }
            Self::AudioContent => put(keys::TYPE, types::AUDIO_CONTENT_SELECTOR.into()),
            Self::VisualContent => put(keys::TYPE, types::VISUAL_CONTENT_SELECTOR.into()),
            Self::Other(node) => return Ok(node.clone()),
        }
        Ok(Value::Object(obj))
    }
}
