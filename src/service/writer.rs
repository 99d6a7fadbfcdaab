//! [`Service`] → JSON serialization.
//!
//! Key order: `@context`, id, type, profile, variant fields, `service`.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{ImageService, Service};
use crate::base::KeyStyles;
use crate::base::constants::{context, keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::number;

/// Serializes services as an array, whatever their count.
pub fn encode_services(services: &[Service]) -> Result<Value> {
    services
        .iter()
        .map(encode_service)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

pub(super) fn encode_service(service: &Service) -> Result<Value> {
    if let Service::Generic(generic) = service {
        if generic.is_reference() {
            return Ok(Value::String(generic.id.clone()));
        }
    }

    let mut out = ObjectWriter::new(service.key_styles());
    match service {
        Service::Generic(generic) => {
            let kind = generic
                .kind
                .as_deref()
                .ok_or_else(|| CodecError::missing_field(keys::TYPE, generic.id.as_str()))?;
            out.head(&generic.id, kind);
            out.opt_str(keys::PROFILE, generic.profile.as_deref());
            if let Some(format) = &generic.format {
                out.put(keys::FORMAT, format.to_json()?);
            }
            for (key, value) in &generic.properties {
                out.put(key, value.clone());
            }
        }
        Service::Image(image) => write_image(&mut out, image)?,
        Service::AuthCookie(cookie) => {
            out.put(keys::CONTEXT, context::AUTH_1.into());
            out.head(&cookie.id, types::AUTH_COOKIE_SERVICE_1);
            out.opt_str(keys::PROFILE, cookie.profile.map(|profile| profile.uri()));
            out.opt_str(keys::LABEL, cookie.label.as_deref());
            out.opt_str(keys::CONFIRM_LABEL, cookie.confirm_label.as_deref());
            out.opt_str(keys::HEADER, cookie.header.as_deref());
            out.opt_str(keys::DESCRIPTION, cookie.description.as_deref());
            out.opt_str(keys::FAILURE_HEADER, cookie.failure_header.as_deref());
            out.opt_str(keys::FAILURE_DESCRIPTION, cookie.failure_description.as_deref());
        }
        Service::AuthToken(auth) | Service::AuthLogout(auth) => {
            out.head(&auth.id, auth.kind.type_name());
            out.put(keys::PROFILE, auth.kind.profile().into());
            out.opt_str(keys::LABEL, auth.label.as_deref());
        }
        Service::PhysicalDims(dims) => {
            out.put(keys::CONTEXT, context::PHYSICAL_DIMS.into());
            out.head(&dims.id, types::PHYSICAL_DIMS_SERVICE);
            out.put(keys::PROFILE, context::PHYSICAL_DIMS_PROFILE.into());
            if let (Some(scale), Some(units)) = (dims.physical_scale, &dims.physical_units) {
                out.put(keys::PHYSICAL_SCALE, number(scale));
                out.put(keys::PHYSICAL_UNITS, units.clone().into());
            }
        }
        Service::GeoJson(geojson) => {
            out.put(keys::CONTEXT, context::GEOJSON.into());
            out.head(&geojson.id, types::GEOJSON_SERVICE);
        }
    }

    if !service.services().is_empty() {
        out.put(keys::SERVICE, encode_services(service.services())?);
    }
    Ok(out.finish())
}

fn write_image(out: &mut ObjectWriter, image: &ImageService) -> Result<()> {
    out.head(&image.id, image.version.type_name());
    out.put(keys::PROFILE, image.profile_uri().into());
    out.opt_str(keys::PROTOCOL, image.protocol.as_deref());
    if let Some(width) = image.width {
        out.put(keys::WIDTH, width.into());
    }
    if let Some(height) = image.height {
        out.put(keys::HEIGHT, height.into());
    }
    if !image.sizes.is_empty() {
        out.put(keys::SIZES, to_value(&image.sizes)?);
    }
    if !image.tiles.is_empty() {
        out.put(keys::TILES, to_value(&image.tiles)?);
    }
    if !image.extra_formats.is_empty() {
        let labels = image.extra_formats.iter().map(|f| Value::from(f.label()));
        out.put(keys::EXTRA_FORMATS, Value::Array(labels.collect()));
    }
    if !image.extra_qualities.is_empty() {
        let labels = image.extra_qualities.iter().map(|q| Value::from(q.label()));
        out.put(keys::EXTRA_QUALITIES, Value::Array(labels.collect()));
    }
    Ok(())
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CodecError::json(format!("Serialize error: {e}")))
}

/// Ordered object builder aware of the service's key style.
struct ObjectWriter {
    style: KeyStyles,
    map: Map<String, Value>,
}

impl ObjectWriter {
    fn new(style: KeyStyles) -> Self {
        Self {
            style,
            map: Map::new(),
        }
    }

    fn head(&mut self, id: &str, kind: &str) {
        self.map.insert(self.style.id_key().into(), id.into());
        self.map.insert(self.style.type_key().into(), kind.into());
    }

    fn put(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_string(), value);
    }

    fn opt_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.put(key, value.into());
        }
    }

    fn finish(self) -> Value {
        Value::Object(self.map)
    }
}
