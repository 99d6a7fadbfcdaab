//! JSON → [`Service`] resolution.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{
    AuthCookieProfile, AuthCookieService, AuthService, AuthServiceKind, GenericService,
    GeoJsonService, ImageApiVersion, ImageFormat, ImageQuality, ImageService,
    PhysicalDimsService, Service,
};
use crate::base::KeyStyles;
use crate::base::constants::{context, keys, types};
use crate::error::{CodecError, Result};
use crate::format::JsonCodec;
use crate::json::{
    expect_array, expect_object, one_or_many, optional_f64, optional_str, optional_u32,
    resolve_id, resolve_type, snippet,
};
use crate::values::MediaType;

/// Resolves a `service` value: one object, one bare URI, or an array.
pub fn decode_services(node: &Value) -> Result<Vec<Service>> {
    one_or_many(node).map(decode_service).collect()
}

pub(super) fn decode_service(node: &Value) -> Result<Service> {
    let obj = match node {
        Value::String(id) => return Ok(Service::Generic(GenericService::reference(id.clone()))),
        Value::Object(obj) => obj,
        other => {
            return Err(CodecError::wrong_shape(
                keys::SERVICE,
                "a URI or object",
                snippet(other),
            ));
        }
    };

    // Nested failures surface before the parent is inspected.
    let services = match obj.get(keys::SERVICE) {
        Some(nested) => decode_services(nested)?,
        None => Vec::new(),
    };
    let (id, id_style) = resolve_id(obj, node)?;
    let (kind, type_style) = resolve_type(obj, node)?;

    let fields = Fields {
        obj,
        node,
        id,
        style: KeyStyles {
            id: id_style,
            kind: type_style,
        },
        services,
    };
    match kind.as_str() {
        types::IMAGE_SERVICE_2 => fields.image(ImageApiVersion::V2),
        types::IMAGE_SERVICE_3 => fields.image(ImageApiVersion::V3),
        types::AUTH_COOKIE_SERVICE_1 => fields.auth_cookie(),
        types::AUTH_TOKEN_SERVICE_1 => fields.auth(AuthServiceKind::Token),
        types::AUTH_LOGOUT_SERVICE_1 => fields.auth(AuthServiceKind::Logout),
        types::PHYSICAL_DIMS_SERVICE => fields.physical_dims(),
        types::GEOJSON_SERVICE => fields.geojson(),
        other => fields.generic(other.to_string()),
    }
}

/// Everything resolved before dispatch, plus the raw object.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    node: &'a Value,
    id: String,
    style: KeyStyles,
    services: Vec<Service>,
}

impl Fields<'_> {
    fn image(self, version: ImageApiVersion) -> Result<Service> {
        let obj = self.obj;
        check_context(obj, version.type_name(), version.context())?;

        let profile = match obj.get(keys::PROFILE) {
            Some(Value::String(profile)) => version.parse_profile(profile).ok_or_else(|| {
                CodecError::invalid_value(keys::PROFILE, version.type_name(), profile.as_str())
            })?,
            Some(other) => {
                return Err(CodecError::wrong_shape(keys::PROFILE, "a string", snippet(other)));
            }
            None => return Err(CodecError::missing_field(keys::PROFILE, snippet(self.node))),
        };

        let mut service = ImageService::new(version, self.id, profile);
        service.keys = self.style;
        service.services = self.services;
        service.protocol = optional_str(obj, keys::PROTOCOL)?;
        service.width = optional_u32(obj, keys::WIDTH)?;
        service.height = optional_u32(obj, keys::HEIGHT)?;
        service.sizes = optional_serde(obj, keys::SIZES)?;
        service.tiles = optional_serde(obj, keys::TILES)?;
        service.extra_formats = labels(obj, keys::EXTRA_FORMATS, version, ImageFormat::from_label)?;
        service.extra_qualities =
            labels(obj, keys::EXTRA_QUALITIES, version, ImageQuality::from_label)?;
        Ok(Service::Image(service))
    }

    fn auth_cookie(self) -> Result<Service> {
        let obj = self.obj;
        check_context(obj, types::AUTH_COOKIE_SERVICE_1, context::AUTH_1)?;

        let profile = match optional_str(obj, keys::PROFILE)? {
            Some(uri) => Some(AuthCookieProfile::from_uri(&uri).ok_or_else(|| {
                CodecError::invalid_value(keys::PROFILE, types::AUTH_COOKIE_SERVICE_1, uri.as_str())
            })?),
            None => None,
        };

        Ok(Service::AuthCookie(AuthCookieService {
            id: self.id,
            profile,
            label: optional_str(obj, keys::LABEL)?,
            confirm_label: optional_str(obj, keys::CONFIRM_LABEL)?,
            header: optional_str(obj, keys::HEADER)?,
            description: optional_str(obj, keys::DESCRIPTION)?,
            failure_header: optional_str(obj, keys::FAILURE_HEADER)?,
            failure_description: optional_str(obj, keys::FAILURE_DESCRIPTION)?,
            services: self.services,
            keys: self.style,
        }))
    }

    fn auth(self, kind: AuthServiceKind) -> Result<Service> {
        let obj = self.obj;
        check_context(obj, kind.type_name(), context::AUTH_1)?;
        check_fixed_profile(obj, kind.type_name(), kind.profile())?;

        let service = AuthService {
            id: self.id,
            kind,
            label: optional_str(obj, keys::LABEL)?,
            services: self.services,
            keys: self.style,
        };
        Ok(match kind {
            AuthServiceKind::Token => Service::AuthToken(service),
            AuthServiceKind::Logout => Service::AuthLogout(service),
        })
    }

    fn physical_dims(self) -> Result<Service> {
        let obj = self.obj;
        check_context(obj, types::PHYSICAL_DIMS_SERVICE, context::PHYSICAL_DIMS)?;
        check_fixed_profile(obj, types::PHYSICAL_DIMS_SERVICE, context::PHYSICAL_DIMS_PROFILE)?;

        let mut service = PhysicalDimsService::new(self.id);
        service.keys = self.style;
        service.services = self.services;
        match (
            optional_f64(obj, keys::PHYSICAL_SCALE)?,
            optional_str(obj, keys::PHYSICAL_UNITS)?,
        ) {
            (Some(scale), Some(units)) => {
                service.physical_scale = Some(scale);
                service.physical_units = Some(units);
            }
            (None, None) => {}
            _ => tracing::warn!(
                "Physical dimensions need both scale and units, ignoring: {}",
                snippet(self.node)
            ),
        }
        Ok(Service::PhysicalDims(service))
    }

    fn geojson(self) -> Result<Service> {
        let obj = self.obj;
        check_context(obj, types::GEOJSON_SERVICE, context::GEOJSON)?;
        if let Some(profile) = obj.get(keys::PROFILE) {
            return Err(CodecError::InvalidEnumValue {
                field: keys::PROFILE,
                scope: types::GEOJSON_SERVICE.to_string(),
                values: vec![snippet(profile)],
            });
        }

        let mut service = GeoJsonService::new(self.id);
        service.keys = self.style;
        service.services = self.services;
        Ok(Service::GeoJson(service))
    }

    /// Unknown types keep their literal type and all other properties.
    fn generic(self, kind: String) -> Result<Service> {
        let mut service = GenericService::new(self.id, kind);
        service.keys = self.style;
        service.services = self.services;

        for (key, value) in self.obj {
            match key.as_str() {
                keys::ID | keys::LEGACY_ID | keys::TYPE | keys::LEGACY_TYPE | keys::SERVICE => {}
                keys::PROFILE if value.is_string() => {
                    service.profile = value.as_str().map(str::to_string);
                }
                keys::FORMAT => match MediaType::from_json(value) {
                    Ok(format) => service.format = Some(format),
                    Err(err) => {
                        tracing::warn!("Keeping unparseable service format verbatim: {err}");
                        service.properties.insert(key.clone(), value.clone());
                    }
                },
                _ => {
                    service.properties.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(Service::Generic(service))
    }
}

/// An optional `@context` must name the expected context.
fn check_context(obj: &Map<String, Value>, resource: &'static str, expected: &'static str) -> Result<()> {
    let matches = match obj.get(keys::CONTEXT) {
        None => true,
        Some(Value::String(found)) => found == expected,
        Some(Value::Array(contexts)) => contexts.iter().any(|c| c.as_str() == Some(expected)),
        Some(_) => false,
    };
    if matches {
        return Ok(());
    }
    let found = obj
        .get(keys::CONTEXT)
        .map(|found| found.as_str().map_or_else(|| snippet(found), str::to_string))
        .unwrap_or_default();
    Err(CodecError::ContextMismatch {
        resource,
        expected,
        found,
    })
}

/// An optional profile that may only hold one value.
fn check_fixed_profile(obj: &Map<String, Value>, scope: &'static str, expected: &str) -> Result<()> {
    match optional_str(obj, keys::PROFILE)? {
        Some(profile) if profile != expected => {
            Err(CodecError::invalid_value(keys::PROFILE, scope, profile))
        }
        _ => Ok(()),
    }
}

fn optional_serde<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Result<Vec<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            CodecError::wrong_shape(key, "a list of objects", format!("{e}: {}", snippet(value)))
        }),
    }
}

/// Maps a label array through `lookup`, reporting every unknown label.
fn labels<T>(
    obj: &Map<String, Value>,
    key: &'static str,
    version: ImageApiVersion,
    lookup: fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    let Some(node) = obj.get(key) else {
        return Ok(Vec::new());
    };
    let mut values = Vec::new();
    let mut invalid = Vec::new();
    for item in expect_array(node, key)? {
        match item.as_str().and_then(lookup) {
            Some(value) => values.push(value),
            None => invalid.push(item.as_str().map_or_else(|| snippet(item), str::to_string)),
        }
    }
    if invalid.is_empty() {
        Ok(values)
    } else {
        Err(CodecError::InvalidEnumValue {
            field: key,
            scope: version.type_name().to_string(),
            values: invalid,
        })
    }
}
