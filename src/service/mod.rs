//! Service descriptions and their resolver.
//!
//! A `service` value may be a bare URI, an object, or an array of either.
//! Objects are dispatched on their `type` (or legacy `@type`) string:
//!
//! ```text
//! ImageService2 / ImageService3  → Service::Image
//! AuthCookieService1             → Service::AuthCookie
//! AuthTokenService1              → Service::AuthToken
//! AuthLogoutService1             → Service::AuthLogout
//! PhysicalDimsService            → Service::PhysicalDims
//! GeoJSONService                 → Service::GeoJson
//! anything else, or a bare URI   → Service::Generic
//! ```
//!
//! Unrecognized types are not errors: the literal type string and every
//! unknown property are kept on the generic variant.

mod auth;
mod image;
mod reader;
mod writer;

pub use auth::{AuthCookieProfile, AuthServiceKind};
pub use image::{ComplianceLevel, ImageApiVersion, ImageFormat, ImageQuality, Size, Tile};
pub use reader::decode_services;
pub use writer::encode_services;

use serde_json::{Map, Value};

use crate::base::KeyStyles;
use crate::base::constants::types;
use crate::error::Result;
use crate::format::JsonCodec;
use crate::values::MediaType;

/// One resolved service node.
#[derive(Debug, Clone, PartialEq)]
pub enum Service {
    Generic(GenericService),
    Image(ImageService),
    AuthCookie(AuthCookieService),
    AuthToken(AuthService),
    AuthLogout(AuthService),
    PhysicalDims(PhysicalDimsService),
    GeoJson(GeoJsonService),
}

impl Service {
    pub fn id(&self) -> &str {
        match self {
            Self::Generic(s) => &s.id,
            Self::Image(s) => &s.id,
            Self::AuthCookie(s) => &s.id,
            Self::AuthToken(s) | Self::AuthLogout(s) => &s.id,
            Self::PhysicalDims(s) => &s.id,
            Self::GeoJson(s) => &s.id,
        }
    }

    /// The type discriminator; `None` only for bare-URI services.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Generic(s) => s.kind.as_deref(),
            Self::Image(s) => Some(s.version.type_name()),
            Self::AuthCookie(_) => Some(types::AUTH_COOKIE_SERVICE_1),
            Self::AuthToken(s) | Self::AuthLogout(s) => Some(s.kind.type_name()),
            Self::PhysicalDims(_) => Some(types::PHYSICAL_DIMS_SERVICE),
            Self::GeoJson(_) => Some(types::GEOJSON_SERVICE),
        }
    }

    /// Nested services.
    pub fn services(&self) -> &[Service] {
        match self {
            Self::Generic(s) => &s.services,
            Self::Image(s) => &s.services,
            Self::AuthCookie(s) => &s.services,
            Self::AuthToken(s) | Self::AuthLogout(s) => &s.services,
            Self::PhysicalDims(s) => &s.services,
            Self::GeoJson(s) => &s.services,
        }
    }

    pub fn key_styles(&self) -> KeyStyles {
        match self {
            Self::Generic(s) => s.keys,
            Self::Image(s) => s.keys,
            Self::AuthCookie(s) => s.keys,
            Self::AuthToken(s) | Self::AuthLogout(s) => s.keys,
            Self::PhysicalDims(s) => s.keys,
            Self::GeoJson(s) => s.keys,
        }
    }
}

impl JsonCodec for Service {
    fn from_json(node: &Value) -> Result<Self> {
        reader::decode_service(node)
    }

    fn to_json(&self) -> Result<Value> {
        writer::encode_service(self)
    }
}

/// A bare-URI service, or one whose type is not otherwise recognized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenericService {
    pub id: String,
    pub kind: Option<String>,
    pub profile: Option<String>,
    pub format: Option<MediaType>,
    /// Properties with no dedicated field, in document order.
    pub properties: Map<String, Value>,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl GenericService {
    /// The bare-URI shorthand.
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Whether this service is written as a bare URI.
    pub fn is_reference(&self) -> bool {
        self.kind.is_none()
            && self.profile.is_none()
            && self.format.is_none()
            && self.properties.is_empty()
            && self.services.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageService {
    pub id: String,
    pub version: ImageApiVersion,
    pub profile: ComplianceLevel,
    pub protocol: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub sizes: Vec<Size>,
    pub tiles: Vec<Tile>,
    pub extra_formats: Vec<ImageFormat>,
    pub extra_qualities: Vec<ImageQuality>,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl ImageService {
    pub fn new(version: ImageApiVersion, id: impl Into<String>, profile: ComplianceLevel) -> Self {
        Self {
            id: id.into(),
            version,
            profile,
            protocol: None,
            width: None,
            height: None,
            sizes: Vec::new(),
            tiles: Vec::new(),
            extra_formats: Vec::new(),
            extra_qualities: Vec::new(),
            services: Vec::new(),
            keys: version.default_keys().into(),
        }
    }

    /// The profile string as written for this service's API version.
    pub fn profile_uri(&self) -> &'static str {
        self.version.profile(self.profile)
    }
}

/// An Auth API 1.0 cookie (access) service.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCookieService {
    pub id: String,
    pub profile: Option<AuthCookieProfile>,
    pub label: Option<String>,
    pub confirm_label: Option<String>,
    pub header: Option<String>,
    pub description: Option<String>,
    pub failure_header: Option<String>,
    pub failure_description: Option<String>,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl AuthCookieService {
    pub fn new(id: impl Into<String>, profile: AuthCookieProfile) -> Self {
        Self {
            id: id.into(),
            profile: Some(profile),
            label: None,
            confirm_label: None,
            header: None,
            description: None,
            failure_header: None,
            failure_description: None,
            services: Vec::new(),
            keys: KeyStyles::LEGACY,
        }
    }
}

/// An Auth API 1.0 token or logout service; both have a fixed profile.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthService {
    pub id: String,
    pub kind: AuthServiceKind,
    pub label: Option<String>,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl AuthService {
    pub fn new(kind: AuthServiceKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
            services: Vec::new(),
            keys: KeyStyles::LEGACY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalDimsService {
    pub id: String,
    pub physical_scale: Option<f64>,
    pub physical_units: Option<String>,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl PhysicalDimsService {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            physical_scale: None,
            physical_units: None,
            services: Vec::new(),
            keys: KeyStyles::MODERN,
        }
    }

    pub fn with_dimensions(mut self, scale: f64, units: impl Into<String>) -> Self {
        self.physical_scale = Some(scale);
        self.physical_units = Some(units.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonService {
    pub id: String,
    pub services: Vec<Service>,
    pub keys: KeyStyles,
}

impl GeoJsonService {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            services: Vec::new(),
            keys: KeyStyles::MODERN,
        }
    }
}
