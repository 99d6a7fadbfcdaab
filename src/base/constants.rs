//! Wire-level literals: JSON keys, resource type names, context URIs.

/// JSON property names.
pub mod keys {
    pub const ID: &str = "id";
    pub const LEGACY_ID: &str = "@id";
    pub const TYPE: &str = "type";
    pub const LEGACY_TYPE: &str = "@type";
    pub const CONTEXT: &str = "@context";

    pub const BEHAVIOR: &str = "behavior";
    pub const BODY: &str = "body";
    pub const CONFIRM_LABEL: &str = "confirmLabel";
    pub const CONFORMS_TO: &str = "conformsTo";
    pub const COORDINATES: &str = "coordinates";
    pub const DESCRIPTION: &str = "description";
    pub const DURATION: &str = "duration";
    pub const EXTRA_FORMATS: &str = "extraFormats";
    pub const EXTRA_QUALITIES: &str = "extraQualities";
    pub const FAILURE_DESCRIPTION: &str = "failureDescription";
    pub const FAILURE_HEADER: &str = "failureHeader";
    pub const FORMAT: &str = "format";
    pub const HEADER: &str = "header";
    pub const HEIGHT: &str = "height";
    pub const ITEMS: &str = "items";
    pub const LABEL: &str = "label";
    pub const LANGUAGE: &str = "language";
    pub const MOTIVATION: &str = "motivation";
    pub const PART_OF: &str = "partOf";
    pub const PHYSICAL_SCALE: &str = "physicalScale";
    pub const PHYSICAL_UNITS: &str = "physicalUnits";
    pub const PROFILE: &str = "profile";
    pub const PROTOCOL: &str = "protocol";
    pub const PURPOSE: &str = "purpose";
    pub const QUALITY: &str = "quality";
    pub const REGION: &str = "region";
    pub const ROTATION: &str = "rotation";
    pub const SELECTOR: &str = "selector";
    pub const SERVICE: &str = "service";
    pub const SIZE: &str = "size";
    pub const SIZES: &str = "sizes";
    pub const SOURCE: &str = "source";
    pub const TARGET: &str = "target";
    pub const TILES: &str = "tiles";
    pub const TIME_MODE: &str = "timeMode";
    pub const VALUE: &str = "value";
    pub const WIDTH: &str = "width";
    pub const T: &str = "t";
    pub const X: &str = "x";
    pub const Y: &str = "y";
}

/// Resource `type` literals.
pub mod types {
    pub const ANNOTATION: &str = "Annotation";
    pub const CANVAS: &str = "Canvas";
    pub const CHOICE: &str = "Choice";
    pub const COLLECTION: &str = "Collection";
    pub const CSS_STYLESHEET: &str = "CssStylesheet";
    pub const DATASET: &str = "Dataset";
    pub const IMAGE: &str = "Image";
    pub const MANIFEST: &str = "Manifest";
    pub const MODEL: &str = "Model";
    pub const SOUND: &str = "Sound";
    pub const SPECIFIC_RESOURCE: &str = "SpecificResource";
    pub const TEXT: &str = "Text";
    pub const TEXTUAL_BODY: &str = "TextualBody";
    pub const VIDEO: &str = "Video";

    pub const IMAGE_SERVICE_2: &str = "ImageService2";
    pub const IMAGE_SERVICE_3: &str = "ImageService3";
    pub const AUTH_COOKIE_SERVICE_1: &str = "AuthCookieService1";
    pub const AUTH_TOKEN_SERVICE_1: &str = "AuthTokenService1";
    pub const AUTH_LOGOUT_SERVICE_1: &str = "AuthLogoutService1";
    pub const PHYSICAL_DIMS_SERVICE: &str = "PhysicalDimsService";
    pub const GEOJSON_SERVICE: &str = "GeoJSONService";

    pub const FRAGMENT_SELECTOR: &str = "FragmentSelector";
    pub const IMAGE_API_SELECTOR: &str = "ImageApiSelector";
    pub const POINT_SELECTOR: &str = "PointSelector";
    pub const SVG_SELECTOR: &str = "SvgSelector";
    pub const AUDIO_CONTENT_SELECTOR: &str = "AudioContentSelector";
    pub const VISUAL_CONTENT_SELECTOR: &str = "VisualContentSelector";
}

/// JSON-LD contexts and fixed profile URIs.
pub mod context {
    pub const IMAGE_2: &str = "http://iiif.io/api/image/2/context.json";
    pub const IMAGE_3: &str = "http://iiif.io/api/image/3/context.json";
    pub const AUTH_1: &str = "http://iiif.io/api/auth/1/context.json";
    pub const PHYSICAL_DIMS: &str = "http://iiif.io/api/annex/services/physdim/1/context.json";
    pub const GEOJSON: &str = "http://geojson.org/geojson-ld/geojson-context.jsonld";

    pub const AUTH_TOKEN_PROFILE: &str = "http://iiif.io/api/auth/1/token";
    pub const AUTH_LOGOUT_PROFILE: &str = "http://iiif.io/api/auth/1/logout";
    pub const PHYSICAL_DIMS_PROFILE: &str = "http://iiif.io/api/annex/services/physdim";
    pub const MEDIA_FRAGMENTS: &str = "http://www.w3.org/TR/media-frags/";
}

/// Sentinel written in place of a missing resource inside a body list.
pub const RDF_NIL: &str = "rdf:nil";
