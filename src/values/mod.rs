//! Value codecs: small polymorphic JSON shapes and their typed forms.

mod geometry;
mod label;
mod media_type;
mod selector;
mod source;
mod stylesheet;
mod target;

pub use geometry::{Geometry, GeometryType, LineString, Point};
pub use label::Label;
pub use media_type::{MediaType, decode_format};
pub use selector::{ImageApiSelector, PointSelector, Rotation, Selector};
pub use source::{PartOf, Source};
pub use stylesheet::Stylesheet;
pub use target::{SpecificResource, Target};
