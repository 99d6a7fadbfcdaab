//! Image API service vocabulary: versions, compliance levels, formats,
//! qualities, sizes and tiles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::KeyStyle;
use crate::base::constants::{context, types};

/// Image API major version of an image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageApiVersion {
    V2,
    V3,
}

impl ImageApiVersion {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::V2 => types::IMAGE_SERVICE_2,
            Self::V3 => types::IMAGE_SERVICE_3,
        }
    }

    pub fn context(self) -> &'static str {
        match self {
            Self::V2 => context::IMAGE_2,
            Self::V3 => context::IMAGE_3,
        }
    }

    /// Keys used when a service of this version is built directly.
    pub fn default_keys(self) -> KeyStyle {
        match self {
            Self::V2 => KeyStyle::Legacy,
            Self::V3 => KeyStyle::Modern,
        }
    }

    pub fn profile(self, level: ComplianceLevel) -> &'static str {
        match (self, level) {
            (Self::V2, ComplianceLevel::Level0) => "http://iiif.io/api/image/2/level0.json",
            (Self::V2, ComplianceLevel::Level1) => "http://iiif.io/api/image/2/level1.json",
            (Self::V2, ComplianceLevel::Level2) => "http://iiif.io/api/image/2/level2.json",
            (Self::V3, ComplianceLevel::Level0) => "level0",
            (Self::V3, ComplianceLevel::Level1) => "level1",
            (Self::V3, ComplianceLevel::Level2) => "level2",
        }
    }

    /// Exact match against this version's profile strings only.
    pub fn parse_profile(self, profile: &str) -> Option<ComplianceLevel> {
        ComplianceLevel::ALL
            .into_iter()
            .find(|level| self.profile(*level) == profile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComplianceLevel {
    Level0,
    Level1,
    #[default]
    Level2,
}

impl ComplianceLevel {
    pub const ALL: [ComplianceLevel; 3] = [Self::Level0, Self::Level1, Self::Level2];
}

/// Output formats an image service may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpg,
    Png,
    Tif,
    Gif,
    Jp2,
    Pdf,
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 7] = [
        Self::Jpg,
        Self::Png,
        Self::Tif,
        Self::Gif,
        Self::Jp2,
        Self::Pdf,
        Self::Webp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Tif => "tif",
            Self::Gif => "gif",
            Self::Jp2 => "jp2",
            Self::Pdf => "pdf",
            Self::Webp => "webp",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageQuality {
    Color,
    Gray,
    Bitonal,
    Default,
}

impl ImageQuality {
    pub const ALL: [ImageQuality; 4] = [Self::Color, Self::Gray, Self::Bitonal, Self::Default];

    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gray => "gray",
            Self::Bitonal => "bitonal",
            Self::Default => "default",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A preferred full-image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A tiling scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub scale_factors: Vec<u32>,
}
