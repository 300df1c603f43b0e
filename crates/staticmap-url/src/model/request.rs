//! The root static map request.

use crate::error::ParseError;
use crate::model::{Location, MapStyle, Marker, Path};

wire_enum! {
    /// Output image formats.
    pub enum ImageFormat as "image format" {
        Png8 => "png8",
        Png => "png",
        Png32 => "png32",
        Gif => "gif",
        Jpg => "jpg",
        JpgBaseline => "jpg-baseline",
    }
}

wire_enum! {
    /// Base map renderings.
    pub enum MapType as "map type" {
        Roadmap => "roadmap",
        Satellite => "satellite",
        Terrain => "terrain",
        Hybrid => "hybrid",
    }
}

/// Pixel density of the returned image (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Scale {
    One = 1,
    Two = 2,
}

impl Scale {
    /// Returns the numeric factor.
    pub fn factor(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Scale {
    type Error = ParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Scale::One),
            2 => Ok(Scale::Two),
            _ => Err(ParseError::OutOfRange {
                kind: "scale",
                allowed: "1, 2",
                value: v as u64,
            }),
        }
    }
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> Self {
        scale.factor()
    }
}

/// Requested image size in pixels.
///
/// Fractional values are accepted and rounded when serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// A complete description of one static map image.
///
/// Field names follow the query parameters they produce; with the `serde`
/// feature the JSON form uses the camelCase property names of the original
/// component (`apiKey`, `mapType`, `mapStyles`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StaticMapRequest {
    /// API key. Always emitted, even when empty.
    #[cfg_attr(feature = "serde", serde(rename = "apiKey"))]
    pub key: String,
    /// URL signature for signed requests.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub signature: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub center: Option<Location>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub zoom: Option<u8>,
    pub size: Size,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub scale: Option<Scale>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub format: Option<ImageFormat>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "mapType", default, skip_serializing_if = "Option::is_none")
    )]
    pub maptype: Option<MapType>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub language: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub region: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub markers: Vec<Marker>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "mapStyles", default, skip_serializing_if = "Vec::is_empty")
    )]
    pub styles: Vec<MapStyle>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub paths: Vec<Path>,
    /// Locations that must remain visible, in addition to markers.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub visible: Option<Vec<String>>,
}

impl StaticMapRequest {
    /// Creates a request with only the mandatory fields set.
    pub fn new(key: impl Into<String>, size: impl Into<Size>) -> Self {
        Self {
            key: key.into(),
            signature: None,
            center: None,
            zoom: None,
            size: size.into(),
            scale: None,
            format: None,
            maptype: None,
            language: None,
            region: None,
            markers: Vec::new(),
            styles: Vec::new(),
            paths: Vec::new(),
            visible: None,
        }
    }

    /// Returns true if the request carries at least one marker group.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Returns true if the request carries at least one path.
    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}
