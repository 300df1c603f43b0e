//! Marker types.

use crate::error::ParseError;
use crate::model::Location;

wire_enum! {
    /// Predefined marker sizes.
    pub enum MarkerSize as "marker size" {
        Tiny => "tiny",
        Mid => "mid",
        Small => "small",
    }
}

wire_enum! {
    /// Named anchor points for custom marker icons.
    pub enum AnchorPosition as "anchor position" {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Center => "center",
        TopLeft => "topleft",
        TopRight => "topright",
        BottomLeft => "bottomleft",
        BottomRight => "bottomright",
    }
}

/// Where a custom icon is pinned relative to its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Anchor {
    /// Pixel offset from the top-left corner of the icon.
    Offset(i32, i32),
    /// Named corner or edge of the icon.
    Position(AnchorPosition),
}

impl From<AnchorPosition> for Anchor {
    fn from(position: AnchorPosition) -> Self {
        Anchor::Position(position)
    }
}

impl From<(i32, i32)> for Anchor {
    fn from((x, y): (i32, i32)) -> Self {
        Anchor::Offset(x, y)
    }
}

/// Icon scale factor for custom markers (1, 2 or 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum MarkerScale {
    One = 1,
    Two = 2,
    Four = 4,
}

impl MarkerScale {
    /// Returns the numeric factor.
    pub fn factor(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MarkerScale {
    type Error = ParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(MarkerScale::One),
            2 => Ok(MarkerScale::Two),
            4 => Ok(MarkerScale::Four),
            _ => Err(ParseError::OutOfRange {
                kind: "marker scale",
                allowed: "1, 2, 4",
                value: v as u64,
            }),
        }
    }
}

impl From<MarkerScale> for u8 {
    fn from(scale: MarkerScale) -> Self {
        scale.factor()
    }
}

/// A group of pins sharing one style.
///
/// Every location in the group is drawn with the same attributes. Empty
/// string attributes are treated as absent when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Marker {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<MarkerSize>,
    /// Color name or 24-bit hex (`0xRRGGBB`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    /// Single uppercase alphanumeric character.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub scale: Option<MarkerScale>,
    pub locations: Vec<Location>,
    /// URL of a custom icon.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub anchor: Option<Anchor>,
}

impl Marker {
    /// Creates an unstyled marker group at the given locations.
    pub fn at<I, L>(locations: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Location>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
