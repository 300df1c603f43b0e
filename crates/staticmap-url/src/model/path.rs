//! Path (polyline / polygon) type.

use crate::model::Location;

/// A styled polyline, or a polygon when `fillcolor` is set.
///
/// Points may be given explicitly, as an encoded polyline in `enc`, or both.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Path {
    /// Stroke thickness in pixels. Zero is treated as absent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weight: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fillcolor: Option<String>,
    /// Draw segments as geodesic curves.
    pub geodesic: bool,
    /// Encoded polyline.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub enc: Option<String>,
    pub points: Vec<Location>,
}

impl Path {
    /// Creates an unstyled path through the given points.
    pub fn through<I, L>(points: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Location>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates an unstyled path from an encoded polyline.
    pub fn encoded(enc: impl Into<String>) -> Self {
        Self {
            enc: Some(enc.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_through() {
        let path = Path::through([(40.737102, -73.990318), (40.749825, -73.987963)]);
        assert_eq!(path.points.len(), 2);
        assert!(!path.geodesic);
        assert_eq!(path.enc, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_path_json_defaults() {
        let path: Path = serde_json::from_str(r#"{"color": "0x0000ff", "weight": 5}"#).unwrap();
        assert_eq!(path.weight, Some(5));
        assert!(path.points.is_empty());
        assert!(!path.geodesic);
    }
}
