//! Geographic locations.
//!
//! The static map service accepts either a geocodable address or an explicit
//! coordinate pair wherever a location is expected.

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// A place on the map: free-text address or coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Location {
    /// Address or place name, geocoded by the service.
    Address(String),
    /// Explicit coordinates.
    Point(GeoPoint),
}

impl Location {
    /// Creates an address location.
    pub fn address(address: impl Into<String>) -> Self {
        Location::Address(address.into())
    }

    /// Creates a coordinate location.
    pub fn point(latitude: f64, longitude: f64) -> Self {
        Location::Point(GeoPoint::new(latitude, longitude))
    }

    /// Returns true for an empty address, which the serializer omits where
    /// the location stands alone (e.g. as the map center).
    pub fn is_blank(&self) -> bool {
        matches!(self, Location::Address(address) if address.is_empty())
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Location::Point(point)
    }
}

impl From<(f64, f64)> for Location {
    fn from(pair: (f64, f64)) -> Self {
        Location::Point(pair.into())
    }
}

impl From<&str> for Location {
    fn from(address: &str) -> Self {
        Location::Address(address.to_string())
    }
}

impl From<String> for Location {
    fn from(address: String) -> Self {
        Location::Address(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_conversions() {
        assert_eq!(
            Location::from("Berkeley,CA"),
            Location::Address("Berkeley,CA".to_string())
        );
        assert_eq!(
            Location::from((51.477222, 0.0)),
            Location::Point(GeoPoint {
                latitude: 51.477222,
                longitude: 0.0,
            })
        );
    }

    #[test]
    fn test_blank_location() {
        assert!(Location::address("").is_blank());
        assert!(!Location::address("Brooklyn").is_blank());
        assert!(!Location::point(0.0, 0.0).is_blank());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_location_untagged_json() {
        let parsed: Vec<Location> =
            serde_json::from_str(r#"[{"latitude": 64.05, "longitude": -145.36}, "Delta Junction, AK"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                Location::point(64.05, -145.36),
                Location::address("Delta Junction, AK"),
            ]
        );
    }
}
