//! Builder API for ergonomic request construction.
//!
//! Provides a fluent interface for building a [`StaticMapRequest`].
//!
//! # Example
//!
//! ```rust
//! use staticmap_url::model::builder::RequestBuilder;
//! use staticmap_url::{MapStyle, MarkerSize};
//!
//! let request = RequestBuilder::new("TEST_KEY", (400, 400))
//!     .marker(|m| m
//!         .size(MarkerSize::Small)
//!         .color("blue")
//!         .label("B")
//!         .location((64.05, -145.36))
//!     )
//!     .style(MapStyle::new().feature("road.local").element("geometry").with("color", "0x00ff00"))
//!     .build();
//!
//! assert_eq!(request.markers.len(), 1);
//! ```

use crate::model::{
    Anchor, ImageFormat, Location, MapStyle, MapType, Marker, MarkerScale, MarkerSize, Path,
    Scale, Size, StaticMapRequest,
};

/// Builder for constructing a [`StaticMapRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: StaticMapRequest,
}

impl RequestBuilder {
    /// Creates a builder with the mandatory key and size.
    pub fn new(key: impl Into<String>, size: impl Into<Size>) -> Self {
        Self {
            request: StaticMapRequest::new(key, size),
        }
    }

    /// Sets the URL signature.
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.request.signature = Some(signature.into());
        self
    }

    /// Sets the map center.
    pub fn center(mut self, center: impl Into<Location>) -> Self {
        self.request.center = Some(center.into());
        self
    }

    /// Sets the zoom level.
    pub fn zoom(mut self, zoom: u8) -> Self {
        self.request.zoom = Some(zoom);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.request.scale = Some(scale);
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.request.format = Some(format);
        self
    }

    pub fn map_type(mut self, map_type: MapType) -> Self {
        self.request.maptype = Some(map_type);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.request.language = Some(language.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.request.region = Some(region.into());
        self
    }

    // =========================================================================
    // Repeated parameters
    // =========================================================================

    /// Adds a marker group using a builder function.
    pub fn marker<F>(mut self, f: F) -> Self
    where
        F: FnOnce(MarkerBuilder) -> MarkerBuilder,
    {
        self.request.markers.push(f(MarkerBuilder::new()).build());
        self
    }

    /// Adds an already constructed marker group.
    pub fn push_marker(mut self, marker: Marker) -> Self {
        self.request.markers.push(marker);
        self
    }

    /// Adds a path using a builder function.
    pub fn path<F>(mut self, f: F) -> Self
    where
        F: FnOnce(PathBuilder) -> PathBuilder,
    {
        self.request.paths.push(f(PathBuilder::new()).build());
        self
    }

    /// Adds an already constructed path.
    pub fn push_path(mut self, path: Path) -> Self {
        self.request.paths.push(path);
        self
    }

    /// Adds a style rule.
    pub fn style(mut self, style: MapStyle) -> Self {
        self.request.styles.push(style);
        self
    }

    /// Adds a location that must stay in view.
    pub fn visible(mut self, location: impl Into<String>) -> Self {
        self.request
            .visible
            .get_or_insert_with(Vec::new)
            .push(location.into());
        self
    }

    /// Builds the request.
    pub fn build(self) -> StaticMapRequest {
        self.request
    }
}

/// Builder for a single marker group.
#[derive(Debug, Clone, Default)]
pub struct MarkerBuilder {
    marker: Marker,
}

impl MarkerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: MarkerSize) -> Self {
        self.marker.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.marker.color = Some(color.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.marker.label = Some(label.into());
        self
    }

    pub fn scale(mut self, scale: MarkerScale) -> Self {
        self.marker.scale = Some(scale);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.marker.icon = Some(icon.into());
        self
    }

    pub fn anchor(mut self, anchor: impl Into<Anchor>) -> Self {
        self.marker.anchor = Some(anchor.into());
        self
    }

    /// Appends a location to the group.
    pub fn location(mut self, location: impl Into<Location>) -> Self {
        self.marker.locations.push(location.into());
        self
    }

    pub fn build(self) -> Marker {
        self.marker
    }
}

/// Builder for a single path.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.path.weight = Some(weight);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.path.color = Some(color.into());
        self
    }

    pub fn fill_color(mut self, fillcolor: impl Into<String>) -> Self {
        self.path.fillcolor = Some(fillcolor.into());
        self
    }

    pub fn geodesic(mut self, geodesic: bool) -> Self {
        self.path.geodesic = geodesic;
        self
    }

    pub fn encoded(mut self, enc: impl Into<String>) -> Self {
        self.path.enc = Some(enc.into());
        self
    }

    /// Appends a point to the path.
    pub fn point(mut self, point: impl Into<Location>) -> Self {
        self.path.points.push(point.into());
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnchorPosition;

    #[test]
    fn test_builder_full_request() {
        let request = RequestBuilder::new("TEST_KEY", (400.0, 300.0))
            .center("Berkeley,CA")
            .zoom(14)
            .scale(Scale::Two)
            .format(ImageFormat::Gif)
            .map_type(MapType::Hybrid)
            .language("en")
            .region("us")
            .visible("Harvard Square, Cambridge, MA")
            .visible("77 Massachusetts Ave, Cambridge, MA")
            .build();

        assert_eq!(request.center, Some(Location::address("Berkeley,CA")));
        assert_eq!(request.zoom, Some(14));
        assert_eq!(request.maptype, Some(MapType::Hybrid));
        assert_eq!(request.visible.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_builder_marker_and_path() {
        let request = RequestBuilder::new("TEST_KEY", (400, 400))
            .marker(|m| m
                .anchor(AnchorPosition::TopLeft)
                .icon("http://tinyurl.com/jrhlvu6")
                .location("Melbourne VIC")
            )
            .path(|p| p
                .weight(5)
                .color("0x0000ff")
                .geodesic(true)
                .point((40.737102, -73.990318))
                .point((40.749825, -73.987963))
            )
            .build();

        let marker = &request.markers[0];
        assert_eq!(marker.anchor, Some(Anchor::Position(AnchorPosition::TopLeft)));
        assert_eq!(marker.locations, vec![Location::address("Melbourne VIC")]);

        let path = &request.paths[0];
        assert_eq!(path.weight, Some(5));
        assert!(path.geodesic);
        assert_eq!(path.points.len(), 2);
    }
}
