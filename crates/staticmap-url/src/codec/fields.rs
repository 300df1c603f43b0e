//! Field formatters.
//!
//! Each formatter turns one structured field into the unencoded value of a
//! query parameter. Attribute tokens are `key:value` pairs joined by `|`;
//! absent or empty attributes are left out rather than emitted empty.

use std::borrow::Cow;

use crate::codec::primitives::format_number;
use crate::model::{Anchor, GeoPoint, Location, MapStyle, Marker, Path};
use crate::validate::ValidationPolicy;

const SEPARATOR: &str = "|";

/// Renders a coordinate pair as `lat,lng`.
pub fn format_point(point: &GeoPoint) -> String {
    format!(
        "{},{}",
        format_number(point.latitude),
        format_number(point.longitude)
    )
}

/// Renders a location: addresses pass through unchanged.
pub fn format_location(location: &Location) -> Cow<'_, str> {
    match location {
        Location::Address(address) => Cow::Borrowed(address.as_str()),
        Location::Point(point) => Cow::Owned(format_point(point)),
    }
}

/// Renders every location as a bare token.
pub fn format_locations(locations: &[Location]) -> impl Iterator<Item = Cow<'_, str>> {
    locations.iter().map(format_location)
}

/// Renders a marker anchor as `anchor:x,y` or `anchor:name`.
pub fn format_anchor(anchor: Option<&Anchor>) -> Option<String> {
    match anchor? {
        Anchor::Offset(x, y) => Some(format!("anchor:{},{}", x, y)),
        Anchor::Position(position) => Some(format!("anchor:{}", position)),
    }
}

/// Pushes `key:value` when the value is present and non-empty.
fn push_attr(tokens: &mut Vec<Cow<'_, str>>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        tokens.push(Cow::Owned(format!("{}:{}", key, value)));
    }
}

/// Formats a marker group with every attribute supported.
pub fn format_marker(marker: &Marker) -> String {
    format_marker_with(marker, ValidationPolicy::MarkersOrPaths)
}

/// Formats a marker group as `size|color|label|scale|anchor|icon|locations...`.
///
/// The marker `scale` attribute is only written when the policy supports it.
pub fn format_marker_with(marker: &Marker, policy: ValidationPolicy) -> String {
    let mut tokens: Vec<Cow<'_, str>> = Vec::with_capacity(6 + marker.locations.len());

    push_attr(&mut tokens, "size", marker.size.map(|s| s.as_str()));
    push_attr(&mut tokens, "color", marker.color.as_deref());
    push_attr(&mut tokens, "label", marker.label.as_deref());
    if policy.supports_marker_scale() {
        if let Some(scale) = marker.scale {
            tokens.push(Cow::Owned(format!("scale:{}", scale.factor())));
        }
    }
    if let Some(anchor) = format_anchor(marker.anchor.as_ref()) {
        tokens.push(Cow::Owned(anchor));
    }
    push_attr(&mut tokens, "icon", marker.icon.as_deref());
    tokens.extend(format_locations(&marker.locations));

    tokens.join(SEPARATOR)
}

/// Formats a path as `weight|color|fillcolor|geodesic|enc|points...`.
pub fn format_path(path: &Path) -> String {
    let mut tokens: Vec<Cow<'_, str>> = Vec::with_capacity(5 + path.points.len());

    if let Some(weight) = path.weight.filter(|w| *w != 0) {
        tokens.push(Cow::Owned(format!("weight:{}", weight)));
    }
    push_attr(&mut tokens, "color", path.color.as_deref());
    push_attr(&mut tokens, "fillcolor", path.fillcolor.as_deref());
    if path.geodesic {
        tokens.push(Cow::Borrowed("geodesic:true"));
    }
    push_attr(&mut tokens, "enc", path.enc.as_deref());
    tokens.extend(format_locations(&path.points));

    tokens.join(SEPARATOR)
}

/// Formats a style rule as `feature|element|rules...`.
///
/// `feature` and `element` lead when set; every other directive follows in
/// the rule's own order, whatever its value.
pub fn format_style(style: &MapStyle) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(style.len());

    for key in [MapStyle::FEATURE, MapStyle::ELEMENT] {
        if let Some(value) = style.get(key).filter(|v| v.is_truthy()) {
            tokens.push(format!("{}:{}", key, value));
        }
    }
    tokens.extend(style.rules().map(|(key, value)| format!("{}:{}", key, value)));

    tokens.join(SEPARATOR)
}

/// Joins the `visible` locations.
pub fn format_visible(visible: &[String]) -> String {
    visible.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnchorPosition, MarkerScale, MarkerSize, StyleValue};

    #[test]
    fn test_location_formats() {
        assert_eq!(format_location(&Location::point(51.477222, 0.0)), "51.477222,0");
        assert_eq!(format_location(&Location::point(-33.865143, 151.2099)), "-33.865143,151.2099");
        assert_eq!(format_location(&Location::address("Berkeley,CA")), "Berkeley,CA");
    }

    #[test]
    fn test_anchor_formats() {
        assert_eq!(format_anchor(Some(&Anchor::Offset(32, 10))), Some("anchor:32,10".to_string()));
        assert_eq!(
            format_anchor(Some(&Anchor::Position(AnchorPosition::TopLeft))),
            Some("anchor:topleft".to_string())
        );
        assert_eq!(format_anchor(None), None);
    }

    #[test]
    fn test_marker_attribute_order() {
        let marker = Marker {
            size: Some(MarkerSize::Small),
            color: Some("blue".to_string()),
            label: Some("B".to_string()),
            scale: Some(MarkerScale::Two),
            locations: vec![Location::point(64.05, -145.36), Location::address("Delta Junction, AK")],
            icon: Some("https://goo.gl/1oTJ9Y".to_string()),
            anchor: Some(Anchor::Offset(32, 10)),
        };
        assert_eq!(
            format_marker(&marker),
            "size:small|color:blue|label:B|scale:2|anchor:32,10|icon:https://goo.gl/1oTJ9Y|64.05,-145.36|Delta Junction, AK"
        );
        assert_eq!(
            format_marker_with(&marker, ValidationPolicy::MarkersOnly),
            "size:small|color:blue|label:B|anchor:32,10|icon:https://goo.gl/1oTJ9Y|64.05,-145.36|Delta Junction, AK"
        );
    }

    #[test]
    fn test_marker_drops_empty_attributes() {
        let marker = Marker {
            color: Some(String::new()),
            label: Some("S".to_string()),
            ..Marker::at(["Brooklyn"])
        };
        assert_eq!(format_marker(&marker), "label:S|Brooklyn");
        assert_eq!(format_marker(&Marker::default()), "");
    }

    #[test]
    fn test_path_attribute_order() {
        let path = Path {
            weight: Some(5),
            color: Some("0x0000ff".to_string()),
            fillcolor: Some("0xFFFF0033".to_string()),
            geodesic: true,
            enc: Some("_p~iF~ps|U".to_string()),
            points: vec![Location::point(40.737102, -73.990318)],
        };
        assert_eq!(
            format_path(&path),
            "weight:5|color:0x0000ff|fillcolor:0xFFFF0033|geodesic:true|enc:_p~iF~ps|U|40.737102,-73.990318"
        );
    }

    #[test]
    fn test_path_drops_falsy_attributes() {
        let path = Path {
            weight: Some(0),
            geodesic: false,
            ..Path::through(["Brooklyn", "Queens"])
        };
        assert_eq!(format_path(&path), "Brooklyn|Queens");
    }

    #[test]
    fn test_style_pins_feature_and_element() {
        let style = MapStyle::new()
            .with("color", "0x00ff00")
            .element("geometry")
            .feature("road.local");
        assert_eq!(format_style(&style), "feature:road.local|element:geometry|color:0x00ff00");
    }

    #[test]
    fn test_style_scalar_values() {
        let style = MapStyle::new()
            .feature("water")
            .with("color", "0x1994bf")
            .with("saturation", -69)
            .with("gamma", 0.99)
            .with("invert_lightness", false);
        assert_eq!(
            format_style(&style),
            "feature:water|color:0x1994bf|saturation:-69|gamma:0.99|invert_lightness:false"
        );
    }

    #[test]
    fn test_style_skips_falsy_selectors() {
        let mut style = MapStyle::new().with("visibility", "off");
        style.set(MapStyle::FEATURE, "");
        style.set(MapStyle::ELEMENT, StyleValue::Bool(false));
        assert_eq!(format_style(&style), "visibility:off");
    }

    #[test]
    fn test_visible_join() {
        let visible = vec![
            "77 Massachusetts Ave, Cambridge, MA".to_string(),
            "Harvard Square, Cambridge, MA".to_string(),
        ];
        assert_eq!(
            format_visible(&visible),
            "77 Massachusetts Ave, Cambridge, MA|Harvard Square, Cambridge, MA"
        );
    }
}
