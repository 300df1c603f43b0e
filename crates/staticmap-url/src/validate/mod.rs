//! Request validation.
//!
//! The service needs to know where to point the camera. A request frames
//! itself when it carries overlays the service can fit the viewport around;
//! otherwise both `center` and `zoom` must be given.
//!
//! Two generations of the serializer disagree on which overlays count, so
//! the rule is selected by a [`ValidationPolicy`].

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ValidationError};
use crate::model::StaticMapRequest;

/// Which overlays waive the center/zoom requirement, and which fields the
/// serializer supports on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationPolicy {
    /// First-generation behavior: only markers frame the map. `path`,
    /// `visible` and marker `scale` are not supported and are dropped.
    MarkersOnly,
    /// Current behavior: markers or paths frame the map, all fields supported.
    #[default]
    MarkersOrPaths,
}

impl ValidationPolicy {
    /// Returns the token used to select the policy from configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationPolicy::MarkersOnly => "markers",
            ValidationPolicy::MarkersOrPaths => "markers-or-paths",
        }
    }

    /// Describes the overlays that waive the requirement, for error messages.
    pub fn waiver(self) -> &'static str {
        match self {
            ValidationPolicy::MarkersOnly => "markers",
            ValidationPolicy::MarkersOrPaths => "markers or paths",
        }
    }

    /// Returns whether `path` parameters are serialized.
    pub fn supports_paths(self) -> bool {
        matches!(self, ValidationPolicy::MarkersOrPaths)
    }

    /// Returns whether the `visible` parameter is serialized.
    pub fn supports_visible(self) -> bool {
        matches!(self, ValidationPolicy::MarkersOrPaths)
    }

    /// Returns whether the marker `scale` attribute is serialized.
    pub fn supports_marker_scale(self) -> bool {
        matches!(self, ValidationPolicy::MarkersOrPaths)
    }

    /// Returns true if the request must spell out `center` and `zoom`.
    pub fn requires_framing(self, request: &StaticMapRequest) -> bool {
        match self {
            ValidationPolicy::MarkersOnly => !request.has_markers(),
            ValidationPolicy::MarkersOrPaths => !request.has_markers() && !request.has_paths(),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markers" => Ok(ValidationPolicy::MarkersOnly),
            "markers-or-paths" => Ok(ValidationPolicy::MarkersOrPaths),
            _ => Err(ParseError::UnknownVariant {
                kind: "validation policy",
                value: s.to_string(),
            }),
        }
    }
}

/// Validates that a request can be framed under the given policy.
///
/// Center is checked before zoom. Presence is all that matters: an empty
/// center address satisfies the check even though it is not serialized.
pub fn validate_request(
    request: &StaticMapRequest,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    if !policy.requires_framing(request) {
        return Ok(());
    }
    if request.center.is_none() {
        return Err(ValidationError::MissingCenter { policy });
    }
    if request.zoom.is_none() {
        return Err(ValidationError::MissingZoom { policy });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, Marker, Path};

    fn bare() -> StaticMapRequest {
        StaticMapRequest::new("TEST_KEY", (400, 300))
    }

    #[test]
    fn test_missing_everything_reports_center() {
        for policy in [ValidationPolicy::MarkersOnly, ValidationPolicy::MarkersOrPaths] {
            let result = validate_request(&bare(), policy);
            assert_eq!(result, Err(ValidationError::MissingCenter { policy }));
        }
    }

    #[test]
    fn test_missing_zoom() {
        let mut request = bare();
        request.center = Some(Location::point(51.477222, 0.0));
        let result = validate_request(&request, ValidationPolicy::default());
        assert!(matches!(result, Err(ValidationError::MissingZoom { .. })));
    }

    #[test]
    fn test_missing_center_with_zoom() {
        let mut request = bare();
        request.zoom = Some(14);
        let result = validate_request(&request, ValidationPolicy::default());
        assert!(matches!(result, Err(ValidationError::MissingCenter { .. })));
    }

    #[test]
    fn test_markers_waive_framing() {
        let mut request = bare();
        request.zoom = Some(14);
        request.markers.push(Marker::at(["Delta Junction, AK"]));
        for policy in [ValidationPolicy::MarkersOnly, ValidationPolicy::MarkersOrPaths] {
            assert_eq!(validate_request(&request, policy), Ok(()));
        }
    }

    #[test]
    fn test_paths_waive_framing_only_in_current_policy() {
        let mut request = bare();
        request.paths.push(Path::encoded("_p~iF~ps|U_ulLnnqC"));
        assert_eq!(validate_request(&request, ValidationPolicy::MarkersOrPaths), Ok(()));
        assert_eq!(
            validate_request(&request, ValidationPolicy::MarkersOnly),
            Err(ValidationError::MissingCenter {
                policy: ValidationPolicy::MarkersOnly
            })
        );
    }

    #[test]
    fn test_center_and_zoom_always_valid() {
        let mut request = bare();
        request.center = Some(Location::address(""));
        request.zoom = Some(0);
        assert_eq!(validate_request(&request, ValidationPolicy::MarkersOnly), Ok(()));
        request.markers.push(Marker::default());
        request.paths.push(Path::default());
        assert_eq!(validate_request(&request, ValidationPolicy::MarkersOrPaths), Ok(()));
    }

    #[test]
    fn test_policy_tokens() {
        assert_eq!("markers".parse::<ValidationPolicy>(), Ok(ValidationPolicy::MarkersOnly));
        assert_eq!(
            ValidationPolicy::MarkersOrPaths.to_string().parse::<ValidationPolicy>(),
            Ok(ValidationPolicy::MarkersOrPaths)
        );
        assert!("paths".parse::<ValidationPolicy>().is_err());
    }
}
