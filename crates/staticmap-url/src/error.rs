//! Error types for static map request validation and input parsing.

use thiserror::Error;

use crate::validate::ValidationPolicy;

/// Error raised when a request cannot be framed.
///
/// These are the only failures serialization can produce. Both are raised
/// before any formatting happens, so a failed call never yields a partial URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"center\" is required without {}", .policy.waiver())]
    MissingCenter { policy: ValidationPolicy },

    #[error("\"zoom\" is required without {}", .policy.waiver())]
    MissingZoom { policy: ValidationPolicy },
}

impl ValidationError {
    /// Returns the name of the missing request field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingCenter { .. } => "center",
            ValidationError::MissingZoom { .. } => "zoom",
        }
    }

    /// Returns the policy that was active when validation failed.
    pub fn policy(&self) -> ValidationPolicy {
        match self {
            ValidationError::MissingCenter { policy } | ValidationError::MissingZoom { policy } => {
                *policy
            }
        }
    }
}

/// Error while parsing a wire token into one of the closed model enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("{kind} must be one of {allowed}, found {value}")]
    OutOfRange {
        kind: &'static str,
        allowed: &'static str,
        value: u64,
    },
}

/// Error while configuring a custom endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("invalid endpoint URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("endpoint scheme must be http or https, found {scheme:?}")]
    UnsupportedScheme { scheme: String },

    #[error("endpoint must not carry a query or fragment: {endpoint}")]
    QueryNotAllowed { endpoint: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_center_message() {
        let err = ValidationError::MissingCenter {
            policy: ValidationPolicy::MarkersOrPaths,
        };
        assert_eq!(err.to_string(), "\"center\" is required without markers or paths");
        assert_eq!(err.field(), "center");
    }

    #[test]
    fn test_missing_zoom_message_markers_only() {
        let err = ValidationError::MissingZoom {
            policy: ValidationPolicy::MarkersOnly,
        };
        assert_eq!(err.to_string(), "\"zoom\" is required without markers");
        assert_eq!(err.field(), "zoom");
        assert_eq!(err.policy(), ValidationPolicy::MarkersOnly);
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::UnknownVariant {
            kind: "map type",
            value: "street".to_string(),
        };
        assert_eq!(err.to_string(), "unknown map type: \"street\"");
    }
}
