//! Query assembly for static map requests.
//!
//! Validates a request, formats every field, and writes the parameters in
//! sorted name order against the service endpoint.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::{Level, event, span};
use url::Url;

use crate::codec::fields::{format_location, format_marker_with, format_path, format_style, format_visible};
use crate::codec::primitives::{QueryWriter, format_number, round_half_up};
use crate::error::{EndpointError, ValidationError};
use crate::model::{Size, StaticMapRequest};
use crate::validate::{ValidationPolicy, validate_request};

/// The Google Static Maps endpoint.
pub const MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for encoding a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Framing rule and supported field set.
    pub policy: ValidationPolicy,
    endpoint: Cow<'static, str>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            endpoint: Cow::Borrowed(MAP_ENDPOINT),
        }
    }
}

impl EncodeOptions {
    /// Creates default options: current policy, Google endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options reproducing the first-generation serializer.
    pub fn markers_only() -> Self {
        Self::default().with_policy(ValidationPolicy::MarkersOnly)
    }

    /// Sets the validation policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Points requests at a different endpoint, such as a signing proxy.
    ///
    /// The endpoint must be an absolute http(s) URL without a query or
    /// fragment.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(endpoint)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(EndpointError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(EndpointError::QueryNotAllowed {
                endpoint: endpoint.to_string(),
            });
        }
        self.endpoint = Cow::Owned(url.into());
        Ok(self)
    }

    /// Returns the endpoint URLs are built against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Value of one named query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    /// Written as one occurrence of the name per element, in order.
    Repeated(Vec<String>),
}

impl ParamValue {
    /// Returns the values in emission order.
    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::Single(value) => std::slice::from_ref(value),
            ParamValue::Repeated(values) => values,
        }
    }
}

/// Formatted, unencoded query parameters keyed by name.
///
/// Names iterate in ASCII order; absent parameters are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<&'static str, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a single-valued parameter when present.
    pub fn insert(&mut self, name: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.params.insert(name, ParamValue::Single(value));
        }
    }

    /// Stores a repeated parameter when it has at least one value.
    pub fn insert_repeated(&mut self, name: &'static str, values: Vec<String>) {
        if !values.is_empty() {
            self.params.insert(name, ParamValue::Repeated(values));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Returns the distinct parameter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.keys().copied()
    }

    /// Iterates over every `(name, value)` occurrence in emission order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params
            .iter()
            .flat_map(|(name, value)| value.values().iter().map(move |v| (*name, v.as_str())))
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Writes the percent-encoded query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut writer = QueryWriter::new();
        self.write_into(&mut writer);
        writer.into_string()
    }

    /// Writes `endpoint?query`.
    pub fn to_url(&self, endpoint: &str) -> String {
        let mut prefix = String::with_capacity(endpoint.len() + 1);
        prefix.push_str(endpoint);
        prefix.push('?');
        let mut writer = QueryWriter::with_prefix(&prefix, 256);
        self.write_into(&mut writer);
        writer.into_string()
    }

    fn write_into(&self, writer: &mut QueryWriter) {
        for (name, value) in self.pairs() {
            writer.write_pair(name, value);
        }
    }
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Renders the size as `<width>x<height>` with rounded pixels.
pub fn format_size(size: &Size) -> String {
    format!(
        "{}x{}",
        format_number(round_half_up(size.width)),
        format_number(round_half_up(size.height))
    )
}

/// Validates a request and formats all of its parameters.
pub fn build_params(
    request: &StaticMapRequest,
    policy: ValidationPolicy,
) -> Result<QueryParams, ValidationError> {
    validate_request(request, policy)?;

    let mut params = QueryParams::new();

    params.insert("key", Some(request.key.clone()));
    params.insert("signature", request.signature.clone());
    params.insert(
        "center",
        request
            .center
            .as_ref()
            .filter(|c| !c.is_blank())
            .map(|c| format_location(c).into_owned()),
    );
    params.insert("zoom", request.zoom.map(|z| z.to_string()));
    params.insert("size", Some(format_size(&request.size)));
    params.insert("scale", request.scale.map(|s| s.factor().to_string()));
    params.insert("format", request.format.map(|f| f.as_str().to_string()));
    params.insert("maptype", request.maptype.map(|m| m.as_str().to_string()));
    params.insert("language", request.language.clone());
    params.insert("region", request.region.clone());

    if !policy.supports_marker_scale() && request.markers.iter().any(|m| m.scale.is_some()) {
        event!(
            Level::WARN,
            "Dropping marker scale: not supported by the [{}] policy",
            policy
        );
    }
    params.insert_repeated(
        "markers",
        request
            .markers
            .iter()
            .map(|m| format_marker_with(m, policy))
            .collect(),
    );
    params.insert_repeated("style", request.styles.iter().map(format_style).collect());

    if policy.supports_paths() {
        params.insert_repeated("path", request.paths.iter().map(format_path).collect());
    } else if request.has_paths() {
        event!(
            Level::WARN,
            "Dropping [{}] paths: not supported by the [{}] policy",
            request.paths.len(),
            policy
        );
    }

    match request.visible.as_deref() {
        Some(visible) if !visible.is_empty() => {
            if policy.supports_visible() {
                params.insert("visible", Some(format_visible(visible)));
            } else {
                event!(
                    Level::WARN,
                    "Dropping [{}] visible locations: not supported by the [{}] policy",
                    visible.len(),
                    policy
                );
            }
        }
        _ => {}
    }

    Ok(params)
}

/// Encodes a request to a URL with default options.
pub fn encode_request(request: &StaticMapRequest) -> Result<String, ValidationError> {
    encode_request_with_options(request, &EncodeOptions::default())
}

/// Encodes a request to a URL with the given options.
///
/// Fails before producing any output if the request cannot be framed.
pub fn encode_request_with_options(
    request: &StaticMapRequest,
    options: &EncodeOptions,
) -> Result<String, ValidationError> {
    let span = span!(Level::DEBUG, "encode_request");
    let _guard = span.enter();

    let params = build_params(request, options.policy)?;

    event!(
        Level::DEBUG,
        "Assembled [{}] parameters: markers [{}], styles [{}], paths [{}]",
        params.len(),
        request.markers.len(),
        request.styles.len(),
        request.paths.len()
    );

    Ok(params.to_url(options.endpoint()))
}
