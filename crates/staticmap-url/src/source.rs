//! Hand-off to an image-rendering collaborator.
//!
//! The serializer never fetches the image. It produces an [`ImageSource`]
//! and forwards whatever properties the caller attached, untouched, so a
//! renderer can load the URI with its own headers, styling or children.

use crate::codec::{EncodeOptions, encode_request_with_options};
use crate::error::ValidationError;
use crate::model::StaticMapRequest;

/// A URI ready to be loaded by an image fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSource {
    pub uri: String,
}

/// An image source paired with opaque renderer properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest<P> {
    pub source: ImageSource,
    /// Passed through verbatim.
    pub props: P,
}

impl<P> ImageRequest<P> {
    /// Splits into the source and the forwarded properties.
    pub fn into_parts(self) -> (ImageSource, P) {
        (self.source, self.props)
    }
}

/// Serializes the request and pairs the URL with `props`.
pub fn image_request<P>(
    request: &StaticMapRequest,
    props: P,
) -> Result<ImageRequest<P>, ValidationError> {
    image_request_with_options(request, props, &EncodeOptions::default())
}

/// Serializes the request with explicit options and pairs the URL with `props`.
pub fn image_request_with_options<P>(
    request: &StaticMapRequest,
    props: P,
    options: &EncodeOptions,
) -> Result<ImageRequest<P>, ValidationError> {
    let uri = encode_request_with_options(request, options)?;
    Ok(ImageRequest {
        source: ImageSource { uri },
        props,
    })
}
