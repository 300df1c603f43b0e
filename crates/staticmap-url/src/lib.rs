//! Static map URLs from typed requests.
//!
//! This crate turns a structured static map request (center, zoom, size,
//! markers, styles, paths) into the exact query string the Google Static
//! Maps service expects.
//!
//! # Overview
//!
//! Serialization is a single synchronous pass:
//! - **Validate**: a request must either carry overlays or spell out
//!   `center` and `zoom`
//! - **Format**: every structured field becomes one or more `|`-joined values
//! - **Assemble**: parameters are sorted by name, percent-encoded and
//!   appended to the endpoint
//!
//! Nothing is fetched. The URL is handed back for an image loader to request.
//!
//! # Quick Start
//!
//! ```rust
//! use staticmap_url::{RequestBuilder, encode_request};
//!
//! let request = RequestBuilder::new("TEST_KEY", (400, 300))
//!     .center((51.477222, 0.0))
//!     .zoom(14)
//!     .build();
//!
//! let url = encode_request(&request).unwrap();
//! assert_eq!(
//!     url,
//!     "https://maps.googleapis.com/maps/api/staticmap?center=51.477222%2C0&key=TEST_KEY&size=400x300&zoom=14"
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Request types (Location, Marker, Path, MapStyle, StaticMapRequest)
//! - [`codec`]: Field formatting and query assembly
//! - [`validate`]: Framing rules and the versioned validation policy
//! - [`source`]: Hand-off to an image renderer
//! - [`error`]: Error types
//!
//! # Wire Format
//!
//! Markers, styles and paths are repeated parameters: each element becomes
//! its own `markers=` / `style=` / `path=` occurrence, in order. Only the
//! RFC 3986 unreserved characters are left unescaped.

pub mod codec;
pub mod error;
pub mod model;
pub mod source;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{EncodeOptions, MAP_ENDPOINT, build_params, encode_request, encode_request_with_options};
pub use error::{EndpointError, ParseError, ValidationError};
pub use model::{
    Anchor, AnchorPosition, GeoPoint, ImageFormat, Location, MapStyle, MapType, Marker,
    MarkerBuilder, MarkerScale, MarkerSize, Path, PathBuilder, RequestBuilder, Scale, Size,
    StaticMapRequest, StyleValue,
};
pub use source::{ImageRequest, ImageSource, image_request, image_request_with_options};
pub use validate::{ValidationPolicy, validate_request};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
